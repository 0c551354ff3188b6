// ABOUTME: Layout templates that place slide content on the 10 x 7.5 inch canvas
// ABOUTME: One template per slide kind: title, content, table, metric grid, diagram

use crate::drawing::{
    paragraphs, Align, AutoShape, Element, Font, Paragraph, SlideCanvas, TableCell,
    TableFrame, TextBox,
};
use crate::model::{
    ColumnLayout, ContentSlide, DiagramSlide, MetricSlide, Slide, TableSlide, TitleSlide,
    TitleStyle,
};
use crate::style::{palette, Frame, Rgb};

const TITLE_FRAME: Frame = Frame::new(0.5, 0.3, 9.0, 0.8);
const METRIC_COLUMNS: usize = 2;

/// Lay out any slide.
pub fn compose(slide: &Slide) -> SlideCanvas {
    match slide {
        Slide::Title(s) => title_slide(s),
        Slide::Content(s) => content_slide(s),
        Slide::Table(s) => table_slide(s),
        Slide::Metric(s) => metric_slide(s),
        Slide::Diagram(s) => diagram_slide(s),
    }
}

fn text_box(frame: Frame, paragraphs: Vec<Paragraph>) -> Element {
    Element::Text(TextBox {
        frame,
        paragraphs,
        word_wrap: false,
    })
}

fn centered(frame: Frame, text: &str, font: Font) -> Element {
    text_box(frame, vec![Paragraph::new(text, font).centered()])
}

fn heading(title: &str, size: f64) -> Element {
    text_box(
        TITLE_FRAME,
        vec![Paragraph::new(title, Font::new(size, palette::TITLE).bold())],
    )
}

pub fn title_slide(slide: &TitleSlide) -> SlideCanvas {
    match slide.style {
        TitleStyle::Opening => {
            let mut canvas = SlideCanvas::with_background(palette::OPENING_BACKGROUND);
            canvas.add(centered(
                Frame::new(1.0, 2.0, 8.0, 1.5),
                &slide.title,
                Font::new(54.0, palette::TITLE).bold(),
            ));
            canvas.add(centered(
                Frame::new(1.0, 3.8, 8.0, 1.0),
                &slide.subtitle,
                Font::new(32.0, palette::ACCENT),
            ));
            if let Some(tagline) = &slide.tagline {
                canvas.add(centered(
                    Frame::new(1.0, 5.2, 8.0, 0.8),
                    tagline,
                    Font::new(24.0, palette::TEXT).italic(),
                ));
            }
            canvas
        }
        TitleStyle::Closing => {
            let mut canvas = SlideCanvas::with_background(palette::ACCENT);
            canvas.add(centered(
                Frame::new(1.0, 2.5, 8.0, 2.0),
                &slide.title,
                Font::new(60.0, Rgb::WHITE).bold(),
            ));
            canvas.add(centered(
                Frame::new(1.0, 4.5, 8.0, 1.0),
                &slide.subtitle,
                Font::new(28.0, Rgb::WHITE),
            ));
            canvas
        }
    }
}

fn body(frame: Frame, lines: &[String], size: f64, spacing: f64) -> Element {
    Element::Text(TextBox {
        frame,
        paragraphs: lines
            .iter()
            .map(|line| {
                Paragraph::new(line.as_str(), Font::new(size, palette::TEXT)).spaced(spacing)
            })
            .collect(),
        word_wrap: true,
    })
}

pub fn content_slide(slide: &ContentSlide) -> SlideCanvas {
    let mut canvas = SlideCanvas::new();
    canvas.add(heading(&slide.title, 40.0));

    match slide.columns {
        ColumnLayout::Single => {
            canvas.add(body(Frame::new(0.8, 1.5, 8.4, 5.5), &slide.lines, 20.0, 12.0));
        }
        ColumnLayout::Two => {
            let (left, right) = slide.lines.split_at(slide.lines.len() / 2);
            canvas.add(body(Frame::new(0.8, 1.5, 4.0, 5.5), left, 18.0, 10.0));
            canvas.add(body(Frame::new(5.2, 1.5, 4.0, 5.5), right, 18.0, 10.0));
        }
    }

    canvas
}

pub fn table_slide(slide: &TableSlide) -> SlideCanvas {
    let mut canvas = SlideCanvas::new();
    canvas.add(heading(&slide.title, 36.0));

    let frame = Frame::new(0.8, 1.5, 8.4, 5.0);
    let columns = slide.headers.len().max(1);

    let header = slide
        .headers
        .iter()
        .map(|h| TableCell {
            paragraph: Paragraph::new(h.as_str(), Font::new(16.0, Rgb::WHITE).bold()),
            fill: Some(palette::ACCENT),
        })
        .collect();

    let mut rows = vec![header];
    rows.extend(slide.rows.iter().map(|row| {
        row.iter()
            .map(|cell| TableCell {
                paragraph: Paragraph::new(cell.as_str(), Font::new(14.0, palette::TEXT)),
                fill: None,
            })
            .collect()
    }));

    canvas.add(Element::Table(TableFrame {
        frame,
        column_widths: vec![frame.width / columns as f64; columns],
        rows,
    }));
    canvas
}

/// Top-left corner of metric `index` in the two-column grid.
pub fn metric_origin(index: usize) -> (f64, f64) {
    let row = index / METRIC_COLUMNS;
    let col = index % METRIC_COLUMNS;
    (1.0 + col as f64 * 4.2, 2.0 + row as f64 * 2.0)
}

pub fn metric_slide(slide: &MetricSlide) -> SlideCanvas {
    let mut canvas = SlideCanvas::new();
    canvas.add(heading(&slide.title, 36.0));

    for (idx, metric) in slide.metrics.iter().enumerate() {
        let (x, y) = metric_origin(idx);
        let value_frame = Frame::new(x, y, 3.5, 0.8);

        canvas.add(centered(
            value_frame,
            &metric.value,
            Font::new(48.0, palette::SUCCESS).bold(),
        ));
        canvas.add(centered(
            Frame {
                height: 0.6,
                ..value_frame.shifted_down(0.9)
            },
            &metric.label,
            Font::new(16.0, palette::TEXT),
        ));
    }

    canvas
}

pub fn diagram_slide(slide: &DiagramSlide) -> SlideCanvas {
    let mut canvas = SlideCanvas::new();
    canvas.add(heading(&slide.title, slide.title_size));

    for shape in &slide.shapes {
        let label = shape
            .label
            .as_ref()
            .map(|label| {
                let font = Font::new(label.size, Rgb::WHITE).bold();
                paragraphs(&label.text, font, Align::Center)
            })
            .unwrap_or_default();

        canvas.add(Element::Shape(AutoShape {
            geometry: shape.geometry,
            frame: shape.frame,
            fill: shape.fill,
            line_color: shape.outline.color,
            line_width: shape.outline.width,
            paragraphs: label,
        }));
    }

    canvas
}
