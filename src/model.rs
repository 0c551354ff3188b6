// ABOUTME: Data model for the deck: an ordered list of slides of five kinds
// ABOUTME: Slides are plain values; validation enforces the content invariants

use crate::errors::{DeckError, Result};
use crate::style::{Frame, Rgb};

/// The complete presentation, in slide order.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone)]
pub enum Slide {
    Title(TitleSlide),
    Content(ContentSlide),
    Table(TableSlide),
    Metric(MetricSlide),
    Diagram(DiagramSlide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// Light background, title, subtitle and italic tagline.
    Opening,
    /// Accent background with white title and subtitle; takes no tagline.
    Closing,
}

#[derive(Debug, Clone)]
pub struct TitleSlide {
    pub title: String,
    pub subtitle: String,
    pub tagline: Option<String>,
    pub style: TitleStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    Single,
    Two,
}

#[derive(Debug, Clone)]
pub struct ContentSlide {
    pub title: String,
    pub lines: Vec<String>,
    pub columns: ColumnLayout,
}

#[derive(Debug, Clone)]
pub struct TableSlide {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct MetricSlide {
    pub title: String,
    pub metrics: Vec<Metric>,
}

/// Preset geometry of a diagram shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
    DownArrow,
    RightArrow,
}

impl Geometry {
    /// DrawingML `prstGeom` name.
    pub fn preset(&self) -> &'static str {
        match self {
            Geometry::Rectangle => "rect",
            Geometry::RoundedRectangle => "roundRect",
            Geometry::DownArrow => "downArrow",
            Geometry::RightArrow => "rightArrow",
        }
    }

    /// Human-readable shape name written into `cNvPr`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Geometry::Rectangle => "Rectangle",
            Geometry::RoundedRectangle => "Rounded Rectangle",
            Geometry::DownArrow => "Down Arrow",
            Geometry::RightArrow => "Right Arrow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Rgb,
    /// Width in points; `None` keeps the renderer default.
    pub width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramShape {
    pub geometry: Geometry,
    pub frame: Frame,
    pub fill: Rgb,
    pub outline: Outline,
    pub label: Option<Label>,
}

#[derive(Debug, Clone)]
pub struct DiagramSlide {
    pub title: String,
    pub title_size: f64,
    pub shapes: Vec<DiagramShape>,
}

impl Slide {
    pub fn title(&self) -> &str {
        match self {
            Slide::Title(s) => &s.title,
            Slide::Content(s) => &s.title,
            Slide::Table(s) => &s.title,
            Slide::Metric(s) => &s.title,
            Slide::Diagram(s) => &s.title,
        }
    }

    /// Short name of the slide kind, used in logs and test assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            Slide::Title(_) => "title",
            Slide::Content(_) => "content",
            Slide::Table(_) => "table",
            Slide::Metric(_) => "metric",
            Slide::Diagram(_) => "diagram",
        }
    }

    fn validate(&self, number: usize) -> Result<()> {
        if self.title().trim().is_empty() {
            return Err(DeckError::Validation(format!(
                "slide {} has an empty title",
                number
            )));
        }

        match self {
            Slide::Title(title)
                if title.style == TitleStyle::Closing && title.tagline.is_some() =>
            {
                return Err(DeckError::Validation(format!(
                    "closing slide {} cannot carry a tagline",
                    number
                )));
            }
            Slide::Table(table) => {
                if table.headers.is_empty() {
                    return Err(DeckError::Validation(format!(
                        "table on slide {} has no header cells",
                        number
                    )));
                }
                if let Some((i, row)) = table
                    .rows
                    .iter()
                    .enumerate()
                    .find(|(_, row)| row.len() != table.headers.len())
                {
                    return Err(DeckError::Validation(format!(
                        "table on slide {}: row {} has {} cells, expected {}",
                        number,
                        i + 1,
                        row.len(),
                        table.headers.len()
                    )));
                }
            }
            Slide::Metric(metric) if metric.metrics.is_empty() => {
                return Err(DeckError::Validation(format!(
                    "metric slide {} has no metrics",
                    number
                )));
            }
            Slide::Diagram(diagram) => {
                if let Some(shape) = diagram.shapes.iter().find(|s| !s.frame.fits_slide()) {
                    return Err(DeckError::Validation(format!(
                        "diagram on slide {}: {} at ({}, {}) runs off the slide",
                        number,
                        shape.geometry.display_name(),
                        shape.frame.x,
                        shape.frame.y
                    )));
                }
            }
            _ => {}
        }

        Ok(())
    }
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide; slides keep insertion order.
    pub fn push(&mut self, slide: Slide) -> &mut Self {
        self.slides.push(slide);
        self
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn diagram_count(&self) -> usize {
        self.slides
            .iter()
            .filter(|s| matches!(s, Slide::Diagram(_)))
            .count()
    }

    /// Check every slide against the content invariants.
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(DeckError::Validation("deck has no slides".to_string()));
        }
        for (i, slide) in self.slides.iter().enumerate() {
            slide.validate(i + 1)?;
        }
        Ok(())
    }
}
