// ABOUTME: Drawing primitives produced by the layout templates
// ABOUTME: A slide canvas holds positioned text boxes, preset shapes and tables

use crate::model::Geometry;
use crate::style::{Frame, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Rgb,
}

impl Font {
    pub fn new(size: f64, color: Rgb) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
            color,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// One paragraph with a single formatted run.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub font: Font,
    pub align: Align,
    /// Space before the paragraph, in points.
    pub space_before: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
            align: Align::Left,
            space_before: None,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn spaced(mut self, points: f64) -> Self {
        self.space_before = Some(points);
        self
    }
}

/// Split `text` on newlines into paragraphs that share formatting.
pub fn paragraphs(text: &str, font: Font, align: Align) -> Vec<Paragraph> {
    text.split('\n')
        .map(|line| Paragraph {
            text: line.to_string(),
            font,
            align,
            space_before: None,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub frame: Frame,
    pub paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutoShape {
    pub geometry: Geometry,
    pub frame: Frame,
    pub fill: Rgb,
    pub line_color: Rgb,
    /// Outline width in points.
    pub line_width: Option<f64>,
    /// Centred horizontally and vertically.
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub paragraph: Paragraph,
    pub fill: Option<Rgb>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableFrame {
    pub frame: Frame,
    /// Column widths in inches.
    pub column_widths: Vec<f64>,
    /// Header row first.
    pub rows: Vec<Vec<TableCell>>,
}

impl TableFrame {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Even split of the frame height across rows, in inches.
    pub fn row_height(&self) -> f64 {
        if self.rows.is_empty() {
            self.frame.height
        } else {
            self.frame.height / self.rows.len() as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextBox),
    Shape(AutoShape),
    Table(TableFrame),
}

impl Element {
    pub fn frame(&self) -> &Frame {
        match self {
            Element::Text(t) => &t.frame,
            Element::Shape(s) => &s.frame,
            Element::Table(t) => &t.frame,
        }
    }
}

/// Everything drawn on one slide, in z-order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideCanvas {
    pub background: Option<Rgb>,
    pub elements: Vec<Element>,
}

impl SlideCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(color: Rgb) -> Self {
        Self {
            background: Some(color),
            elements: Vec::new(),
        }
    }

    pub fn add(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// All paragraph text on the canvas, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for element in &self.elements {
            match element {
                Element::Text(t) => out.extend(t.paragraphs.iter().map(|p| p.text.as_str())),
                Element::Shape(s) => out.extend(s.paragraphs.iter().map(|p| p.text.as_str())),
                Element::Table(t) => out.extend(
                    t.rows
                        .iter()
                        .flatten()
                        .map(|c| c.paragraph.text.as_str()),
                ),
            }
        }
        out
    }
}
