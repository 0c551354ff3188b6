// ABOUTME: Units, colours and geometry shared by the layout templates
// ABOUTME: Converts inches and points to EMU and defines the deck palette

use std::fmt;

/// EMU (English Metric Units) per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMU per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// Slide width in inches (4:3 canvas).
pub const SLIDE_WIDTH_IN: f64 = 10.0;

/// Slide height in inches.
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

/// Convert inches to EMU, rounding to the nearest unit.
pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64).round() as i64
}

/// Convert points to EMU (used for outline widths).
pub fn points(value: f64) -> i64 {
    (value * EMU_PER_POINT as f64).round() as i64
}

/// Font size in hundredths of a point, as DrawingML expects in `sz`.
pub fn font_size(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Deck palette
pub mod palette {
    use super::Rgb;

    pub const TITLE: Rgb = Rgb(26, 35, 126);
    pub const ACCENT: Rgb = Rgb(74, 144, 226);
    pub const TEXT: Rgb = Rgb(33, 33, 33);
    pub const SUCCESS: Rgb = Rgb(76, 175, 80);
    pub const OPENING_BACKGROUND: Rgb = Rgb(240, 248, 255);
    pub const CONNECTOR: Rgb = Rgb(100, 100, 100);
}

/// A rectangle on the slide, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same size, moved down by `dy` inches.
    pub fn shifted_down(&self, dy: f64) -> Self {
        Self {
            y: self.y + dy,
            ..*self
        }
    }

    /// `(x, y, cx, cy)` in EMU.
    pub fn to_emu(&self) -> (i64, i64, i64, i64) {
        (
            inches(self.x),
            inches(self.y),
            inches(self.width),
            inches(self.height),
        )
    }

    /// Whether the frame lies entirely on the slide canvas.
    pub fn fits_slide(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= SLIDE_WIDTH_IN + f64::EPSILON
            && self.y + self.height <= SLIDE_HEIGHT_IN + f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(7.5), 6_858_000);
        assert_eq!(inches(0.35), 320_040);
        assert_eq!(points(2.0), 25_400);
        assert_eq!(font_size(54.0), 5400);
        assert_eq!(font_size(13.0), 1300);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(palette::TITLE.to_string(), "1A237E");
        assert_eq!(Rgb::WHITE.to_string(), "FFFFFF");
        assert_eq!(Rgb(0, 150, 136).to_string(), "009688");
    }

    #[test]
    fn test_frame_bounds() {
        assert!(Frame::new(0.5, 0.3, 9.0, 0.8).fits_slide());
        assert!(!Frame::new(9.0, 1.0, 1.5, 0.8).fits_slide());
        let moved = Frame::new(1.0, 2.0, 3.5, 0.8).shifted_down(0.9);
        assert!((moved.y - 2.9).abs() < 1e-9);
    }
}
