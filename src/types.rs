//! Strongly-typed primitives for penscript.
//!
//! - Coordinates are integer pixels (`glam::IVec2`)
//! - Pen colors are a closed set, parsed case-insensitively
//! - Surface colors are plain RGB so backends don't need to know the pen set

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use thiserror::Error;

/// A point in surface pixels, relative to the current transform origin
pub type Point = IVec2;

/// A width/height pair in surface pixels (may be zero or negative)
pub type Extent = IVec2;

/// Error returned when a token does not name a pen color
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown pen color")]
pub struct UnknownColor;

/// The colors the `pen` command accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PenColor {
    Red,
    Green,
    Blue,
    #[default]
    Black,
}

impl PenColor {
    pub const ALL: [PenColor; 4] = [
        PenColor::Red,
        PenColor::Green,
        PenColor::Blue,
        PenColor::Black,
    ];

    /// Lower-case keyword as written in programs
    pub fn name(self) -> &'static str {
        match self {
            PenColor::Red => "red",
            PenColor::Green => "green",
            PenColor::Blue => "blue",
            PenColor::Black => "black",
        }
    }

    /// RGB value used when drawing with this pen.
    /// Green is the CSS `green` (0,128,0), not pure green.
    pub fn rgb(self) -> Color {
        match self {
            PenColor::Red => Color::RED,
            PenColor::Green => Color::GREEN,
            PenColor::Blue => Color::BLUE,
            PenColor::Black => Color::BLACK,
        }
    }
}

impl FromStr for PenColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PenColor::ALL
            .into_iter()
            .find(|c| s.eq_ignore_ascii_case(c.name()))
            .ok_or(UnknownColor)
    }
}

impl fmt::Display for PenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 24-bit RGB color handed to drawing surfaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl From<PenColor> for Color {
    fn from(pen: PenColor) -> Self {
        pen.rgb()
    }
}

/// Formats as `rgb(r,g,b)`, the form SVG attributes use
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Parse an `on`/`off` fill flag (case-insensitive)
pub fn parse_toggle(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("on") {
        Some(true)
    } else if s.eq_ignore_ascii_case("off") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pen_colors_parse_case_insensitively() {
        assert_eq!("red".parse(), Ok(PenColor::Red));
        assert_eq!("GREEN".parse(), Ok(PenColor::Green));
        assert_eq!("Blue".parse(), Ok(PenColor::Blue));
        assert_eq!("bLaCk".parse(), Ok(PenColor::Black));
        assert_eq!("purple".parse::<PenColor>(), Err(UnknownColor));
        assert_eq!("".parse::<PenColor>(), Err(UnknownColor));
        assert_eq!(UnknownColor.to_string(), "unknown pen color");
    }

    #[test]
    fn default_pen_is_black() {
        assert_eq!(PenColor::default(), PenColor::Black);
        assert_eq!(PenColor::default().rgb(), Color::BLACK);
    }

    #[test]
    fn color_formats_as_css_rgb() {
        assert_eq!(Color::GREEN.to_string(), "rgb(0,128,0)");
        assert_eq!(Color::from(PenColor::Red).to_string(), "rgb(255,0,0)");
    }

    #[test]
    fn toggle_accepts_only_on_and_off() {
        assert_eq!(parse_toggle("on"), Some(true));
        assert_eq!(parse_toggle("OFF"), Some(false));
        assert_eq!(parse_toggle("maybe"), None);
        assert_eq!(parse_toggle("1"), None);
    }
}
