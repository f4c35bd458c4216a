//! Command types for penscript
//!
//! One source line parses into exactly one `Command`.

use std::fmt;

use crate::types::{Extent, PenColor, Point};

/// The nine command kinds, independent of their arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Position,
    Pen,
    Draw,
    Clear,
    Reset,
    Rectangle,
    Circle,
    Triangle,
    Fill,
}

impl CommandName {
    /// Keyword as written in programs (matched case-insensitively)
    pub fn keyword(self) -> &'static str {
        match self {
            CommandName::Position => "position",
            CommandName::Pen => "pen",
            CommandName::Draw => "draw",
            CommandName::Clear => "clear",
            CommandName::Reset => "reset",
            CommandName::Rectangle => "rectangle",
            CommandName::Circle => "circle",
            CommandName::Triangle => "triangle",
            CommandName::Fill => "fill",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed command with typed arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// position x y: move the transform origin
    Position(Point),
    /// pen color
    Pen(PenColor),
    /// draw x y: line from the origin, or a unit square when filling
    Draw(Point),
    /// clear: repaint the background
    Clear,
    /// reset: drop the transform
    Reset,
    /// rectangle w h
    Rectangle(Extent),
    /// circle r
    Circle(i32),
    /// triangle x1 y1 x2 y2 x3 y3
    Triangle([Point; 3]),
    /// fill on|off
    Fill(bool),
}

impl Command {
    pub fn name(&self) -> CommandName {
        match self {
            Command::Position(_) => CommandName::Position,
            Command::Pen(_) => CommandName::Pen,
            Command::Draw(_) => CommandName::Draw,
            Command::Clear => CommandName::Clear,
            Command::Reset => CommandName::Reset,
            Command::Rectangle(_) => CommandName::Rectangle,
            Command::Circle(_) => CommandName::Circle,
            Command::Triangle(_) => CommandName::Triangle,
            Command::Fill(_) => CommandName::Fill,
        }
    }
}

/// Canonical source form, e.g. `triangle 0 0 10 0 10 10`
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            Command::Position(p) | Command::Draw(p) | Command::Rectangle(p) => {
                write!(f, "{} {} {}", name, p.x, p.y)
            }
            Command::Pen(color) => write!(f, "{} {}", name, color),
            Command::Clear | Command::Reset => write!(f, "{}", name),
            Command::Circle(r) => write!(f, "{} {}", name, r),
            Command::Triangle([a, b, c]) => {
                write!(f, "{} {} {} {} {} {} {}", name, a.x, a.y, b.x, b.y, c.x, c.y)
            }
            Command::Fill(on) => write!(f, "{} {}", name, if *on { "on" } else { "off" }),
        }
    }
}
