//! The interpreter: executes commands against a drawing surface
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and colors
//! - `context`: `DrawingState` carried between commands
//! - `surface`: the `DrawingSurface` trait and the `Backend` enum
//! - `svg`: SVG generation
//! - `recorder`: a surface that records draw calls

pub mod context;
pub mod defaults;
pub mod recorder;
pub mod surface;
pub mod svg;

// Re-export commonly used items
pub use context::DrawingState;
pub use recorder::{DrawCall, Recorder};
pub use surface::{Backend, DrawingSurface};
pub use self::svg::{Paint, SvgElement, SvgOptions, SvgSurface};

use glam::IVec2;

use crate::ast::Command;
use crate::errors::RuntimeError;
use crate::parse::parse_command;

/// Execute a single line as line 1 of a program.
///
/// No prior validation is needed: the line goes through the same command
/// table the validator uses, minus the line-shape check.
pub fn execute<S>(
    line: &str,
    state: &mut DrawingState,
    surface: &mut S,
) -> Result<Command, RuntimeError>
where
    S: DrawingSurface + ?Sized,
{
    execute_line(1, line, state, surface)
}

/// Execute line `number` of a program
pub fn execute_line<S>(
    number: usize,
    line: &str,
    state: &mut DrawingState,
    surface: &mut S,
) -> Result<Command, RuntimeError>
where
    S: DrawingSurface + ?Sized,
{
    let command = parse_command(line).map_err(|fault| {
        crate::log::debug!(line = number, reason = %fault.reason, "command rejected");
        RuntimeError::new(number, line, fault)
    })?;
    crate::log::debug!(line = number, %command, "execute");
    apply(command, state, surface);
    Ok(command)
}

/// Execute every line in order, stopping at the first error.
///
/// Nothing is rolled back: whatever earlier lines drew stays drawn, and
/// `state` holds the values the last good line left behind.
pub fn execute_program<I, S>(
    lines: I,
    state: &mut DrawingState,
    surface: &mut S,
) -> Result<(), RuntimeError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: DrawingSurface + ?Sized,
{
    for (i, line) in lines.into_iter().enumerate() {
        execute_line(i + 1, line.as_ref(), state, surface)?;
    }
    Ok(())
}

/// Apply an already-parsed command
pub fn apply<S>(command: Command, state: &mut DrawingState, surface: &mut S)
where
    S: DrawingSurface + ?Sized,
{
    let pen = state.pen();
    let fill = state.fill_enabled;

    match command {
        Command::Position(offset) => {
            surface.reset_transform();
            state.origin_offset = offset;
            surface.translate(offset);
        }
        Command::Pen(color) => state.pen_color = color,
        Command::Draw(to) => {
            if fill {
                surface.fill_rect(pen, to, defaults::UNIT_SQUARE);
            } else {
                surface.stroke_line(pen, IVec2::ZERO, to);
            }
        }
        Command::Clear => surface.clear(defaults::BACKGROUND),
        Command::Reset => {
            surface.reset_transform();
            state.origin_offset = IVec2::ZERO;
        }
        Command::Rectangle(size) => {
            if fill {
                surface.fill_rect(pen, IVec2::ZERO, size);
            } else {
                surface.stroke_rect(pen, IVec2::ZERO, size);
            }
        }
        Command::Circle(radius) => {
            let size = IVec2::splat(radius.saturating_mul(2));
            if fill {
                surface.fill_ellipse(pen, IVec2::ZERO, size);
            } else {
                surface.stroke_ellipse(pen, IVec2::ZERO, size);
            }
        }
        Command::Triangle(points) => {
            if fill {
                surface.fill_polygon(pen, &points);
            } else {
                surface.stroke_polygon(pen, &points);
            }
        }
        Command::Fill(on) => state.fill_enabled = on,
    }
}
