//! penscript: a line-oriented drawing language.
//!
//! ```text
//! pen red
//! position 50 50
//! fill on
//! circle 20
//! ```
//!
//! Each line is one command. [`validate`] checks a line without side
//! effects; [`execute`] runs it against a [`DrawingState`] and any
//! [`DrawingSurface`].

use pest_derive::Parser;

pub mod ast;
pub mod commands;
pub mod errors;
pub mod log;
pub mod parse;
pub mod program;
pub mod render;
pub mod types;
pub mod validate;

pub use ast::{Command, CommandName};
pub use errors::{Fault, ProgramError, Reason, RuntimeError, SyntaxError};
pub use program::{Program, run_program, syntax_check, validate_program};
pub use render::{
    Backend, DrawCall, DrawingState, DrawingSurface, Paint, Recorder, SvgElement, SvgOptions,
    SvgSurface, execute, execute_line, execute_program,
};
pub use types::{Color, PenColor};
pub use validate::{validate, validate_line};

#[derive(Parser)]
#[grammar = "line.pest"]
pub struct LineParser;

/// Render program source to SVG.
///
/// Returns the SVG document on success, or the first failing line as a
/// diagnostic.
pub fn render_svg(source: &str, options: SvgOptions) -> Result<String, miette::Report> {
    let program = Program::from_source(source);
    let mut surface = SvgSurface::new(options);
    program.run(&mut surface)?;
    Ok(surface.to_svg())
}
