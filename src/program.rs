//! Whole programs: loading, saving, syntax checking and running.
//!
//! A program is stored as plain text, one command per line.

use std::path::Path;

use crate::errors::{ProgramError, RuntimeError, SyntaxError};
use crate::render::{DrawingState, DrawingSurface, execute_program};
use crate::validate::validate_line;

/// Validate every line, returning one result per line in order
pub fn validate_program<I>(lines: I) -> Vec<Result<(), SyntaxError>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| validate_line(i + 1, line.as_ref()).map(|_| ()))
        .collect()
}

/// Validate lines in order, stopping at the first failure
pub fn syntax_check<I>(lines: I) -> Result<(), SyntaxError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for (i, line) in lines.into_iter().enumerate() {
        validate_line(i + 1, line.as_ref())?;
    }
    Ok(())
}

/// Run lines against an existing session, reporting the first failing line
pub fn run_program<I, S>(
    lines: I,
    state: &mut DrawingState,
    surface: &mut S,
) -> Result<(), RuntimeError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: DrawingSurface + ?Sized,
{
    execute_program(lines, state, surface)
}

/// An ordered list of source lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<String>,
}

impl Program {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split source text into lines. A trailing newline does not add an
    /// empty last line; `\r\n` endings are accepted.
    pub fn from_source(source: &str) -> Self {
        Self {
            lines: source.lines().map(str::to_string).collect(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProgramError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ProgramError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        crate::log::debug!(path = %path.display(), "loaded program");
        Ok(Self::from_source(&source))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProgramError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_source()).map_err(|source| ProgramError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Lines joined with `\n`, newline-terminated
    pub fn to_source(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn validate(&self) -> Vec<Result<(), SyntaxError>> {
        validate_program(&self.lines)
    }

    pub fn syntax_check(&self) -> Result<(), SyntaxError> {
        syntax_check(&self.lines)
    }

    /// Run in a fresh session, returning the final drawing state
    pub fn run<S>(&self, surface: &mut S) -> Result<DrawingState, RuntimeError>
    where
        S: DrawingSurface + ?Sized,
    {
        let mut state = DrawingState::new();
        execute_program(&self.lines, &mut state, surface)?;
        Ok(state)
    }
}

impl<S: Into<String>> FromIterator<S> for Program {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
