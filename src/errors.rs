//! Error types with rich diagnostics using miette
//!
//! Every failure is a [`Reason`] located at a byte range inside one source
//! line. The validator wraps it in a [`SyntaxError`], the interpreter in a
//! [`RuntimeError`]; both carry the line so miette can underline the
//! offending token.

use std::ops::Range;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::CommandName;

// ============================================================================
// Failure causes
// ============================================================================

/// Why a line was rejected
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    #[error("invalid command: {name:?}")]
    #[diagnostic(
        code(penscript::invalid_command),
        help("known commands: position, pen, draw, clear, reset, rectangle, circle, triangle, fill")
    )]
    InvalidCommand { name: String },

    #[error("malformed line")]
    #[diagnostic(
        code(penscript::malformed_line),
        help("separate words with spaces and drop leading or trailing whitespace")
    )]
    MalformedLine,

    #[error("`{command}` expects {expected} argument(s), found {found}")]
    #[diagnostic(code(penscript::missing_arguments))]
    MissingArguments {
        command: CommandName,
        expected: usize,
        found: usize,
    },

    #[error("`{command}` takes no arguments, found `{token}`")]
    #[diagnostic(code(penscript::unexpected_argument))]
    UnexpectedArgument { command: CommandName, token: String },

    #[error("argument {position} of `{command}` must be an integer, found `{token}`")]
    #[diagnostic(code(penscript::not_an_integer))]
    NotAnInteger {
        command: CommandName,
        position: usize,
        token: String,
    },

    #[error("invalid pen color `{token}`")]
    #[diagnostic(
        code(penscript::invalid_color),
        help("pen colors are red, green, blue and black")
    )]
    InvalidColor { token: String },

    #[error("invalid fill mode `{token}`")]
    #[diagnostic(code(penscript::invalid_fill_mode), help("use `fill on` or `fill off`"))]
    InvalidFillMode { token: String },
}

/// A [`Reason`] plus the byte range it points at within its line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub reason: Reason,
    pub span: Range<usize>,
}

impl Fault {
    pub fn new(reason: Reason, span: Range<usize>) -> Self {
        Self { reason, span }
    }
}

fn line_source(line: usize, text: &str) -> NamedSource<String> {
    NamedSource::new(format!("line {line}"), text.to_string())
}

// ============================================================================
// Syntax Errors
// ============================================================================

/// Raised by the grammar validator: the line can never execute correctly
#[derive(Error, Diagnostic, Debug)]
#[error("syntax error on line {line}: {reason}")]
#[diagnostic(code(penscript::syntax_error))]
pub struct SyntaxError {
    /// 1-based line number within the program
    pub line: usize,
    /// The offending line as written
    pub text: String,
    pub reason: Reason,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("{reason}")]
    pub span: SourceSpan,
}

impl SyntaxError {
    pub fn new(line: usize, text: &str, fault: Fault) -> Self {
        Self {
            line,
            text: text.to_string(),
            reason: fault.reason,
            src: line_source(line, text),
            span: fault.span.into(),
        }
    }
}

// ============================================================================
// Runtime Errors
// ============================================================================

/// Raised by the interpreter while executing a line
#[derive(Error, Diagnostic, Debug)]
#[error("error on line {line}: {reason}")]
#[diagnostic(code(penscript::runtime_error))]
pub struct RuntimeError {
    /// 1-based line number within the program
    pub line: usize,
    /// The offending line as written
    pub text: String,
    pub reason: Reason,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("{reason}")]
    pub span: SourceSpan,
}

impl RuntimeError {
    pub fn new(line: usize, text: &str, fault: Fault) -> Self {
        Self {
            line,
            text: text.to_string(),
            reason: fault.reason,
            src: line_source(line, text),
            span: fault.span.into(),
        }
    }
}

// ============================================================================
// Program I/O Errors
// ============================================================================

/// Errors loading or saving program text
#[derive(Error, Diagnostic, Debug)]
pub enum ProgramError {
    #[error("failed to read program from {}", .path.display())]
    #[diagnostic(code(penscript::program::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write program to {}", .path.display())]
    #[diagnostic(code(penscript::program::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_token() {
        let reason = Reason::NotAnInteger {
            command: CommandName::Rectangle,
            position: 2,
            token: "test".into(),
        };
        assert_eq!(
            reason.to_string(),
            "argument 2 of `rectangle` must be an integer, found `test`"
        );
        assert_eq!(
            Reason::InvalidCommand { name: "fly".into() }.to_string(),
            "invalid command: \"fly\""
        );
    }

    #[test]
    fn errors_keep_line_and_span() {
        let fault = Fault::new(
            Reason::InvalidColor {
                token: "purple".into(),
            },
            4..10,
        );
        let err = SyntaxError::new(3, "pen purple", fault.clone());
        assert_eq!(err.line, 3);
        assert_eq!(err.text, "pen purple");
        assert_eq!(err.span.offset(), 4);
        assert_eq!(err.span.len(), 6);
        assert_eq!(err.to_string(), "syntax error on line 3: invalid pen color `purple`");

        let err = RuntimeError::new(7, "pen purple", fault);
        assert_eq!(err.to_string(), "error on line 7: invalid pen color `purple`");
    }
}
