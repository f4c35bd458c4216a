//! Grammar validator.
//!
//! Checks a line in two passes: the pest line-shape grammar, then the
//! command table (arity and argument types). Never touches drawing state.

use pest::Parser;
use pest::error::InputLocation;

use crate::ast::Command;
use crate::errors::{Fault, Reason, SyntaxError};
use crate::parse::parse_command;
use crate::{LineParser, Rule};

/// Check a line without numbering it. Errors report line 1.
pub fn validate(line: &str) -> Result<(), SyntaxError> {
    validate_line(1, line).map(|_| ())
}

/// Check line `number` of a program, returning the command it would run
pub fn validate_line(number: usize, line: &str) -> Result<Command, SyntaxError> {
    check_line(line).map_err(|fault| SyntaxError::new(number, line, fault))
}

fn check_line(line: &str) -> Result<Command, Fault> {
    if let Err(err) = LineParser::parse(Rule::line, line) {
        // An unknown name is reported as such even when the shape is also wrong
        if let Err(fault) = parse_command(line) {
            if matches!(fault.reason, Reason::InvalidCommand { .. }) {
                return Err(fault);
            }
        }
        let start = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        let end = (start + 1).min(line.len()).max(start);
        crate::log::debug!(line, start, "line failed shape check");
        return Err(Fault::new(Reason::MalformedLine, start..end));
    }
    parse_command(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CommandName;

    fn reason(line: &str) -> Reason {
        validate(line).unwrap_err().reason
    }

    #[test]
    fn accepts_and_rejects_sample_lines() {
        let cases = [
            ("position 10 20", true),
            ("pen red", true),
            ("draw 10 20", true),
            ("clear", true),
            ("reset", true),
            ("rectangle 10 20", true),
            ("circle 10", true),
            ("triangle 0 0 10 0 10 10", true),
            ("fill on", true),
            ("invalid_command", false),
            ("position 10", false),
            ("pen", false),
            ("draw", false),
            ("clear ", false),
            ("reset test", false),
            ("rectangle 10 test", false),
            ("circle", false),
            ("triangle 0 0 10 0", false),
            ("fill", false),
        ];
        for (line, expected) in cases {
            assert_eq!(validate(line).is_ok(), expected, "validate({line:?})");
        }
    }

    #[test]
    fn too_few_arguments_for_every_command() {
        let lines = [
            "position 1",
            "pen",
            "draw 1",
            "rectangle 1",
            "circle",
            "triangle 1 2 3 4 5",
            "fill",
        ];
        for line in lines {
            assert!(
                matches!(reason(line), Reason::MissingArguments { .. }),
                "{line:?} should be missing arguments"
            );
        }
    }

    #[test]
    fn pen_and_fill_arguments() {
        assert!(validate("pen red").is_ok());
        assert!(validate("pen BLACK").is_ok());
        assert_eq!(
            reason("pen purple"),
            Reason::InvalidColor {
                token: "purple".into(),
            }
        );
        assert!(validate("fill on").is_ok());
        assert!(validate("fill Off").is_ok());
        assert_eq!(
            reason("fill maybe"),
            Reason::InvalidFillMode {
                token: "maybe".into(),
            }
        );
    }

    #[test]
    fn unknown_commands_are_invalid() {
        assert_eq!(reason("fly 1 2"), Reason::InvalidCommand { name: "fly".into() });
        assert_eq!(reason("fly 1.5"), Reason::InvalidCommand { name: "fly".into() });
        assert_eq!(
            reason("penx red"),
            Reason::InvalidCommand {
                name: "penx".into(),
            }
        );
        assert_eq!(
            reason(""),
            Reason::InvalidCommand {
                name: String::new(),
            }
        );
    }

    #[test]
    fn shape_rejects_stray_whitespace_and_punctuation() {
        let err = validate("clear ").unwrap_err();
        assert_eq!(err.reason, Reason::MalformedLine);
        assert!(err.span.offset() >= 5, "points past the keyword");

        assert_eq!(reason(" clear"), Reason::MalformedLine);
        assert_eq!(reason("draw 1.5 2"), Reason::MalformedLine);
        assert_eq!(reason("pen red,"), Reason::MalformedLine);
    }

    #[test]
    fn accepts_signed_integers_tabs_and_any_case() {
        assert!(validate("position -10 +20").is_ok());
        assert!(validate("DRAW\t5  5").is_ok());
        assert!(validate("Triangle 0 0 -10 0 10 -10").is_ok());
        assert!(validate("circle -3").is_ok());
        assert!(validate("rectangle 0 0").is_ok());
    }

    #[test]
    fn extra_tokens_only_rejected_for_argumentless_commands() {
        assert_eq!(
            reason("reset test"),
            Reason::UnexpectedArgument {
                command: CommandName::Reset,
                token: "test".into(),
            }
        );
        assert!(matches!(reason("clear now"), Reason::UnexpectedArgument { .. }));
        assert!(validate("circle 10 20").is_ok());
    }

    #[test]
    fn validate_line_numbers_errors_and_returns_command() {
        assert_eq!(validate_line(4, "fill on").ok(), Some(Command::Fill(true)));
        let err = validate_line(9, "circle big").unwrap_err();
        assert_eq!(err.line, 9);
        assert_eq!(err.text, "circle big");
        assert_eq!(err.span.offset(), 7);
    }
}
