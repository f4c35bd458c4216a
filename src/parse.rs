//! Tokenize a source line and parse it into a [`Command`] through the
//! command table.

use std::ops::Range;

use glam::ivec2;

use crate::ast::{Command, CommandName};
use crate::commands::{self, ArgKind, CommandSpec};
use crate::errors::{Fault, Reason};
use crate::types::{PenColor, parse_toggle};

/// A whitespace-delimited word and where it sits in its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl Token<'_> {
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

/// Split a line on ASCII whitespace, keeping byte offsets
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_ascii_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token {
                    text: &line[s..i],
                    start: s,
                });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: &line[s..],
            start: s,
        });
    }
    tokens
}

/// A checked argument value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arg {
    Int(i32),
    Color(PenColor),
    Toggle(bool),
}

/// Parse one line into a command.
///
/// Checks the command name, argument count and argument types against
/// the command table. Does not check the overall line shape.
pub fn parse_command(line: &str) -> Result<Command, Fault> {
    let tokens = tokenize(line);
    let Some((head, rest)) = tokens.split_first() else {
        return Err(Fault::new(
            Reason::InvalidCommand {
                name: String::new(),
            },
            0..line.len(),
        ));
    };

    let spec = commands::lookup(head.text).ok_or_else(|| {
        Fault::new(
            Reason::InvalidCommand {
                name: head.text.to_string(),
            },
            head.span(),
        )
    })?;

    let args = check_args(spec, head, rest)?;
    crate::log::debug!(command = %spec.name, ?args, "parsed arguments");
    build(spec, &args, head)
}

fn check_args(
    spec: &CommandSpec,
    head: &Token<'_>,
    rest: &[Token<'_>],
) -> Result<Vec<Arg>, Fault> {
    if rest.len() < spec.arity() {
        let span = rest.last().unwrap_or(head).span();
        return Err(Fault::new(
            Reason::MissingArguments {
                command: spec.name,
                expected: spec.arity(),
                found: rest.len(),
            },
            span,
        ));
    }
    if spec.rejects_extra() {
        if let Some(extra) = rest.first() {
            return Err(Fault::new(
                Reason::UnexpectedArgument {
                    command: spec.name,
                    token: extra.text.to_string(),
                },
                extra.span(),
            ));
        }
    }

    spec.args
        .iter()
        .zip(rest)
        .enumerate()
        .map(|(i, (kind, token))| check_arg(spec.name, i + 1, *kind, token))
        .collect()
}

fn check_arg(
    command: CommandName,
    position: usize,
    kind: ArgKind,
    token: &Token<'_>,
) -> Result<Arg, Fault> {
    let fail = |reason| Fault::new(reason, token.span());
    match kind {
        ArgKind::Int => token.text.parse().map(Arg::Int).map_err(|_| {
            fail(Reason::NotAnInteger {
                command,
                position,
                token: token.text.to_string(),
            })
        }),
        ArgKind::Color => token.text.parse().map(Arg::Color).map_err(|_| {
            fail(Reason::InvalidColor {
                token: token.text.to_string(),
            })
        }),
        ArgKind::Toggle => parse_toggle(token.text).map(Arg::Toggle).ok_or_else(|| {
            fail(Reason::InvalidFillMode {
                token: token.text.to_string(),
            })
        }),
    }
}

fn build(spec: &CommandSpec, args: &[Arg], head: &Token<'_>) -> Result<Command, Fault> {
    use Arg::*;

    let command = match (spec.name, args) {
        (CommandName::Position, &[Int(x), Int(y)]) => Command::Position(ivec2(x, y)),
        (CommandName::Pen, &[Color(c)]) => Command::Pen(c),
        (CommandName::Draw, &[Int(x), Int(y)]) => Command::Draw(ivec2(x, y)),
        (CommandName::Clear, &[]) => Command::Clear,
        (CommandName::Reset, &[]) => Command::Reset,
        (CommandName::Rectangle, &[Int(w), Int(h)]) => Command::Rectangle(ivec2(w, h)),
        (CommandName::Circle, &[Int(r)]) => Command::Circle(r),
        (CommandName::Triangle, &[Int(x1), Int(y1), Int(x2), Int(y2), Int(x3), Int(y3)]) => {
            Command::Triangle([ivec2(x1, y1), ivec2(x2, y2), ivec2(x3, y3)])
        }
        (CommandName::Fill, &[Toggle(on)]) => Command::Fill(on),
        // The table and this match disagree about the argument list
        _ => {
            return Err(Fault::new(
                Reason::MissingArguments {
                    command: spec.name,
                    expected: spec.arity(),
                    found: args.len(),
                },
                head.span(),
            ));
        }
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(line: &str) -> Reason {
        parse_command(line).unwrap_err().reason
    }

    #[test]
    fn tokenize_tracks_offsets() {
        let tokens = tokenize("  draw\t5   -7 ");
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, ["draw", "5", "-7"]);
        assert_eq!(tokens[0].span(), 2..6);
        assert_eq!(tokens[2].span(), 11..13);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t ").is_empty());
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(parse_command("position 10 20"), Ok(Command::Position(ivec2(10, 20))));
        assert_eq!(parse_command("pen Red"), Ok(Command::Pen(PenColor::Red)));
        assert_eq!(parse_command("draw -5 5"), Ok(Command::Draw(ivec2(-5, 5))));
        assert_eq!(parse_command("CLEAR"), Ok(Command::Clear));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("rectangle 10 20"), Ok(Command::Rectangle(ivec2(10, 20))));
        assert_eq!(parse_command("circle 0"), Ok(Command::Circle(0)));
        assert_eq!(
            parse_command("triangle 0 0 10 0 10 10"),
            Ok(Command::Triangle([ivec2(0, 0), ivec2(10, 0), ivec2(10, 10)]))
        );
        assert_eq!(parse_command("fill ON"), Ok(Command::Fill(true)));
        assert_eq!(parse_command("fill off"), Ok(Command::Fill(false)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for line in ["position -3 4", "pen blue", "triangle 1 2 3 4 5 6", "fill on", "clear"] {
            let command = parse_command(line).unwrap();
            assert_eq!(command.to_string(), line);
        }
    }

    #[test]
    fn trailing_tokens_ignored_for_commands_with_arguments() {
        assert_eq!(parse_command("circle 10 20"), Ok(Command::Circle(10)));
        assert_eq!(parse_command("pen red green"), Ok(Command::Pen(PenColor::Red)));
    }

    #[test]
    fn argumentless_commands_reject_extra_tokens() {
        assert_eq!(
            parse_command("reset test"),
            Err(Fault::new(
                Reason::UnexpectedArgument {
                    command: CommandName::Reset,
                    token: "test".into(),
                },
                6..10,
            ))
        );
        assert!(matches!(reason("clear 1"), Reason::UnexpectedArgument { .. }));
    }

    #[test]
    fn reports_missing_arguments() {
        assert_eq!(
            reason("triangle 0 0 10 0"),
            Reason::MissingArguments {
                command: CommandName::Triangle,
                expected: 6,
                found: 4,
            }
        );
        assert_eq!(
            parse_command("pen").unwrap_err().span,
            0..3,
            "missing argument points at the command name"
        );
    }

    #[test]
    fn reports_bad_argument_types() {
        assert_eq!(
            parse_command("rectangle 10 test"),
            Err(Fault::new(
                Reason::NotAnInteger {
                    command: CommandName::Rectangle,
                    position: 2,
                    token: "test".into(),
                },
                13..17,
            ))
        );
        assert_eq!(
            reason("pen purple"),
            Reason::InvalidColor {
                token: "purple".into(),
            }
        );
        assert_eq!(
            reason("fill maybe"),
            Reason::InvalidFillMode {
                token: "maybe".into(),
            }
        );
        assert!(matches!(reason("circle 99999999999"), Reason::NotAnInteger { .. }));
        assert!(matches!(reason("draw 1.5 2"), Reason::NotAnInteger { position: 1, .. }));
    }

    #[test]
    fn unknown_and_blank_lines_are_invalid_commands() {
        assert_eq!(reason("fly 1 2"), Reason::InvalidCommand { name: "fly".into() });
        assert_eq!(
            reason(""),
            Reason::InvalidCommand {
                name: String::new(),
            }
        );
        assert_eq!(
            reason("   "),
            Reason::InvalidCommand {
                name: String::new(),
            }
        );
    }
}
