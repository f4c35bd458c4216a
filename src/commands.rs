//! The command table.
//!
//! Both the grammar validator and the interpreter parse through this table,
//! so they accept and reject exactly the same argument lists.

use crate::ast::CommandName;

/// What a single positional argument must look like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Signed 32-bit integer
    Int,
    /// One of the pen color names
    Color,
    /// `on` or `off`
    Toggle,
}

/// Arity and argument types for one command
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: CommandName,
    /// One entry per required argument
    pub args: &'static [ArgKind],
}

impl CommandSpec {
    /// Minimum number of arguments
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Whether tokens past `arity()` are rejected.
    /// Only commands without arguments are strict; the others ignore
    /// trailing tokens.
    pub fn rejects_extra(&self) -> bool {
        self.args.is_empty()
    }
}

use ArgKind::*;

pub static COMMANDS: [CommandSpec; 9] = [
    CommandSpec {
        name: CommandName::Position,
        args: &[Int, Int],
    },
    CommandSpec {
        name: CommandName::Pen,
        args: &[Color],
    },
    CommandSpec {
        name: CommandName::Draw,
        args: &[Int, Int],
    },
    CommandSpec {
        name: CommandName::Clear,
        args: &[],
    },
    CommandSpec {
        name: CommandName::Reset,
        args: &[],
    },
    CommandSpec {
        name: CommandName::Rectangle,
        args: &[Int, Int],
    },
    CommandSpec {
        name: CommandName::Circle,
        args: &[Int],
    },
    CommandSpec {
        name: CommandName::Triangle,
        args: &[Int, Int, Int, Int, Int, Int],
    },
    CommandSpec {
        name: CommandName::Fill,
        args: &[Toggle],
    },
];

/// Look up a command by keyword, ignoring ASCII case
pub fn lookup(keyword: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|spec| keyword.eq_ignore_ascii_case(spec.name.keyword()))
}
