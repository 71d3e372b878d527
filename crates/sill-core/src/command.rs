// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Shell command parser for Sill.
// Author: Lukas Bower

//! Shell command parser for Sill.
//!
//! A command line is tokenized on whitespace; the first token selects a
//! [`ShellVerb`], the rest are shaped into a [`Command`] variant. The parser
//! never touches the filesystem; argument validation here is purely lexical.

use thiserror::Error;

use crate::verb::ShellVerb;

/// Shell command variants supported by the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the current directory, including dot entries when `all` is set.
    Ls {
        /// `-a` was present among the arguments.
        all: bool,
    },
    /// Change the current directory.
    Cd {
        /// Target path, taken verbatim from the first argument.
        path: String,
    },
    /// Create or truncate a file in the current directory.
    Touch {
        /// Target filename, taken verbatim from the first argument.
        name: String,
    },
    /// Print the current directory.
    Pwd,
    /// Print the contents of a file.
    Cat {
        /// Target filename, taken verbatim from the first argument.
        name: String,
    },
    /// Print a message.
    Echo {
        /// Remaining tokens re-joined with single spaces; empty when absent.
        message: String,
    },
    /// Show the command summary.
    Help,
    /// Request session termination (subject to confirmation).
    Exit,
}

impl Command {
    /// Return the verb associated with the command.
    #[must_use]
    pub fn verb(&self) -> ShellVerb {
        match self {
            Self::Ls { .. } => ShellVerb::Ls,
            Self::Cd { .. } => ShellVerb::Cd,
            Self::Touch { .. } => ShellVerb::Touch,
            Self::Pwd => ShellVerb::Pwd,
            Self::Cat { .. } => ShellVerb::Cat,
            Self::Echo { .. } => ShellVerb::Echo,
            Self::Help => ShellVerb::Help,
            Self::Exit => ShellVerb::Exit,
        }
    }
}

/// Errors surfaced by the command parser.
///
/// The `Display` form is the exact text shown to the user, so callers can
/// render a failed parse without further formatting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line held no tokens.
    #[error("empty command")]
    Empty,
    /// The first token is not a recognized verb.
    #[error("Unknown command: {0}")]
    UnknownVerb(String),
    /// A required argument was absent.
    #[error("Usage: {usage}")]
    MissingArgument {
        /// Usage string from the verb spec table.
        usage: &'static str,
    },
}

impl ParseError {
    fn missing(verb: ShellVerb) -> Self {
        Self::MissingArgument {
            usage: verb.usage(),
        }
    }
}

/// Re-join a line's whitespace-separated tokens with single spaces.
///
/// This is the canonical form stored in the history buffer: `"  ls   -a "`
/// becomes `"ls -a"`.
#[must_use]
pub fn rejoin_tokens(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a full command line.
///
/// Extra arguments beyond a verb's grammar are ignored, matching the loose
/// single-argument convention of the interactive shell (`cd a b` changes to
/// `a`).
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(ParseError::Empty);
    };
    let verb = ShellVerb::from_token(first)
        .ok_or_else(|| ParseError::UnknownVerb(first.to_owned()))?;

    match verb {
        ShellVerb::Ls => Ok(Command::Ls {
            all: tokens.any(|token| token == "-a"),
        }),
        ShellVerb::Cd => match tokens.next() {
            Some(path) => Ok(Command::Cd {
                path: path.to_owned(),
            }),
            None => Err(ParseError::missing(verb)),
        },
        ShellVerb::Touch => match tokens.next() {
            Some(name) => Ok(Command::Touch {
                name: name.to_owned(),
            }),
            None => Err(ParseError::missing(verb)),
        },
        ShellVerb::Pwd => Ok(Command::Pwd),
        ShellVerb::Cat => match tokens.next() {
            Some(name) => Ok(Command::Cat {
                name: name.to_owned(),
            }),
            None => Err(ParseError::missing(verb)),
        },
        ShellVerb::Echo => Ok(Command::Echo {
            message: tokens.collect::<Vec<_>>().join(" "),
        }),
        ShellVerb::Help => Ok(Command::Help),
        ShellVerb::Exit => Ok(Command::Exit),
    }
}
