// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Canonical shell verb inventory for Sill.
// Author: Lukas Bower

//! Canonical shell verb inventory for Sill.

/// Canonical list of shell verbs supported by Sill.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShellVerb {
    /// `ls`
    Ls,
    /// `cd`
    Cd,
    /// `touch`
    Touch,
    /// `pwd`
    Pwd,
    /// `cat`
    Cat,
    /// `echo`
    Echo,
    /// `help`
    Help,
    /// `exit`
    Exit,
}

/// Number of shell verbs known to the compiler.
pub const VERB_SPEC_COUNT: usize = 8;

/// All shell verbs in canonical order.
pub const ALL_VERBS: [ShellVerb; VERB_SPEC_COUNT] = [
    ShellVerb::Ls,
    ShellVerb::Cd,
    ShellVerb::Touch,
    ShellVerb::Pwd,
    ShellVerb::Cat,
    ShellVerb::Echo,
    ShellVerb::Help,
    ShellVerb::Exit,
];

/// Grammar metadata for a shell verb.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerbSpec {
    /// Verb identifier.
    pub verb: ShellVerb,
    /// Usage string in canonical shell grammar.
    pub usage: &'static str,
    /// One-line summary shown by `help`.
    pub summary: &'static str,
    /// Example command line matching the grammar.
    pub example: &'static str,
}

/// Shell verb grammar specs (canonical order).
pub const VERB_SPECS: [VerbSpec; VERB_SPEC_COUNT] = [
    VerbSpec {
        verb: ShellVerb::Ls,
        usage: "ls [-a]",
        summary: "List files in the current directory",
        example: "ls -a",
    },
    VerbSpec {
        verb: ShellVerb::Cd,
        usage: "cd <directory>",
        summary: "Change the current directory",
        example: "cd /tmp",
    },
    VerbSpec {
        verb: ShellVerb::Touch,
        usage: "touch <filename>",
        summary: "Create an empty file",
        example: "touch notes.txt",
    },
    VerbSpec {
        verb: ShellVerb::Pwd,
        usage: "pwd",
        summary: "Print the current directory",
        example: "pwd",
    },
    VerbSpec {
        verb: ShellVerb::Cat,
        usage: "cat <filename>",
        summary: "Display file contents",
        example: "cat notes.txt",
    },
    VerbSpec {
        verb: ShellVerb::Echo,
        usage: "echo <message>",
        summary: "Print a message",
        example: "echo hello world",
    },
    VerbSpec {
        verb: ShellVerb::Help,
        usage: "help",
        summary: "Show this help message",
        example: "help",
    },
    VerbSpec {
        verb: ShellVerb::Exit,
        usage: "exit",
        summary: "Exit the shell",
        example: "exit",
    },
];

const _: [(); VERB_SPEC_COUNT] = [(); ALL_VERBS.len()];
const _: [(); VERB_SPEC_COUNT] = [(); VERB_SPECS.len()];

impl ShellVerb {
    /// Return the canonical token used when parsing the shell verb.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Touch => "touch",
            Self::Pwd => "pwd",
            Self::Cat => "cat",
            Self::Echo => "echo",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// Return the usage string recorded in the grammar spec table.
    #[must_use]
    pub fn usage(self) -> &'static str {
        match VERB_SPECS.iter().find(|spec| spec.verb == self) {
            Some(spec) => spec.usage,
            None => self.token(),
        }
    }

    /// Parse a shell verb token. Matching is exact; verbs are lowercase.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ls" => Some(Self::Ls),
            "cd" => Some(Self::Cd),
            "touch" => Some(Self::Touch),
            "pwd" => Some(Self::Pwd),
            "cat" => Some(Self::Cat),
            "echo" => Some(Self::Echo),
            "help" => Some(Self::Help),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_line;

    #[test]
    fn verb_specs_cover_all_verbs() {
        for verb in ALL_VERBS.iter() {
            assert!(VERB_SPECS.iter().any(|spec| spec.verb == *verb));
        }
    }

    #[test]
    fn verb_tokens_round_trip() {
        for verb in ALL_VERBS.iter() {
            assert_eq!(ShellVerb::from_token(verb.token()), Some(*verb));
        }
    }

    #[test]
    fn verb_specs_parse_examples() {
        for spec in VERB_SPECS.iter() {
            let command = parse_line(spec.example)
                .unwrap_or_else(|err| panic!("failed to parse {}: {err:?}", spec.example));
            assert_eq!(command.verb(), spec.verb);
        }
    }

    #[test]
    fn usage_strings_start_with_token() {
        for verb in ALL_VERBS.iter() {
            assert!(
                verb.usage().starts_with(verb.token()),
                "usage drift for {verb:?}: {:?}",
                verb.usage()
            );
        }
    }

    #[test]
    fn uppercase_tokens_are_rejected() {
        assert_eq!(ShellVerb::from_token("LS"), None);
        assert_eq!(ShellVerb::from_token("Exit"), None);
    }
}
