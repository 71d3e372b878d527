// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Toolkit-agnostic Sill shell engine: grammar, history, output records.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Toolkit-agnostic Sill shell engine: command grammar, history recall, and
//! severity-tagged output records shared by the desktop app and its tests.
//!
//! Nothing in this crate touches a filesystem or a widget; the session layer
//! in the application wires these pieces to real I/O and to the window.

pub mod command;
pub mod help;
pub mod history;
pub mod record;
pub mod verb;

pub use command::{parse_line, rejoin_tokens, Command, ParseError};
pub use help::{render_help, BANNER_LINES, EXIT_PROMPT};
pub use history::{History, Recall};
pub use record::{OutputRecord, Scrollback, Severity};
pub use verb::{ShellVerb, VerbSpec, ALL_VERBS, VERB_SPECS, VERB_SPEC_COUNT};
