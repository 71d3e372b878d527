// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Static shell text for Sill: help summary, banner, exit prompt.
// Author: Lukas Bower

//! Static shell text: help summary, startup banner, exit prompt.

use core::fmt::Write as _;

use crate::verb::VERB_SPECS;

/// Lines written to the scrollback when a session starts.
pub const BANNER_LINES: &[&str] = &[
    "Welcome to Sill - a windowed shell for quick file chores.",
    concat!("Version ", env!("CARGO_PKG_VERSION")),
    "Type 'help' for a list of available commands.",
];

/// Question shown by the exit confirmation dialog.
pub const EXIT_PROMPT: &str = "Are you sure you want to exit?";

/// Key bindings listed at the end of the help summary.
const BINDING_LINES: &[&str] = &[
    "  Up / Down          - Recall older / newer command",
    "  Ctrl+L             - Clear the display",
];

/// Render the multi-line `help` output from the verb spec table.
#[must_use]
pub fn render_help() -> String {
    let mut contents = String::new();
    writeln!(contents, "Available commands:").ok();
    for spec in VERB_SPECS.iter() {
        writeln!(contents, "  {:<19}- {}", spec.usage, spec.summary).ok();
    }
    writeln!(contents).ok();
    writeln!(contents, "Bindings:").ok();
    for line in BINDING_LINES.iter() {
        writeln!(contents, "{line}").ok();
    }
    // Single record; no trailing blank line.
    while contents.ends_with('\n') {
        contents.pop();
    }
    contents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verb::ALL_VERBS;

    #[test]
    fn help_mentions_every_verb() {
        let help = render_help();
        for verb in ALL_VERBS.iter() {
            assert!(
                help.contains(verb.token()),
                "help output missing {}: {help}",
                verb.token()
            );
        }
    }

    #[test]
    fn help_has_no_trailing_newline() {
        assert!(!render_help().ends_with('\n'));
    }

    #[test]
    fn banner_points_at_help() {
        assert!(BANNER_LINES
            .iter()
            .any(|line| line.contains("Type 'help'")));
    }
}
