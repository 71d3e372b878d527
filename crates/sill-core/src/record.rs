// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Severity-tagged output records and scrollback storage for Sill.
// Author: Lukas Bower

//! Severity-tagged output records and scrollback storage.
//!
//! Severity is semantic, not presentational: the engine tags each record
//! once at append time and the UI layer decides how a tag is rendered. A
//! record's tag never changes after insertion, so appending can never
//! restyle earlier output.

/// Semantic severity of an output record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    /// Routine command output.
    Info,
    /// Positive acknowledgement.
    Success,
    /// Recoverable misuse, e.g. a missing argument.
    Warning,
    /// Failed operation.
    Error,
}

impl Severity {
    /// Stable lowercase label, used in logs and tests.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One rendered line (or block) of shell output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputRecord {
    /// Severity tag fixed at append time.
    pub severity: Severity,
    /// Record text; may span multiple lines (directory listings, file
    /// contents) and may be empty.
    pub text: String,
}

/// Append-only scrollback of output records.
///
/// Grows without bound for the lifetime of a session; the explicit
/// [`Scrollback::clear`] is the only way to drop records and is independent
/// of command history.
#[derive(Clone, Debug, Default)]
pub struct Scrollback {
    records: Vec<OutputRecord>,
}

impl Scrollback {
    /// Create an empty scrollback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record with the given severity.
    pub fn push(&mut self, severity: Severity, text: impl Into<String>) {
        self.records.push(OutputRecord {
            severity,
            text: text.into(),
        });
    }

    /// Records in append order.
    #[must_use]
    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_are_stable() {
        assert_eq!(Severity::Info.label(), "info");
        assert_eq!(Severity::Success.label(), "success");
        assert_eq!(Severity::Warning.label(), "warning");
        assert_eq!(Severity::Error.label(), "error");
    }

    #[test]
    fn push_appends_in_order() {
        let mut scrollback = Scrollback::new();
        scrollback.push(Severity::Info, "one");
        scrollback.push(Severity::Error, "two");
        let texts: Vec<&str> = scrollback
            .records()
            .iter()
            .map(|record| record.text.as_str())
            .collect();
        assert_eq!(texts, ["one", "two"]);
    }

    #[test]
    fn appending_never_restyles_earlier_records() {
        let mut scrollback = Scrollback::new();
        scrollback.push(Severity::Success, "created");
        scrollback.push(Severity::Error, "failed");
        assert_eq!(scrollback.records()[0].severity, Severity::Success);
        assert_eq!(scrollback.records()[1].severity, Severity::Error);
    }

    #[test]
    fn clear_drops_all_records() {
        let mut scrollback = Scrollback::new();
        scrollback.push(Severity::Info, "one");
        scrollback.clear();
        assert!(scrollback.is_empty());
        assert_eq!(scrollback.len(), 0);
    }

    #[test]
    fn empty_text_records_are_kept() {
        let mut scrollback = Scrollback::new();
        scrollback.push(Severity::Info, "");
        assert_eq!(scrollback.len(), 1);
        assert_eq!(scrollback.records()[0].text, "");
    }
}
