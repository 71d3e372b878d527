// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Command history buffer with cursor-based recall for Sill.
// Author: Lukas Bower

//! Command history buffer with cursor-based recall.
//!
//! The buffer is append-only; navigation moves a read cursor without ever
//! mutating stored entries. The cursor ranges over `[0, len]`, where `len`
//! is the "bottom" sentinel meaning a fresh empty input line. Every new
//! submission resets the cursor to the bottom.

/// Effect of a history navigation request on the input line.
///
/// Navigation that cannot recall an entry clears the input line instead;
/// the cursor only moves for valid recalls and for the step from the
/// newest entry back down to the bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall {
    /// Replace the input line with the recalled entry.
    Line(String),
    /// Clear the input line.
    Clear,
}

/// Append-only history of submitted command lines with a recall cursor.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Create an empty history with the cursor at the bottom.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded entries in submission order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append a submitted line and reset the cursor to the bottom.
    ///
    /// Duplicates are appended as-is; the buffer preserves exactly what was
    /// submitted, in order.
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Move the cursor one entry older.
    ///
    /// At the oldest entry the cursor stays pinned and the input line is
    /// cleared.
    pub fn recall_older(&mut self) -> Recall {
        if self.cursor > 0 {
            self.cursor -= 1;
            Recall::Line(self.entries[self.cursor].clone())
        } else {
            Recall::Clear
        }
    }

    /// Move the cursor one entry newer.
    ///
    /// Moving past the newest entry returns the cursor to the bottom and
    /// clears the input line; further requests at the bottom keep clearing
    /// it without moving the cursor.
    pub fn recall_newer(&mut self) -> Recall {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            Recall::Line(self.entries[self.cursor].clone())
        } else {
            self.cursor = self.entries.len();
            Recall::Clear
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> History {
        let mut history = History::new();
        history.record("pwd");
        history.record("ls");
        history.record("echo hi");
        history
    }

    #[test]
    fn recall_walks_back_through_submissions() {
        let mut history = seeded();
        assert_eq!(history.recall_older(), Recall::Line("echo hi".to_owned()));
        assert_eq!(history.recall_older(), Recall::Line("ls".to_owned()));
        assert_eq!(history.recall_older(), Recall::Line("pwd".to_owned()));
    }

    #[test]
    fn older_at_oldest_clears_without_moving() {
        let mut history = seeded();
        for _ in 0..3 {
            history.recall_older();
        }
        assert_eq!(history.recall_older(), Recall::Clear);
        // Cursor stays pinned at the oldest entry: one step newer is `ls`.
        assert_eq!(history.recall_newer(), Recall::Line("ls".to_owned()));
    }

    #[test]
    fn newer_past_newest_returns_to_bottom() {
        let mut history = seeded();
        history.recall_older();
        assert_eq!(history.recall_newer(), Recall::Clear);
        // At the bottom the next older request recalls the newest entry again.
        assert_eq!(history.recall_older(), Recall::Line("echo hi".to_owned()));
    }

    #[test]
    fn newer_at_bottom_keeps_clearing() {
        let mut history = seeded();
        assert_eq!(history.recall_newer(), Recall::Clear);
        assert_eq!(history.recall_newer(), Recall::Clear);
        assert_eq!(history.recall_older(), Recall::Line("echo hi".to_owned()));
    }

    #[test]
    fn empty_buffer_clears_on_any_navigation() {
        let mut history = History::new();
        assert_eq!(history.recall_older(), Recall::Clear);
        assert_eq!(history.recall_newer(), Recall::Clear);
        assert!(history.is_empty());
    }

    #[test]
    fn record_resets_cursor_to_bottom() {
        let mut history = seeded();
        history.recall_older();
        history.recall_older();
        history.record("cat notes.txt");
        assert_eq!(
            history.recall_older(),
            Recall::Line("cat notes.txt".to_owned())
        );
    }

    #[test]
    fn duplicates_are_recorded_verbatim() {
        let mut history = History::new();
        history.record("pwd");
        history.record("pwd");
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries(), ["pwd", "pwd"]);
    }

    #[test]
    fn navigation_never_mutates_entries() {
        let mut history = seeded();
        for _ in 0..5 {
            history.recall_older();
        }
        for _ in 0..5 {
            history.recall_newer();
        }
        assert_eq!(history.entries(), ["pwd", "ls", "echo hi"]);
    }
}
