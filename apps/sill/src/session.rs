// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Shell session engine dispatching commands over a filesystem adapter.
// Author: Lukas Bower

//! Shell session engine.
//!
//! A [`ShellSession`] owns everything a window needs to drive: the working
//! directory, the editable input line, the command history, the scrollback,
//! and the lifecycle phase. Handlers run synchronously inside the caller's
//! event handling; every failure is recovered into an output record.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use sill_core::{
    parse_line, rejoin_tokens, render_help, Command, History, OutputRecord, ParseError, Recall,
    Scrollback, Severity, BANNER_LINES,
};

use crate::fs::{Filesystem, FsError};

/// Lifecycle phase of a shell session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionPhase {
    /// Accepting and dispatching commands.
    Active,
    /// Waiting for the exit confirmation answer.
    ConfirmingExit,
    /// Finished; the host should close the window.
    Terminated,
}

/// Interactive shell session over a filesystem adapter.
pub struct ShellSession<F: Filesystem> {
    fs: F,
    cwd: PathBuf,
    input: String,
    history: History,
    scrollback: Scrollback,
    phase: SessionPhase,
}

impl<F: Filesystem> ShellSession<F> {
    /// Start a session rooted at `start_dir` and emit the startup banner.
    pub fn new(fs: F, start_dir: impl AsRef<Path>) -> Result<Self, FsError> {
        let cwd = fs.resolve_dir(start_dir.as_ref())?;
        debug!("session rooted at {}", cwd.display());
        let mut session = Self {
            fs,
            cwd,
            input: String::new(),
            history: History::new(),
            scrollback: Scrollback::new(),
            phase: SessionPhase::Active,
        };
        for line in BANNER_LINES {
            session.scrollback.push(Severity::Success, *line);
        }
        Ok(session)
    }

    /// Current input line.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Mutable input line, edited in place by the text widget.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Scrollback records in append order.
    #[must_use]
    pub fn records(&self) -> &[OutputRecord] {
        self.scrollback.records()
    }

    /// Current working directory.
    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Submitted command history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Prompt shown ahead of the input line.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{}> ", self.cwd.display())
    }

    /// Submit the current input line.
    ///
    /// Whitespace-only input is a no-op. Otherwise the line is echoed to the
    /// scrollback, parsed, and dispatched; afterwards the input is cleared
    /// and the re-joined line is recorded in history with the recall cursor
    /// back at the bottom. Unknown commands and usage errors are recorded in
    /// history too.
    pub fn submit(&mut self) {
        if self.phase != SessionPhase::Active {
            return;
        }
        let line = rejoin_tokens(&self.input);
        if line.is_empty() {
            return;
        }
        self.scrollback
            .push(Severity::Info, format!("{}{line}", self.prompt()));
        match parse_line(&line) {
            Ok(command) => self.dispatch(command),
            Err(err) => {
                let severity = match err {
                    ParseError::MissingArgument { .. } => Severity::Warning,
                    _ => Severity::Error,
                };
                self.scrollback.push(severity, err.to_string());
            }
        }
        self.input.clear();
        self.history.record(line);
    }

    /// Replace the input line with the next older history entry.
    pub fn recall_older(&mut self) {
        match self.history.recall_older() {
            Recall::Line(line) => self.input = line,
            Recall::Clear => self.input.clear(),
        }
    }

    /// Replace the input line with the next newer history entry.
    pub fn recall_newer(&mut self) {
        match self.history.recall_newer() {
            Recall::Line(line) => self.input = line,
            Recall::Clear => self.input.clear(),
        }
    }

    /// Empty the scrollback; history and working directory are unaffected.
    pub fn clear_output(&mut self) {
        self.scrollback.clear();
    }

    /// Ask for exit confirmation (`exit` command or window-close request).
    pub fn request_exit(&mut self) {
        if self.phase == SessionPhase::Active {
            self.phase = SessionPhase::ConfirmingExit;
        }
    }

    /// Answer the pending exit confirmation.
    ///
    /// Declining returns the session to [`SessionPhase::Active`] with no
    /// other state change.
    pub fn confirm_exit(&mut self, confirmed: bool) {
        if self.phase != SessionPhase::ConfirmingExit {
            return;
        }
        self.phase = if confirmed {
            SessionPhase::Terminated
        } else {
            SessionPhase::Active
        };
    }

    fn dispatch(&mut self, command: Command) {
        debug!("dispatching {:?}", command.verb());
        match command {
            Command::Ls { all } => self.cmd_ls(all),
            Command::Cd { path } => self.cmd_cd(&path),
            Command::Touch { name } => self.cmd_touch(&name),
            Command::Pwd => self.cmd_pwd(),
            Command::Cat { name } => self.cmd_cat(&name),
            Command::Echo { message } => self.cmd_echo(message),
            Command::Help => self.cmd_help(),
            Command::Exit => self.request_exit(),
        }
    }

    fn cmd_ls(&mut self, all: bool) {
        match self.fs.list_dir(&self.cwd) {
            Ok(mut names) => {
                if !all {
                    names.retain(|name| !name.starts_with('.'));
                }
                names.sort();
                self.scrollback.push(Severity::Info, names.join("\n"));
            }
            Err(err) => {
                warn!("ls failed in {}: {err}", self.cwd.display());
                self.scrollback
                    .push(Severity::Error, format!("Error listing directory: {err}"));
            }
        }
    }

    fn cmd_cd(&mut self, path: &str) {
        match self.fs.resolve_dir(&self.cwd.join(path)) {
            Ok(resolved) => {
                self.cwd = resolved;
                self.scrollback.push(
                    Severity::Info,
                    format!("Changed directory to {}", self.cwd.display()),
                );
            }
            Err(err) if err.is_not_found() => {
                self.scrollback.push(Severity::Error, "Directory not found!");
            }
            Err(err) if err.is_not_a_directory() => {
                self.scrollback
                    .push(Severity::Error, format!("{path} is not a directory!"));
            }
            Err(err) => {
                warn!("cd {path} failed: {err}");
                self.scrollback
                    .push(Severity::Error, format!("Error changing directory: {err}"));
            }
        }
    }

    fn cmd_touch(&mut self, name: &str) {
        let target = self.cwd.join(name);
        match self.fs.create_file(&target) {
            Ok(()) => {
                self.scrollback
                    .push(Severity::Info, format!("File '{name}' created."));
            }
            Err(err) => {
                warn!("touch {} failed: {err}", target.display());
                self.scrollback
                    .push(Severity::Error, format!("Error creating file: {err}"));
            }
        }
    }

    fn cmd_pwd(&mut self) {
        self.scrollback
            .push(Severity::Info, self.cwd.display().to_string());
    }

    fn cmd_cat(&mut self, name: &str) {
        match self.fs.read_file(&self.cwd.join(name)) {
            Ok(contents) => self.scrollback.push(Severity::Info, contents),
            Err(err) if err.is_not_found() => {
                self.scrollback
                    .push(Severity::Error, format!("{name} not found!"));
            }
            Err(err) => {
                warn!("cat {name} failed: {err}");
                self.scrollback
                    .push(Severity::Error, format!("Error reading file: {err}"));
            }
        }
    }

    fn cmd_echo(&mut self, message: String) {
        self.scrollback.push(Severity::Success, message);
    }

    fn cmd_help(&mut self) {
        self.scrollback.push(Severity::Info, render_help());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemFs;

    fn session() -> ShellSession<MemFs> {
        let fs = MemFs::new()
            .with_file("/home/.hidden", "")
            .with_file("/home/a", "")
            .with_file("/home/b", "");
        ShellSession::new(fs, "/home").unwrap()
    }

    fn last_record(session: &ShellSession<MemFs>) -> &OutputRecord {
        session.records().last().expect("no records")
    }

    #[test]
    fn banner_is_emitted_on_start() {
        let session = session();
        assert_eq!(session.records().len(), BANNER_LINES.len());
        assert!(session.records()[0].text.contains("Welcome"));
        assert_eq!(session.records()[0].severity, Severity::Success);
    }

    #[test]
    fn whitespace_submit_is_a_no_op() {
        let mut session = session();
        let records_before = session.records().len();
        *session.input_mut() = "   \t ".to_owned();
        session.submit();
        assert_eq!(session.records().len(), records_before);
        assert!(session.history().is_empty());
    }

    #[test]
    fn ls_filters_dot_entries_unless_all() {
        let mut session = session();
        *session.input_mut() = "ls".to_owned();
        session.submit();
        assert_eq!(last_record(&session).text, "a\nb");

        *session.input_mut() = "ls -a".to_owned();
        session.submit();
        assert_eq!(last_record(&session).text, ".hidden\na\nb");
    }

    #[test]
    fn submitted_lines_are_echoed_with_prompt() {
        let mut session = session();
        *session.input_mut() = "  pwd  ".to_owned();
        session.submit();
        let records = session.records();
        let echo = &records[records.len() - 2];
        assert_eq!(echo.text, "/home> pwd");
        assert_eq!(echo.severity, Severity::Info);
    }

    #[test]
    fn exit_asks_for_confirmation_before_terminating() {
        let mut session = session();
        *session.input_mut() = "exit".to_owned();
        session.submit();
        assert_eq!(session.phase(), SessionPhase::ConfirmingExit);
        assert_eq!(session.history().entries(), ["exit"]);

        session.confirm_exit(false);
        assert_eq!(session.phase(), SessionPhase::Active);

        session.request_exit();
        session.confirm_exit(true);
        assert_eq!(session.phase(), SessionPhase::Terminated);
    }

    #[test]
    fn submit_is_ignored_while_confirming_exit() {
        let mut session = session();
        session.request_exit();
        *session.input_mut() = "pwd".to_owned();
        session.submit();
        assert_eq!(session.input(), "pwd");
        assert!(session.history().is_empty());
    }

    #[test]
    fn clear_output_keeps_history() {
        let mut session = session();
        *session.input_mut() = "pwd".to_owned();
        session.submit();
        session.clear_output();
        assert!(session.records().is_empty());
        assert_eq!(session.history().len(), 1);
    }
}
