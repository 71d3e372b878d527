// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: egui window hosting a Sill shell session.
// Author: Lukas Bower

//! egui window hosting a shell session.
//!
//! The window owns no shell state of its own: every frame reads the session
//! and paints it, and every interaction (Enter, Execute, arrow keys, Ctrl+L,
//! the close button) is routed into a session method. Closing the window
//! goes through the same confirmation phase as the `exit` command.

use eframe::egui;
use sill_core::{Severity, EXIT_PROMPT};

use crate::fs::HostFs;
use crate::session::{SessionPhase, ShellSession};

const PROMPT_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 255, 150);

/// Map a record severity onto its display color.
#[must_use]
pub fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Info => egui::Color32::from_rgb(110, 180, 255),
        Severity::Success => egui::Color32::from_rgb(120, 220, 120),
        Severity::Warning => egui::Color32::from_rgb(235, 200, 90),
        Severity::Error => egui::Color32::from_rgb(240, 110, 110),
    }
}

/// Desktop window wrapping a [`ShellSession`] over the host filesystem.
pub struct SillApp {
    session: ShellSession<HostFs>,
    input_id: egui::Id,
}

impl SillApp {
    /// Build the app and apply the dark theme.
    pub fn new(cc: &eframe::CreationContext<'_>, session: ShellSession<HostFs>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            session,
            input_id: egui::Id::new("command-input"),
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Arrow recall only applies while the input line is being edited;
        // keys are consumed before the text widget sees them.
        if ctx.memory(|m| m.has_focus(self.input_id)) {
            if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp)) {
                self.session.recall_older();
            }
            if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown)) {
                self.session.recall_newer();
            }
        }
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::CTRL, egui::Key::L)) {
            self.session.clear_output();
        }
    }

    fn input_row(&mut self, ctx: &egui::Context) {
        let active = self.session.phase() == SessionPhase::Active;
        egui::TopBottomPanel::top("input-panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(self.session.prompt())
                        .monospace()
                        .color(PROMPT_COLOR),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let execute_clicked =
                        ui.add_enabled(active, egui::Button::new("Execute")).clicked();
                    let response = ui.add_enabled(
                        active,
                        egui::TextEdit::singleline(self.session.input_mut())
                            .id(self.input_id)
                            .font(egui::TextStyle::Monospace)
                            .hint_text("type a command")
                            .desired_width(ui.available_width()),
                    );
                    let entered =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if active && (execute_clicked || entered) {
                        self.session.submit();
                        response.request_focus();
                    }
                    if active && ctx.memory(|m| m.focused().is_none()) {
                        response.request_focus();
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn scrollback(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for record in self.session.records() {
                        ui.label(
                            egui::RichText::new(&record.text)
                                .monospace()
                                .color(severity_color(record.severity)),
                        );
                    }
                });
        });
    }

    fn exit_dialog(&mut self, ctx: &egui::Context) {
        if self.session.phase() != SessionPhase::ConfirmingExit {
            return;
        }
        egui::Window::new("Exit")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(EXIT_PROMPT);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        self.session.confirm_exit(true);
                    }
                    if ui.button("No").clicked() {
                        self.session.confirm_exit(false);
                    }
                });
            });
    }
}

impl eframe::App for SillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The native close button asks the session first; the close goes
        // through once the session has terminated.
        if ctx.input(|i| i.viewport().close_requested())
            && self.session.phase() != SessionPhase::Terminated
        {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.session.request_exit();
        }

        self.handle_keys(ctx);
        self.input_row(ctx);
        self.scrollback(ctx);
        self.exit_dialog(ctx);

        if self.session.phase() == SessionPhase::Terminated {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            severity_color(Severity::Info),
            severity_color(Severity::Success),
            severity_color(Severity::Warning),
            severity_color(Severity::Error),
        ];
        for (index, color) in colors.iter().enumerate() {
            assert_eq!(
                colors.iter().filter(|candidate| *candidate == color).count(),
                1,
                "severity color {index} is reused"
            );
        }
    }
}
