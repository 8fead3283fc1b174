use std::mem;

use eframe::egui::{Button, Key, RichText, ScrollArea, Spinner, TextEdit, Ui};
use egui_extras::{Size, StripBuilder};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{FeedbackEntry, FeedbackKind, UiState},
};

#[derive(Debug, Clone)]
pub(crate) struct GamePanelViewModel<'a> {
    pub(crate) input_enabled: bool,
    pub(crate) guessing: bool,
    pub(crate) feedback: &'a [FeedbackEntry],
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GamePanelViewModel<'_>,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    StripBuilder::new(ui)
        .size(Size::exact(64.0))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                show_input_row(ui, vm, ui_state, action_queue);
            });
            strip.cell(|ui| {
                show_feedback(ui, vm.feedback);
            });
        });
}

fn show_input_row(
    ui: &mut Ui,
    vm: &GamePanelViewModel<'_>,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    ui.label(RichText::new("ENTER YOUR GUESS:").strong());
    ui.horizontal(|ui| {
        let edit = ui.add_enabled(
            vm.input_enabled,
            TextEdit::singleline(&mut ui_state.guess_text)
                .hint_text("e.g. 250")
                .desired_width(180.0),
        );
        if mem::take(&mut ui_state.focus_guess) && vm.input_enabled {
            edit.request_focus();
        }
        let enter_pressed = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        let submit = ui.add_enabled(vm.input_enabled, Button::new("SUBMIT GUESS"));
        if vm.input_enabled && (submit.clicked() || enter_pressed) {
            action_queue.request(Action::SubmitGuess);
        }

        if vm.guessing {
            ui.add(Spinner::new());
            ui.label("Checking...");
        }
    });
}

fn show_feedback(ui: &mut Ui, feedback: &[FeedbackEntry]) {
    ui.group(|ui| {
        ui.label(RichText::new("GAME FEEDBACK").strong());
        ui.separator();
        ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entry in feedback {
                    let color = match entry.kind {
                        FeedbackKind::Info => ui.visuals().text_color(),
                        FeedbackKind::Success => ui.visuals().warn_fg_color,
                        FeedbackKind::Error => ui.visuals().error_fg_color,
                    };
                    let line =
                        format!("[{}] {}", entry.time.format("%H:%M:%S"), entry.text);
                    ui.label(RichText::new(line).color(color).monospace());
                    ui.add_space(4.0);
                }
            });
    });
}
