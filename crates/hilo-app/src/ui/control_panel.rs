use eframe::egui::{Button, ComboBox, RichText, Ui};
use hilo_core::Phase;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, UiState},
};

/// The range upper bounds offered to the player.
pub(crate) const RANGE_CHOICES: [u32; 7] = [100, 500, 1_000, 5_000, 10_000, 50_000, 100_000];

#[derive(Debug, Clone)]
pub(crate) struct ControlPanelViewModel {
    selected_range: u32,
    attempts: u32,
    range_upper: u32,
    phase: Phase,
}

impl ControlPanelViewModel {
    #[must_use]
    pub(crate) fn new(app_state: &AppState, ui_state: &UiState) -> Self {
        Self {
            selected_range: ui_state.selected_range,
            attempts: app_state.session.attempts(),
            range_upper: app_state.session.range_upper(),
            phase: app_state.session.phase(),
        }
    }

    fn status_text(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Ready",
            Phase::Active => "Active",
            Phase::AwaitingResult => "Guessing...",
        }
    }

    // Restarting mid-round is allowed; only an in-flight guess blocks it.
    fn start_enabled(&self) -> bool {
        !self.phase.is_awaiting_result()
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &ControlPanelViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.group(|ui| {
            ui.label(RichText::new("CONTROL PANEL").strong());
            ui.separator();

            ui.label("Select range (1 to):");
            ComboBox::from_id_salt("range_select")
                .selected_text(vm.selected_range.to_string())
                .show_ui(ui, |ui| {
                    for range_upper in RANGE_CHOICES {
                        if ui
                            .selectable_label(
                                range_upper == vm.selected_range,
                                range_upper.to_string(),
                            )
                            .clicked()
                        {
                            action_queue.request(Action::SelectRange(range_upper));
                        }
                    }
                });
            ui.add_space(8.0);

            let start = ui.add_enabled(
                vm.start_enabled(),
                Button::new("START NEW GAME").min_size((160.0, 0.0).into()),
            );
            if start.clicked() {
                action_queue.request(Action::StartGame);
            }
        });

        ui.add_space(8.0);
        ui.group(|ui| {
            ui.label(RichText::new("GAME STATS").strong());
            ui.separator();
            ui.label(format!("Attempts: {}", vm.attempts));
            ui.label(format!("Range: 1-{}", vm.range_upper));
            ui.label(format!("Status: {}", vm.status_text()));
        });

        ui.add_space(8.0);
        ui.group(|ui| {
            ui.label(RichText::new("QUICK TIPS").strong());
            ui.separator();
            ui.label("• Use binary search strategy");
            ui.label("• Start from the middle");
            ui.label("• Watch the hints carefully");
            ui.label("• Have fun!");
        });
    });
}
