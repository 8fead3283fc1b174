//! Application shell wiring the interactive surface to the guess processor.
//!
//! The update loop never blocks on evaluation: a submitted guess goes to the
//! background processor, and while it is in flight the UI repaints on a short
//! cadence and polls the result channel each frame.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, SidePanel, TopBottomPanel},
};
use hilo_core::{GuessResult, InvalidReason};

use crate::{
    action::{self, ActionRequestQueue},
    processor::GuessProcessor,
    state::{AppState, UiState},
    ui,
};

/// How soon to repaint while a guess result is pending.
const RESULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct HiloApp {
    app_state: AppState,
    ui_state: UiState,
    processor: GuessProcessor,
    applied_theme: Option<ui::Theme>,
}

impl HiloApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let app_state = AppState::new();
        let ui_state = UiState::new();
        cc.egui_ctx.set_visuals(ui_state.theme.visuals());
        let applied_theme = Some(ui_state.theme);

        Self {
            app_state,
            ui_state,
            processor: GuessProcessor::spawn(),
            applied_theme,
        }
    }

    fn poll_processor(&mut self) {
        match self.processor.poll() {
            Ok(Some(result)) => {
                action::apply_result(&mut self.app_state, &mut self.ui_state, &result);
            }
            Ok(None) => {}
            Err(err) => {
                // Only fail a round that is actually waiting on the channel.
                if self.app_state.session.phase().is_awaiting_result() {
                    log::error!("{err}");
                    let fault = GuessResult::Invalid {
                        reason: InvalidReason::Fault(err.to_string()),
                    };
                    action::apply_result(&mut self.app_state, &mut self.ui_state, &fault);
                }
            }
        }
    }

    fn apply_theme(&mut self, ctx: &Context) {
        if self.applied_theme != Some(self.ui_state.theme) {
            ctx.set_visuals(self.ui_state.theme.visuals());
            self.applied_theme = Some(self.ui_state.theme);
        }
    }
}

impl App for HiloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.poll_processor();
        self.apply_theme(ctx);

        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui::top_bar::show(ui, self.ui_state.theme, &mut action_queue);
        });

        let control_vm =
            ui::control_panel::ControlPanelViewModel::new(&self.app_state, &self.ui_state);
        SidePanel::left("control_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui::control_panel::show(ui, &control_vm, &mut action_queue);
            });

        let phase = self.app_state.session.phase();
        let game_vm = ui::game_panel::GamePanelViewModel {
            input_enabled: phase.is_active() && self.ui_state.notice.is_none(),
            guessing: phase.is_awaiting_result(),
            feedback: self.app_state.feedback(),
        };
        CentralPanel::default().show(ctx, |ui| {
            ui::game_panel::show(ui, &game_vm, &mut self.ui_state, &mut action_queue);
        });

        if let Some(notice) = self.ui_state.notice.clone() {
            ui::dialogs::show_notice(ctx, &notice, &mut action_queue);
        }

        action::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &self.processor,
            &mut action_queue,
        );

        if self.app_state.session.phase().is_awaiting_result() {
            ctx.request_repaint_after(RESULT_POLL_INTERVAL);
        }
    }
}
