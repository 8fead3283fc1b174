use std::mem;

use hilo_core::{GuessResult, InvalidReason};

use crate::{
    processor::GuessProcessor,
    state::{AppState, FeedbackKind, Notice, UiState},
    ui::Theme,
};

/// User intents produced by the interactive surface, applied once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    SelectRange(u32),
    StartGame,
    SubmitGuess,
    SelectTheme(Theme),
    DismissNotice,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    processor: &GuessProcessor,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, processor, action);
    }
}

pub(crate) fn handle(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    processor: &GuessProcessor,
    action: Action,
) {
    match action {
        Action::SelectRange(range_upper) => ui_state.selected_range = range_upper,
        Action::StartGame => start_game(app_state, ui_state),
        Action::SubmitGuess => submit_guess(app_state, ui_state, processor),
        Action::SelectTheme(theme) => {
            ui_state.theme = theme;
            log::info!("theme changed to {}", theme.name());
        }
        Action::DismissNotice => ui_state.notice = None,
    }
}

fn start_game(app_state: &mut AppState, ui_state: &mut UiState) {
    let range_upper = ui_state.selected_range;
    match app_state.session.start(&mut rand::rng(), range_upper) {
        Ok(()) => {
            app_state.clear_feedback();
            app_state.push_feedback(FeedbackKind::Info, "NEW GAME STARTED!");
            app_state.push_feedback(
                FeedbackKind::Info,
                format!("Guess a number between 1 and {range_upper}"),
            );
            app_state.push_feedback(FeedbackKind::Info, "Use binary search for best results!");
            ui_state.guess_text.clear();
            ui_state.focus_guess = true;
            if let Some(secret) = app_state.session.secret() {
                log::info!("new game started: target={secret}, range=1-{range_upper}");
            }
        }
        Err(err) => {
            log::error!("failed to start game: {err}");
            ui_state.notice = Some(Notice::error(format!("Cannot start a new game: {err}")));
        }
    }
}

fn submit_guess(app_state: &mut AppState, ui_state: &mut UiState, processor: &GuessProcessor) {
    if ui_state.guess_text.trim().is_empty() {
        ui_state.notice = Some(Notice::warning("Please enter a number!"));
        return;
    }

    let raw = mem::take(&mut ui_state.guess_text);
    match app_state.session.submit(raw.trim()) {
        Ok(pending) => {
            if processor.submit(pending).is_err() {
                log::error!("guess processor disconnected, failing the submission");
                let fault = GuessResult::Invalid {
                    reason: InvalidReason::Fault("guess processor unavailable".to_owned()),
                };
                apply_result(app_state, ui_state, &fault);
            }
        }
        Err(err) => {
            log::warn!("guess rejected: {err}");
            ui_state.guess_text = raw;
            ui_state.notice = Some(Notice::warning("Please start a new game first!"));
        }
    }
}

/// Applies a processor result to the session and renders it as feedback.
pub(crate) fn apply_result(app_state: &mut AppState, ui_state: &mut UiState, result: &GuessResult) {
    // The secret is cleared on a win; capture it first for the message.
    let secret = app_state.session.secret();
    app_state.session.apply(result);

    match result {
        GuessResult::Correct { attempts } => {
            let reveal = secret.map_or_else(String::new, |s| format!("\nThe number was {s}."));
            app_state.push_feedback(
                FeedbackKind::Success,
                format!("CONGRATULATIONS! You guessed it!{reveal}\nTotal attempts: {attempts}"),
            );
            log::info!("game ended after {attempts} attempts");
        }
        GuessResult::TooLow { guess, .. } => {
            app_state
                .push_feedback(FeedbackKind::Info, format!("Try a HIGHER number than {guess}"));
        }
        GuessResult::TooHigh { guess, .. } => {
            app_state.push_feedback(FeedbackKind::Info, format!("Try a LOWER number than {guess}"));
        }
        GuessResult::Invalid { reason } => {
            let text = match reason {
                InvalidReason::NotANumber => "Please enter a valid number!".to_owned(),
                InvalidReason::NoActiveGame => {
                    "Game has not been started or the secret is missing.".to_owned()
                }
                InvalidReason::Fault(message) => {
                    format!("An error occurred during processing: {message}")
                }
            };
            app_state.push_feedback(FeedbackKind::Error, text);
        }
    }
    ui_state.focus_guess = true;
}

#[cfg(test)]
mod tests {
    use hilo_core::Phase;

    use super::*;
    use crate::state::NoticeKind;

    fn fixture() -> (AppState, UiState, GuessProcessor) {
        (AppState::new(), UiState::new(), GuessProcessor::spawn())
    }

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::SelectRange(1000));
        queue.request(Action::StartGame);

        let drained = queue.take_all();
        assert_eq!(drained, vec![Action::SelectRange(1000), Action::StartGame]);
        assert!(queue.take_all().is_empty());
    }

    #[test]
    fn start_game_activates_session_and_writes_banner() {
        let (mut app_state, mut ui_state, processor) = fixture();
        ui_state.selected_range = 1000;

        handle(&mut app_state, &mut ui_state, &processor, Action::StartGame);

        assert_eq!(app_state.session.phase(), Phase::Active);
        assert_eq!(app_state.session.range_upper(), 1000);
        assert_eq!(app_state.session.attempts(), 0);
        assert!(
            app_state
                .feedback()
                .iter()
                .any(|entry| entry.text.contains("NEW GAME STARTED"))
        );
        assert!(ui_state.focus_guess);
    }

    #[test]
    fn restart_from_active_round_begins_a_fresh_round() {
        let (mut app_state, mut ui_state, processor) = fixture();
        handle(&mut app_state, &mut ui_state, &processor, Action::StartGame);
        app_state.session.submit("10").unwrap();
        apply_result(
            &mut app_state,
            &mut ui_state,
            &GuessResult::TooLow {
                guess: 10,
                attempts: 1,
            },
        );
        assert_eq!(app_state.session.attempts(), 1);

        // The player gives up mid-round and starts over with a wider range.
        ui_state.selected_range = 1000;
        handle(&mut app_state, &mut ui_state, &processor, Action::StartGame);

        assert_eq!(app_state.session.phase(), Phase::Active);
        assert_eq!(app_state.session.range_upper(), 1000);
        assert_eq!(app_state.session.attempts(), 0);
        assert!(ui_state.notice.is_none());
        assert!(
            app_state
                .feedback()
                .iter()
                .any(|entry| entry.text.contains("between 1 and 1000"))
        );
    }

    #[test]
    fn invalid_range_raises_error_notice_without_starting() {
        let (mut app_state, mut ui_state, processor) = fixture();
        ui_state.selected_range = 0;

        handle(&mut app_state, &mut ui_state, &processor, Action::StartGame);

        assert_eq!(app_state.session.phase(), Phase::Idle);
        let notice = ui_state.notice.expect("blocking notice");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn empty_guess_raises_warning_notice() {
        let (mut app_state, mut ui_state, processor) = fixture();
        handle(&mut app_state, &mut ui_state, &processor, Action::StartGame);

        ui_state.guess_text = "   ".to_owned();
        handle(&mut app_state, &mut ui_state, &processor, Action::SubmitGuess);

        let notice = ui_state.notice.expect("blocking notice");
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(app_state.session.phase(), Phase::Active);
    }

    #[test]
    fn guess_without_active_game_raises_warning_notice() {
        let (mut app_state, mut ui_state, processor) = fixture();

        ui_state.guess_text = "10".to_owned();
        handle(&mut app_state, &mut ui_state, &processor, Action::SubmitGuess);

        let notice = ui_state.notice.expect("blocking notice");
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(ui_state.guess_text, "10");
    }

    #[test]
    fn submitted_guess_moves_session_to_awaiting() {
        let (mut app_state, mut ui_state, processor) = fixture();
        handle(&mut app_state, &mut ui_state, &processor, Action::StartGame);

        ui_state.guess_text = "250".to_owned();
        handle(&mut app_state, &mut ui_state, &processor, Action::SubmitGuess);

        assert_eq!(app_state.session.phase(), Phase::AwaitingResult);
        assert!(ui_state.guess_text.is_empty());
    }

    #[test]
    fn correct_result_ends_round_with_congratulations() {
        let (mut app_state, mut ui_state, processor) = fixture();
        handle(&mut app_state, &mut ui_state, &processor, Action::StartGame);
        let secret = app_state.session.secret().unwrap();
        app_state.session.submit(&secret.to_string()).unwrap();

        apply_result(
            &mut app_state,
            &mut ui_state,
            &GuessResult::Correct { attempts: 1 },
        );

        assert_eq!(app_state.session.phase(), Phase::Idle);
        assert_eq!(app_state.session.attempts(), 1);
        let last = app_state.feedback().last().unwrap();
        assert_eq!(last.kind, FeedbackKind::Success);
        assert!(last.text.contains("CONGRATULATIONS"));
        assert!(last.text.contains(&secret.to_string()));
    }

    #[test]
    fn hint_results_keep_round_active() {
        let (mut app_state, mut ui_state, processor) = fixture();
        handle(&mut app_state, &mut ui_state, &processor, Action::StartGame);
        app_state.session.submit("10").unwrap();

        apply_result(
            &mut app_state,
            &mut ui_state,
            &GuessResult::TooLow {
                guess: 10,
                attempts: 1,
            },
        );

        assert_eq!(app_state.session.phase(), Phase::Active);
        assert_eq!(app_state.session.attempts(), 1);
        let last = app_state.feedback().last().unwrap();
        assert!(last.text.contains("HIGHER"));
    }

    #[test]
    fn invalid_result_shows_error_without_counting() {
        let (mut app_state, mut ui_state, processor) = fixture();
        handle(&mut app_state, &mut ui_state, &processor, Action::StartGame);
        app_state.session.submit("abc").unwrap();

        apply_result(
            &mut app_state,
            &mut ui_state,
            &GuessResult::Invalid {
                reason: InvalidReason::NotANumber,
            },
        );

        assert_eq!(app_state.session.phase(), Phase::Active);
        assert_eq!(app_state.session.attempts(), 0);
        let last = app_state.feedback().last().unwrap();
        assert_eq!(last.kind, FeedbackKind::Error);
    }
}
