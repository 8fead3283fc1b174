use chrono::{DateTime, Local};
use hilo_core::GameSession;

// AppState holds the session plus the feedback transcript shown in the game area.
#[derive(Debug, Default)]
pub(crate) struct AppState {
    pub(crate) session: GameSession,
    feedback: Vec<FeedbackEntry>,
}

impl AppState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }

    /// Appends a timestamped feedback line and mirrors it to the log.
    pub(crate) fn push_feedback(&mut self, kind: FeedbackKind, text: impl Into<String>) {
        let text = text.into();
        log::info!("feedback: {}", text.replace('\n', " / "));
        self.feedback.push(FeedbackEntry {
            time: Local::now(),
            kind,
            text,
        });
    }

    pub(crate) fn clear_feedback(&mut self) {
        self.feedback.clear();
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FeedbackEntry {
    pub(crate) time: DateTime<Local>,
    pub(crate) kind: FeedbackKind,
    pub(crate) text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedbackKind {
    Info,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_is_appended_in_order_and_clearable() {
        let mut state = AppState::new();
        state.push_feedback(FeedbackKind::Info, "first");
        state.push_feedback(FeedbackKind::Error, "second");

        let texts: Vec<_> = state.feedback().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(state.feedback()[1].kind, FeedbackKind::Error);

        state.clear_feedback();
        assert!(state.feedback().is_empty());
    }
}
