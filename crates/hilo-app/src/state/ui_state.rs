use hilo_core::DEFAULT_RANGE_UPPER;

use crate::ui::Theme;

// UiState holds ephemeral UI-only state (input text, notices, theme). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) guess_text: String,
    pub(crate) selected_range: u32,
    pub(crate) theme: Theme,
    pub(crate) notice: Option<Notice>,
    pub(crate) focus_guess: bool,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            guess_text: String::new(),
            selected_range: DEFAULT_RANGE_UPPER,
            theme: Theme::DarkMode,
            notice: None,
            focus_guess: false,
        }
    }
}

/// A blocking notification shown over the game until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) kind: NoticeKind,
    pub(crate) text: String,
}

impl Notice {
    #[must_use]
    pub(crate) fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }

    #[must_use]
    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Warning,
    Error,
}
