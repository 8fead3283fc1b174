pub(crate) use self::theme::Theme;

pub(crate) mod control_panel;
pub(crate) mod dialogs;
pub(crate) mod game_panel;
pub(crate) mod theme;
pub(crate) mod top_bar;
