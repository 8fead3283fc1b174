use eframe::egui::{Color32, Stroke, Visuals};

/// Color palette for one theme.
///
/// This is intentionally independent from `egui::Visuals` so the game's
/// palettes can be stated explicitly and mapped onto visuals in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) bg: Color32,
    pub(crate) fg: Color32,
    pub(crate) accent: Color32,
    pub(crate) secondary: Color32,
    pub(crate) card: Color32,
    pub(crate) field: Color32,
    pub(crate) button: Color32,
    pub(crate) border: Color32,
}

/// The selectable application themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    DarkMode,
    BlueOcean,
    ForestGreen,
    PurplePassion,
    SunsetOrange,
    CyberNeon,
}

impl Theme {
    pub(crate) const ALL: [Theme; 6] = [
        Theme::DarkMode,
        Theme::BlueOcean,
        Theme::ForestGreen,
        Theme::PurplePassion,
        Theme::SunsetOrange,
        Theme::CyberNeon,
    ];

    #[must_use]
    pub(crate) fn name(self) -> &'static str {
        match self {
            Theme::DarkMode => "Dark Mode",
            Theme::BlueOcean => "Blue Ocean",
            Theme::ForestGreen => "Forest Green",
            Theme::PurplePassion => "Purple Passion",
            Theme::SunsetOrange => "Sunset Orange",
            Theme::CyberNeon => "Cyber Neon",
        }
    }

    #[must_use]
    pub(crate) fn palette(self) -> Palette {
        match self {
            Theme::DarkMode => Palette {
                bg: Color32::from_rgb(0x1a, 0x1a, 0x1a),
                fg: Color32::from_rgb(0xff, 0xff, 0xff),
                accent: Color32::from_rgb(0xbb, 0x86, 0xfc),
                secondary: Color32::from_rgb(0x03, 0xda, 0xc6),
                card: Color32::from_rgb(0x2d, 0x2d, 0x2d),
                field: Color32::from_rgb(0x3d, 0x3d, 0x3d),
                button: Color32::from_rgb(0x37, 0x00, 0xb3),
                border: Color32::from_rgb(0x44, 0x44, 0x44),
            },
            Theme::BlueOcean => Palette {
                bg: Color32::from_rgb(0x0f, 0x1a, 0x2a),
                fg: Color32::from_rgb(0xe6, 0xf7, 0xff),
                accent: Color32::from_rgb(0x4f, 0xc3, 0xf7),
                secondary: Color32::from_rgb(0x81, 0xd4, 0xfa),
                card: Color32::from_rgb(0x1e, 0x2a, 0x3a),
                field: Color32::from_rgb(0x2d, 0x3e, 0x50),
                button: Color32::from_rgb(0x02, 0x88, 0xd1),
                border: Color32::from_rgb(0x3d, 0x4e, 0x60),
            },
            Theme::ForestGreen => Palette {
                bg: Color32::from_rgb(0x1b, 0x2e, 0x1b),
                fg: Color32::from_rgb(0xe8, 0xf5, 0xe8),
                accent: Color32::from_rgb(0x4c, 0xaf, 0x50),
                secondary: Color32::from_rgb(0x81, 0xc7, 0x84),
                card: Color32::from_rgb(0x2d, 0x3e, 0x2d),
                field: Color32::from_rgb(0x3d, 0x4e, 0x3d),
                button: Color32::from_rgb(0x2e, 0x7d, 0x32),
                border: Color32::from_rgb(0x4d, 0x5e, 0x4d),
            },
            Theme::PurplePassion => Palette {
                bg: Color32::from_rgb(0x2d, 0x1b, 0x3d),
                fg: Color32::from_rgb(0xf3, 0xe5, 0xf5),
                accent: Color32::from_rgb(0xba, 0x68, 0xc8),
                secondary: Color32::from_rgb(0xce, 0x93, 0xd8),
                card: Color32::from_rgb(0x3d, 0x2b, 0x4d),
                field: Color32::from_rgb(0x4d, 0x3b, 0x5d),
                button: Color32::from_rgb(0x7b, 0x1f, 0xa2),
                border: Color32::from_rgb(0x5d, 0x4b, 0x6d),
            },
            Theme::SunsetOrange => Palette {
                bg: Color32::from_rgb(0x33, 0x22, 0x22),
                fg: Color32::from_rgb(0xff, 0xeb, 0xee),
                accent: Color32::from_rgb(0xff, 0x8a, 0x65),
                secondary: Color32::from_rgb(0xff, 0xab, 0x91),
                card: Color32::from_rgb(0x44, 0x33, 0x33),
                field: Color32::from_rgb(0x55, 0x44, 0x44),
                button: Color32::from_rgb(0xd8, 0x43, 0x15),
                border: Color32::from_rgb(0x66, 0x55, 0x55),
            },
            Theme::CyberNeon => Palette {
                bg: Color32::from_rgb(0x0a, 0x0a, 0x12),
                fg: Color32::from_rgb(0x00, 0xff, 0xcc),
                accent: Color32::from_rgb(0xff, 0x00, 0xff),
                secondary: Color32::from_rgb(0x00, 0xff, 0xff),
                card: Color32::from_rgb(0x15, 0x15, 0x22),
                field: Color32::from_rgb(0x22, 0x22, 0x33),
                button: Color32::from_rgb(0xff, 0x00, 0xff),
                border: Color32::from_rgb(0x33, 0x33, 0x44),
            },
        }
    }

    /// Maps the palette onto `egui::Visuals`, starting from the dark preset.
    #[must_use]
    pub(crate) fn visuals(self) -> Visuals {
        let palette = self.palette();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(palette.fg);
        visuals.panel_fill = palette.bg;
        visuals.window_fill = palette.card;
        visuals.window_stroke = Stroke::new(1.0, palette.border);
        visuals.faint_bg_color = palette.card;
        visuals.extreme_bg_color = palette.field;

        visuals.widgets.noninteractive.bg_fill = palette.card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
        visuals.widgets.inactive.bg_fill = palette.button;
        visuals.widgets.inactive.weak_bg_fill = palette.button;
        visuals.widgets.hovered.bg_fill = palette.accent;
        visuals.widgets.hovered.weak_bg_fill = palette.accent;
        visuals.widgets.active.bg_fill = palette.accent;
        visuals.widgets.active.weak_bg_fill = palette.accent;
        visuals.widgets.open.bg_fill = palette.field;
        visuals.widgets.open.weak_bg_fill = palette.field;

        visuals.selection.bg_fill = palette.accent.gamma_multiply(0.6);
        visuals.selection.stroke = Stroke::new(1.0, palette.secondary);
        visuals.hyperlink_color = palette.secondary;
        visuals.warn_fg_color = palette.secondary;

        visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_are_unique() {
        for (i, a) in Theme::ALL.iter().enumerate() {
            for b in &Theme::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn palettes_differ_between_themes() {
        for (i, a) in Theme::ALL.iter().enumerate() {
            for b in &Theme::ALL[i + 1..] {
                assert_ne!(a.palette(), b.palette());
            }
        }
    }

    #[test]
    fn visuals_use_theme_background() {
        for theme in Theme::ALL {
            assert_eq!(theme.visuals().panel_fill, theme.palette().bg);
        }
    }
}
