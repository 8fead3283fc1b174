use eframe::egui::{ComboBox, RichText, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::Theme,
};

pub(crate) fn show(ui: &mut Ui, theme: Theme, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("NUMBER GUESSING MASTER").heading().strong());

        ui.with_layout(
            eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
            |ui| {
                ComboBox::from_id_salt("theme_select")
                    .selected_text(theme.name())
                    .show_ui(ui, |ui| {
                        for candidate in Theme::ALL {
                            if ui
                                .selectable_label(candidate == theme, candidate.name())
                                .clicked()
                            {
                                action_queue.request(Action::SelectTheme(candidate));
                            }
                        }
                    });
                ui.label("Theme:");
            },
        );
    });
}
