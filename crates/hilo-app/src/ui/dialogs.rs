use eframe::egui::{Context, Id, Modal, Sides};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{Notice, NoticeKind},
};

/// Shows a blocking notice dialog; dismissal is routed through the action queue.
pub(crate) fn show_notice(ctx: &Context, notice: &Notice, action_queue: &mut ActionRequestQueue) {
    let heading = match notice.kind {
        NoticeKind::Warning => "Warning",
        NoticeKind::Error => "Error",
    };

    let modal = Modal::new(Id::new("notice_dialog")).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);
        ui.label(&notice.text);
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                if ui.button("OK").clicked() {
                    action_queue.request(Action::DismissNotice);
                }
            },
        );
    });

    if modal.should_close() {
        action_queue.request(Action::DismissNotice);
    }
}
