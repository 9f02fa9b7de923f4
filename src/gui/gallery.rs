use super::app::SnapViewApp;
use crate::api;
use eframe::egui;

pub(crate) fn render(app: &mut SnapViewApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    ui.horizontal(|ui| {
        ui.heading("Gallery");
        if ui.button("Refresh").clicked() {
            app.reload_gallery(ctx);
        }
    });
    ui.add_space(8.0);

    if app.gallery.is_empty() {
        ui.label("No snapshots yet.");
        return;
    }

    // One card per record, in the order the server returned them.
    for card in &app.gallery {
        ui.group(|ui| {
            if let Some(thumbnail) = &card.thumbnail {
                ui.add(egui::Image::new(thumbnail).max_size(egui::vec2(240.0, 180.0)));
            }
            ui.label(format!("Taken: {}", card.record.timestamp));
            ui.horizontal(|ui| {
                ui.small(&card.record.url);
                if ui.small_button("Open").clicked() {
                    let target = api::resolve_url(&app.config.server_url, &card.record.url);
                    if let Err(e) = open::that(&target) {
                        log::warn!("failed to open {}: {}", target, e);
                    }
                }
            });
        });
        ui.add_space(6.0);
    }
}
