use super::app::SnapViewApp;
use crate::config::save_config;
use eframe::egui;

pub(crate) fn render(app: &mut SnapViewApp, ui: &mut egui::Ui) {
    ui.heading("Settings");
    ui.add_space(4.0);

    let mut changed = false;
    egui::Grid::new("settings-grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Server URL");
            changed |= ui.text_edit_singleline(&mut app.config.server_url).changed();
            ui.end_row();

            ui.label("Camera index");
            changed |= ui
                .add(egui::DragValue::new(&mut app.config.camera_index).range(0..=15))
                .changed();
            ui.end_row();

            ui.label("JPEG quality");
            changed |= ui
                .add(egui::DragValue::new(&mut app.config.jpeg_quality).range(10..=100))
                .changed();
            ui.end_row();
        });

    if changed {
        save_config(&app.config);
    }
}
