use super::app::{AppEvent, SnapViewApp};
use super::utils;
use crate::api;
use crate::camera::{self, CaptureControls};
use eframe::egui;

pub(crate) fn render(app: &mut SnapViewApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    ui.heading("Webcam");
    ui.add_space(4.0);

    let controls = CaptureControls::for_state(app.camera.is_on());
    ui.horizontal(|ui| {
        if ui.button(controls.toggle_label).clicked() {
            if app.camera.is_on() {
                app.camera.stop();
                app.live_texture = None;
            } else {
                app.camera.start(app.config.camera_index);
            }
        }

        if ui
            .add_enabled(controls.snapshot_enabled, egui::Button::new("Take Snapshot"))
            .clicked()
        {
            if let Some(jpeg) = app.camera.snapshot_jpeg(app.config.jpeg_quality) {
                app.webcam_report = None;
                let tx = app.event_tx.clone();
                let ctx = ctx.clone();
                let server = app.config.server_url.clone();
                std::thread::spawn(move || {
                    let result = api::analyze_webcam(&server, &jpeg);
                    let _ = tx.send(AppEvent::WebcamAnalyzed(result));
                    ctx.request_repaint();
                });
            }
        }

        if ui
            .add_enabled(controls.share_enabled, egui::Button::new("Share Snapshot…"))
            .clicked()
        {
            if let Some(jpeg) = app.camera.snapshot_jpeg(app.config.jpeg_quality) {
                app.share.image_url = camera::jpeg_data_url(&jpeg);
                app.share.preview = utils::texture_from_bytes(ctx, "share-preview", &jpeg);
                app.share.caption = format!(
                    "Snapshot {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
                );
                app.share.open = true;
            }
        }
    });

    if let Some(live) = &app.live_texture {
        ui.add_space(8.0);
        ui.add(egui::Image::new(live).max_size(egui::vec2(480.0, 360.0)));
    }

    if let Some(report) = &app.webcam_report {
        ui.add_space(8.0);
        utils::render_report(ui, report);
    }
}
