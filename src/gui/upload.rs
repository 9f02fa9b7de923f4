use super::app::{AppEvent, PickedImage, SnapViewApp};
use super::utils;
use crate::api;
use eframe::egui;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

pub(crate) fn render(app: &mut SnapViewApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    ui.heading("Analyze a Photo");
    ui.add_space(4.0);

    if ui.button("Choose Image…").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
        {
            match std::fs::read(&path) {
                Ok(bytes) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "upload".to_string());
                    // A failed preview decode leaves no preview; the pick
                    // itself still counts and can be analyzed.
                    app.upload_preview = utils::texture_from_bytes(ctx, "upload-preview", &bytes);
                    app.upload_report = None;
                    app.picked = Some(PickedImage { name, bytes });
                }
                Err(e) => log::error!("failed to read {}: {}", path.display(), e),
            }
        }
    }

    let mut analyze = false;
    if let Some(picked) = &app.picked {
        ui.add_space(4.0);
        ui.label(&picked.name);
        if let Some(preview) = &app.upload_preview {
            ui.add(egui::Image::new(preview).max_size(egui::vec2(320.0, 240.0)));
        }
        analyze = ui.button("Analyze").clicked();
    }

    if analyze {
        if let Some((name, bytes)) = app.picked.as_ref().map(|p| (p.name.clone(), p.bytes.clone()))
        {
            app.upload_report = None;
            let tx = app.event_tx.clone();
            let ctx = ctx.clone();
            let server = app.config.server_url.clone();
            std::thread::spawn(move || {
                let result = api::analyze_upload(&server, &name, &bytes);
                let _ = tx.send(AppEvent::UploadAnalyzed(result));
                ctx.request_repaint();
            });
        }
    }

    if let Some(report) = &app.upload_report {
        ui.add_space(8.0);
        utils::render_report(ui, report);
    }
}
