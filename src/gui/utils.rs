use crate::report::{PersonView, Report};
use eframe::egui;

/// Decode arbitrary image bytes into a texture. Decode failure is logged
/// and yields no texture; callers treat that as "no preview".
pub(crate) fn texture_from_bytes(
    ctx: &egui::Context,
    name: &str,
    bytes: &[u8],
) -> Option<egui::TextureHandle> {
    match image::load_from_memory(bytes) {
        Ok(decoded) => {
            let rgba = decoded.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let img = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            Some(ctx.load_texture(name, img, egui::TextureOptions::LINEAR))
        }
        Err(e) => {
            log::error!("failed to decode image for {}: {}", name, e);
            None
        }
    }
}

pub(crate) fn alert(title: &str, message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .show();
}

pub(crate) fn alert_error(title: &str, message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .show();
}

/// Person and scene panels, shared by the upload and webcam flows.
pub(crate) fn render_report(ui: &mut egui::Ui, report: &Report) {
    match &report.person {
        PersonView::Face {
            description,
            skin_tone,
            hair,
            eye_color,
            confidence,
        } => {
            ui.strong("Person Details");
            ui.label(format!("Description: {}", description));
            ui.label(format!("Skin Tone: {}", skin_tone));
            ui.label(format!("Hair: {}", hair));
            ui.label(format!("Eye Color: {}", eye_color));
            ui.label(format!("Confidence: {}", confidence));
        }
        PersonView::NoFaces => {
            ui.label("No faces detected");
        }
        PersonView::Failed(message) => {
            // Request failed outright; only the error line is shown.
            ui.label(message);
            return;
        }
    }

    ui.add_space(8.0);
    ui.strong("Scene Analysis");
    match &report.scene {
        Some(scene) => {
            ui.label(format!("Description: {}", scene.description));
            ui.label(format!("Lighting: {}", scene.lighting));
            ui.label(format!("Scene Type: {}", scene.scene_type));
            ui.label(format!("Timestamp: {}", scene.timestamp));
        }
        None => {
            ui.label("Unable to analyze scene");
        }
    }
}
