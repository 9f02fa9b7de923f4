use super::app::SnapViewApp;
use eframe::egui;

const PLATFORMS: &[(&str, &str)] = &[("Facebook", "facebook"), ("Instagram", "instagram")];

pub(crate) fn render(app: &mut SnapViewApp, ctx: &egui::Context) {
    if !app.share.open {
        return;
    }

    let mut keep_open = true;
    let mut chosen_platform: Option<&'static str> = None;

    egui::Window::new("Share Snapshot")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .open(&mut keep_open)
        .show(ctx, |ui| {
            if let Some(preview) = &app.share.preview {
                ui.add(egui::Image::new(preview).max_size(egui::vec2(320.0, 240.0)));
            }
            ui.add_space(4.0);
            ui.label("Caption");
            ui.text_edit_multiline(&mut app.share.caption);
            ui.add_space(4.0);
            ui.menu_button("Share to…", |ui| {
                for &(label, platform) in PLATFORMS {
                    if ui.button(label).clicked() {
                        chosen_platform = Some(platform);
                        ui.close();
                    }
                }
            });
        });

    if !keep_open {
        app.share.open = false;
    }
    if let Some(platform) = chosen_platform {
        app.dispatch_share(platform, ctx);
    }
}
