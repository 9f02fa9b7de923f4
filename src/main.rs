mod api;
mod camera;
mod config;
mod gui;
mod report;

use config::ThemeMode;

pub const WINDOW_WIDTH: f32 = 980.0;
pub const WINDOW_HEIGHT: f32 = 760.0;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let initial_config = config::load_config();
    log::info!("using analysis server at {}", initial_config.server_url);

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_resizable(true);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "SnapView",
        options,
        Box::new(move |cc| {
            match initial_config.theme_mode {
                ThemeMode::Dark => cc.egui_ctx.set_visuals(eframe::egui::Visuals::dark()),
                ThemeMode::Light => cc.egui_ctx.set_visuals(eframe::egui::Visuals::light()),
                ThemeMode::System => {}
            }
            Ok(Box::new(gui::SnapViewApp::new(initial_config)))
        }),
    )
}
