use crate::api;
use crate::api::types::{AnalysisResult, SnapshotRecord};
use crate::camera::CameraController;
use crate::config::Config;
use crate::report::Report;
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use super::{gallery, settings, share_modal, upload, utils, webcam};

/// Outcomes delivered from worker threads into the UI loop. Every network
/// call runs on its own spawned thread and reports back through this
/// channel; a second click simply spawns a second, independent worker.
pub(crate) enum AppEvent {
    UploadAnalyzed(anyhow::Result<AnalysisResult>),
    WebcamAnalyzed(anyhow::Result<AnalysisResult>),
    SnapshotsLoaded(anyhow::Result<Vec<SnapshotRecord>>),
    ThumbnailLoaded { index: usize, bytes: Vec<u8> },
    ShareFinished(anyhow::Result<String>),
}

#[derive(Clone, Copy, PartialEq)]
pub(crate) enum Tab {
    Capture,
    Gallery,
    Settings,
}

pub(crate) struct PickedImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub(crate) struct ShareDialog {
    pub open: bool,
    pub caption: String,
    /// JPEG data URL of the captured frame, sent verbatim to `/share`.
    pub image_url: String,
    pub preview: Option<egui::TextureHandle>,
}

pub(crate) struct GalleryCard {
    pub record: SnapshotRecord,
    pub thumbnail: Option<egui::TextureHandle>,
}

pub struct SnapViewApp {
    pub(crate) config: Config,
    pub(crate) tab: Tab,
    pub(crate) event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,

    // Upload flow
    pub(crate) picked: Option<PickedImage>,
    pub(crate) upload_preview: Option<egui::TextureHandle>,
    pub(crate) upload_report: Option<Report>,

    // Webcam flow
    pub(crate) camera: CameraController,
    pub(crate) live_texture: Option<egui::TextureHandle>,
    pub(crate) webcam_report: Option<Report>,

    // Share flow
    pub(crate) share: ShareDialog,

    // Gallery
    pub(crate) gallery: Vec<GalleryCard>,
}

impl SnapViewApp {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = channel();
        Self {
            config,
            tab: Tab::Capture,
            event_tx,
            event_rx,
            picked: None,
            upload_preview: None,
            upload_report: None,
            camera: CameraController::new(),
            live_texture: None,
            webcam_report: None,
            share: ShareDialog::default(),
            gallery: Vec::new(),
        }
    }

    pub(crate) fn reload_gallery(&self, ctx: &egui::Context) {
        let tx = self.event_tx.clone();
        let ctx = ctx.clone();
        let server = self.config.server_url.clone();
        std::thread::spawn(move || {
            let result = api::fetch_snapshots(&server);
            let _ = tx.send(AppEvent::SnapshotsLoaded(result));
            ctx.request_repaint();
        });
    }

    pub(crate) fn dispatch_share(&self, platform: &str, ctx: &egui::Context) {
        let tx = self.event_tx.clone();
        let ctx = ctx.clone();
        let server = self.config.server_url.clone();
        let platform = platform.to_string();
        let image_url = self.share.image_url.clone();
        let caption = self.share.caption.clone();
        std::thread::spawn(move || {
            let result = api::share_snapshot(&server, &platform, &image_url, &caption);
            let _ = tx.send(AppEvent::ShareFinished(result));
            ctx.request_repaint();
        });
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::UploadAnalyzed(Ok(result)) => {
                    self.upload_report = Some(Report::from_result(&result));
                }
                AppEvent::UploadAnalyzed(Err(e)) => {
                    log::error!("Error: {}", e);
                    self.upload_report = Some(Report::failure("Error analyzing image"));
                }
                AppEvent::WebcamAnalyzed(Ok(result)) => {
                    self.webcam_report = Some(Report::from_result(&result));
                }
                AppEvent::WebcamAnalyzed(Err(e)) => {
                    log::error!("Error: {}", e);
                    self.webcam_report = Some(Report::failure("Error analyzing snapshot"));
                }
                AppEvent::SnapshotsLoaded(Ok(records)) => {
                    // Clear and repopulate; order is the server's.
                    self.gallery = records
                        .into_iter()
                        .map(|record| GalleryCard {
                            record,
                            thumbnail: None,
                        })
                        .collect();
                    self.spawn_thumbnail_fetches(ctx);
                }
                AppEvent::SnapshotsLoaded(Err(e)) => {
                    // Gallery keeps whatever it already shows.
                    log::error!("Error loading gallery: {}", e);
                }
                AppEvent::ThumbnailLoaded { index, bytes } => {
                    if let Some(card) = self.gallery.get_mut(index) {
                        card.thumbnail =
                            utils::texture_from_bytes(ctx, &format!("gallery-thumb-{}", index), &bytes);
                    }
                }
                AppEvent::ShareFinished(Ok(message)) => {
                    self.share.open = false;
                    utils::alert("Share", &message);
                }
                AppEvent::ShareFinished(Err(e)) => {
                    // Dialog stays open so the user can retry.
                    utils::alert_error("Share failed", &format!("Failed to share: {}", e));
                }
            }
        }
    }

    fn spawn_thumbnail_fetches(&self, ctx: &egui::Context) {
        for (index, card) in self.gallery.iter().enumerate() {
            let url = api::resolve_url(&self.config.server_url, &card.record.url);
            let tx = self.event_tx.clone();
            let ctx = ctx.clone();
            std::thread::spawn(move || match api::fetch_image(&url) {
                Ok(bytes) => {
                    let _ = tx.send(AppEvent::ThumbnailLoaded { index, bytes });
                    ctx.request_repaint();
                }
                Err(e) => log::warn!("thumbnail fetch failed: {}", e),
            });
        }
    }

    fn update_live_texture(&mut self, ctx: &egui::Context) {
        if let Some(frame) = self.camera.latest_frame() {
            let img = egui::ColorImage::from_rgb(
                [frame.width as usize, frame.height as usize],
                &frame.pixels,
            );
            match &mut self.live_texture {
                Some(texture) => texture.set(img, egui::TextureOptions::LINEAR),
                None => {
                    self.live_texture =
                        Some(ctx.load_texture("live-feed", img, egui::TextureOptions::LINEAR))
                }
            }
        }
    }
}

impl eframe::App for SnapViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);

        if self.camera.is_on() {
            self.update_live_texture(ctx);
            // Keep the live feed moving without a per-frame spin.
            ctx.request_repaint_after(Duration::from_millis(33));
        }

        egui::TopBottomPanel::top("tab-bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (label, tab) in [
                    ("Capture", Tab::Capture),
                    ("Gallery", Tab::Gallery),
                    ("Settings", Tab::Settings),
                ] {
                    if ui.selectable_label(self.tab == tab, label).clicked() && self.tab != tab {
                        self.tab = tab;
                        // The gallery loads when its view becomes visible.
                        if tab == Tab::Gallery {
                            self.reload_gallery(ctx);
                        }
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.tab {
                    Tab::Capture => {
                        upload::render(self, ui, ctx);
                        ui.add_space(12.0);
                        ui.separator();
                        ui.add_space(12.0);
                        webcam::render(self, ui, ctx);
                    }
                    Tab::Gallery => gallery::render(self, ui, ctx),
                    Tab::Settings => settings::render(self, ui),
                });
        });

        share_modal::render(self, ctx);
    }
}
