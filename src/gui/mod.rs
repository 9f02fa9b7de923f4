mod app;
mod gallery;
mod settings;
mod share_modal;
mod upload;
mod utils;
mod webcam;

pub use app::SnapViewApp;
