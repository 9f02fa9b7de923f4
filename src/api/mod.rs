pub mod analyze;
pub mod client;
pub mod share;
pub mod snapshots;
pub mod types;

pub use analyze::{analyze_upload, analyze_webcam};
pub use share::share_snapshot;
pub use snapshots::{fetch_image, fetch_snapshots, resolve_url};
