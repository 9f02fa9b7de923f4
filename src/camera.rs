//! Webcam ownership and the Off/On state machine.
//!
//! The controller owns at most one stream at a time. A pump thread holds
//! the nokhwa device, publishes decoded RGB frames into a shared slot, and
//! is joined (closing the device stream) before the handle is cleared.

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// Latest decoded frame, tightly packed RGB8.
#[derive(Clone)]
pub struct RgbFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

type FrameSlot = Arc<Mutex<Option<RgbFrame>>>;

struct StreamHandle {
    stop: Arc<AtomicBool>,
    frame: FrameSlot,
    pump: Option<JoinHandle<()>>,
}

#[derive(Default)]
pub struct CameraController {
    stream: Option<StreamHandle>,
}

impl CameraController {
    pub fn new() -> Self {
        Self { stream: None }
    }

    pub fn is_on(&self) -> bool {
        self.stream.is_some()
    }

    /// Off -> On. Stays Off (logging only, no user-facing message) when the
    /// device cannot be opened.
    pub fn start(&mut self, camera_index: u32) {
        if self.stream.is_some() {
            return;
        }
        match self.open_stream(camera_index) {
            Ok(handle) => self.stream = Some(handle),
            Err(e) => log::error!("Error accessing webcam: {}", e),
        }
    }

    /// On -> Off. The pump thread is joined before the handle is dropped,
    /// so the device stream is fully released by the time this returns.
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.stream.take() {
            handle.stop.store(true, Ordering::SeqCst);
            if let Some(pump) = handle.pump.take() {
                let _ = pump.join();
            }
        }
    }

    pub fn latest_frame(&self) -> Option<RgbFrame> {
        let handle = self.stream.as_ref()?;
        handle.frame.lock().ok()?.clone()
    }

    /// Encode the latest frame as JPEG. `None` when Off or before the first
    /// frame has arrived.
    pub fn snapshot_jpeg(&self, quality: u8) -> Option<Vec<u8>> {
        let frame = self.latest_frame()?;
        match encode_jpeg(&frame, quality) {
            Ok(jpeg) => Some(jpeg),
            Err(e) => {
                log::error!("failed to encode snapshot: {}", e);
                None
            }
        }
    }

    fn open_stream(&self, camera_index: u32) -> Result<StreamHandle> {
        let stop = Arc::new(AtomicBool::new(false));
        let frame: FrameSlot = Arc::new(Mutex::new(None));
        let (ready_tx, ready_rx) = mpsc::channel();

        let pump = {
            let stop = stop.clone();
            let frame = frame.clone();
            std::thread::spawn(move || pump_frames(camera_index, stop, frame, ready_tx))
        };

        // The pump owns the device; wait for its open handshake so a
        // denied/missing camera leaves the controller in Off.
        match ready_rx.recv() {
            Ok(Ok(())) => Ok(StreamHandle {
                stop,
                frame,
                pump: Some(pump),
            }),
            Ok(Err(e)) => {
                let _ = pump.join();
                Err(e)
            }
            Err(_) => {
                let _ = pump.join();
                Err(anyhow!("camera thread exited before opening the device"))
            }
        }
    }
}

impl Drop for CameraController {
    fn drop(&mut self) {
        self.stop();
    }
}

fn pump_frames(
    camera_index: u32,
    stop: Arc<AtomicBool>,
    slot: FrameSlot,
    ready_tx: mpsc::Sender<Result<()>>,
) {
    let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
    let mut camera = match Camera::new(CameraIndex::Index(camera_index), requested) {
        Ok(camera) => camera,
        Err(e) => {
            let _ = ready_tx.send(Err(anyhow!("failed to open camera {}: {}", camera_index, e)));
            return;
        }
    };

    if let Err(e) = camera.open_stream() {
        let _ = ready_tx.send(Err(anyhow!("failed to start camera stream: {}", e)));
        return;
    }
    let _ = ready_tx.send(Ok(()));

    while !stop.load(Ordering::SeqCst) {
        match camera.frame().and_then(|buf| buf.decode_image::<RgbFormat>()) {
            Ok(decoded) => {
                let frame = RgbFrame {
                    width: decoded.width(),
                    height: decoded.height(),
                    pixels: decoded.into_raw(),
                };
                if let Ok(mut guard) = slot.lock() {
                    *guard = Some(frame);
                }
            }
            Err(e) => {
                log::warn!("frame capture failed: {}", e);
                std::thread::sleep(Duration::from_millis(100));
            }
        }
    }

    let _ = camera.stop_stream();
}

fn encode_jpeg(frame: &RgbFrame, quality: u8) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .encode(
            &frame.pixels,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| anyhow!("jpeg encoding failed: {}", e))?;
    Ok(out)
}

/// Base64 data URL for the captured JPEG, the form the `/share` endpoint
/// accepts as `image_url`.
pub fn jpeg_data_url(jpeg: &[u8]) -> String {
    format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(jpeg)
    )
}

/// Labels and enablement for the webcam controls, derived from the stream
/// state alone. Snapshot and share are usable if and only if the stream is
/// active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureControls {
    pub toggle_label: &'static str,
    pub snapshot_enabled: bool,
    pub share_enabled: bool,
}

impl CaptureControls {
    pub fn for_state(stream_active: bool) -> Self {
        if stream_active {
            CaptureControls {
                toggle_label: "Stop Camera",
                snapshot_enabled: true,
                share_enabled: true,
            }
        } else {
            CaptureControls {
                toggle_label: "Start Camera",
                snapshot_enabled: false,
                share_enabled: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_follow_stream_state() {
        let off = CaptureControls::for_state(false);
        assert_eq!(off.toggle_label, "Start Camera");
        assert!(!off.snapshot_enabled);
        assert!(!off.share_enabled);

        let on = CaptureControls::for_state(true);
        assert_eq!(on.toggle_label, "Stop Camera");
        assert!(on.snapshot_enabled);
        assert!(on.share_enabled);
    }

    #[test]
    fn controller_starts_off_with_no_frame() {
        let controller = CameraController::new();
        assert!(!controller.is_on());
        assert!(controller.latest_frame().is_none());
        assert!(controller.snapshot_jpeg(85).is_none());
    }

    #[test]
    fn stop_when_off_is_a_no_op() {
        let mut controller = CameraController::new();
        controller.stop();
        assert!(!controller.is_on());
    }

    #[test]
    fn snapshot_round_trips_through_jpeg() {
        let frame = RgbFrame {
            width: 4,
            height: 2,
            pixels: vec![128; 4 * 2 * 3],
        };
        let jpeg = encode_jpeg(&frame, 85).unwrap();
        assert!(jpeg.starts_with(&[0xff, 0xd8, 0xff]));

        let url = jpeg_data_url(&jpeg);
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }
}
