use super::client::UREQ_AGENT;
use super::types::AnalysisResult;
use anyhow::{anyhow, Result};

/// POST a picked image file to `/analyze_upload` as multipart form data
/// (field `image`, original filename).
pub fn analyze_upload(server_url: &str, filename: &str, bytes: &[u8]) -> Result<AnalysisResult> {
    let url = format!("{}/analyze_upload", server_url.trim_end_matches('/'));
    post_image(&url, filename, sniff_mime(bytes), bytes)
}

/// POST a captured webcam frame to `/analyze_webcam`. The frame is always
/// JPEG and always named `snapshot.jpg`, matching what the server expects.
pub fn analyze_webcam(server_url: &str, jpeg: &[u8]) -> Result<AnalysisResult> {
    let url = format!("{}/analyze_webcam", server_url.trim_end_matches('/'));
    post_image(&url, "snapshot.jpg", "image/jpeg", jpeg)
}

fn post_image(url: &str, filename: &str, mime: &str, bytes: &[u8]) -> Result<AnalysisResult> {
    let boundary = format!(
        "----SnapViewFormBoundary{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    );

    let body = multipart_body(&boundary, "image", filename, mime, bytes);

    let resp = UREQ_AGENT
        .post(url)
        .header(
            "Content-Type",
            &format!("multipart/form-data; boundary={}", boundary),
        )
        .send(&body)
        .map_err(|e| anyhow!("analyze request to {} failed: {}", url, e))?;

    resp.into_body()
        .read_json()
        .map_err(|e| anyhow!("failed to parse analysis response: {}", e))
}

/// Build a single-field multipart/form-data body by hand. One file field
/// is all the analysis endpoints take.
pub(crate) fn multipart_body(
    boundary: &str,
    field: &str,
    filename: &str,
    mime: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(data.len() + 256);

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", mime).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(b"\r\n");

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}

// The browsers this replaces filtered by file-type only; the server decodes
// whatever it gets. Magic-byte sniffing covers the formats it understands.
fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        "image/jpeg"
    } else if bytes.starts_with(&[0x89, 0x50, 0x4e, 0x47]) {
        "image/png"
    } else if bytes.len() >= 12
        && bytes.starts_with(&[0x52, 0x49, 0x46, 0x46])
        && bytes[8..12] == [0x57, 0x45, 0x42, 0x50]
    {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}
