use super::client::UREQ_AGENT;
use super::types::SnapshotRecord;
use anyhow::{anyhow, Result};
use std::io::Read;

/// GET the stored snapshot list. Order is server-determined and preserved.
pub fn fetch_snapshots(server_url: &str) -> Result<Vec<SnapshotRecord>> {
    let url = format!("{}/get_snapshots", server_url.trim_end_matches('/'));

    let resp = UREQ_AGENT
        .get(&url)
        .call()
        .map_err(|e| anyhow!("snapshot list request failed: {}", e))?;

    resp.into_body()
        .read_json()
        .map_err(|e| anyhow!("failed to parse snapshot list: {}", e))
}

/// Fetch raw image bytes for a gallery thumbnail.
pub fn fetch_image(url: &str) -> Result<Vec<u8>> {
    let resp = UREQ_AGENT
        .get(url)
        .call()
        .map_err(|e| anyhow!("image fetch from {} failed: {}", url, e))?;

    let mut bytes = Vec::new();
    resp.into_body()
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| anyhow!("failed to read image body: {}", e))?;
    Ok(bytes)
}

/// The server hands out page-relative snapshot URLs (`/static/uploads/...`);
/// a desktop client has to join them against the configured base.
pub fn resolve_url(server_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!(
            "{}/{}",
            server_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_urls_against_server() {
        assert_eq!(
            resolve_url("http://localhost:5000", "/static/uploads/snap.jpg"),
            "http://localhost:5000/static/uploads/snap.jpg"
        );
        assert_eq!(
            resolve_url("http://localhost:5000/", "static/uploads/snap.jpg"),
            "http://localhost:5000/static/uploads/snap.jpg"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_url("http://localhost:5000", "https://cdn.example.com/snap.jpg"),
            "https://cdn.example.com/snap.jpg"
        );
    }
}
