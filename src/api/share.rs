use super::client::UREQ_AGENT;
use super::types::ShareResponse;
use anyhow::{anyhow, Result};

/// POST a share request to `/share`. Returns the server's success message;
/// transport failures and server-reported `error` fields both surface as
/// `Err`, so the caller keeps the dialog open either way.
pub fn share_snapshot(
    server_url: &str,
    platform: &str,
    image_url: &str,
    caption: &str,
) -> Result<String> {
    let url = format!("{}/share", server_url.trim_end_matches('/'));

    let resp = UREQ_AGENT
        .post(&url)
        .send_json(share_payload(platform, image_url, caption))
        .map_err(|e| anyhow!("share request failed: {}", e))?;

    let parsed: ShareResponse = resp
        .into_body()
        .read_json()
        .map_err(|e| anyhow!("failed to parse share response: {}", e))?;

    interpret_response(parsed)
}

pub(crate) fn share_payload(platform: &str, image_url: &str, caption: &str) -> serde_json::Value {
    serde_json::json!({
        "platform": platform,
        "image_url": image_url,
        "caption": caption,
    })
}

pub(crate) fn interpret_response(resp: ShareResponse) -> Result<String> {
    if let Some(error) = resp.error {
        return Err(anyhow!(error));
    }
    Ok(resp
        .message
        .unwrap_or_else(|| "Shared successfully".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_all_fields() {
        let payload = share_payload("facebook", "data:image/jpeg;base64,abc", "hi there");
        assert_eq!(payload["platform"], "facebook");
        assert_eq!(payload["image_url"], "data:image/jpeg;base64,abc");
        assert_eq!(payload["caption"], "hi there");
    }

    #[test]
    fn error_field_wins_over_message() {
        let resp = ShareResponse {
            message: Some("should not appear".to_string()),
            error: Some("Unsupported platform".to_string()),
        };
        let err = interpret_response(resp).unwrap_err();
        assert!(err.to_string().contains("Unsupported platform"));
    }

    #[test]
    fn message_passes_through_on_success() {
        let resp = ShareResponse {
            message: Some("Shared to Instagram successfully".to_string()),
            error: None,
        };
        assert_eq!(
            interpret_response(resp).unwrap(),
            "Shared to Instagram successfully"
        );
    }
}
