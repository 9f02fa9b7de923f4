use serde::{Deserialize, Serialize};

/// Analysis response for both `/analyze_upload` and `/analyze_webcam`.
///
/// The server may omit `faces` entirely, return it empty, or omit
/// `background` (it answers error statuses with an `{"error": ...}` body,
/// which deserializes here as an empty result).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnalysisResult {
    #[serde(default)]
    pub faces: Vec<Face>,
    #[serde(default)]
    pub background: Option<SceneInfo>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Face {
    pub details: FaceDetails,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FaceDetails {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: FaceAttributes,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FaceAttributes {
    #[serde(default)]
    pub skin_tone: String,
    #[serde(default)]
    pub hair: HairInfo,
    #[serde(default)]
    pub eyes: EyeInfo,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HairInfo {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub style: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct EyeInfo {
    #[serde(default)]
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SceneInfo {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lighting: String,
    #[serde(default)]
    pub scene_type: String,
    #[serde(default)]
    pub timestamp: String,
}

/// One stored webcam snapshot, as returned by `/get_snapshots`.
/// The server also sends `filename`; only `url` and `timestamp` are used.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SnapshotRecord {
    pub url: String,
    pub timestamp: String,
}

/// `/share` answers `{"message": ...}` on success and `{"error": ...}`
/// (with a 4xx/5xx status) on failure.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ShareResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_analysis_response() {
        let data = r#"{
            "faces": [
                {
                    "location": {"x": 10, "y": 20, "width": 64, "height": 64},
                    "details": {
                        "description": "Person with light skin, brown hair",
                        "details": {
                            "skin_tone": "light",
                            "hair": {"color": "brown", "style": "natural"},
                            "eyes": {"color": "hazel"},
                            "confidence": 0.873
                        }
                    }
                }
            ],
            "background": {
                "description": "A bright outdoor scene",
                "lighting": "bright",
                "scene_type": "outdoor",
                "timestamp": "2026-08-30 12:00:00"
            }
        }"#;

        let result: AnalysisResult = serde_json::from_str(data).unwrap();
        assert_eq!(result.faces.len(), 1);
        let attrs = &result.faces[0].details.details;
        assert_eq!(attrs.skin_tone, "light");
        assert_eq!(attrs.hair.color, "brown");
        assert_eq!(attrs.hair.style, "natural");
        assert_eq!(attrs.eyes.color, "hazel");
        assert!((attrs.confidence - 0.873).abs() < 1e-9);
        let background = result.background.unwrap();
        assert_eq!(background.scene_type, "outdoor");
    }

    #[test]
    fn tolerates_missing_faces_and_background() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert!(result.faces.is_empty());
        assert!(result.background.is_none());

        // Error bodies from the server parse as an empty result too.
        let result: AnalysisResult =
            serde_json::from_str(r#"{"error": "Failed to analyze image"}"#).unwrap();
        assert!(result.faces.is_empty());
    }

    #[test]
    fn snapshot_records_keep_response_order() {
        let data = r#"[
            {"filename": "b.jpg", "url": "/static/uploads/b.jpg", "timestamp": "2026-08-30 10:00:00"},
            {"filename": "a.jpg", "url": "/static/uploads/a.jpg", "timestamp": "2026-08-29 09:00:00"}
        ]"#;
        let records: Vec<SnapshotRecord> = serde_json::from_str(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "/static/uploads/b.jpg");
        assert_eq!(records[1].timestamp, "2026-08-29 09:00:00");
    }

    #[test]
    fn parses_share_responses() {
        let ok: ShareResponse =
            serde_json::from_str(r#"{"message": "Shared to Facebook successfully"}"#).unwrap();
        assert_eq!(ok.message.as_deref(), Some("Shared to Facebook successfully"));
        assert!(ok.error.is_none());

        let err: ShareResponse = serde_json::from_str(r#"{"error": "Unsupported platform"}"#).unwrap();
        assert_eq!(err.error.as_deref(), Some("Unsupported platform"));
    }
}
