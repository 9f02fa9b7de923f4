//! Pure mapping from wire-level analysis results to what the panels show.
//! Keeping this free of egui lets the rendering rules be tested directly.

use crate::api::types::AnalysisResult;

#[derive(Debug, Clone, PartialEq)]
pub enum PersonView {
    /// First detected face only; additional faces are ignored.
    Face {
        description: String,
        skin_tone: String,
        hair: String,
        eye_color: String,
        confidence: String,
    },
    NoFaces,
    /// Analysis request failed entirely (transport or parse error).
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    pub description: String,
    pub lighting: String,
    pub scene_type: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub person: PersonView,
    pub scene: Option<SceneView>,
}

impl Report {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let person = match result.faces.first() {
            Some(face) => {
                let attrs = &face.details.details;
                PersonView::Face {
                    description: face.details.description.clone(),
                    skin_tone: attrs.skin_tone.clone(),
                    hair: format!("{} {}", attrs.hair.color, attrs.hair.style),
                    eye_color: attrs.eyes.color.clone(),
                    confidence: format_confidence(attrs.confidence),
                }
            }
            None => PersonView::NoFaces,
        };

        let scene = result.background.as_ref().map(|bg| SceneView {
            description: bg.description.clone(),
            lighting: bg.lighting.clone(),
            scene_type: bg.scene_type.clone(),
            timestamp: bg.timestamp.clone(),
        });

        Report { person, scene }
    }

    pub fn failure(message: &str) -> Self {
        Report {
            person: PersonView::Failed(message.to_string()),
            scene: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.person, PersonView::Failed(_))
    }
}

/// Whole-percent confidence, `0.873` -> `87%`.
fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EyeInfo, Face, FaceAttributes, FaceDetails, HairInfo, SceneInfo};

    fn sample_face(confidence: f64) -> Face {
        Face {
            details: FaceDetails {
                description: "Person with light skin, brown hair".to_string(),
                details: FaceAttributes {
                    skin_tone: "light".to_string(),
                    hair: HairInfo {
                        color: "brown".to_string(),
                        style: "natural".to_string(),
                    },
                    eyes: EyeInfo {
                        color: "hazel".to_string(),
                    },
                    confidence,
                },
            },
        }
    }

    #[test]
    fn first_face_only_with_rounded_confidence() {
        let result = AnalysisResult {
            faces: vec![sample_face(0.873), sample_face(0.2)],
            background: Some(SceneInfo {
                description: "A bright outdoor scene".to_string(),
                lighting: "bright".to_string(),
                scene_type: "outdoor".to_string(),
                timestamp: "2026-08-30 12:00:00".to_string(),
            }),
        };

        let report = Report::from_result(&result);
        match report.person {
            PersonView::Face {
                description,
                skin_tone,
                hair,
                eye_color,
                confidence,
            } => {
                assert_eq!(description, "Person with light skin, brown hair");
                assert_eq!(skin_tone, "light");
                assert_eq!(hair, "brown natural");
                assert_eq!(eye_color, "hazel");
                assert_eq!(confidence, "87%");
            }
            other => panic!("expected a face view, got {:?}", other),
        }

        let scene = report.scene.expect("scene view missing");
        assert_eq!(scene.lighting, "bright");
        assert_eq!(scene.scene_type, "outdoor");
    }

    #[test]
    fn empty_faces_map_to_no_faces() {
        let result = AnalysisResult {
            faces: vec![],
            background: None,
        };
        let report = Report::from_result(&result);
        assert_eq!(report.person, PersonView::NoFaces);
        assert!(report.scene.is_none());
    }

    #[test]
    fn failure_report_carries_message_only() {
        let report = Report::failure("Error analyzing image");
        assert!(report.is_failure());
        assert_eq!(
            report.person,
            PersonView::Failed("Error analyzing image".to_string())
        );
        assert!(report.scene.is_none());
    }

    #[test]
    fn confidence_rounds_to_nearest_percent() {
        assert_eq!(format_confidence(0.873), "87%");
        assert_eq!(format_confidence(0.876), "88%");
        assert_eq!(format_confidence(0.5), "50%");
        assert_eq!(format_confidence(0.9), "90%");
    }
}
