//! Submit payload for a finished image.

use serde::{Deserialize, Serialize};

use super::FormatError;
use crate::model::Annotation;

/// The annotations of one image, as handed to the review queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    /// Name of the annotated image
    pub image_id: String,
    /// Annotations in list order
    pub annotations: Vec<Annotation>,
}

impl SubmitPayload {
    pub fn new(image_id: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        Self {
            image_id: image_id.into(),
            annotations,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a payload, rejecting one without an image name.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let payload: Self = serde_json::from_str(json)?;
        if payload.image_id.is_empty() {
            return Err(FormatError::missing_field("imageId"));
        }
        Ok(payload)
    }
}
