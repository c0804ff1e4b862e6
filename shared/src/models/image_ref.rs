//! Local image reference

use serde::{Deserialize, Serialize};

/// A locally-held listing image awaiting upload
///
/// Holds the original file bytes; the preview is addressed by position
/// in the gallery, so no separate preview handle is stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    /// Original file name (e.g., "front.jpg")
    pub file_name: String,
    /// MIME type (e.g., "image/jpeg")
    pub mime_type: String,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }
}
