//! Uploaded image metadata models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::double_option;
use super::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    pub id: String,
    pub filename: String,
    pub file_path: String,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub uploaded_by: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Image with the uploading user resolved. The user serializes without its
/// password hash, so nothing sensitive crosses this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ImageWithUploader {
    #[serde(flatten)]
    pub image: Image,
    pub uploader: Option<User>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateImageRequest {
    pub filename: Option<String>,
    pub file_path: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub uploaded_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateImageRequest {
    pub filename: Option<String>,
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub file_size: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub mime_type: Option<Option<String>>,
}

impl Image {
    pub fn apply_update(&mut self, req: UpdateImageRequest) {
        if let Some(v) = req.filename {
            if !v.is_empty() {
                self.filename = v;
            }
        }
        if let Some(v) = req.file_path {
            if !v.is_empty() {
                self.file_path = v;
            }
        }
        if let Some(v) = req.file_size {
            self.file_size = v;
        }
        if let Some(v) = req.mime_type {
            self.mime_type = v;
        }
    }
}
