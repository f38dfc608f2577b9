//! Trainer models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::double_option;
use super::image::Image;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trainer {
    pub id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub specialty: Option<String>,
    pub image_id: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Trainer with its profile image resolved.
#[derive(Debug, Clone, Serialize)]
pub struct TrainerWithImage {
    #[serde(flatten)]
    pub trainer: Trainer,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTrainerRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub specialty: Option<String>,
    pub image_id: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrainerRequest {
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub specialty: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_id: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Trainer {
    pub fn apply_update(&mut self, req: UpdateTrainerRequest) {
        if let Some(v) = req.full_name {
            if !v.is_empty() {
                self.full_name = v;
            }
        }
        if let Some(v) = req.phone {
            self.phone = v;
        }
        if let Some(v) = req.email {
            self.email = v;
        }
        if let Some(v) = req.specialty {
            self.specialty = v;
        }
        if let Some(v) = req.image_id {
            self.image_id = v;
        }
        if let Some(v) = req.is_active {
            self.is_active = v;
        }
    }
}
