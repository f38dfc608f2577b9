//! Class session models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::class::Class;
use super::common::{double_option, normalize_date};
use super::trainer::Trainer;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClassSession {
    pub id: String,
    pub class_id: String,
    pub trainer_id: Option<String>,
    pub starts_at: String,
    pub ends_at: String,
    pub capacity: i64,
    pub location: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Session with both its class and trainer resolved.
#[derive(Debug, Clone, Serialize)]
pub struct SessionDetail {
    #[serde(flatten)]
    pub session: ClassSession,
    pub class: Option<Class>,
    pub trainer: Option<Trainer>,
}

/// Session with only the trainer resolved, for by-class listings.
#[derive(Debug, Clone, Serialize)]
pub struct SessionWithTrainer {
    #[serde(flatten)]
    pub session: ClassSession,
    pub trainer: Option<Trainer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateClassSessionRequest {
    pub class_id: Option<String>,
    pub trainer_id: Option<String>,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub capacity: Option<i64>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClassSessionRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub trainer_id: Option<Option<String>>,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub capacity: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
}

impl ClassSession {
    pub fn apply_update(&mut self, req: UpdateClassSessionRequest) {
        if let Some(v) = req.trainer_id {
            self.trainer_id = v;
        }
        if let Some(v) = req.starts_at {
            if let Some(ts) = normalize_date(&v) {
                self.starts_at = ts;
            }
        }
        if let Some(v) = req.ends_at {
            if let Some(ts) = normalize_date(&v) {
                self.ends_at = ts;
            }
        }
        if let Some(v) = req.capacity {
            if v != 0 {
                self.capacity = v;
            }
        }
        if let Some(v) = req.location {
            self.location = v;
        }
    }
}
