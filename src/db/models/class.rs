//! Gym class models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::double_option;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Class {
    pub fn apply_update(&mut self, req: UpdateClassRequest) {
        if let Some(v) = req.name {
            if !v.is_empty() {
                self.name = v;
            }
        }
        if let Some(v) = req.description {
            self.description = v;
        }
        if let Some(v) = req.is_active {
            self.is_active = v;
        }
    }
}
