//! Member models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::{double_option, normalize_date};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMemberRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMemberRequest {
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    pub status: Option<String>,
}

impl Member {
    pub fn apply_update(&mut self, req: UpdateMemberRequest) {
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
        if let Some(v) = req.date_of_birth {
            if let Some(d) = normalize_date(&v) {
                self.date_of_birth = Some(d);
            }
        }
        if let Some(v) = req.gender {
            self.gender = v;
        }
        if let Some(v) = req.address {
            self.address = v;
        }
        if let Some(v) = req.status {
            if !v.is_empty() {
                self.status = v;
            }
        }
    }
}
