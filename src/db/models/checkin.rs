//! Check-in models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::double_option;
use super::member::Member;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Checkin {
    pub id: String,
    pub member_id: String,
    pub checked_in_at: String,
    pub note: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Check-in with its member resolved.
#[derive(Debug, Clone, Serialize)]
pub struct CheckinWithMember {
    #[serde(flatten)]
    pub checkin: Checkin,
    pub member: Option<Member>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCheckinRequest {
    pub member_id: Option<String>,
    pub checked_in_at: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCheckinRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub note: Option<Option<String>>,
}

impl Checkin {
    pub fn apply_update(&mut self, req: UpdateCheckinRequest) {
        if let Some(v) = req.note {
            self.note = v;
        }
    }
}
