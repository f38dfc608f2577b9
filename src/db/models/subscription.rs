//! Subscription models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::{double_option, normalize_date};
use super::member::Member;
use super::membership_plan::MembershipPlan;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    pub id: String,
    pub member_id: String,
    pub plan_id: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub remaining_sessions: Option<i64>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Subscription with both its member and plan resolved.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionDetail {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub member: Option<Member>,
    pub plan: Option<MembershipPlan>,
}

/// Subscription with only the plan resolved, for by-member listings.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionWithPlan {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub plan: Option<MembershipPlan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub member_id: Option<String>,
    pub plan_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub remaining_sessions: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubscriptionRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub remaining_sessions: Option<Option<i64>>,
    pub status: Option<String>,
}

impl Subscription {
    pub fn apply_update(&mut self, req: UpdateSubscriptionRequest) {
        if let Some(v) = req.end_date {
            self.end_date = v.and_then(|d| normalize_date(&d));
        }
        if let Some(v) = req.remaining_sessions {
            self.remaining_sessions = v;
        }
        if let Some(v) = req.status {
            if !v.is_empty() {
                self.status = v;
            }
        }
    }
}
