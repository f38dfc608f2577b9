//! Membership plan models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::double_option;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MembershipPlan {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_days: Option<i64>,
    pub session_count: Option<i64>,
    pub price_cents: i64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMembershipPlanRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_days: Option<i64>,
    pub session_count: Option<i64>,
    pub price_cents: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMembershipPlanRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub duration_days: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub session_count: Option<Option<i64>>,
    pub price_cents: Option<i64>,
    pub is_active: Option<bool>,
}

impl MembershipPlan {
    pub fn apply_update(&mut self, req: UpdateMembershipPlanRequest) {
        if let Some(v) = req.name {
            if !v.is_empty() {
                self.name = v;
            }
        }
        if let Some(v) = req.description {
            self.description = v;
        }
        if let Some(v) = req.duration_days {
            self.duration_days = v;
        }
        if let Some(v) = req.session_count {
            self.session_count = v;
        }
        if let Some(v) = req.price_cents {
            if v != 0 {
                self.price_cents = v;
            }
        }
        if let Some(v) = req.is_active {
            self.is_active = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> MembershipPlan {
        MembershipPlan {
            id: "p1".into(),
            name: "Monthly".into(),
            description: None,
            duration_days: Some(30),
            session_count: Some(12),
            price_cents: 500_000,
            is_active: true,
            created_at: "2026-01-01T00:00:00+00:00".into(),
            updated_at: "2026-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn test_false_and_zero_are_applied() {
        let mut plan = sample_plan();
        let req: UpdateMembershipPlanRequest =
            serde_json::from_str(r#"{"is_active": false, "session_count": 0}"#).unwrap();
        plan.apply_update(req);
        assert!(!plan.is_active);
        assert_eq!(plan.session_count, Some(0));
    }

    #[test]
    fn test_absent_keys_are_untouched() {
        let mut plan = sample_plan();
        let req: UpdateMembershipPlanRequest =
            serde_json::from_str(r#"{"name": "Quarterly"}"#).unwrap();
        plan.apply_update(req);
        assert_eq!(plan.name, "Quarterly");
        assert!(plan.is_active);
        assert_eq!(plan.duration_days, Some(30));
    }
}
