//! Payment models and revenue stats.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::double_option;
use super::member::Member;
use super::subscription::Subscription;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: String,
    pub member_id: String,
    pub subscription_id: Option<String>,
    pub amount_cents: i64,
    pub currency: String,
    pub method: Option<String>,
    pub paid_at: String,
    pub note: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payment with both its member and subscription resolved.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentDetail {
    #[serde(flatten)]
    pub payment: Payment,
    pub member: Option<Member>,
    pub subscription: Option<Subscription>,
}

/// Payment with only the subscription resolved, for by-member listings.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentWithSubscription {
    #[serde(flatten)]
    pub payment: Payment,
    pub subscription: Option<Subscription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePaymentRequest {
    pub member_id: Option<String>,
    pub subscription_id: Option<String>,
    pub amount_cents: Option<i64>,
    pub currency: Option<String>,
    pub method: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePaymentRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub method: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub note: Option<Option<String>>,
}

impl Payment {
    pub fn apply_update(&mut self, req: UpdatePaymentRequest) {
        if let Some(v) = req.method {
            self.method = v;
        }
        if let Some(v) = req.note {
            self.note = v;
        }
    }
}

/// Aggregated revenue figures over a `paid_at` range.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentStats {
    pub total_amount_cents: i64,
    pub total_amount_vnd: f64,
    pub payment_count: i64,
    pub average_amount_cents: f64,
}
