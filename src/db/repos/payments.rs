//! Payment repository.

use crate::db::models::common::{new_id, now_rfc3339};
use crate::db::models::{
    CreatePaymentRequest, Member, Payment, PaymentDetail, PaymentStats, PaymentWithSubscription,
    Subscription, UpdatePaymentRequest,
};
use crate::db::DbPool;

pub struct PaymentRepo {
    db: DbPool,
}

impl PaymentRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreatePaymentRequest) -> Result<Payment, sqlx::Error> {
        let now = now_rfc3339();
        let payment = Payment {
            id: new_id(),
            member_id: req.member_id.unwrap_or_default(),
            subscription_id: req.subscription_id.filter(|s| !s.is_empty()),
            amount_cents: req.amount_cents.unwrap_or_default(),
            currency: req
                .currency
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "VND".to_string()),
            method: req.method.filter(|s| !s.is_empty()),
            paid_at: now.clone(),
            note: req.note.filter(|s| !s.is_empty()),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO payments (id, member_id, subscription_id, amount_cents, currency, method, paid_at, note, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payment.id)
        .bind(&payment.member_id)
        .bind(&payment.subscription_id)
        .bind(payment.amount_cents)
        .bind(&payment.currency)
        .bind(&payment.method)
        .bind(&payment.paid_at)
        .bind(&payment.note)
        .bind(&payment.created_at)
        .bind(&payment.updated_at)
        .execute(&self.db)
        .await?;

        Ok(payment)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Payment>, sqlx::Error> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn get_detail(&self, id: &str) -> Result<Option<PaymentDetail>, sqlx::Error> {
        let Some(payment) = self.get(id).await? else {
            return Ok(None);
        };
        let member = self.fetch_member(&payment.member_id).await?;
        let subscription = self
            .fetch_subscription(payment.subscription_id.as_deref())
            .await?;
        Ok(Some(PaymentDetail {
            payment,
            member,
            subscription,
        }))
    }

    pub async fn list(&self) -> Result<Vec<PaymentDetail>, sqlx::Error> {
        let payments =
            sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY datetime(paid_at) DESC")
                .fetch_all(&self.db)
                .await?;

        let mut results = Vec::with_capacity(payments.len());
        for payment in payments {
            let member = self.fetch_member(&payment.member_id).await?;
            let subscription = self
                .fetch_subscription(payment.subscription_id.as_deref())
                .await?;
            results.push(PaymentDetail {
                payment,
                member,
                subscription,
            });
        }
        Ok(results)
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdatePaymentRequest,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let Some(mut payment) = self.get(id).await? else {
            return Ok(None);
        };
        payment.apply_update(req);
        payment.updated_at = now_rfc3339();

        sqlx::query("UPDATE payments SET method = ?, note = ?, updated_at = ? WHERE id = ?")
            .bind(&payment.method)
            .bind(&payment.note)
            .bind(&payment.updated_at)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(Some(payment))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_by_member(
        &self,
        member_id: &str,
    ) -> Result<Vec<PaymentWithSubscription>, sqlx::Error> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE member_id = ? ORDER BY datetime(paid_at) DESC",
        )
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        let mut results = Vec::with_capacity(payments.len());
        for payment in payments {
            let subscription = self
                .fetch_subscription(payment.subscription_id.as_deref())
                .await?;
            results.push(PaymentWithSubscription {
                payment,
                subscription,
            });
        }
        Ok(results)
    }

    /// Revenue figures over an inclusive `paid_at` range. Either bound may be
    /// omitted to leave that side open.
    pub async fn stats(
        &self,
        from: Option<String>,
        to: Option<String>,
    ) -> Result<PaymentStats, sqlx::Error> {
        let from = from.unwrap_or_else(|| "0001-01-01T00:00:00+00:00".to_string());
        let to = to.unwrap_or_else(|| "9999-12-31T23:59:59+00:00".to_string());

        let (total, count): (i64, i64) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount_cents), 0), COUNT(*) FROM payments \
             WHERE datetime(paid_at) >= datetime(?) AND datetime(paid_at) <= datetime(?)",
        )
        .bind(from)
        .bind(to)
        .fetch_one(&self.db)
        .await?;

        Ok(PaymentStats {
            total_amount_cents: total,
            total_amount_vnd: total as f64 / 100.0,
            payment_count: count,
            average_amount_cents: if count > 0 {
                total as f64 / count as f64
            } else {
                0.0
            },
        })
    }

    async fn fetch_member(&self, member_id: &str) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(member_id)
            .fetch_optional(&self.db)
            .await
    }

    async fn fetch_subscription(
        &self,
        subscription_id: Option<&str>,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        match subscription_id {
            Some(id) => {
                sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE id = ?")
                    .bind(id)
                    .fetch_optional(&self.db)
                    .await
            }
            None => Ok(None),
        }
    }
}
