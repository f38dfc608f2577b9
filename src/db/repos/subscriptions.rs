//! Subscription repository.

use crate::db::models::common::{new_id, normalize_date, now_rfc3339};
use crate::db::models::{
    CreateSubscriptionRequest, Member, MembershipPlan, Subscription, SubscriptionDetail,
    SubscriptionWithPlan, UpdateSubscriptionRequest,
};
use crate::db::DbPool;

pub struct SubscriptionRepo {
    db: DbPool,
}

impl SubscriptionRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateSubscriptionRequest) -> Result<Subscription, sqlx::Error> {
        let now = now_rfc3339();
        let subscription = Subscription {
            id: new_id(),
            member_id: req.member_id.unwrap_or_default(),
            plan_id: req.plan_id.unwrap_or_default(),
            start_date: req
                .start_date
                .as_deref()
                .and_then(normalize_date)
                .unwrap_or_default(),
            end_date: req
                .end_date
                .filter(|s| !s.is_empty())
                .and_then(|s| normalize_date(&s)),
            remaining_sessions: req.remaining_sessions,
            status: req
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "active".to_string()),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO subscriptions (id, member_id, plan_id, start_date, end_date, remaining_sessions, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&subscription.id)
        .bind(&subscription.member_id)
        .bind(&subscription.plan_id)
        .bind(&subscription.start_date)
        .bind(&subscription.end_date)
        .bind(subscription.remaining_sessions)
        .bind(&subscription.status)
        .bind(&subscription.created_at)
        .bind(&subscription.updated_at)
        .execute(&self.db)
        .await?;

        Ok(subscription)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Subscription>, sqlx::Error> {
        sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn get_detail(&self, id: &str) -> Result<Option<SubscriptionDetail>, sqlx::Error> {
        let Some(subscription) = self.get(id).await? else {
            return Ok(None);
        };
        let member = self.fetch_member(&subscription.member_id).await?;
        let plan = self.fetch_plan(&subscription.plan_id).await?;
        Ok(Some(SubscriptionDetail {
            subscription,
            member,
            plan,
        }))
    }

    pub async fn list(&self) -> Result<Vec<SubscriptionDetail>, sqlx::Error> {
        let subscriptions = sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions ORDER BY created_at DESC",
        )
        .fetch_all(&self.db)
        .await?;

        let mut results = Vec::with_capacity(subscriptions.len());
        for subscription in subscriptions {
            let member = self.fetch_member(&subscription.member_id).await?;
            let plan = self.fetch_plan(&subscription.plan_id).await?;
            results.push(SubscriptionDetail {
                subscription,
                member,
                plan,
            });
        }
        Ok(results)
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateSubscriptionRequest,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        let Some(mut subscription) = self.get(id).await? else {
            return Ok(None);
        };
        subscription.apply_update(req);
        subscription.updated_at = now_rfc3339();

        sqlx::query(
            "UPDATE subscriptions SET end_date = ?, remaining_sessions = ?, status = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&subscription.end_date)
        .bind(subscription.remaining_sessions)
        .bind(&subscription.status)
        .bind(&subscription.updated_at)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(Some(subscription))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_by_member(
        &self,
        member_id: &str,
    ) -> Result<Vec<SubscriptionWithPlan>, sqlx::Error> {
        let subscriptions = sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE member_id = ? ORDER BY created_at DESC",
        )
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        let mut results = Vec::with_capacity(subscriptions.len());
        for subscription in subscriptions {
            let plan = self.fetch_plan(&subscription.plan_id).await?;
            results.push(SubscriptionWithPlan { subscription, plan });
        }
        Ok(results)
    }

    async fn fetch_member(&self, member_id: &str) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(member_id)
            .fetch_optional(&self.db)
            .await
    }

    async fn fetch_plan(&self, plan_id: &str) -> Result<Option<MembershipPlan>, sqlx::Error> {
        sqlx::query_as::<_, MembershipPlan>("SELECT * FROM membership_plans WHERE id = ?")
            .bind(plan_id)
            .fetch_optional(&self.db)
            .await
    }
}
