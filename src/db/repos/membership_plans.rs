//! Membership plan repository.

use crate::db::models::common::{new_id, now_rfc3339};
use crate::db::models::{CreateMembershipPlanRequest, MembershipPlan, UpdateMembershipPlanRequest};
use crate::db::DbPool;

pub struct MembershipPlanRepo {
    db: DbPool,
}

impl MembershipPlanRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        req: CreateMembershipPlanRequest,
    ) -> Result<MembershipPlan, sqlx::Error> {
        let now = now_rfc3339();
        let plan = MembershipPlan {
            id: new_id(),
            name: req.name.unwrap_or_default(),
            description: req.description.filter(|s| !s.is_empty()),
            duration_days: req.duration_days,
            session_count: req.session_count,
            price_cents: req.price_cents.unwrap_or_default(),
            is_active: req.is_active.unwrap_or(true),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO membership_plans (id, name, description, duration_days, session_count, price_cents, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&plan.id)
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.duration_days)
        .bind(plan.session_count)
        .bind(plan.price_cents)
        .bind(plan.is_active)
        .bind(&plan.created_at)
        .bind(&plan.updated_at)
        .execute(&self.db)
        .await?;

        Ok(plan)
    }

    pub async fn get(&self, id: &str) -> Result<Option<MembershipPlan>, sqlx::Error> {
        sqlx::query_as::<_, MembershipPlan>("SELECT * FROM membership_plans WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<MembershipPlan>, sqlx::Error> {
        sqlx::query_as::<_, MembershipPlan>(
            "SELECT * FROM membership_plans ORDER BY created_at DESC",
        )
        .fetch_all(&self.db)
        .await
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateMembershipPlanRequest,
    ) -> Result<Option<MembershipPlan>, sqlx::Error> {
        let Some(mut plan) = self.get(id).await? else {
            return Ok(None);
        };
        plan.apply_update(req);
        plan.updated_at = now_rfc3339();

        sqlx::query(
            "UPDATE membership_plans SET name = ?, description = ?, duration_days = ?, session_count = ?, price_cents = ?, is_active = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.duration_days)
        .bind(plan.session_count)
        .bind(plan.price_cents)
        .bind(plan.is_active)
        .bind(&plan.updated_at)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(Some(plan))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM membership_plans WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_active(&self) -> Result<Vec<MembershipPlan>, sqlx::Error> {
        sqlx::query_as::<_, MembershipPlan>(
            "SELECT * FROM membership_plans WHERE is_active = 1 ORDER BY price_cents ASC",
        )
        .fetch_all(&self.db)
        .await
    }
}
