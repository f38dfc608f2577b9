//! Check-in repository.

use crate::db::models::common::{new_id, normalize_date, now_rfc3339, today_bounds};
use crate::db::models::{
    Checkin, CheckinWithMember, CreateCheckinRequest, Member, UpdateCheckinRequest,
};
use crate::db::DbPool;

pub struct CheckinRepo {
    db: DbPool,
}

impl CheckinRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateCheckinRequest) -> Result<Checkin, sqlx::Error> {
        let now = now_rfc3339();
        let checkin = Checkin {
            id: new_id(),
            member_id: req.member_id.unwrap_or_default(),
            checked_in_at: req
                .checked_in_at
                .as_deref()
                .and_then(normalize_date)
                .unwrap_or_else(|| now.clone()),
            note: req.note.filter(|s| !s.is_empty()),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO checkins (id, member_id, checked_in_at, note, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&checkin.id)
        .bind(&checkin.member_id)
        .bind(&checkin.checked_in_at)
        .bind(&checkin.note)
        .bind(&checkin.created_at)
        .bind(&checkin.updated_at)
        .execute(&self.db)
        .await?;

        Ok(checkin)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Checkin>, sqlx::Error> {
        sqlx::query_as::<_, Checkin>("SELECT * FROM checkins WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn get_with_member(&self, id: &str) -> Result<Option<CheckinWithMember>, sqlx::Error> {
        let Some(checkin) = self.get(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.populate(checkin).await?))
    }

    pub async fn list(&self) -> Result<Vec<CheckinWithMember>, sqlx::Error> {
        let checkins = sqlx::query_as::<_, Checkin>(
            "SELECT * FROM checkins ORDER BY datetime(checked_in_at) DESC",
        )
        .fetch_all(&self.db)
        .await?;
        self.populate_all(checkins).await
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateCheckinRequest,
    ) -> Result<Option<Checkin>, sqlx::Error> {
        let Some(mut checkin) = self.get(id).await? else {
            return Ok(None);
        };
        checkin.apply_update(req);
        checkin.updated_at = now_rfc3339();

        sqlx::query("UPDATE checkins SET note = ?, updated_at = ? WHERE id = ?")
            .bind(&checkin.note)
            .bind(&checkin.updated_at)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(Some(checkin))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM checkins WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_by_member(&self, member_id: &str) -> Result<Vec<Checkin>, sqlx::Error> {
        sqlx::query_as::<_, Checkin>(
            "SELECT * FROM checkins WHERE member_id = ? ORDER BY datetime(checked_in_at) DESC",
        )
        .bind(member_id)
        .fetch_all(&self.db)
        .await
    }

    /// Check-ins whose `checked_in_at` falls within the current local day.
    pub async fn list_today(&self) -> Result<Vec<CheckinWithMember>, sqlx::Error> {
        let (start, end) = today_bounds();
        let checkins = sqlx::query_as::<_, Checkin>(
            "SELECT * FROM checkins \
             WHERE datetime(checked_in_at) >= datetime(?) AND datetime(checked_in_at) < datetime(?) \
             ORDER BY datetime(checked_in_at) DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;
        self.populate_all(checkins).await
    }

    async fn populate(&self, checkin: Checkin) -> Result<CheckinWithMember, sqlx::Error> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(&checkin.member_id)
            .fetch_optional(&self.db)
            .await?;
        Ok(CheckinWithMember { checkin, member })
    }

    async fn populate_all(
        &self,
        checkins: Vec<Checkin>,
    ) -> Result<Vec<CheckinWithMember>, sqlx::Error> {
        let mut results = Vec::with_capacity(checkins.len());
        for checkin in checkins {
            results.push(self.populate(checkin).await?);
        }
        Ok(results)
    }
}
