//! Member repository.

use crate::db::models::common::{new_id, normalize_date, now_rfc3339};
use crate::db::models::{CreateMemberRequest, Member, UpdateMemberRequest};
use crate::db::DbPool;

pub struct MemberRepo {
    db: DbPool,
}

impl MemberRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateMemberRequest) -> Result<Member, sqlx::Error> {
        let now = now_rfc3339();
        let member = Member {
            id: new_id(),
            full_name: req.full_name.unwrap_or_default(),
            phone: req.phone.filter(|s| !s.is_empty()),
            email: req.email.filter(|s| !s.is_empty()),
            date_of_birth: req
                .date_of_birth
                .filter(|s| !s.is_empty())
                .and_then(|s| normalize_date(&s)),
            gender: req.gender.filter(|s| !s.is_empty()),
            address: req.address.filter(|s| !s.is_empty()),
            status: req
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "active".to_string()),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO members (id, full_name, phone, email, date_of_birth, gender, address, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&member.id)
        .bind(&member.full_name)
        .bind(&member.phone)
        .bind(&member.email)
        .bind(&member.date_of_birth)
        .bind(&member.gender)
        .bind(&member.address)
        .bind(&member.status)
        .bind(&member.created_at)
        .bind(&member.updated_at)
        .execute(&self.db)
        .await?;

        Ok(member)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY created_at DESC")
            .fetch_all(&self.db)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateMemberRequest,
    ) -> Result<Option<Member>, sqlx::Error> {
        let Some(mut member) = self.get(id).await? else {
            return Ok(None);
        };
        member.apply_update(req);
        member.updated_at = now_rfc3339();

        sqlx::query(
            "UPDATE members SET full_name = ?, phone = ?, email = ?, date_of_birth = ?, gender = ?, address = ?, status = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&member.full_name)
        .bind(&member.phone)
        .bind(&member.email)
        .bind(&member.date_of_birth)
        .bind(&member.gender)
        .bind(&member.address)
        .bind(&member.status)
        .bind(&member.updated_at)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(Some(member))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await
    }
}
