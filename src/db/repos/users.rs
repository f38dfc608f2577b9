//! User repository.

use crate::db::models::common::{new_id, now_rfc3339};
use crate::db::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::db::DbPool;

pub struct UserRepo {
    db: DbPool,
}

impl UserRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateUserRequest) -> Result<User, sqlx::Error> {
        let now = now_rfc3339();
        let user = User {
            id: new_id(),
            username: req.username.unwrap_or_default().trim().to_lowercase(),
            password_hash: req.password_hash.unwrap_or_default(),
            role: req
                .role
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "staff".to_string()),
            linked_trainer: req.linked_trainer.filter(|s| !s.is_empty()),
            linked_member: req.linked_member.filter(|s| !s.is_empty()),
            last_login_at: None,
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO users (id, username, password_hash, role, linked_trainer, linked_member, last_login_at, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(&user.linked_trainer)
        .bind(&user.linked_member)
        .bind(&user.last_login_at)
        .bind(&user.created_at)
        .bind(&user.updated_at)
        .execute(&self.db)
        .await?;

        Ok(user)
    }

    pub async fn get(&self, id: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.db)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateUserRequest,
    ) -> Result<Option<User>, sqlx::Error> {
        let Some(mut user) = self.get(id).await? else {
            return Ok(None);
        };
        user.apply_update(req);
        user.updated_at = now_rfc3339();

        sqlx::query(
            "UPDATE users SET username = ?, password_hash = ?, role = ?, linked_trainer = ?, linked_member = ?, last_login_at = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(&user.linked_trainer)
        .bind(&user.linked_member)
        .bind(&user.last_login_at)
        .bind(&user.updated_at)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(Some(user))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn touch_last_login(&self, id: &str, at: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = ?, updated_at = ? WHERE id = ?")
            .bind(at)
            .bind(at)
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    pub async fn set_password(&self, id: &str, password_hash: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(password_hash)
            .bind(now_rfc3339())
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
