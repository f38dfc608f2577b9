//! Class repository.

use crate::db::models::common::{new_id, now_rfc3339};
use crate::db::models::{Class, CreateClassRequest, UpdateClassRequest};
use crate::db::DbPool;

pub struct ClassRepo {
    db: DbPool,
}

impl ClassRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateClassRequest) -> Result<Class, sqlx::Error> {
        let now = now_rfc3339();
        let class = Class {
            id: new_id(),
            name: req.name.unwrap_or_default(),
            description: req.description.filter(|s| !s.is_empty()),
            is_active: req.is_active.unwrap_or(true),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO classes (id, name, description, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&class.id)
        .bind(&class.name)
        .bind(&class.description)
        .bind(class.is_active)
        .bind(&class.created_at)
        .bind(&class.updated_at)
        .execute(&self.db)
        .await?;

        Ok(class)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Class>, sqlx::Error> {
        sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<Class>, sqlx::Error> {
        sqlx::query_as::<_, Class>("SELECT * FROM classes ORDER BY created_at DESC")
            .fetch_all(&self.db)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateClassRequest,
    ) -> Result<Option<Class>, sqlx::Error> {
        let Some(mut class) = self.get(id).await? else {
            return Ok(None);
        };
        class.apply_update(req);
        class.updated_at = now_rfc3339();

        sqlx::query(
            "UPDATE classes SET name = ?, description = ?, is_active = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&class.name)
        .bind(&class.description)
        .bind(class.is_active)
        .bind(&class.updated_at)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(Some(class))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring match on the class name.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Class>, sqlx::Error> {
        let pattern = format!("%{}%", fragment);
        sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE name LIKE ?")
            .bind(pattern)
            .fetch_all(&self.db)
            .await
    }
}
