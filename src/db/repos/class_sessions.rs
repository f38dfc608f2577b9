//! Class session repository.

use crate::db::models::common::{new_id, normalize_date, now_rfc3339};
use crate::db::models::{
    Class, ClassSession, CreateClassSessionRequest, SessionDetail, SessionWithTrainer, Trainer,
    UpdateClassSessionRequest,
};
use crate::db::DbPool;

pub struct ClassSessionRepo {
    db: DbPool,
}

impl ClassSessionRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateClassSessionRequest) -> Result<ClassSession, sqlx::Error> {
        let now = now_rfc3339();
        let session = ClassSession {
            id: new_id(),
            class_id: req.class_id.unwrap_or_default(),
            trainer_id: req.trainer_id.filter(|s| !s.is_empty()),
            starts_at: req
                .starts_at
                .as_deref()
                .and_then(normalize_date)
                .unwrap_or_default(),
            ends_at: req
                .ends_at
                .as_deref()
                .and_then(normalize_date)
                .unwrap_or_default(),
            capacity: req.capacity.filter(|c| *c != 0).unwrap_or(20),
            location: req.location.filter(|s| !s.is_empty()),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO class_sessions (id, class_id, trainer_id, starts_at, ends_at, capacity, location, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&session.id)
        .bind(&session.class_id)
        .bind(&session.trainer_id)
        .bind(&session.starts_at)
        .bind(&session.ends_at)
        .bind(session.capacity)
        .bind(&session.location)
        .bind(&session.created_at)
        .bind(&session.updated_at)
        .execute(&self.db)
        .await?;

        Ok(session)
    }

    pub async fn get(&self, id: &str) -> Result<Option<ClassSession>, sqlx::Error> {
        sqlx::query_as::<_, ClassSession>("SELECT * FROM class_sessions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn get_detail(&self, id: &str) -> Result<Option<SessionDetail>, sqlx::Error> {
        let Some(session) = self.get(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.populate(session).await?))
    }

    pub async fn list(&self) -> Result<Vec<SessionDetail>, sqlx::Error> {
        let sessions = sqlx::query_as::<_, ClassSession>(
            "SELECT * FROM class_sessions ORDER BY datetime(starts_at) DESC",
        )
        .fetch_all(&self.db)
        .await?;
        self.populate_all(sessions).await
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateClassSessionRequest,
    ) -> Result<Option<ClassSession>, sqlx::Error> {
        let Some(mut session) = self.get(id).await? else {
            return Ok(None);
        };
        session.apply_update(req);
        session.updated_at = now_rfc3339();

        sqlx::query(
            "UPDATE class_sessions SET class_id = ?, trainer_id = ?, starts_at = ?, ends_at = ?, capacity = ?, location = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&session.class_id)
        .bind(&session.trainer_id)
        .bind(&session.starts_at)
        .bind(&session.ends_at)
        .bind(session.capacity)
        .bind(&session.location)
        .bind(&session.updated_at)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(Some(session))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM class_sessions WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_by_class(&self, class_id: &str) -> Result<Vec<SessionWithTrainer>, sqlx::Error> {
        let sessions = sqlx::query_as::<_, ClassSession>(
            "SELECT * FROM class_sessions WHERE class_id = ? ORDER BY datetime(starts_at) DESC",
        )
        .bind(class_id)
        .fetch_all(&self.db)
        .await?;

        let mut results = Vec::with_capacity(sessions.len());
        for session in sessions {
            let trainer = self.fetch_trainer(session.trainer_id.as_deref()).await?;
            results.push(SessionWithTrainer { session, trainer });
        }
        Ok(results)
    }

    pub async fn list_upcoming(&self) -> Result<Vec<SessionDetail>, sqlx::Error> {
        let sessions = sqlx::query_as::<_, ClassSession>(
            "SELECT * FROM class_sessions WHERE datetime(starts_at) >= datetime(?) ORDER BY datetime(starts_at) ASC",
        )
        .bind(now_rfc3339())
        .fetch_all(&self.db)
        .await?;
        self.populate_all(sessions).await
    }

    async fn populate(&self, session: ClassSession) -> Result<SessionDetail, sqlx::Error> {
        let class = sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE id = ?")
            .bind(&session.class_id)
            .fetch_optional(&self.db)
            .await?;
        let trainer = self.fetch_trainer(session.trainer_id.as_deref()).await?;
        Ok(SessionDetail {
            session,
            class,
            trainer,
        })
    }

    async fn populate_all(
        &self,
        sessions: Vec<ClassSession>,
    ) -> Result<Vec<SessionDetail>, sqlx::Error> {
        let mut results = Vec::with_capacity(sessions.len());
        for session in sessions {
            results.push(self.populate(session).await?);
        }
        Ok(results)
    }

    async fn fetch_trainer(&self, trainer_id: Option<&str>) -> Result<Option<Trainer>, sqlx::Error> {
        match trainer_id {
            Some(id) => {
                sqlx::query_as::<_, Trainer>("SELECT * FROM trainers WHERE id = ?")
                    .bind(id)
                    .fetch_optional(&self.db)
                    .await
            }
            None => Ok(None),
        }
    }
}
