//! Trainer repository.

use crate::db::models::common::{new_id, now_rfc3339};
use crate::db::models::{
    CreateTrainerRequest, Image, Trainer, TrainerWithImage, UpdateTrainerRequest,
};
use crate::db::DbPool;

pub struct TrainerRepo {
    db: DbPool,
}

impl TrainerRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateTrainerRequest) -> Result<Trainer, sqlx::Error> {
        let now = now_rfc3339();
        let trainer = Trainer {
            id: new_id(),
            full_name: req.full_name.unwrap_or_default(),
            phone: req.phone.filter(|s| !s.is_empty()),
            email: req.email.filter(|s| !s.is_empty()),
            specialty: req.specialty.filter(|s| !s.is_empty()),
            image_id: req.image_id.filter(|s| !s.is_empty()),
            is_active: req.is_active.unwrap_or(true),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO trainers (id, full_name, phone, email, specialty, image_id, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&trainer.id)
        .bind(&trainer.full_name)
        .bind(&trainer.phone)
        .bind(&trainer.email)
        .bind(&trainer.specialty)
        .bind(&trainer.image_id)
        .bind(trainer.is_active)
        .bind(&trainer.created_at)
        .bind(&trainer.updated_at)
        .execute(&self.db)
        .await?;

        Ok(trainer)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Trainer>, sqlx::Error> {
        sqlx::query_as::<_, Trainer>("SELECT * FROM trainers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn get_with_image(&self, id: &str) -> Result<Option<TrainerWithImage>, sqlx::Error> {
        let Some(trainer) = self.get(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.populate(trainer).await?))
    }

    pub async fn list(&self) -> Result<Vec<TrainerWithImage>, sqlx::Error> {
        let trainers =
            sqlx::query_as::<_, Trainer>("SELECT * FROM trainers ORDER BY created_at DESC")
                .fetch_all(&self.db)
                .await?;
        self.populate_all(trainers).await
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateTrainerRequest,
    ) -> Result<Option<Trainer>, sqlx::Error> {
        let Some(mut trainer) = self.get(id).await? else {
            return Ok(None);
        };
        trainer.apply_update(req);
        trainer.updated_at = now_rfc3339();

        sqlx::query(
            "UPDATE trainers SET full_name = ?, phone = ?, email = ?, specialty = ?, image_id = ?, is_active = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&trainer.full_name)
        .bind(&trainer.phone)
        .bind(&trainer.email)
        .bind(&trainer.specialty)
        .bind(&trainer.image_id)
        .bind(trainer.is_active)
        .bind(&trainer.updated_at)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(Some(trainer))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trainers WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_specialty(
        &self,
        specialty: &str,
    ) -> Result<Vec<TrainerWithImage>, sqlx::Error> {
        let trainers = sqlx::query_as::<_, Trainer>("SELECT * FROM trainers WHERE specialty = ?")
            .bind(specialty)
            .fetch_all(&self.db)
            .await?;
        self.populate_all(trainers).await
    }

    async fn populate(&self, trainer: Trainer) -> Result<TrainerWithImage, sqlx::Error> {
        let image = match &trainer.image_id {
            Some(image_id) => {
                sqlx::query_as::<_, Image>("SELECT * FROM images WHERE id = ?")
                    .bind(image_id)
                    .fetch_optional(&self.db)
                    .await?
            }
            None => None,
        };
        Ok(TrainerWithImage { trainer, image })
    }

    async fn populate_all(
        &self,
        trainers: Vec<Trainer>,
    ) -> Result<Vec<TrainerWithImage>, sqlx::Error> {
        let mut results = Vec::with_capacity(trainers.len());
        for trainer in trainers {
            results.push(self.populate(trainer).await?);
        }
        Ok(results)
    }
}
