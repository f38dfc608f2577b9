//! Image metadata repository.

use crate::db::models::common::{new_id, now_rfc3339};
use crate::db::models::{CreateImageRequest, Image, ImageWithUploader, UpdateImageRequest, User};
use crate::db::DbPool;

pub struct ImageRepo {
    db: DbPool,
}

impl ImageRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateImageRequest) -> Result<Image, sqlx::Error> {
        let now = now_rfc3339();
        let image = Image {
            id: new_id(),
            filename: req.filename.unwrap_or_default(),
            file_path: req.file_path.unwrap_or_default(),
            file_size: req.file_size,
            mime_type: req.mime_type.filter(|s| !s.is_empty()),
            uploaded_by: req.uploaded_by.filter(|s| !s.is_empty()),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO images (id, filename, file_path, file_size, mime_type, uploaded_by, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&image.id)
        .bind(&image.filename)
        .bind(&image.file_path)
        .bind(image.file_size)
        .bind(&image.mime_type)
        .bind(&image.uploaded_by)
        .bind(&image.created_at)
        .bind(&image.updated_at)
        .execute(&self.db)
        .await?;

        Ok(image)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Image>, sqlx::Error> {
        sqlx::query_as::<_, Image>("SELECT * FROM images WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn get_with_uploader(&self, id: &str) -> Result<Option<ImageWithUploader>, sqlx::Error> {
        let Some(image) = self.get(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.populate(image).await?))
    }

    pub async fn list(&self) -> Result<Vec<ImageWithUploader>, sqlx::Error> {
        let images = sqlx::query_as::<_, Image>("SELECT * FROM images ORDER BY created_at DESC")
            .fetch_all(&self.db)
            .await?;

        let mut results = Vec::with_capacity(images.len());
        for image in images {
            results.push(self.populate(image).await?);
        }
        Ok(results)
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateImageRequest,
    ) -> Result<Option<Image>, sqlx::Error> {
        let Some(mut image) = self.get(id).await? else {
            return Ok(None);
        };
        image.apply_update(req);
        image.updated_at = now_rfc3339();

        sqlx::query(
            "UPDATE images SET filename = ?, file_path = ?, file_size = ?, mime_type = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&image.filename)
        .bind(&image.file_path)
        .bind(image.file_size)
        .bind(&image.mime_type)
        .bind(&image.updated_at)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(Some(image))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM images WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_by_uploader(&self, user_id: &str) -> Result<Vec<Image>, sqlx::Error> {
        sqlx::query_as::<_, Image>(
            "SELECT * FROM images WHERE uploaded_by = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
    }

    async fn populate(&self, image: Image) -> Result<ImageWithUploader, sqlx::Error> {
        let uploader = match &image.uploaded_by {
            Some(user_id) => {
                sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
                    .bind(user_id)
                    .fetch_optional(&self.db)
                    .await?
            }
            None => None,
        };
        Ok(ImageWithUploader { image, uploader })
    }
}
