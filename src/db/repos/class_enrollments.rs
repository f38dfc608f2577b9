//! Class enrollment repository.

use crate::db::models::common::{new_id, now_rfc3339};
use crate::db::models::{
    ClassEnrollment, ClassSession, CreateClassEnrollmentRequest, EnrollmentDetail,
    EnrollmentWithMember, EnrollmentWithSession, Member, UpdateClassEnrollmentRequest,
};
use crate::db::DbPool;

pub struct ClassEnrollmentRepo {
    db: DbPool,
}

impl ClassEnrollmentRepo {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Insert a new enrollment. The unique index on (session_id, member_id)
    /// rejects a second enrollment for the same pair atomically.
    pub async fn create(
        &self,
        req: CreateClassEnrollmentRequest,
    ) -> Result<ClassEnrollment, sqlx::Error> {
        let now = now_rfc3339();
        let enrollment = ClassEnrollment {
            id: new_id(),
            session_id: req.session_id.unwrap_or_default(),
            member_id: req.member_id.unwrap_or_default(),
            enrolled_at: now.clone(),
            status: req
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "enrolled".to_string()),
            created_at: now.clone(),
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO class_enrollments (id, session_id, member_id, enrolled_at, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&enrollment.id)
        .bind(&enrollment.session_id)
        .bind(&enrollment.member_id)
        .bind(&enrollment.enrolled_at)
        .bind(&enrollment.status)
        .bind(&enrollment.created_at)
        .bind(&enrollment.updated_at)
        .execute(&self.db)
        .await?;

        Ok(enrollment)
    }

    pub async fn get(&self, id: &str) -> Result<Option<ClassEnrollment>, sqlx::Error> {
        sqlx::query_as::<_, ClassEnrollment>("SELECT * FROM class_enrollments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    pub async fn get_detail(&self, id: &str) -> Result<Option<EnrollmentDetail>, sqlx::Error> {
        let Some(enrollment) = self.get(id).await? else {
            return Ok(None);
        };
        let session = self.fetch_session(&enrollment.session_id).await?;
        let member = self.fetch_member(&enrollment.member_id).await?;
        Ok(Some(EnrollmentDetail {
            enrollment,
            session,
            member,
        }))
    }

    pub async fn list(&self) -> Result<Vec<EnrollmentDetail>, sqlx::Error> {
        let enrollments = sqlx::query_as::<_, ClassEnrollment>(
            "SELECT * FROM class_enrollments ORDER BY datetime(enrolled_at) DESC",
        )
        .fetch_all(&self.db)
        .await?;

        let mut results = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let session = self.fetch_session(&enrollment.session_id).await?;
            let member = self.fetch_member(&enrollment.member_id).await?;
            results.push(EnrollmentDetail {
                enrollment,
                session,
                member,
            });
        }
        Ok(results)
    }

    pub async fn update(
        &self,
        id: &str,
        req: UpdateClassEnrollmentRequest,
    ) -> Result<Option<ClassEnrollment>, sqlx::Error> {
        let Some(mut enrollment) = self.get(id).await? else {
            return Ok(None);
        };
        enrollment.apply_update(req);
        enrollment.updated_at = now_rfc3339();

        sqlx::query("UPDATE class_enrollments SET status = ?, updated_at = ? WHERE id = ?")
            .bind(&enrollment.status)
            .bind(&enrollment.updated_at)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(Some(enrollment))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM class_enrollments WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_pair(
        &self,
        session_id: &str,
        member_id: &str,
    ) -> Result<Option<ClassEnrollment>, sqlx::Error> {
        sqlx::query_as::<_, ClassEnrollment>(
            "SELECT * FROM class_enrollments WHERE session_id = ? AND member_id = ?",
        )
        .bind(session_id)
        .bind(member_id)
        .fetch_optional(&self.db)
        .await
    }

    pub async fn list_by_session(
        &self,
        session_id: &str,
    ) -> Result<Vec<EnrollmentWithMember>, sqlx::Error> {
        let enrollments = sqlx::query_as::<_, ClassEnrollment>(
            "SELECT * FROM class_enrollments WHERE session_id = ? ORDER BY datetime(enrolled_at) DESC",
        )
        .bind(session_id)
        .fetch_all(&self.db)
        .await?;

        let mut results = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let member = self.fetch_member(&enrollment.member_id).await?;
            results.push(EnrollmentWithMember { enrollment, member });
        }
        Ok(results)
    }

    pub async fn list_by_member(
        &self,
        member_id: &str,
    ) -> Result<Vec<EnrollmentWithSession>, sqlx::Error> {
        let enrollments = sqlx::query_as::<_, ClassEnrollment>(
            "SELECT * FROM class_enrollments WHERE member_id = ? ORDER BY datetime(enrolled_at) DESC",
        )
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        let mut results = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let session = self.fetch_session(&enrollment.session_id).await?;
            results.push(EnrollmentWithSession {
                enrollment,
                session,
            });
        }
        Ok(results)
    }

    async fn fetch_session(&self, session_id: &str) -> Result<Option<ClassSession>, sqlx::Error> {
        sqlx::query_as::<_, ClassSession>("SELECT * FROM class_sessions WHERE id = ?")
            .bind(session_id)
            .fetch_optional(&self.db)
            .await
    }

    async fn fetch_member(&self, member_id: &str) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(member_id)
            .fetch_optional(&self.db)
            .await
    }
}
