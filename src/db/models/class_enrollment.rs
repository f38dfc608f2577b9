//! Class enrollment models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::class_session::ClassSession;
use super::member::Member;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClassEnrollment {
    pub id: String,
    pub session_id: String,
    pub member_id: String,
    pub enrolled_at: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Enrollment with both its session and member resolved.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    pub enrollment: ClassEnrollment,
    pub session: Option<ClassSession>,
    pub member: Option<Member>,
}

/// Enrollment with only the member resolved, for by-session listings.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentWithMember {
    #[serde(flatten)]
    pub enrollment: ClassEnrollment,
    pub member: Option<Member>,
}

/// Enrollment with only the session resolved, for by-member listings.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentWithSession {
    #[serde(flatten)]
    pub enrollment: ClassEnrollment,
    pub session: Option<ClassSession>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateClassEnrollmentRequest {
    pub session_id: Option<String>,
    pub member_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClassEnrollmentRequest {
    pub status: Option<String>,
}

impl ClassEnrollment {
    pub fn apply_update(&mut self, req: UpdateClassEnrollmentRequest) {
        if let Some(v) = req.status {
            if !v.is_empty() {
                self.status = v;
            }
        }
    }
}
