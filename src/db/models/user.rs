//! User account models and auth request/response types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::double_option;

/// A staff/admin/trainer account. The password hash is never serialized.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub linked_trainer: Option<String>,
    pub linked_member: Option<String>,
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub linked_trainer: Option<String>,
    pub linked_member: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub linked_trainer: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub linked_member: Option<Option<String>>,
    pub last_login_at: Option<String>,
}

impl User {
    pub fn apply_update(&mut self, req: UpdateUserRequest) {
        if let Some(v) = req.username {
            if !v.is_empty() {
                self.username = v.trim().to_lowercase();
            }
        }
        if let Some(v) = req.password_hash {
            if !v.is_empty() {
                self.password_hash = v;
            }
        }
        if let Some(v) = req.role {
            if !v.is_empty() {
                self.role = v;
            }
        }
        if let Some(v) = req.linked_trainer {
            self.linked_trainer = v;
        }
        if let Some(v) = req.linked_member {
            self.linked_member = v;
        }
        if let Some(v) = req.last_login_at {
            if let Some(ts) = super::common::normalize_date(&v) {
                self.last_login_at = Some(ts);
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub user_id: Option<String>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub username: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub id: String,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    pub linked_trainer: Option<String>,
    pub linked_member: Option<String>,
    pub last_login_at: Option<String>,
    pub created_at: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            linked_trainer: user.linked_trainer,
            linked_member: user.linked_member,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u1".into(),
            username: "alice".into(),
            password_hash: "$2b$10$secret".into(),
            role: "staff".into(),
            linked_trainer: None,
            linked_member: None,
            last_login_at: None,
            created_at: "2026-01-01T00:00:00+00:00".into(),
            updated_at: "2026-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn test_apply_update_normalizes_username() {
        let mut user = sample_user();
        user.apply_update(UpdateUserRequest {
            username: Some("  Bob  ".into()),
            ..Default::default()
        });
        assert_eq!(user.username, "bob");
    }

    #[test]
    fn test_apply_update_empty_string_is_no_change() {
        let mut user = sample_user();
        user.apply_update(UpdateUserRequest {
            username: Some(String::new()),
            role: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, "staff");
    }

    #[test]
    fn test_apply_update_null_clears_links() {
        let mut user = sample_user();
        user.linked_trainer = Some("t1".into());
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"linked_trainer": null}"#).unwrap();
        user.apply_update(req);
        assert_eq!(user.linked_trainer, None);
    }
}
