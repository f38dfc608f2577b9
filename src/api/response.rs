//! Uniform success envelope for all API endpoints:
//! `{success, message, data?, count?}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Envelope<T: Serialize> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    status: StatusCode,
    body: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 response with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: Envelope {
                success: true,
                message: message.into(),
                data: Some(data),
                count: None,
            },
        }
    }

    /// 201 response with the freshly created record.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: Envelope {
                success: true,
                message: message.into(),
                data: Some(data),
                count: None,
            },
        }
    }

    /// Attach a count field to the envelope.
    pub fn with_count(mut self, count: usize) -> Self {
        self.body.count = Some(count);
        self
    }
}

impl ApiResponse<()> {
    /// 200 response carrying only a message (deletes, password changes).
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: Envelope {
                success: true,
                message: message.into(),
                data: None,
                count: None,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_and_count_omitted_when_absent() {
        let response = ApiResponse::message("Member deleted successfully");
        let json = serde_json::to_value(&response.body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Member deleted successfully");
        assert!(json.get("data").is_none());
        assert!(json.get("count").is_none());
    }

    #[test]
    fn test_count_included_when_set() {
        let response = ApiResponse::ok("Today checkins retrieved", vec![1, 2, 3]).with_count(3);
        let json = serde_json::to_value(&response.body).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }
}
