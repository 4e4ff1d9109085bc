//! Response envelope
//!
//! Every reply, success or failure, has the same outer shape:
//! `{ statusCode, data, message, success }`. Failures additionally carry
//! `errors` and a null `data`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::DomainError;

const DEFAULT_MESSAGE: &str = "Success";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a, T: Serialize> {
    status_code: u16,
    data: T,
    message: &'a str,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [String]>,
}

/// Successful reply wrapping `data`
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    data: T,
    message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, data)
    }

    pub fn with_status(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let body = Envelope {
            status_code: self.status.as_u16(),
            data: &self.data,
            message: &self.message,
            success: self.status.as_u16() < 400,
            errors: None,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Failure reply
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Vec<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors,
        }
    }

    fn single(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status,
            errors: vec![message.clone()],
            message,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::single(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::single(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::single(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::single(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(message) => ApiError::not_found(message),
            DomainError::Validation { message, errors } => {
                ApiError::new(StatusCode::BAD_REQUEST, message, errors)
            }
            DomainError::Database(_) | DomainError::Internal(_) => {
                tracing::error!(error = %err, "Request failed");
                ApiError::internal()
            }
        }
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        DomainError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Envelope {
            status_code: self.status.as_u16(),
            data: (),
            message: &self.message,
            success: false,
            errors: Some(&self.errors),
        };
        (self.status, Json(body)).into_response()
    }
}

/// `Json` whose rejections are reported through [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ValidatedJson<T>(pub T);

/// `Path` whose rejections (e.g. undecodable segments) are reported through [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ValidatedPath<T>(pub T);

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_envelope() {
        let response = ApiResponse::ok(json!({ "answer": 42 })).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({
                "statusCode": 200,
                "data": { "answer": 42 },
                "message": "Success",
                "success": true
            })
        );
    }

    #[tokio::test]
    async fn error_envelope_has_null_data() {
        let response = ApiError::not_found("No playlist found!!").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No playlist found!!");
        assert_eq!(body["errors"], json!(["No playlist found!!"]));
    }

    #[test]
    fn database_errors_are_masked() {
        let err: ApiError = DomainError::Database("disk I/O error".into()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Something went wrong");
    }

    #[test]
    fn validation_keeps_every_message() {
        let err: ApiError = DomainError::Validation {
            message: "first".into(),
            errors: vec!["first".into(), "second".into()],
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.errors, vec!["first", "second"]);
    }
}
