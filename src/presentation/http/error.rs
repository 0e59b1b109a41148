use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
    field: Option<String>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation { field, message } => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApplicationError::NotFound(msg) => {
                Self::new(StatusCode::NOT_FOUND, "OBJECT_NOT_FOUND", msg, None)
            }
            ApplicationError::Conflict(msg) => {
                Self::new(StatusCode::CONFLICT, "CONFLICT", msg, None)
            }
            ApplicationError::Unauthorized(msg) => {
                Self::new(StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", msg, None)
            }
            ApplicationError::Forbidden(msg) => {
                Self::new(StatusCode::FORBIDDEN, "PERMISSION_ERROR", msg, None)
            }
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "internal error");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "internal server error".into(),
                    None,
                )
            }
        }
    }

    fn new(status: StatusCode, code: &'static str, message: String, field: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
            field,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            code: self.code.to_string(),
            message: self.message,
            field: self.field,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
