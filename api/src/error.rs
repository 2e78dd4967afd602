use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pizza_store_service::ServiceError;
use pizza_store_service::sea_orm::DbErr;
use serde::Serialize;

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "Internal server error".to_owned(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { entity, id } => {
                tracing::debug!(entity, id, "lookup missed");
                Self::not_found(format!("{} not found", capitalize(entity)))
            }
            ServiceError::Db(err) => err.into(),
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        tracing::error!(error = %err, "store query failed");
        Self::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiErrorBody { detail: self.detail })).into_response()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
