use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error("User has not signed in")]
    Unauthenticated,
    /// Carries what the caller tried to do, e.g. "edit the question".
    #[error("User is signed out.Sign in first to {0}")]
    SessionExpired(&'static str),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("Entered question uuid does not exist")]
    QuestionNotFound,
    #[error("User with entered uuid whose question details are to be seen does not exist")]
    UserNotFound,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "ATHR-001",
            AppError::SessionExpired(_) => "ATHR-002",
            AppError::Forbidden(_) => "ATHR-003",
            AppError::QuestionNotFound => "QUES-001",
            AppError::UserNotFound => "USR-001",
            AppError::Config(_) | AppError::Io(_) | AppError::Database(_) | AppError::Other(_) => {
                "GEN-001"
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::SessionExpired(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::QuestionNotFound | AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Io(_) | AppError::Database(_) | AppError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!("request failed: {self:?}");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "code": self.code(), "message": message }))).into_response()
    }
}
