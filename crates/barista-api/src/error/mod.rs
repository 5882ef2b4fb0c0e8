use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use barista_core::CoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ConfigError(ref e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::ValidationError(ref e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Core(CoreError::UnknownDrink(_)) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Core(ref e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Io(ref e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T, E = AppError> = core::result::Result<T, E>;
