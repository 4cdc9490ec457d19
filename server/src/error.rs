use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sweeper_core::{GameError, SessionState};
use sweeper_protocol::ErrorBody;
use thiserror::Error;

use crate::auth::AuthError;
use crate::store::StoreError;

/// Every way an API call can fail, each with a fixed HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing, expired or invalid credentials")]
    Unauthenticated,
    #[error("Access denied: {0}")]
    Forbidden(String),
    #[error("Resource not found")]
    NotFound,
    #[error("Invalid request field: {0}")]
    InvalidRequest(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Game already concluded as {0}")]
    Conflict(SessionState),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid(field: &str) -> Self {
        Self::InvalidRequest(field.to_string())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub const fn status(&self) -> u16 {
        match self {
            Self::Unauthenticated => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound => 404,
            Self::InvalidRequest(_) => 400,
            Self::MethodNotAllowed => 405,
            Self::Conflict(_) => 409,
            Self::PayloadTooLarge => 413,
            Self::Internal(_) => 500,
        }
    }

    /// `None` for 401, which is answered with an empty body.
    pub fn body(&self) -> Option<ErrorBody> {
        let error = match self {
            Self::Unauthenticated => return None,
            Self::Forbidden(reason) => reason.clone(),
            Self::NotFound => "not_found".to_string(),
            Self::InvalidRequest(field) => format!("invalid_request/{field}"),
            Self::MethodNotAllowed => "method_not_allowed".to_string(),
            Self::Conflict(state) => format!("game_concluded/{state}"),
            Self::PayloadTooLarge => "payload_too_large".to_string(),
            Self::Internal(_) => "internal_error".to_string(),
        };
        Some(ErrorBody { error })
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken | AuthError::InvalidToken => Self::Unauthenticated,
            AuthError::WrongScope => Self::Forbidden("invalid_scope".to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(format!("store failure: {err}"))
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidCoords => Self::invalid("coordinates"),
            GameError::InvalidDimensions => Self::invalid("width"),
            GameError::InvalidDensity => Self::invalid("mineDensity"),
            GameError::InvalidMoveState | GameError::InvalidSessionState => Self::invalid("state"),
        }
    }
}

/// The single place API failures are logged.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(message) => log::error!("Internal error: {message}"),
            err => log::debug!("Request rejected: {err}"),
        }

        let status = StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.body() {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
