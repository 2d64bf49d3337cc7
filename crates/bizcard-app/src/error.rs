use salvo::http::StatusCode;
use thiserror::Error;

use bizcard_core::error::CoreError;
use bizcard_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

impl AppError {
    /// ## Summary
    /// The HTTP status a handler answers with for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::ServiceError(ServiceError::UnsupportedMediaType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            Self::ServiceError(ServiceError::PayloadTooLarge { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            Self::ServiceError(ServiceError::Superseded) => StatusCode::CONFLICT,
            Self::ServiceError(ServiceError::CoreError(CoreError::ValidationError(_)))
            | Self::CoreError(CoreError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
