use thiserror::Error;
use waitlist_types::{EMAIL_TAKEN_MESSAGE, REQUIRED_FIELDS_MESSAGE};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn missing_fields() -> Self {
        AppError::Validation(REQUIRED_FIELDS_MESSAGE.into())
    }

    pub fn email_taken() -> Self {
        AppError::Conflict(EMAIL_TAKEN_MESSAGE.into())
    }

    /// Whether the message may be shown to the caller as-is.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Conflict(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
