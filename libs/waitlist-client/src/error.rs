use thiserror::Error;

/// Errors returned by `WaitlistClient`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Request never completed or the reply could not be decoded
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
