// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors raised by a record store backend (local dataset + SQLite, or the
/// remote record service). The query service swallows these and degrades to
/// empty or absent results; page controllers may look at them directly.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
    #[error("Record store rejected the request: {0}")]
    Remote(String),
    #[error("Database Error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Dataset error: {0}")]
    Dataset(String),
}

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (record store).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
