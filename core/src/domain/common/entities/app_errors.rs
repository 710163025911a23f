use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found")]
    NotFound,

    #[error("invalid session token")]
    InvalidToken,

    #[error("session token expired")]
    TokenExpired,

    #[error("password hashing failed")]
    HashError,

    #[error("selection storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("internal server error")]
    InternalServerError,
}
