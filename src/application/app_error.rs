use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    /// A record with this email already exists in the target collection. The
    /// message carries the user-facing wording for that collection.
    #[error("{0}")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    DatabaseError,
    DuplicateEmail,
    InvalidInput,
    InvalidCredentials,
    NotFound,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
