use sqlx::PgPool;

use crate::app_error::AppError;

pub mod contacts;
pub mod waitlist;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();
                // PostgreSQL unique violation
                if msg.contains("duplicate key") || msg.contains("unique constraint") {
                    AppError::InvalidInput("A record with this value already exists".into())
                } else {
                    // Log the actual error for debugging, but don't expose details
                    tracing::error!(error = ?err, "Database error");
                    AppError::Database("Database operation failed".into())
                }
            }
            _ => {
                tracing::error!(error = ?err, "Database error");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}

/// Maps insert failures so a unique-index hit on email becomes the same
/// `DuplicateEmail` the read-before-write check produces. Two requests racing
/// past that check land here, and the caller still sees the friendly message.
pub(crate) fn map_insert_error(err: sqlx::Error, duplicate_message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        let msg = db_err.message();
        if msg.contains("duplicate key") || msg.contains("unique constraint") {
            return AppError::DuplicateEmail(duplicate_message.to_string());
        }
    }
    AppError::from(err)
}
