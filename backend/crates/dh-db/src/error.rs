use dh_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {source} {location}")]
    Migration {
        source: sqlx::migrate::MigrateError,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row {id}: {message} {location}")]
    CorruptRow {
        id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Column encoding failed: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on {field} {location}")]
    Duplicate {
        field: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn corrupt_row(id: &str, message: impl Into<String>) -> Self {
        DbError::CorruptRow {
            id: id.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        match err {
            DbError::Duplicate { field, .. } => StoreError::duplicate(&field),
            DbError::CorruptRow { id, message, .. } => StoreError::CorruptRecord {
                id,
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => StoreError::backend(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
