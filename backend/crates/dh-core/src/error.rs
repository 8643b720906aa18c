use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Failures reported by a document store backing identities.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint rejected the write (e.g. two signups racing on one email)
    #[error("Duplicate value for unique field '{field}' {location}")]
    Duplicate {
        field: String,
        location: ErrorLocation,
    },

    #[error("Store backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt record {id}: {message} {location}")]
    CorruptRecord {
        id: String,
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        StoreError::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate(field: &str) -> Self {
        StoreError::Duplicate {
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;
pub type StoreResult<T> = StdResult<T, StoreError>;
