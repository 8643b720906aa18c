use crate::{FORBIDDEN_MESSAGE, INVALID_URL_MESSAGE};

use dh_core::StoreError;

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a request was refused. Only ever logged; callers see one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbiddenReason {
    MissingToken,
    InvalidToken,
    UnknownIdentity,
    NotAdmin,
}

impl fmt::Display for ForbiddenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingToken => "no bearer token supplied",
            Self::InvalidToken => "token could not be decoded",
            Self::UnknownIdentity => "token names an unknown identity",
            Self::NotAdmin => "admin privileges required",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Credential error: {message} {location}")]
    Credential {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {reason} {location}")]
    Forbidden {
        reason: ForbiddenReason,
        location: ErrorLocation,
    },

    #[error("Invalid confirmation URL: {reason} {location}")]
    InvalidConfirmation {
        reason: &'static str,
        location: ErrorLocation,
    },

    #[error("Session token encoding failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Session token decode failed: {source} {location}")]
    TokenDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn credential<S: Into<String>>(message: S) -> Self {
        AuthError::Credential {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(reason: ForbiddenReason) -> Self {
        AuthError::Forbidden {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_confirmation(reason: &'static str) -> Self {
        AuthError::InvalidConfirmation {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }

    /// Text safe to hand to a client. Never distinguishes sub-cases.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Forbidden { .. } => FORBIDDEN_MESSAGE,
            Self::InvalidConfirmation { .. } => INVALID_URL_MESSAGE,
            Self::TokenDecode { .. } | Self::InvalidClaim { .. } => FORBIDDEN_MESSAGE,
            Self::Credential { .. } | Self::TokenEncode { .. } | Self::Store { .. } => {
                "An internal error occurred, please try again later."
            }
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
