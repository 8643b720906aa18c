use crate::access_guard::extract_token;
use crate::{AuthError, ForbiddenReason, Result as AuthErrorResult, SessionClaims};

use dh_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use http::HeaderMap;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Signs and verifies session tokens carrying an identity's email.
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionTokenService {
    /// HS256 with a shared secret. Tokens carry no `exp` and none is required.
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<String> {
        let claims = SessionClaims::new(identity.email.clone());
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and return the claims
    #[track_caller]
    pub fn decode_claims(&self, token: &str) -> AuthErrorResult<SessionClaims> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::TokenDecode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Verify signature and return the email the token was issued to
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<String> {
        self.decode_claims(token).map(|claims| claims.email)
    }

    /// Header-only authentication for the router filter. Checks the
    /// signature but not whether the identity still exists.
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthErrorResult<SessionClaims> {
        let token = extract_token(headers)
            .ok_or_else(|| AuthError::forbidden(ForbiddenReason::MissingToken))?;
        self.decode_claims(token)
            .map_err(|_| AuthError::forbidden(ForbiddenReason::InvalidToken))
    }
}
