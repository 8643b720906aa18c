use crate::{AuthError, Result as AuthErrorResult};

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Length of the random salt generated for every derivation
pub const SALT_LENGTH: usize = 128;
/// Length of the derived key
pub const DERIVED_KEY_LENGTH: usize = 512;
/// Upper bound accepted for a stored iteration count
pub const MAX_ITERATIONS: u32 = 10_000_000;

const HEADER_LENGTH: usize = 8;

/// Stored password record.
///
/// Binary layout, base64-encoded for storage:
///
/// ```text
/// [ salt_len: u32 BE ][ iterations: u32 BE ][ salt ][ derived_key ]
/// ```
///
/// The key length is whatever remains after the salt.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordBlob {
    salt: Vec<u8>,
    iterations: u32,
    derived_key: Vec<u8>,
}

impl PasswordBlob {
    pub fn new(salt: Vec<u8>, iterations: u32, derived_key: Vec<u8>) -> Self {
        Self {
            salt,
            iterations,
            derived_key,
        }
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn derived_key(&self) -> &[u8] {
        &self.derived_key
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(HEADER_LENGTH + self.salt.len() + self.derived_key.len());
        bytes.extend_from_slice(&(self.salt.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&self.iterations.to_be_bytes());
        bytes.extend_from_slice(&self.salt);
        bytes.extend_from_slice(&self.derived_key);
        bytes
    }

    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Parse the binary layout. Every header field is bounds-checked before
    /// use so a tampered record can't cause an out-of-range slice or an
    /// unbounded derivation.
    #[track_caller]
    pub fn from_bytes(bytes: &[u8]) -> AuthErrorResult<Self> {
        if bytes.len() < HEADER_LENGTH {
            return Err(AuthError::credential("stored password is truncated"));
        }

        let (header, body) = bytes.split_at(HEADER_LENGTH);
        let salt_len = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
        let iterations = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);

        if iterations == 0 || iterations > MAX_ITERATIONS {
            return Err(AuthError::credential(format!(
                "stored iteration count {} is out of range",
                iterations
            )));
        }
        if salt_len == 0 || salt_len >= body.len() {
            return Err(AuthError::credential(format!(
                "stored salt length {} does not fit a {} byte record",
                salt_len,
                bytes.len()
            )));
        }

        let (salt, derived_key) = body.split_at(salt_len);
        Ok(Self::new(salt.to_vec(), iterations, derived_key.to_vec()))
    }

    #[track_caller]
    pub fn decode(stored: &str) -> AuthErrorResult<Self> {
        let bytes = STANDARD
            .decode(stored.trim())
            .map_err(|e| AuthError::credential(format!("stored password is not base64: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Debug for PasswordBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordBlob")
            .field("salt_len", &self.salt.len())
            .field("iterations", &self.iterations)
            .field("key_len", &self.derived_key.len())
            .finish()
    }
}
