use crate::compare::constant_time_eq;
use crate::password_blob::{DERIVED_KEY_LENGTH, MAX_ITERATIONS, SALT_LENGTH};
use crate::{AuthError, PasswordBlob, Result as AuthErrorResult};

use log::{debug, warn};
use pbkdf2::pbkdf2_hmac;
use rand::TryRngCore;
use rand::rngs::OsRng;
use sha2::Sha512;

/// PBKDF2-HMAC-SHA512 password derivation and verification.
///
/// Derivation is CPU-bound, so the async entry points run it on the blocking
/// pool. The `*_blocking` variants do the same work on the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct PasswordCodec {
    iterations: u32,
}

impl PasswordCodec {
    #[track_caller]
    pub fn new(iterations: u32) -> AuthErrorResult<Self> {
        if iterations == 0 || iterations > MAX_ITERATIONS {
            return Err(AuthError::credential(format!(
                "iteration count must be between 1 and {}, got {}",
                MAX_ITERATIONS, iterations
            )));
        }
        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derive a fresh encoded record for `plaintext` with a new random salt.
    pub async fn derive(&self, plaintext: &str) -> AuthErrorResult<String> {
        let codec = *self;
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || codec.derive_blocking(&plaintext))
            .await
            .map_err(|e| AuthError::credential(format!("password derivation task failed: {e}")))?
    }

    /// Check `plaintext` against a stored record. Malformed records verify as
    /// false rather than erroring.
    pub async fn verify(&self, plaintext: &str, stored: &str) -> AuthErrorResult<bool> {
        let plaintext = plaintext.to_owned();
        let stored = stored.to_owned();
        tokio::task::spawn_blocking(move || Self::verify_blocking(&plaintext, &stored))
            .await
            .map_err(|e| AuthError::credential(format!("password verification task failed: {e}")))
    }

    /// Spend the same KDF work as `verify` when there is no stored record,
    /// so a missing account costs as much as a wrong password. Always false.
    pub async fn verify_missing(&self, plaintext: &str) -> AuthErrorResult<bool> {
        let iterations = self.iterations;
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || {
            derive_key(&plaintext, &[0u8; SALT_LENGTH], iterations, DERIVED_KEY_LENGTH);
            false
        })
        .await
        .map_err(|e| AuthError::credential(format!("password verification task failed: {e}")))
    }

    pub fn derive_blocking(&self, plaintext: &str) -> AuthErrorResult<String> {
        let mut salt = vec![0u8; SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| AuthError::credential(format!("secure random source failed: {e}")))?;

        let derived_key = derive_key(plaintext, &salt, self.iterations, DERIVED_KEY_LENGTH);
        debug!("Derived password record with {} iterations", self.iterations);

        Ok(PasswordBlob::new(salt, self.iterations, derived_key).encode())
    }

    /// Uses the salt and iteration count stored in the record, not this
    /// codec's configured count, so records survive a config change.
    pub fn verify_blocking(plaintext: &str, stored: &str) -> bool {
        let blob = match PasswordBlob::decode(stored) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Rejecting malformed password record: {}", e);
                return false;
            }
        };

        let candidate = derive_key(
            plaintext,
            blob.salt(),
            blob.iterations(),
            blob.derived_key().len(),
        );
        constant_time_eq(&candidate, blob.derived_key())
    }
}

fn derive_key(plaintext: &str, salt: &[u8], iterations: u32, key_len: usize) -> Vec<u8> {
    let mut key = vec![0u8; key_len];
    pbkdf2_hmac::<Sha512>(plaintext.as_bytes(), salt, iterations, &mut key);
    key
}
