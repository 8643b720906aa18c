mod confirmation;

use crate::{PasswordCodec, SessionTokenService};

use dh_core::{Identity, StoreError, StoreResult, UserStore};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
/// Low count so derivation stays fast in tests
pub(crate) const TEST_ITERATIONS: u32 = 16;

/// In-memory store keyed by email, with a switch to simulate backend failure
#[derive(Default)]
pub(crate) struct MemoryUserStore {
    records: Mutex<HashMap<String, Identity>>,
    failing: AtomicBool,
    lookups: AtomicUsize,
}

impl MemoryUserStore {
    pub(crate) fn with(identities: Vec<Identity>) -> Self {
        let store = Self::default();
        {
            let mut records = store.records.lock().unwrap();
            for identity in identities {
                records.insert(identity.email.clone(), identity);
            }
        }
        store
    }

    pub(crate) fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub(crate) fn get(&self, email: &str) -> Option<Identity> {
        self.records.lock().unwrap().get(email).cloned()
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::backend("store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.get(email))
    }

    async fn find_unconfirmed_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.get(email).filter(|identity| !identity.is_email_confirmed))
    }

    async fn insert(&self, identity: &Identity) -> StoreResult<()> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&identity.email) {
            return Err(StoreError::duplicate("email"));
        }
        records.insert(identity.email.clone(), identity.clone());
        Ok(())
    }

    async fn update(&self, identity: &Identity) -> StoreResult<()> {
        self.check()?;
        self.records
            .lock()
            .unwrap()
            .insert(identity.email.clone(), identity.clone());
        Ok(())
    }
}

pub(crate) fn codec() -> PasswordCodec {
    PasswordCodec::new(TEST_ITERATIONS).unwrap()
}

pub(crate) fn sessions() -> SessionTokenService {
    SessionTokenService::with_hs256(TEST_SECRET)
}

pub(crate) fn auth_header(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// Confirmed identity whose stored password is `password`
pub(crate) fn identity_with_password(email: &str, password: &str, is_admin: bool) -> Identity {
    let mut identity = Identity::new(email.to_string(), "Test User".to_string());
    identity.password = codec().derive_blocking(password).unwrap();
    identity.is_email_confirmed = true;
    identity.is_admin = is_admin;
    identity
}
