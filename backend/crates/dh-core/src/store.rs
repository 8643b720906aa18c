use crate::{Identity, StoreResult};

use async_trait::async_trait;

/// Document-store operations the credential core needs for identities.
///
/// Email uniqueness is the store's responsibility: `insert` must fail with
/// `StoreError::Duplicate` rather than create a second record for an email.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>>;

    /// Lookup restricted to identities whose email is not yet confirmed
    async fn find_unconfirmed_by_email(&self, email: &str) -> StoreResult<Option<Identity>>;

    async fn insert(&self, identity: &Identity) -> StoreResult<()>;

    async fn update(&self, identity: &Identity) -> StoreResult<()>;
}
