//! In-memory identity store.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{IdentityStore, IdentityStoreError, StoredIdentity};
use crate::domain::user::EmailAddress;

/// Identity store backed by a grow-only in-memory list.
///
/// This is the demo stand-in for a real identity service: it starts from a
/// fixed identity set and accepts registrations for the lifetime of the
/// process.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    identities: Mutex<Vec<StoredIdentity>>,
}

impl InMemoryIdentityStore {
    /// Creates a store seeded with `identities`.
    pub fn new(identities: Vec<StoredIdentity>) -> Self {
        Self {
            identities: Mutex::new(identities),
        }
    }

    /// Number of identities currently held.
    pub fn len(&self) -> usize {
        self.identities.lock().map_or(0, |guard| guard.len())
    }

    /// Whether the store holds no identities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredIdentity>, IdentityStoreError> {
        let identities = self
            .identities
            .lock()
            .map_err(|_| IdentityStoreError::backend("identity list lock poisoned"))?;
        Ok(identities
            .iter()
            .find(|identity| identity.profile().email() == email)
            .cloned())
    }

    async fn create(&self, identity: StoredIdentity) -> Result<(), IdentityStoreError> {
        let mut identities = self
            .identities
            .lock()
            .map_err(|_| IdentityStoreError::backend("identity list lock poisoned"))?;
        if identities
            .iter()
            .any(|existing| existing.profile().email() == identity.profile().email())
        {
            return Err(IdentityStoreError::duplicate_email(
                identity.profile().email().as_str(),
            ));
        }
        identities.push(identity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;
    use crate::domain::user::{Role, UserProfile};

    fn identity(email: &str) -> StoredIdentity {
        let profile = UserProfile::new(
            "id-1",
            "Some Traveller",
            EmailAddress::new(email).expect("valid email"),
            Role::User,
            None,
        )
        .expect("valid profile");
        StoredIdentity::new(profile, "password")
    }

    #[tokio::test]
    async fn finds_identities_by_exact_email() {
        let store = InMemoryIdentityStore::new(vec![identity("user@example.com")]);

        let found = store
            .find_by_email(&EmailAddress::new("user@example.com").expect("valid email"))
            .await
            .expect("lookup succeeds");
        assert!(found.is_some());

        let missing = store
            .find_by_email(&EmailAddress::new("other@example.com").expect("valid email"))
            .await
            .expect("lookup succeeds");
        assert!(missing.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_emails() {
        let store = InMemoryIdentityStore::new(vec![identity("user@example.com")]);

        let err = store
            .create(identity("user@example.com"))
            .await
            .expect_err("duplicate must be rejected");
        assert_eq!(
            err,
            IdentityStoreError::duplicate_email("user@example.com")
        );
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn create_appends_fresh_identities() {
        let store = InMemoryIdentityStore::default();
        assert!(store.is_empty());

        store
            .create(identity("fresh@example.com"))
            .await
            .expect("create succeeds");
        assert_eq!(store.len(), 1);
    }
}
