//! Keyring-based access token storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::{AccessToken, AccountId};
use crate::domain::errors::StorageError;
use crate::domain::ports::TokenStoragePort;

const KEYRING_SERVICE: &str = "mastoterm";

/// System keyring storage, one entry per account.
pub struct KeyringTokenStorage {
    service: String,
}

impl KeyringTokenStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(KEYRING_SERVICE)
    }

    #[must_use]
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, account: &AccountId) -> Result<Entry, StorageError> {
        Entry::new(&self.service, account.as_str())
            .map_err(|e| StorageError::AccessFailed(format!("failed to access keyring: {e}")))
    }
}

impl Default for KeyringTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStoragePort for KeyringTokenStorage {
    async fn get_token(&self, account: &AccountId) -> Result<Option<AccessToken>, StorageError> {
        debug!(service = %self.service, account = %account, "Retrieving token from keyring");

        match self.entry(account)?.get_password() {
            Ok(password) => Ok(AccessToken::new(password)),
            Err(keyring::Error::NoEntry) => {
                debug!(account = %account, "No token stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve token from keyring");
                Err(StorageError::RetrievalFailed(e.to_string()))
            }
        }
    }

    async fn store_token(
        &self,
        account: &AccountId,
        token: &AccessToken,
    ) -> Result<(), StorageError> {
        debug!(service = %self.service, account = %account, "Storing token in keyring");

        self.entry(account)?
            .set_password(token.as_str())
            .map_err(|e| {
                warn!(error = %e, "Failed to store token in keyring");
                StorageError::StorageFailed(e.to_string())
            })
    }

    async fn delete_token(&self, account: &AccountId) -> Result<(), StorageError> {
        debug!(service = %self.service, account = %account, "Deleting token from keyring");

        match self.entry(account)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Failed to delete token from keyring");
                Err(StorageError::DeletionFailed(e.to_string()))
            }
        }
    }
}
