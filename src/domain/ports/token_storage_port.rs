//! Access token storage port definition.

use async_trait::async_trait;

use crate::domain::entities::{AccessToken, AccountId};
use crate::domain::errors::StorageError;

/// Port for per-account token persistence.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves the stored token for an account.
    async fn get_token(&self, account: &AccountId) -> Result<Option<AccessToken>, StorageError>;

    /// Stores a token securely.
    async fn store_token(&self, account: &AccountId, token: &AccessToken)
    -> Result<(), StorageError>;

    /// Deletes the stored token.
    async fn delete_token(&self, account: &AccountId) -> Result<(), StorageError>;

    /// Checks if a token exists.
    async fn has_token(&self, account: &AccountId) -> Result<bool, StorageError> {
        Ok(self.get_token(account).await?.is_some())
    }
}
