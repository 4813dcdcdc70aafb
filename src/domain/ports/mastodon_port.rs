//! Mastodon API ports consumed by the account panel.

use async_trait::async_trait;

use crate::domain::entities::{AccountRecord, AccountRef, InstanceInfo, NotificationItem};
use crate::domain::errors::MastodonError;

/// Resolves an account reference into its full profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountDetailsPort: Send + Sync {
    /// Fetches the authenticated account's profile.
    async fn retrieve_account_details(
        &self,
        account: &AccountRef,
    ) -> Result<AccountRecord, MastodonError>;
}

/// Reports the version of an account's home instance.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InstanceInfoPort: Send + Sync {
    /// Returns parsed instance information.
    async fn instance_info(&self, account: &AccountRef) -> Result<InstanceInfo, MastodonError>;
}

/// Source of raw notifications for the poller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSourcePort: Send + Sync {
    /// Fetches notifications newer than `since_id`, newest first.
    async fn fetch_notifications(
        &self,
        account: &AccountRef,
        since_id: Option<String>,
    ) -> Result<Vec<NotificationItem>, MastodonError>;
}
