use crate::domain::entities::{AccountRef, AccountSettings, DisplaySettings};

/// Read-only access to display settings.
pub trait SettingsPort: Send + Sync {
    /// Returns global display settings.
    fn settings(&self) -> DisplaySettings;

    /// Returns settings for one account.
    fn account_settings(&self, account: &AccountRef) -> AccountSettings;
}
