//! Settings adapter backed by the loaded configuration.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::app_config::AppConfig;
use crate::domain::entities::{AccountId, AccountRef, AccountSettings, DisplaySettings};
use crate::domain::ports::SettingsPort;

/// Serves display settings from [`AppConfig`].
pub struct ConfigSettingsProvider {
    display: RwLock<DisplaySettings>,
    accounts: RwLock<HashMap<AccountId, AccountSettings>>,
}

impl ConfigSettingsProvider {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let accounts = config
            .accounts
            .iter()
            .map(|a| (a.account_ref().id().clone(), a.settings()))
            .collect();

        Self {
            display: RwLock::new(config.display),
            accounts: RwLock::new(accounts),
        }
    }

    /// Replaces the global settings.
    pub fn set_display(&self, display: DisplaySettings) {
        *self.display.write() = display;
    }

    /// Replaces the settings of one account.
    pub fn set_account(&self, account: &AccountId, settings: AccountSettings) {
        self.accounts.write().insert(account.clone(), settings);
    }
}

impl SettingsPort for ConfigSettingsProvider {
    fn settings(&self) -> DisplaySettings {
        *self.display.read()
    }

    fn account_settings(&self, account: &AccountRef) -> AccountSettings {
        self.accounts
            .read()
            .get(account.id())
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::AccountConfig;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.display.disable_autofocus = true;
        config.accounts.push(AccountConfig {
            username: "alice".to_string(),
            instance: "mastodon.social".to_string(),
            id: None,
            disable_avatar_notifications: true,
        });
        config
    }

    #[test]
    fn test_reads_global_and_account_settings() {
        let provider = ConfigSettingsProvider::from_config(&config());

        assert!(provider.settings().disable_autofocus);
        let alice = AccountRef::new("alice", "mastodon.social");
        assert!(provider.account_settings(&alice).disable_avatar_notifications);
    }

    #[test]
    fn test_unknown_account_gets_defaults() {
        let provider = ConfigSettingsProvider::from_config(&config());

        let stranger = AccountRef::new("carol", "example.social");
        assert_eq!(
            provider.account_settings(&stranger),
            AccountSettings::default()
        );
    }

    #[test]
    fn test_updates_are_visible() {
        let provider = ConfigSettingsProvider::from_config(&config());

        provider.set_display(DisplaySettings::default());
        let alice = AccountRef::new("alice", "mastodon.social");
        provider.set_account(alice.id(), AccountSettings::default());

        assert!(!provider.settings().disable_autofocus);
        assert!(!provider.account_settings(&alice).disable_avatar_notifications);
    }
}
