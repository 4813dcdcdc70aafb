//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::entities::{AccountRef, AccountSettings, DisplaySettings};

pub(crate) const APP_NAME: &str = "mastoterm";
pub(crate) const APP_QUALIFIER: &str = "org";
pub(crate) const APP_ORGANIZATION: &str = "mastoterm";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A connected account as declared in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Username on the home instance.
    pub username: String,

    /// Home instance host name.
    pub instance: String,

    /// Explicit account id. Defaults to `username@instance`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Hide notification badges for this account.
    #[serde(default)]
    pub disable_avatar_notifications: bool,
}

impl AccountConfig {
    #[must_use]
    pub fn account_ref(&self) -> AccountRef {
        match &self.id {
            Some(id) => AccountRef::with_id(id.as_str(), &self.username, &self.instance),
            None => AccountRef::new(&self.username, &self.instance),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> AccountSettings {
        AccountSettings {
            disable_avatar_notifications: self.disable_avatar_notifications,
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Access token passed on the command line.
    #[serde(skip)]
    pub token: Option<String>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Raise desktop notifications for API errors.
    #[serde(default = "default_true")]
    pub enable_desktop_notifications: bool,

    /// Seconds between notification polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Account shown at startup (`user@instance`).
    #[serde(default)]
    pub default_account: Option<String>,

    /// Global display settings.
    #[serde(default)]
    pub display: DisplaySettings,

    /// Connected accounts.
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

fn default_true() -> bool {
    true
}

fn default_poll_interval() -> u64 {
    60
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(token) = args.token {
            self.token = Some(token);
        }
        if let Some(account) = args.account {
            self.default_account = Some(account);
        }
        if let Some(poll_interval) = args.poll_interval {
            self.poll_interval_secs = poll_interval;
        }
        if let Some(notifications) = args.enable_desktop_notifications {
            self.enable_desktop_notifications = notifications;
        }
        if let Some(disable_autofocus) = args.disable_autofocus {
            self.display.disable_autofocus = disable_autofocus;
        }
        if let Some(disable_badges) = args.disable_avatar_notifications {
            self.display.disable_avatar_notifications = disable_badges;
        }
    }

    /// Returns configured accounts as references.
    #[must_use]
    pub fn account_refs(&self) -> Vec<AccountRef> {
        self.accounts.iter().map(AccountConfig::account_ref).collect()
    }

    /// Returns the account to show first.
    ///
    /// Falls back to the first configured account when `default_account`
    /// is unset or unknown.
    #[must_use]
    pub fn initial_account(&self) -> Option<AccountRef> {
        let accounts = self.account_refs();
        self.default_account
            .as_deref()
            .and_then(|wanted| AccountRef::find(&accounts, wanted).cloned())
            .or_else(|| accounts.into_iter().next())
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("mastoterm.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            token: None,
            log_level: LogLevel::Info,
            enable_desktop_notifications: true,
            poll_interval_secs: default_poll_interval(),
            default_account: None,
            display: DisplaySettings::default(),
            accounts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        log_level = "debug"
        poll_interval_secs = 30
        default_account = "bob@fosstodon.org"

        [display]
        disable_autofocus = true

        [[accounts]]
        username = "alice"
        instance = "mastodon.social"

        [[accounts]]
        username = "bob"
        instance = "fosstodon.org"
        disable_avatar_notifications = true
    "#;

    #[test]
    fn test_parse_config() {
        let config: AppConfig = toml::from_str(SAMPLE).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.poll_interval_secs, 30);
        assert!(config.display.disable_autofocus);
        assert!(!config.display.disable_avatar_notifications);
        assert_eq!(config.accounts.len(), 2);
        assert!(config.accounts[1].settings().disable_avatar_notifications);
        assert!(config.enable_desktop_notifications);
    }

    #[test]
    fn test_initial_account_prefers_default() {
        let config: AppConfig = toml::from_str(SAMPLE).unwrap();

        let account = config.initial_account().unwrap();
        assert_eq!(account.username(), "bob");
    }

    #[test]
    fn test_initial_account_falls_back_to_first() {
        let mut config: AppConfig = toml::from_str(SAMPLE).unwrap();
        config.default_account = Some("@nobody@nowhere".to_string());

        let account = config.initial_account().unwrap();
        assert_eq!(account.username(), "alice");
    }

    #[test]
    fn test_explicit_account_id() {
        let account = AccountConfig {
            username: "alice".to_string(),
            instance: "mastodon.social".to_string(),
            id: Some("acc-1".to_string()),
            disable_avatar_notifications: false,
        };

        assert_eq!(account.account_ref().id().as_str(), "acc-1");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.accounts.is_empty());
        assert!(config.initial_account().is_none());
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.display, DisplaySettings::default());
    }
}
