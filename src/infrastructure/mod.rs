//! Infrastructure layer with external service adapters.

/// External browser launching.
pub mod browser;
/// Application configuration.
pub mod config;
/// Mastodon API client and poller.
pub mod mastodon;
/// Shared notification feed.
pub mod notification_feed;
/// Error notifications.
pub mod notifications;
/// Token storage adapters.
pub mod storage;

pub use browser::SystemBrowser;
pub use config::{AppConfig, CliArgs, ConfigSettingsProvider, LogLevel, StorageManager};
pub use mastodon::{MastodonClient, NotificationPoller};
pub use notification_feed::UserNotificationFeed;
pub use notifications::DesktopErrorSink;
pub use storage::KeyringTokenStorage;
