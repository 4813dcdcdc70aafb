//! Port definitions for external collaborators.

mod browser_port;
mod error_sink_port;
mod mastodon_port;
mod notification_feed_port;
mod settings_port;
mod token_storage_port;

pub use browser_port::BrowserPort;
pub use error_sink_port::ErrorSinkPort;
pub use mastodon_port::{AccountDetailsPort, InstanceInfoPort, NotificationSourcePort};
pub use notification_feed_port::{FeedListener, FeedSubscription, NotificationFeedPort};
pub use settings_port::SettingsPort;
pub use token_storage_port::TokenStoragePort;
