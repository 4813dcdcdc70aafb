//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AccountRef, NotificationSnapshot, Panel};
pub use errors::MastodonError;
pub use ports::{AccountDetailsPort, InstanceInfoPort, NotificationFeedPort, SettingsPort};
