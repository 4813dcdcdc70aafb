//! Domain entity definitions.

mod account;
mod instance;
mod notification;
mod panel;
mod settings;
mod status;
mod token;

pub use account::{AccountId, AccountRecord, AccountRef};
pub use instance::{BOOKMARKS_MIN_VERSION, InstanceInfo, InstanceKind};
pub use notification::{BadgeState, NotificationItem, NotificationKind, NotificationSnapshot};
pub use panel::Panel;
pub use settings::{AccountSettings, DisplaySettings, avatar_notifications_enabled};
pub use status::OpenThreadEvent;
pub use token::AccessToken;
