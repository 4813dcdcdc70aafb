use serde::{Deserialize, Serialize};

/// Global display toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Hide notification badges on account avatars.
    #[serde(default)]
    pub disable_avatar_notifications: bool,

    /// Never switch panels automatically on new notifications.
    #[serde(default)]
    pub disable_autofocus: bool,
}

/// Per-account display toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    /// Hide notification badges for this account only.
    #[serde(default)]
    pub disable_avatar_notifications: bool,
}

/// Returns whether badges may be shown for an account.
#[must_use]
pub const fn avatar_notifications_enabled(
    settings: &DisplaySettings,
    account: &AccountSettings,
) -> bool {
    !settings.disable_avatar_notifications && !account.disable_avatar_notifications
}
