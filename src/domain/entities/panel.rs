//! Account sub-panel selector.

use std::fmt;
use std::str::FromStr;

/// Sub-panel shown for an account. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Account,
    Notifications,
    Mentions,
    DirectMessages,
    Favorites,
    Bookmarks,
}

impl Panel {
    /// All panels in display order.
    pub const ALL: [Self; 6] = [
        Self::Account,
        Self::Notifications,
        Self::Mentions,
        Self::DirectMessages,
        Self::Favorites,
        Self::Bookmarks,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Notifications => "notifications",
            Self::Mentions => "mentions",
            Self::DirectMessages => "dm",
            Self::Favorites => "favorites",
            Self::Bookmarks => "bookmarks",
        }
    }

    /// Returns whether the panel lists statuses and can scroll.
    #[must_use]
    pub const fn is_timeline(self) -> bool {
        !matches!(self, Self::Account)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Panel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "account" => Ok(Self::Account),
            "notifications" => Ok(Self::Notifications),
            "mentions" => Ok(Self::Mentions),
            "dm" | "direct" | "direct_messages" => Ok(Self::DirectMessages),
            "favorites" | "favourites" => Ok(Self::Favorites),
            "bookmarks" => Ok(Self::Bookmarks),
            other => Err(format!("unknown panel: {other}")),
        }
    }
}
