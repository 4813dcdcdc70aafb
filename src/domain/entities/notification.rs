use serde::{Deserialize, Serialize};

use super::AccountId;

/// Notification categories tracked by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Any notification.
    Notification,
    /// Mentions only.
    Mention,
}

/// Latest known notification flags for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSnapshot {
    pub account_id: AccountId,
    pub has_new_notifications: bool,
    pub has_new_mentions: bool,
}

impl NotificationSnapshot {
    #[must_use]
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: account_id.into(),
            has_new_notifications: false,
            has_new_mentions: false,
        }
    }

    #[must_use]
    pub const fn with_notifications(mut self, value: bool) -> Self {
        self.has_new_notifications = value;
        self
    }

    #[must_use]
    pub const fn with_mentions(mut self, value: bool) -> Self {
        self.has_new_mentions = value;
        self
    }

    pub fn set(&mut self, kind: NotificationKind, value: bool) {
        match kind {
            NotificationKind::Notification => self.has_new_notifications = value,
            NotificationKind::Mention => self.has_new_mentions = value,
        }
    }

    /// Finds the snapshot for the given account.
    #[must_use]
    pub fn find<'a>(snapshots: &'a [Self], account_id: &AccountId) -> Option<&'a Self> {
        snapshots.iter().find(|s| &s.account_id == account_id)
    }
}

/// Badge flags mirrored onto an account avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BadgeState {
    pub has_notifications: bool,
    pub has_mentions: bool,
}

impl From<&NotificationSnapshot> for BadgeState {
    fn from(snapshot: &NotificationSnapshot) -> Self {
        Self {
            has_notifications: snapshot.has_new_notifications,
            has_mentions: snapshot.has_new_mentions,
        }
    }
}

/// Raw notification as listed by `/api/v1/notifications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NotificationItem {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }

    #[must_use]
    pub fn is_mention(&self) -> bool {
        self.kind == "mention"
    }
}
