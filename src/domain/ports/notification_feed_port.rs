//! Notification feed port and its subscription handle.

use std::fmt;

use crate::domain::entities::{AccountId, NotificationKind, NotificationSnapshot};

/// Callback invoked with the full snapshot list on every feed update.
pub type FeedListener = Box<dyn Fn(&[NotificationSnapshot]) + Send + Sync>;

/// Observable list of per-account notification snapshots.
pub trait NotificationFeedPort: Send + Sync {
    /// Returns the cached current value.
    fn current(&self) -> Vec<NotificationSnapshot>;

    /// Registers a listener. It stays registered until the returned handle
    /// is disposed or dropped.
    fn subscribe(&self, listener: FeedListener) -> FeedSubscription;

    /// Clears one flag for an account and republishes.
    fn mark_as_read(&self, account_id: &AccountId, kind: NotificationKind);
}

/// Single-owner disposal handle for a feed listener.
///
/// Disposal runs exactly once, either through [`FeedSubscription::dispose`]
/// or on drop.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct FeedSubscription {
    dispose: Option<Box<dyn FnOnce() + Send>>,
}

impl FeedSubscription {
    pub fn new(dispose: impl FnOnce() + Send + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    /// Unregisters the listener.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for FeedSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedSubscription")
            .field("active", &self.dispose.is_some())
            .finish()
    }
}
