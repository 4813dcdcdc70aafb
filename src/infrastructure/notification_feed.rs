//! In-memory notification feed shared by all account panels.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};
use tracing::trace;

use crate::domain::entities::{AccountId, NotificationKind, NotificationSnapshot};
use crate::domain::ports::{FeedListener, FeedSubscription, NotificationFeedPort};

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: BTreeMap<u64, Arc<FeedListener>>,
}

/// Observable list of per-account notification flags.
///
/// Listeners run synchronously on the publishing thread, outside the
/// snapshot and listener locks. Publications are serialized, so listeners
/// observe updates in write order and the last delivery matches
/// [`NotificationFeedPort::current`]. A listener must not wait on another
/// thread that writes to the feed.
#[derive(Default)]
pub struct UserNotificationFeed {
    publishing: ReentrantMutex<()>,
    current: Mutex<Vec<NotificationSnapshot>>,
    listeners: Arc<Mutex<Listeners>>,
}

impl UserNotificationFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole snapshot list and notifies listeners.
    pub fn publish(&self, snapshots: Vec<NotificationSnapshot>) {
        let _publishing = self.publishing.lock();
        *self.current.lock() = snapshots.clone();
        self.notify(&snapshots);
    }

    /// Sets one flag for an account, creating its snapshot when needed.
    pub fn raise(&self, account_id: &AccountId, kind: NotificationKind) {
        self.update(account_id, kind, true);
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }

    fn update(&self, account_id: &AccountId, kind: NotificationKind, value: bool) {
        let _publishing = self.publishing.lock();
        let snapshots = {
            let mut current = self.current.lock();
            match current.iter_mut().find(|s| &s.account_id == account_id) {
                Some(snapshot) => snapshot.set(kind, value),
                None if value => {
                    let mut snapshot = NotificationSnapshot::new(account_id.clone());
                    snapshot.set(kind, true);
                    current.push(snapshot);
                }
                None => return,
            }
            current.clone()
        };
        self.notify(&snapshots);
    }

    fn notify(&self, snapshots: &[NotificationSnapshot]) {
        let listeners: Vec<Arc<FeedListener>> =
            self.listeners.lock().entries.values().cloned().collect();

        trace!(listeners = listeners.len(), "Publishing notification snapshots");
        for listener in listeners {
            listener(snapshots);
        }
    }
}

impl NotificationFeedPort for UserNotificationFeed {
    fn current(&self) -> Vec<NotificationSnapshot> {
        self.current.lock().clone()
    }

    fn subscribe(&self, listener: FeedListener) -> FeedSubscription {
        let id = {
            let mut listeners = self.listeners.lock();
            listeners.next_id += 1;
            let id = listeners.next_id;
            listeners.entries.insert(id, Arc::new(listener));
            id
        };

        let listeners = Arc::clone(&self.listeners);
        FeedSubscription::new(move || {
            listeners.lock().entries.remove(&id);
        })
    }

    fn mark_as_read(&self, account_id: &AccountId, kind: NotificationKind) {
        self.update(account_id, kind, false);
    }
}
