//! Periodic notification polling feeding the shared notification feed.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::domain::entities::{AccountId, AccountRef, NotificationKind};
use crate::domain::ports::NotificationSourcePort;
use crate::infrastructure::notification_feed::UserNotificationFeed;

/// Polls every account for new notifications and raises feed flags.
pub struct NotificationPoller {
    source: Arc<dyn NotificationSourcePort>,
    feed: Arc<UserNotificationFeed>,
    accounts: Vec<AccountRef>,
    last_seen: HashMap<AccountId, String>,
}

impl NotificationPoller {
    #[must_use]
    pub fn new(
        source: Arc<dyn NotificationSourcePort>,
        feed: Arc<UserNotificationFeed>,
        accounts: Vec<AccountRef>,
    ) -> Self {
        Self {
            source,
            feed,
            accounts,
            last_seen: HashMap::new(),
        }
    }

    /// Polls all accounts once.
    ///
    /// The first successful poll of an account only records a baseline.
    pub async fn poll_once(&mut self) {
        for account in &self.accounts {
            let since_id = self.last_seen.get(account.id()).cloned();
            let baseline = since_id.is_none();

            let items = match self.source.fetch_notifications(account, since_id).await {
                Ok(items) => items,
                Err(e) => {
                    warn!(account = %account.id(), error = %e, "Notification poll failed");
                    continue;
                }
            };

            let Some(newest) = items.first() else {
                if baseline {
                    self.last_seen.insert(account.id().clone(), String::from("0"));
                }
                continue;
            };
            self.last_seen
                .insert(account.id().clone(), newest.id.clone());

            if baseline {
                debug!(account = %account.id(), newest = %newest.id, "Notification baseline recorded");
                continue;
            }

            debug!(account = %account.id(), count = items.len(), "New notifications");
            self.feed.raise(account.id(), NotificationKind::Notification);
            if items.iter().any(|n| n.is_mention()) {
                self.feed.raise(account.id(), NotificationKind::Mention);
            }
        }
    }

    /// Runs the poller on a background task.
    pub fn spawn(mut self, period: Duration) -> JoinHandle<()> {
        info!(
            accounts = self.accounts.len(),
            period_secs = period.as_secs(),
            "Starting notification poller"
        );

        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                self.poll_once().await;
            }
        })
    }
}
