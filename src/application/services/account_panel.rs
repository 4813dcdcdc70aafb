//! Per-account panel coordination.
//!
//! An [`AccountPanelCoordinator`] is created for each displayed account. It
//! owns the active sub-panel, mirrors notification badges from the shared
//! feed, and resolves the account's profile and server capabilities in the
//! background. Background results come back as [`PanelAction`]s and must be
//! applied on the owning event loop through [`AccountPanelCoordinator::handle_action`].

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::entities::{
    AccountRecord, AccountRef, BadgeState, InstanceInfo, NotificationKind, NotificationSnapshot,
    OpenThreadEvent, Panel, avatar_notifications_enabled,
};
use crate::domain::errors::MastodonError;
use crate::domain::ports::{
    AccountDetailsPort, BrowserPort, ErrorSinkPort, FeedListener, FeedSubscription,
    InstanceInfoPort, NotificationFeedPort, SettingsPort,
};

/// Scroll capability exposed by panel sub-views.
pub trait PanelView: Send {
    /// Moves the view back to its newest item.
    fn scroll_to_top(&mut self);
}

/// Events emitted to the containing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    BrowseAccount(String),
    BrowseHashtag(String),
    BrowseThread(OpenThreadEvent),
}

/// Background results delivered back to the coordinator.
#[derive(Debug)]
pub enum PanelAction {
    InstanceProbed {
        generation: u64,
        result: Result<InstanceInfo, MastodonError>,
    },
    AccountLoaded {
        generation: u64,
        result: Result<AccountRecord, MastodonError>,
    },
    FeedUpdated {
        generation: u64,
        snapshots: Vec<NotificationSnapshot>,
    },
}

impl PanelAction {
    const fn generation(&self) -> u64 {
        match self {
            Self::InstanceProbed { generation, .. }
            | Self::AccountLoaded { generation, .. }
            | Self::FeedUpdated { generation, .. } => *generation,
        }
    }
}

/// Outcome of [`AccountPanelCoordinator::select_panel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSelection {
    Switched { from: Panel, to: Panel },
    ScrolledToTop(Panel),
}

/// Collaborators required by a coordinator.
#[derive(Clone)]
pub struct PanelServices {
    pub instance_info: Arc<dyn InstanceInfoPort>,
    pub account_details: Arc<dyn AccountDetailsPort>,
    pub feed: Arc<dyn NotificationFeedPort>,
    pub settings: Arc<dyn SettingsPort>,
    pub error_sink: Arc<dyn ErrorSinkPort>,
    pub browser: Arc<dyn BrowserPort>,
}

/// Mediates between one account, the notification feed and the active panel.
pub struct AccountPanelCoordinator {
    services: PanelServices,
    events: mpsc::UnboundedSender<PanelEvent>,
    action_tx: mpsc::UnboundedSender<PanelAction>,
    action_rx: mpsc::UnboundedReceiver<PanelAction>,
    account: Option<AccountRef>,
    generation: u64,
    subscription: Option<FeedSubscription>,
    active_panel: Panel,
    badges: BadgeState,
    bookmarks_available: bool,
    account_record: Option<AccountRecord>,
    views: HashMap<Panel, Box<dyn PanelView>>,
}

impl AccountPanelCoordinator {
    #[must_use]
    pub fn new(services: PanelServices, events: mpsc::UnboundedSender<PanelEvent>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            services,
            events,
            action_tx,
            action_rx,
            account: None,
            generation: 0,
            subscription: None,
            active_panel: Panel::default(),
            badges: BadgeState::default(),
            bookmarks_available: false,
            account_record: None,
            views: HashMap::new(),
        }
    }

    /// Attaches the view backing a panel.
    pub fn attach_view(&mut self, panel: Panel, view: Box<dyn PanelView>) {
        self.views.insert(panel, view);
    }

    /// Assigns the displayed account and restarts every derived lookup.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn assign(&mut self, account: AccountRef) {
        self.generation += 1;
        let generation = self.generation;

        info!(account = %account.id(), generation, "Assigning account to panel");

        self.account = Some(account.clone());
        self.probe_instance(&account, generation);
        self.fetch_account_record(&account, generation);
        self.subscribe_notifications(&account, generation);
    }

    fn probe_instance(&self, account: &AccountRef, generation: u64) {
        let port = Arc::clone(&self.services.instance_info);
        let tx = self.action_tx.clone();
        let account = account.clone();

        tokio::spawn(async move {
            let result = port.instance_info(&account).await;
            let _ = tx.send(PanelAction::InstanceProbed { generation, result });
        });
    }

    fn fetch_account_record(&self, account: &AccountRef, generation: u64) {
        let port = Arc::clone(&self.services.account_details);
        let tx = self.action_tx.clone();
        let account = account.clone();

        tokio::spawn(async move {
            let result = port.retrieve_account_details(&account).await;
            let _ = tx.send(PanelAction::AccountLoaded { generation, result });
        });
    }

    fn subscribe_notifications(&mut self, account: &AccountRef, generation: u64) {
        if let Some(previous) = self.subscription.take() {
            debug!("Releasing previous notification subscription");
            previous.dispose();
        }

        let tx = self.action_tx.clone();
        let listener: FeedListener = Box::new(move |snapshots| {
            let _ = tx.send(PanelAction::FeedUpdated {
                generation,
                snapshots: snapshots.to_vec(),
            });
        });
        self.subscription = Some(self.services.feed.subscribe(listener));

        let current = self.services.feed.current();
        self.evaluate_notifications(&current);
        self.autofocus(&current, account);
    }

    /// Mirrors this account's flags into badge state unless badges are disabled.
    pub fn evaluate_notifications(&mut self, snapshots: &[NotificationSnapshot]) {
        let Some(account) = &self.account else {
            return;
        };
        let Some(snapshot) = NotificationSnapshot::find(snapshots, account.id()) else {
            return;
        };

        let settings = self.services.settings.settings();
        let account_settings = self.services.settings.account_settings(account);

        if avatar_notifications_enabled(&settings, &account_settings) {
            self.badges = BadgeState::from(snapshot);
        }
    }

    fn autofocus(&mut self, snapshots: &[NotificationSnapshot], account: &AccountRef) {
        let Some(snapshot) = NotificationSnapshot::find(snapshots, account.id()) else {
            return;
        };

        let settings = self.services.settings.settings();
        let account_settings = self.services.settings.account_settings(account);

        if settings.disable_autofocus || !avatar_notifications_enabled(&settings, &account_settings)
        {
            return;
        }

        if snapshot.has_new_notifications {
            self.select_panel(Panel::Notifications);
        } else if snapshot.has_new_mentions {
            self.select_panel(Panel::Mentions);
        }
    }

    /// Selects a panel, or scrolls it to top when it is already active.
    pub fn select_panel(&mut self, panel: Panel) -> PanelSelection {
        if self.active_panel == panel {
            if let Some(view) = self.views.get_mut(&panel) {
                view.scroll_to_top();
            }
            debug!(panel = %panel, "Panel reselected, scrolling to top");
            return PanelSelection::ScrolledToTop(panel);
        }

        let from = std::mem::replace(&mut self.active_panel, panel);
        debug!(from = %from, to = %panel, "Switched panel");
        self.mark_panel_read(panel);

        PanelSelection::Switched { from, to: panel }
    }

    fn mark_panel_read(&self, panel: Panel) {
        let Some(account) = &self.account else {
            return;
        };

        let kind = match panel {
            Panel::Notifications => NotificationKind::Notification,
            Panel::Mentions => NotificationKind::Mention,
            _ => return,
        };
        self.services.feed.mark_as_read(account.id(), kind);
    }

    /// Waits for the next background result.
    pub async fn next_action(&mut self) -> Option<PanelAction> {
        self.action_rx.recv().await
    }

    /// Returns an already delivered background result, if any.
    pub fn try_next_action(&mut self) -> Option<PanelAction> {
        self.action_rx.try_recv().ok()
    }

    /// Waits for and applies the next background result.
    pub async fn process_next(&mut self) {
        if let Some(action) = self.next_action().await {
            self.handle_action(action);
        }
    }

    /// Applies a background result. Results from a superseded assignment are dropped.
    pub fn handle_action(&mut self, action: PanelAction) {
        if action.generation() != self.generation {
            debug!(
                stale = action.generation(),
                current = self.generation,
                "Discarding result from previous account"
            );
            return;
        }

        match action {
            PanelAction::InstanceProbed { result, .. } => match result {
                Ok(info) => {
                    self.bookmarks_available = info.supports_bookmarks();
                    debug!(
                        instance = %info.instance,
                        version = %info.version,
                        kind = ?info.kind,
                        bookmarks = self.bookmarks_available,
                        "Instance capabilities resolved"
                    );
                }
                Err(e) => {
                    debug!(error = %e, "Instance probe failed, bookmarks unavailable");
                    self.bookmarks_available = false;
                }
            },
            PanelAction::AccountLoaded { result, .. } => match result {
                Ok(record) => {
                    debug!(url = %record.url, "Account details loaded");
                    self.account_record = Some(record);
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load account details");
                    if let Some(account) = &self.account {
                        self.services.error_sink.notify_http_error(&e, account);
                    }
                }
            },
            PanelAction::FeedUpdated { snapshots, .. } => {
                self.evaluate_notifications(&snapshots);
            }
        }
    }

    pub fn browse_account(&self, account_name: impl Into<String>) {
        self.emit(PanelEvent::BrowseAccount(account_name.into()));
    }

    pub fn browse_hashtag(&self, hashtag: impl Into<String>) {
        self.emit(PanelEvent::BrowseHashtag(hashtag.into()));
    }

    pub fn browse_thread(&self, event: OpenThreadEvent) {
        self.emit(PanelEvent::BrowseThread(event));
    }

    /// Browses the assigned account itself.
    pub fn browse_local_account(&self) {
        if let Some(account) = &self.account {
            self.browse_account(account.handle());
        }
    }

    /// Opens the account's public profile page.
    ///
    /// Returns `false` when the profile has not been loaded or no browser
    /// could be launched.
    pub fn open_local_account(&self) -> bool {
        let Some(record) = &self.account_record else {
            debug!("Account details not loaded yet");
            return false;
        };

        match self.services.browser.open_url(&record.url) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, url = %record.url, "Failed to open profile");
                false
            }
        }
    }

    fn emit(&self, event: PanelEvent) {
        if self.events.send(event).is_err() {
            debug!("Panel event receiver dropped");
        }
    }

    /// Tears the coordinator down and releases its feed subscription.
    pub fn destroy(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
        debug!(account = ?self.account.as_ref().map(AccountRef::id), "Account panel destroyed");
    }

    #[must_use]
    pub const fn account(&self) -> Option<&AccountRef> {
        self.account.as_ref()
    }

    #[must_use]
    pub const fn account_record(&self) -> Option<&AccountRecord> {
        self.account_record.as_ref()
    }

    #[must_use]
    pub const fn active_panel(&self) -> Panel {
        self.active_panel
    }

    #[must_use]
    pub const fn badges(&self) -> BadgeState {
        self.badges
    }

    #[must_use]
    pub const fn bookmarks_available(&self) -> bool {
        self.bookmarks_available
    }

    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AccountSettings, DisplaySettings};
    use crate::domain::ports::mocks::{
        MockAccountDetailsPort, MockBrowser, MockErrorSink, MockInstanceInfoPort,
        MockNotificationFeed, MockSettings,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_case::test_case;

    struct CountingView(Arc<AtomicUsize>);

    impl PanelView for CountingView {
        fn scroll_to_top(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Harness {
        feed: Arc<MockNotificationFeed>,
        settings: Arc<MockSettings>,
        error_sink: Arc<MockErrorSink>,
        browser: Arc<MockBrowser>,
        events: mpsc::UnboundedReceiver<PanelEvent>,
        coordinator: AccountPanelCoordinator,
    }

    fn alice() -> AccountRef {
        AccountRef::new("alice", "mastodon.social")
    }

    fn bob() -> AccountRef {
        AccountRef::new("bob", "fosstodon.org")
    }

    fn record_for(account: &AccountRef) -> AccountRecord {
        AccountRecord {
            id: "1".to_string(),
            username: account.username().to_string(),
            acct: account.username().to_string(),
            display_name: String::new(),
            url: format!("https://{}/@{}", account.instance(), account.username()),
            avatar: None,
            note: String::new(),
            followers_count: 0,
            following_count: 0,
            statuses_count: 0,
            created_at: None,
        }
    }

    fn instance_port(major: u32, minor: u32) -> MockInstanceInfoPort {
        let mut port = MockInstanceInfoPort::new();
        port.expect_instance_info()
            .returning(move |a| Ok(InstanceInfo::new(a.instance(), major, minor)));
        port
    }

    fn failing_instance_port() -> MockInstanceInfoPort {
        let mut port = MockInstanceInfoPort::new();
        port.expect_instance_info()
            .returning(|_| Err(MastodonError::network("connection refused")));
        port
    }

    fn details_port() -> MockAccountDetailsPort {
        let mut port = MockAccountDetailsPort::new();
        port.expect_retrieve_account_details()
            .returning(|a| Ok(record_for(a)));
        port
    }

    fn harness_with(
        instance: MockInstanceInfoPort,
        details: MockAccountDetailsPort,
        feed: MockNotificationFeed,
        settings: MockSettings,
    ) -> Harness {
        let feed = Arc::new(feed);
        let settings = Arc::new(settings);
        let error_sink = Arc::new(MockErrorSink::new());
        let browser = Arc::new(MockBrowser::default());
        let (events_tx, events) = mpsc::unbounded_channel();

        let services = PanelServices {
            instance_info: Arc::new(instance),
            account_details: Arc::new(details),
            feed: feed.clone(),
            settings: settings.clone(),
            error_sink: error_sink.clone(),
            browser: browser.clone(),
        };

        Harness {
            feed,
            settings,
            error_sink,
            browser,
            events,
            coordinator: AccountPanelCoordinator::new(services, events_tx),
        }
    }

    fn harness() -> Harness {
        harness_with(
            instance_port(4, 2),
            details_port(),
            MockNotificationFeed::new(),
            MockSettings::default(),
        )
    }

    async fn settle(coordinator: &mut AccountPanelCoordinator, lookups: usize) {
        for _ in 0..lookups {
            coordinator.process_next().await;
        }
    }

    #[test_case(3, 1, true ; "minimum_version")]
    #[test_case(2, 9, false ; "too_old")]
    #[test_case(4, 0, true ; "newer_major")]
    #[tokio::test]
    async fn test_bookmark_availability(major: u32, minor: u32, expected: bool) {
        let mut h = harness_with(
            instance_port(major, minor),
            details_port(),
            MockNotificationFeed::new(),
            MockSettings::default(),
        );

        h.coordinator.assign(alice());
        settle(&mut h.coordinator, 2).await;

        assert_eq!(h.coordinator.bookmarks_available(), expected);
    }

    #[tokio::test]
    async fn test_probe_failure_is_silent() {
        let mut h = harness_with(
            failing_instance_port(),
            details_port(),
            MockNotificationFeed::new(),
            MockSettings::default(),
        );

        h.coordinator.assign(alice());
        settle(&mut h.coordinator, 2).await;

        assert!(!h.coordinator.bookmarks_available());
        assert_eq!(h.error_sink.count(), 0);
        assert!(h.coordinator.account_record().is_some());
    }

    #[tokio::test]
    async fn test_fetch_failure_reports_and_keeps_previous_record() {
        let mut details = MockAccountDetailsPort::new();
        details
            .expect_retrieve_account_details()
            .withf(|a| a.username() == "alice")
            .returning(|a| Ok(record_for(a)));
        details
            .expect_retrieve_account_details()
            .withf(|a| a.username() == "bob")
            .returning(|_| Err(MastodonError::http(500, "internal error")));

        let mut h = harness_with(
            instance_port(4, 0),
            details,
            MockNotificationFeed::new(),
            MockSettings::default(),
        );

        h.coordinator.assign(alice());
        settle(&mut h.coordinator, 2).await;
        h.coordinator.assign(bob());
        settle(&mut h.coordinator, 2).await;

        assert_eq!(h.coordinator.account_record().unwrap().username, "alice");
        let errors = h.error_sink.errors.lock();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].1, bob());
    }

    #[tokio::test]
    async fn test_reselecting_panel_scrolls_to_top() {
        let mut h = harness();
        let scrolls = Arc::new(AtomicUsize::new(0));
        h.coordinator
            .attach_view(Panel::Favorites, Box::new(CountingView(scrolls.clone())));
        h.coordinator.assign(alice());

        let first = h.coordinator.select_panel(Panel::Favorites);
        let second = h.coordinator.select_panel(Panel::Favorites);

        assert_eq!(
            first,
            PanelSelection::Switched {
                from: Panel::Account,
                to: Panel::Favorites
            }
        );
        assert_eq!(second, PanelSelection::ScrolledToTop(Panel::Favorites));
        assert_eq!(h.coordinator.active_panel(), Panel::Favorites);
        assert_eq!(scrolls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reselecting_account_panel_is_noop() {
        let mut h = harness();
        h.coordinator.assign(alice());

        let outcome = h.coordinator.select_panel(Panel::Account);

        assert_eq!(outcome, PanelSelection::ScrolledToTop(Panel::Account));
        assert_eq!(h.coordinator.active_panel(), Panel::Account);
    }

    #[tokio::test]
    async fn test_unavailable_bookmarks_can_still_be_selected() {
        let mut h = harness_with(
            instance_port(2, 0),
            details_port(),
            MockNotificationFeed::new(),
            MockSettings::default(),
        );
        h.coordinator.assign(alice());
        settle(&mut h.coordinator, 2).await;

        h.coordinator.select_panel(Panel::Bookmarks);

        assert!(!h.coordinator.bookmarks_available());
        assert_eq!(h.coordinator.active_panel(), Panel::Bookmarks);
    }

    #[tokio::test]
    async fn test_feed_update_mirrors_badges() {
        let mut h = harness();
        h.coordinator.assign(alice());

        h.feed.emit(vec![
            NotificationSnapshot::new("alice@mastodon.social").with_mentions(true),
        ]);
        let action = h.coordinator.try_next_action().unwrap();
        h.coordinator.handle_action(action);

        assert_eq!(
            h.coordinator.badges(),
            BadgeState {
                has_notifications: false,
                has_mentions: true
            }
        );
    }

    #[tokio::test]
    async fn test_snapshot_without_account_leaves_badges() {
        let mut h = harness();
        h.coordinator.assign(alice());

        h.feed.emit(vec![
            NotificationSnapshot::new("alice@mastodon.social").with_notifications(true),
        ]);
        h.feed.emit(vec![
            NotificationSnapshot::new("bob@fosstodon.org").with_notifications(false),
        ]);
        while let Some(action) = h.coordinator.try_next_action() {
            h.coordinator.handle_action(action);
        }

        assert!(h.coordinator.badges().has_notifications);
    }

    #[tokio::test]
    async fn test_disabled_avatar_notifications_freeze_badges() {
        let mut h = harness_with(
            instance_port(4, 0),
            details_port(),
            MockNotificationFeed::with_current(vec![
                NotificationSnapshot::new("alice@mastodon.social").with_notifications(true),
            ]),
            MockSettings::new(
                DisplaySettings {
                    disable_avatar_notifications: true,
                    disable_autofocus: false,
                },
                AccountSettings::default(),
            ),
        );
        h.coordinator.assign(alice());

        h.feed.emit(vec![
            NotificationSnapshot::new("alice@mastodon.social")
                .with_notifications(true)
                .with_mentions(true),
        ]);
        while let Some(action) = h.coordinator.try_next_action() {
            h.coordinator.handle_action(action);
        }

        assert_eq!(h.coordinator.badges(), BadgeState::default());
        assert_eq!(h.coordinator.active_panel(), Panel::Account);
    }

    #[tokio::test]
    async fn test_per_account_setting_blocks_autofocus() {
        let mut h = harness_with(
            instance_port(4, 0),
            details_port(),
            MockNotificationFeed::with_current(vec![
                NotificationSnapshot::new("alice@mastodon.social").with_mentions(true),
            ]),
            MockSettings::new(
                DisplaySettings::default(),
                AccountSettings {
                    disable_avatar_notifications: true,
                },
            ),
        );

        h.coordinator.assign(alice());

        assert_eq!(h.coordinator.active_panel(), Panel::Account);
        assert_eq!(h.coordinator.badges(), BadgeState::default());
    }

    #[test_case(true, true, Panel::Notifications ; "notifications_win")]
    #[test_case(false, true, Panel::Mentions ; "mentions_only")]
    #[test_case(false, false, Panel::Account ; "nothing_new")]
    #[tokio::test]
    async fn test_autofocus_priority(notifications: bool, mentions: bool, expected: Panel) {
        let mut h = harness_with(
            instance_port(4, 0),
            details_port(),
            MockNotificationFeed::with_current(vec![
                NotificationSnapshot::new("alice@mastodon.social")
                    .with_notifications(notifications)
                    .with_mentions(mentions),
            ]),
            MockSettings::default(),
        );

        h.coordinator.assign(alice());

        assert_eq!(h.coordinator.active_panel(), expected);
        assert_eq!(h.coordinator.badges().has_notifications, notifications);
    }

    #[tokio::test]
    async fn test_disabled_autofocus_keeps_panel_but_shows_badges() {
        let mut h = harness_with(
            instance_port(4, 0),
            details_port(),
            MockNotificationFeed::with_current(vec![
                NotificationSnapshot::new("alice@mastodon.social").with_notifications(true),
            ]),
            MockSettings::new(
                DisplaySettings {
                    disable_avatar_notifications: false,
                    disable_autofocus: true,
                },
                AccountSettings::default(),
            ),
        );

        h.coordinator.assign(alice());

        assert_eq!(h.coordinator.active_panel(), Panel::Account);
        assert!(h.coordinator.badges().has_notifications);
    }

    #[tokio::test]
    async fn test_disabling_badges_mid_session_keeps_existing_flags() {
        let mut h = harness();
        h.coordinator.assign(alice());
        h.feed.emit(vec![
            NotificationSnapshot::new("alice@mastodon.social").with_notifications(true),
        ]);
        let action = h.coordinator.try_next_action().unwrap();
        h.coordinator.handle_action(action);

        h.settings.display.lock().disable_avatar_notifications = true;
        h.feed.emit(vec![NotificationSnapshot::new("alice@mastodon.social")]);
        let action = h.coordinator.try_next_action().unwrap();
        h.coordinator.handle_action(action);

        assert!(h.coordinator.badges().has_notifications);
    }

    #[tokio::test]
    async fn test_switching_marks_feed_read() {
        let mut h = harness();
        h.coordinator.assign(alice());

        h.coordinator.select_panel(Panel::Mentions);
        h.coordinator.select_panel(Panel::DirectMessages);

        let marked = h.feed.marked_read.lock();
        assert_eq!(
            marked.as_slice(),
            &[(alice().id().clone(), NotificationKind::Mention)]
        );
    }

    #[tokio::test]
    async fn test_reassign_keeps_single_subscription() {
        let mut h = harness();

        h.coordinator.assign(alice());
        h.coordinator.assign(bob());

        assert_eq!(h.feed.listener_count(), 1);
        assert!(h.coordinator.is_subscribed());
    }

    #[tokio::test]
    async fn test_destroy_releases_subscription() {
        let mut h = harness();
        h.coordinator.assign(alice());
        assert_eq!(h.feed.listener_count(), 1);

        h.coordinator.destroy();

        assert_eq!(h.feed.listener_count(), 0);
        h.feed.emit(vec![
            NotificationSnapshot::new("alice@mastodon.social").with_notifications(true),
        ]);
    }

    #[tokio::test]
    async fn test_stale_results_are_discarded() {
        let mut instance = MockInstanceInfoPort::new();
        instance
            .expect_instance_info()
            .withf(|a| a.username() == "alice")
            .returning(|a| Ok(InstanceInfo::new(a.instance(), 4, 2)));
        instance
            .expect_instance_info()
            .withf(|a| a.username() == "bob")
            .returning(|a| Ok(InstanceInfo::new(a.instance(), 2, 0)));

        let mut h = harness_with(
            instance,
            details_port(),
            MockNotificationFeed::new(),
            MockSettings::default(),
        );

        h.coordinator.assign(alice());
        h.coordinator.assign(bob());
        settle(&mut h.coordinator, 4).await;

        assert!(!h.coordinator.bookmarks_available());
        assert_eq!(h.coordinator.account_record().unwrap().username, "bob");
    }

    #[tokio::test]
    async fn test_outward_events() {
        let mut h = harness();
        h.coordinator.assign(alice());

        h.coordinator.browse_local_account();
        h.coordinator.browse_hashtag("rustlang");
        h.coordinator
            .browse_thread(OpenThreadEvent::new("https://mastodon.social/@a/1", alice()));

        assert_eq!(
            h.events.recv().await,
            Some(PanelEvent::BrowseAccount("@alice@mastodon.social".to_string()))
        );
        assert_eq!(
            h.events.recv().await,
            Some(PanelEvent::BrowseHashtag("rustlang".to_string()))
        );
        assert!(matches!(
            h.events.recv().await,
            Some(PanelEvent::BrowseThread(_))
        ));
    }

    #[tokio::test]
    async fn test_open_local_account_requires_record() {
        let mut h = harness();
        h.coordinator.assign(alice());

        assert!(!h.coordinator.open_local_account());

        settle(&mut h.coordinator, 2).await;

        assert!(h.coordinator.open_local_account());
        assert_eq!(
            h.browser.opened.lock().as_slice(),
            &["https://mastodon.social/@alice".to_string()]
        );
    }
}
