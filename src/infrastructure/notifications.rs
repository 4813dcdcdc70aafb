//! User-facing error reporting.

use notify_rust::Notification;
use tracing::warn;

use crate::domain::entities::AccountRef;
use crate::domain::errors::MastodonError;
use crate::domain::ports::ErrorSinkPort;

/// Reports API errors through the log and, when enabled, the desktop.
#[derive(Debug, Clone, Default)]
pub struct DesktopErrorSink {
    enabled: bool,
}

impl DesktopErrorSink {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn summary(error: &MastodonError) -> String {
        match error.status() {
            Some(status) => format!("Mastodon error ({status})"),
            None => "Mastodon error".to_string(),
        }
    }
}

impl ErrorSinkPort for DesktopErrorSink {
    fn notify_http_error(&self, error: &MastodonError, account: &AccountRef) {
        warn!(account = %account.id(), error = %error, "API request failed");

        if !self.enabled {
            return;
        }

        let summary = Self::summary(error);
        let body = format!("{}: {error}", account.handle());

        tokio::task::spawn_blocking(move || {
            if let Err(e) = Notification::new()
                .summary(&summary)
                .body(&body)
                .appname("mastoterm")
                .show()
            {
                warn!("Failed to show notification: {}", e);
            }
        });
    }
}
