use crate::domain::entities::AccountRef;
use crate::domain::errors::MastodonError;

/// Shared user-facing error sink.
pub trait ErrorSinkPort: Send + Sync {
    /// Reports a failed API call made on behalf of `account`.
    fn notify_http_error(&self, error: &MastodonError, account: &AccountRef);
}
