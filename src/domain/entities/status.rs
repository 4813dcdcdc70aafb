use super::AccountRef;

/// Request to open a status thread in another column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenThreadEvent {
    /// Public URL of the status.
    pub status_url: String,
    /// Status id as known by the account's home instance, if resolved.
    pub status_id: Option<String>,
    /// Account the thread is browsed from.
    pub account: AccountRef,
}

impl OpenThreadEvent {
    #[must_use]
    pub fn new(status_url: impl Into<String>, account: AccountRef) -> Self {
        Self {
            status_url: status_url.into(),
            status_id: None,
            account,
        }
    }

    #[must_use]
    pub fn with_status_id(mut self, status_id: impl Into<String>) -> Self {
        self.status_id = Some(status_id.into());
        self
    }
}
