//! Mastodon API error types.

use thiserror::Error;

/// Errors raised while talking to a Mastodon instance.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum MastodonError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("failed to parse response: {message}")]
    Parse { message: String },

    #[error("no access token for {account}")]
    MissingToken { account: String },

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl MastodonError {
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn missing_token(account: impl Into<String>) -> Self {
        Self::MissingToken {
            account: account.into(),
        }
    }

    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns the HTTP status, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns whether the token was refused.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. } | Self::MissingToken { .. })
    }
}
