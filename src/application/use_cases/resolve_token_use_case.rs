//! Access token resolution use case.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{AccessToken, AccountRef};
use crate::domain::errors::StorageError;
use crate::domain::ports::TokenStoragePort;

/// Where a token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// System keyring.
    Keyring,
    /// Command line or environment.
    CommandLine,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyring => write!(f, "system keyring"),
            Self::CommandLine => write!(f, "command line / environment"),
        }
    }
}

/// Resolved token with its source.
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    pub token: AccessToken,
    pub source: TokenSource,
}

/// Resolves an account's access token from available sources.
pub struct ResolveTokenUseCase {
    storage_port: Arc<dyn TokenStoragePort>,
}

impl ResolveTokenUseCase {
    #[must_use]
    pub const fn new(storage_port: Arc<dyn TokenStoragePort>) -> Self {
        Self { storage_port }
    }

    /// Resolves a token for `account`.
    ///
    /// Priority:
    /// 1. Keyring
    /// 2. CLI/Env (passed as argument), persisted to the keyring on success
    ///
    /// # Errors
    /// Returns error if a CLI token cannot be persisted.
    pub async fn execute(
        &self,
        account: &AccountRef,
        cli_token: Option<&str>,
    ) -> Result<Option<ResolvedToken>, StorageError> {
        debug!(account = %account.id(), "Checking keyring for stored token");
        match self.storage_port.get_token(account.id()).await {
            Ok(Some(token)) => {
                info!(account = %account.id(), "Using token from system keyring");
                return Ok(Some(ResolvedToken {
                    token,
                    source: TokenSource::Keyring,
                }));
            }
            Ok(None) => debug!("No token found in keyring"),
            Err(e) => debug!(error = %e, "Failed to check keyring"),
        }

        let Some(raw) = cli_token.filter(|s| !s.trim().is_empty()) else {
            debug!(account = %account.id(), "No token found in any source");
            return Ok(None);
        };

        let Some(token) = AccessToken::new(raw) else {
            warn!("Command-line token has invalid format");
            return Ok(None);
        };

        self.storage_port.store_token(account.id(), &token).await?;
        info!(account = %account.id(), "Using token from command line / environment");

        Ok(Some(ResolvedToken {
            token,
            source: TokenSource::CommandLine,
        }))
    }
}
