//! Connected account identity and resolved profile.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a connected account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates identifier from raw value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns identifier as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Lightweight reference to a connected account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountRef {
    id: AccountId,
    username: String,
    instance: String,
}

impl AccountRef {
    /// Creates a reference whose id is derived from the handle.
    #[must_use]
    pub fn new(username: impl Into<String>, instance: impl Into<String>) -> Self {
        let username = username.into();
        let instance = instance.into();
        let id = AccountId::new(format!("{username}@{instance}"));
        Self {
            id,
            username,
            instance,
        }
    }

    /// Creates a reference with an explicit id.
    #[must_use]
    pub fn with_id(
        id: impl Into<AccountId>,
        username: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            instance: instance.into(),
        }
    }

    /// Parses `user@instance` or `@user@instance`.
    #[must_use]
    pub fn parse_handle(handle: &str) -> Option<Self> {
        let trimmed = handle.trim().trim_start_matches('@');
        let (username, instance) = trimmed.split_once('@')?;
        if username.is_empty() || instance.is_empty() || instance.contains('@') {
            return None;
        }
        Some(Self::new(username, instance))
    }

    #[must_use]
    pub const fn id(&self) -> &AccountId {
        &self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Returns the fully qualified `@user@instance` handle.
    #[must_use]
    pub fn handle(&self) -> String {
        format!("@{}@{}", self.username, self.instance)
    }

    /// Finds a configured account by id, handle, or unambiguous username.
    #[must_use]
    pub fn find<'a>(accounts: &'a [Self], name: &str) -> Option<&'a Self> {
        let wanted = name.trim().trim_start_matches('@');
        if wanted.is_empty() {
            return None;
        }

        let handle = format!("@{wanted}");
        if let Some(account) = accounts
            .iter()
            .find(|a| a.id.as_str() == wanted || a.handle() == handle)
        {
            return Some(account);
        }

        let mut by_username = accounts.iter().filter(|a| a.username == wanted);
        match (by_username.next(), by_username.next()) {
            (Some(account), None) => Some(account),
            _ => None,
        }
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Full account profile as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub username: String,
    pub acct: String,
    #[serde(default)]
    pub display_name: String,
    pub url: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AccountRecord {
    /// Returns display name, falling back to username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}
