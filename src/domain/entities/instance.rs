//! Server capability information.

use std::sync::LazyLock;

use regex::Regex;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\.(\d+)").expect("version regex is valid")
});

static PLEROMA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(compatible;\s*pleroma").expect("pleroma regex is valid")
});

/// Lowest Mastodon version exposing the bookmarks API.
pub const BOOKMARKS_MIN_VERSION: (u32, u32) = (3, 1);

/// Server software family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceKind {
    #[default]
    Mastodon,
    Pleroma,
}

/// Parsed instance version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceInfo {
    pub instance: String,
    pub version: String,
    pub major: u32,
    pub minor: u32,
    pub kind: InstanceKind,
}

impl InstanceInfo {
    #[must_use]
    pub fn new(instance: impl Into<String>, major: u32, minor: u32) -> Self {
        Self {
            instance: instance.into(),
            version: format!("{major}.{minor}.0"),
            major,
            minor,
            kind: InstanceKind::Mastodon,
        }
    }

    /// Parses the `version` string reported by `/api/v1/instance`.
    ///
    /// Pleroma advertises `"2.7.2 (compatible; Pleroma 2.0.0)"`; the leading
    /// pair is the Mastodon API level it claims.
    #[must_use]
    pub fn parse(instance: impl Into<String>, version: &str) -> Option<Self> {
        let captures = VERSION_RE.captures(version)?;
        let major = captures.get(1)?.as_str().parse().ok()?;
        let minor = captures.get(2)?.as_str().parse().ok()?;

        let kind = if PLEROMA_RE.is_match(version) {
            InstanceKind::Pleroma
        } else {
            InstanceKind::Mastodon
        };

        Some(Self {
            instance: instance.into(),
            version: version.trim().to_string(),
            major,
            minor,
            kind,
        })
    }

    /// Returns whether the server supports bookmarks.
    #[must_use]
    pub fn supports_bookmarks(&self) -> bool {
        (self.major, self.minor) >= BOOKMARKS_MIN_VERSION
    }
}
