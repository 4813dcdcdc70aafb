//! Mastoterm - per-account Mastodon panels in the terminal.
//!
//! This crate coordinates the panels shown for a Mastodon account:
//! notification badges driven by a shared feed, server capability checks,
//! and profile lookups, wired through ports and adapters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the panel coordinator and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the command loop and view state.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "mastoterm";
