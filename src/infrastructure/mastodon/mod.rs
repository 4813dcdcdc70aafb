//! Mastodon API adapters.

mod client;
mod dto;
mod poller;

pub use client::MastodonClient;
pub use poller::NotificationPoller;
