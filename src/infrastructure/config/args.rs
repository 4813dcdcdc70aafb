use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mastoterm",
    version,
    about = "A lightweight Mastodon terminal client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Account to show first (`user@instance`).
    #[arg(short, long, value_name = "HANDLE")]
    pub account: Option<String>,

    /// Access token for the selected account.
    #[arg(long, env = "MASTOTERM_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Seconds between notification polls.
    #[arg(long, value_name = "SECS")]
    pub poll_interval: Option<u64>,

    /// Raise desktop notifications for API errors.
    #[arg(long)]
    pub enable_desktop_notifications: Option<bool>,

    /// Never switch panels automatically on new notifications.
    #[arg(long)]
    pub disable_autofocus: Option<bool>,

    /// Hide notification badges on account avatars.
    #[arg(long)]
    pub disable_avatar_notifications: Option<bool>,
}
