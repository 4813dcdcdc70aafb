use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mastoterm::application::{PanelServices, ResolveTokenUseCase};
use mastoterm::domain::entities::AccountRef;
use mastoterm::infrastructure::{
    AppConfig, CliArgs, ConfigSettingsProvider, DesktopErrorSink, KeyringTokenStorage,
    MastodonClient, NotificationPoller, StorageManager, SystemBrowser, UserNotificationFeed,
};
use mastoterm::presentation::App;

const MIN_POLL_INTERVAL_SECS: u64 = 10;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    Ok(config)
}

async fn load_tokens(client: &MastodonClient, config: &AppConfig, initial: Option<&AccountRef>) {
    let resolve = ResolveTokenUseCase::new(Arc::new(KeyringTokenStorage::new()));

    for account in config.account_refs() {
        let cli_token = if initial == Some(&account) {
            config.token.as_deref()
        } else {
            None
        };

        match resolve.execute(&account, cli_token).await {
            Ok(Some(resolved)) => {
                info!(account = %account.id(), source = %resolved.source, "Token resolved");
                client.set_token(account.id(), resolved.token);
            }
            Ok(None) => warn!(account = %account.id(), "No access token, requests will fail"),
            Err(e) => warn!(account = %account.id(), error = %e, "Failed to store token"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = mastoterm::VERSION, "Starting Mastoterm");

    let initial = config.initial_account();
    let client = Arc::new(MastodonClient::new()?);
    load_tokens(&client, &config, initial.as_ref()).await;

    let feed = Arc::new(UserNotificationFeed::new());
    let poll_interval = Duration::from_secs(config.poll_interval_secs.max(MIN_POLL_INTERVAL_SECS));
    let poller =
        NotificationPoller::new(client.clone(), feed.clone(), config.account_refs()).spawn(poll_interval);

    let services = PanelServices {
        instance_info: client.clone(),
        account_details: client.clone(),
        feed,
        settings: Arc::new(ConfigSettingsProvider::from_config(&config)),
        error_sink: Arc::new(DesktopErrorSink::new(config.enable_desktop_notifications)),
        browser: Arc::new(SystemBrowser),
    };

    let app = App::new(services, config.account_refs());
    let result = app.run(initial).await;

    poller.abort();
    result
}
