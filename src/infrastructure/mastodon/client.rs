//! Mastodon REST API client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use reqwest::{Client, RequestBuilder, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{ErrorResponse, InstanceResponse};
use crate::domain::entities::{
    AccessToken, AccountId, AccountRecord, AccountRef, InstanceInfo, NotificationItem,
};
use crate::domain::errors::MastodonError;
use crate::domain::ports::{AccountDetailsPort, InstanceInfoPort, NotificationSourcePort};

const USER_AGENT: &str = concat!("mastoterm/", env!("CARGO_PKG_VERSION"));
const NOTIFICATIONS_PAGE_SIZE: &str = "30";

const VERIFY_CREDENTIALS_PATH: &str = "/api/v1/accounts/verify_credentials";
const INSTANCE_PATH: &str = "/api/v1/instance";
const NOTIFICATIONS_PATH: &str = "/api/v1/notifications";

/// HTTP client for the accounts' home instances.
pub struct MastodonClient {
    client: Client,
    base_url_override: Option<String>,
    tokens: RwLock<HashMap<AccountId, AccessToken>>,
    instances: Mutex<HashMap<String, InstanceInfo>>,
}

impl MastodonClient {
    /// Creates a client talking to `https://<instance>`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, MastodonError> {
        Self::build(None)
    }

    /// Creates a client sending every request to `base_url`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MastodonError> {
        Self::build(Some(base_url.into()))
    }

    fn build(base_url_override: Option<String>) -> Result<Self, MastodonError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MastodonError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url_override,
            tokens: RwLock::new(HashMap::new()),
            instances: Mutex::new(HashMap::new()),
        })
    }

    /// Registers the access token used for an account.
    pub fn set_token(&self, account: &AccountId, token: AccessToken) {
        self.tokens.write().insert(account.clone(), token);
    }

    fn base_url(&self, instance: &str) -> String {
        self.base_url_override.as_ref().map_or_else(
            || format!("https://{instance}"),
            |base| base.trim_end_matches('/').to_string(),
        )
    }

    fn token(&self, account: &AccountRef) -> Result<AccessToken, MastodonError> {
        self.tokens
            .read()
            .get(account.id())
            .cloned()
            .ok_or_else(|| MastodonError::missing_token(account.id().as_str()))
    }

    fn authorized_get(&self, account: &AccountRef, path: &str) -> Result<RequestBuilder, MastodonError> {
        let token = self.token(account)?;
        let url = format!("{}{path}", self.base_url(account.instance()));

        Ok(self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token.as_str())))
    }

    async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, MastodonError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, path, "Failed to reach instance");
            if e.is_timeout() {
                MastodonError::network("request timed out")
            } else if e.is_connect() {
                MastodonError::network("failed to connect to instance")
            } else {
                MastodonError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, path, "Failed to read response body");
            MastodonError::network(e.to_string())
        })?;
        Self::decode(path, &body)
    }

    fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, MastodonError> {
        serde_json::from_str(body).map_err(|e| {
            warn!(error = %e, path, "Failed to parse response");
            MastodonError::parse(format!("{path}: {e}"))
        })
    }

    async fn error_from_response(status: StatusCode, response: reqwest::Response) -> MastodonError {
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => error.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string(),
        };

        MastodonError::http(status.as_u16(), message)
    }
}

#[async_trait]
impl AccountDetailsPort for MastodonClient {
    async fn retrieve_account_details(
        &self,
        account: &AccountRef,
    ) -> Result<AccountRecord, MastodonError> {
        debug!(account = %account.id(), "Retrieving account details");

        let request = self.authorized_get(account, VERIFY_CREDENTIALS_PATH)?;
        let record: AccountRecord = Self::send_json(request, VERIFY_CREDENTIALS_PATH).await?;

        debug!(account = %account.id(), url = %record.url, "Account details retrieved");
        Ok(record)
    }
}

#[async_trait]
impl InstanceInfoPort for MastodonClient {
    async fn instance_info(&self, account: &AccountRef) -> Result<InstanceInfo, MastodonError> {
        let instance = account.instance();
        if let Some(cached) = self.instances.lock().get(instance).cloned() {
            return Ok(cached);
        }

        let url = format!("{}{INSTANCE_PATH}", self.base_url(instance));
        let response: InstanceResponse =
            Self::send_json(self.client.get(url), INSTANCE_PATH).await?;

        let info = InstanceInfo::parse(instance, &response.version).ok_or_else(|| {
            MastodonError::parse(format!("unrecognized version: {}", response.version))
        })?;

        debug!(instance, version = %info.version, kind = ?info.kind, "Instance info retrieved");
        self.instances
            .lock()
            .insert(instance.to_string(), info.clone());
        Ok(info)
    }
}

#[async_trait]
impl NotificationSourcePort for MastodonClient {
    async fn fetch_notifications(
        &self,
        account: &AccountRef,
        since_id: Option<String>,
    ) -> Result<Vec<NotificationItem>, MastodonError> {
        let mut request = self
            .authorized_get(account, NOTIFICATIONS_PATH)?
            .query(&[("limit", NOTIFICATIONS_PAGE_SIZE)]);
        if let Some(since_id) = since_id {
            request = request.query(&[("since_id", since_id)]);
        }

        Self::send_json(request, NOTIFICATIONS_PATH).await
    }
}
