use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::{Client, Proxy, StatusCode};
use serde_json::Value;

use crate::client_trait::GithubClientTrait;
use crate::config::{Config, DEVICE_FLOW_GRANT_TYPE};
use crate::error::GithubClientError;
use crate::models::{
    AccessTokenResponse, CopilotTokenInfo, DeviceAuthorization, SubscriptionStatus, TokenPoll,
};

/// GitHub identity/subscription client. One outbound request per call, no
/// retries; the configured timeout bounds every request.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    config: Config,
}

impl GithubClient {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Self::build_http_client(&config)?;
        Ok(GithubClient { client, config })
    }

    fn build_http_client(config: &Config) -> anyhow::Result<Client> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if !config.http_proxy.is_empty() {
            builder = builder.proxy(Proxy::http(&config.http_proxy)?);
        }
        if !config.https_proxy.is_empty() {
            builder = builder.proxy(Proxy::https(&config.https_proxy)?);
        }
        builder
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))
    }
}

#[async_trait]
impl GithubClientTrait for GithubClient {
    async fn request_device_authorization(
        &self,
    ) -> Result<DeviceAuthorization, GithubClientError> {
        let response = self
            .client
            .post(self.config.device_code_url.as_str())
            .header("Accept", "application/json")
            .form(&[("client_id", self.config.client_id.as_str())])
            .send()
            .await?;

        // GitHub reports OAuth errors in the body, not the status line.
        let body = response.json::<Value>().await?;
        if body.get("error").is_some() {
            warn!("device authorization rejected: {body}");
            return Err(GithubClientError::Provider(body));
        }

        let authorization: DeviceAuthorization = serde_json::from_value(body)?;
        info!(
            "device authorization issued, user code {}",
            authorization.user_code
        );
        Ok(authorization)
    }

    async fn poll_access_token(&self, device_code: &str) -> Result<TokenPoll, GithubClientError> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("device_code", device_code),
            ("grant_type", DEVICE_FLOW_GRANT_TYPE),
        ];
        let response = self
            .client
            .post(self.config.access_token_url.as_str())
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await?;

        let body = response.json::<AccessTokenResponse>().await?;
        match body.access_token {
            Some(token) => Ok(TokenPoll::Granted(token)),
            None => {
                info!(
                    "authorization pending for device code {}",
                    redact(device_code)
                );
                Ok(TokenPoll::Pending)
            }
        }
    }

    async fn check_subscription(
        &self,
        ghu_token: &str,
    ) -> Result<SubscriptionStatus, GithubClientError> {
        let response = self
            .client
            .get(self.config.token_info_url.as_str())
            .header("Authorization", format!("Bearer {ghu_token}"))
            .header("editor-version", &self.config.editor_version)
            .header("editor-plugin-version", &self.config.editor_plugin_version)
            .header("User-Agent", &self.config.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(
                "subscription lookup returned {} for token {}",
                status,
                redact(ghu_token)
            );
            return Ok(SubscriptionStatus::Unavailable {
                status: status.as_u16(),
            });
        }

        let info = response.json::<CopilotTokenInfo>().await?;
        Ok(match info.sku {
            Some(sku) if !sku.is_empty() => SubscriptionStatus::Subscribed { sku },
            _ => SubscriptionStatus::NotSubscribed,
        })
    }
}

/// Shorten a credential so it can appear in logs without leaking.
fn redact(token: &str) -> String {
    let prefix: String = token.chars().take(6).collect();
    if prefix.len() == token.len() {
        prefix
    } else {
        format!("{prefix}***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_shortens_long_tokens() {
        assert_eq!(redact("ghu_0123456789abcdef"), "ghu_01***");
    }

    #[test]
    fn redact_keeps_short_values_whole() {
        assert_eq!(redact("abc"), "abc");
    }

    #[test]
    fn build_http_client_rejects_malformed_proxy() {
        let config = Config {
            http_proxy: "not a proxy url".to_string(),
            ..Config::default()
        };
        assert!(GithubClient::new(config).is_err());
    }
}
