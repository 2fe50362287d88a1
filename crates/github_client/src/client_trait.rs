use async_trait::async_trait;

use crate::error::GithubClientError;
use crate::models::{DeviceAuthorization, SubscriptionStatus, TokenPoll};

/// Outbound GitHub surface the request handlers depend on. Handlers only see
/// this trait, so tests can substitute a fake without network access.
#[async_trait]
pub trait GithubClientTrait: Send + Sync {
    /// Request a device code and user code from the device-code endpoint.
    async fn request_device_authorization(
        &self,
    ) -> Result<DeviceAuthorization, GithubClientError>;

    /// Perform exactly one poll against the access-token endpoint. Repolling
    /// on `Pending` is the caller's job.
    async fn poll_access_token(&self, device_code: &str) -> Result<TokenPoll, GithubClientError>;

    /// Query the Copilot token endpoint for the subscription SKU tied to a
    /// `ghu` bearer token.
    async fn check_subscription(
        &self,
        ghu_token: &str,
    ) -> Result<SubscriptionStatus, GithubClientError>;
}
