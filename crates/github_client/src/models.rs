use serde::{Deserialize, Serialize};

/// Device authorization issued by GitHub. Only `device_code` and `user_code`
/// take part in the flow; the rest is informational.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeviceAuthorization {
    pub device_code: String,
    pub user_code: String,
    #[serde(default)]
    pub verification_uri: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub interval: Option<u64>,
}

/// Access-token endpoint body. Every field is optional: while the user has
/// not entered the code, GitHub answers with an `error` instead of a token.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AccessTokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub interval: Option<u64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Outcome of a single poll against the access-token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenPoll {
    Granted(String),
    Pending,
}

/// Body of the Copilot internal token endpoint, reduced to the one field the
/// subscription lookup reads.
#[derive(Debug, Deserialize, Clone)]
pub struct CopilotTokenInfo {
    #[serde(default)]
    pub sku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Subscribed { sku: String },
    NotSubscribed,
    /// The endpoint answered with a non-200 status.
    Unavailable { status: u16 },
}
