use serde::{Deserialize, Serialize};

/// OAuth app id the IntelliJ Copilot plugin authenticates as.
pub const DEFAULT_CLIENT_ID: &str = "Iv1.b507a08c87ecfe98";

pub const DEFAULT_DEVICE_CODE_URL: &str = "https://github.com/login/device/code";
pub const DEFAULT_ACCESS_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
pub const DEFAULT_TOKEN_INFO_URL: &str = "https://api.github.com/copilot_internal/v2/token";

pub const DEVICE_FLOW_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:device_code";

// The subscription endpoint only answers requests that identify as a known
// Copilot editor build.
pub const DEFAULT_EDITOR_VERSION: &str = "JetBrains-IU/232.10203.10";
pub const DEFAULT_EDITOR_PLUGIN_VERSION: &str = "copilot-intellij/1.3.3.3572";
pub const DEFAULT_USER_AGENT: &str = "GithubCopilot/1.129.0";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_client_id")]
    pub client_id: String,
    #[serde(default = "default_device_code_url")]
    pub device_code_url: String,
    #[serde(default = "default_access_token_url")]
    pub access_token_url: String,
    #[serde(default = "default_token_info_url")]
    pub token_info_url: String,
    #[serde(default = "default_editor_version")]
    pub editor_version: String,
    #[serde(default = "default_editor_plugin_version")]
    pub editor_plugin_version: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub http_proxy: String,
    #[serde(default)]
    pub https_proxy: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

fn default_device_code_url() -> String {
    DEFAULT_DEVICE_CODE_URL.to_string()
}

fn default_access_token_url() -> String {
    DEFAULT_ACCESS_TOKEN_URL.to_string()
}

fn default_token_info_url() -> String {
    DEFAULT_TOKEN_INFO_URL.to_string()
}

fn default_editor_version() -> String {
    DEFAULT_EDITOR_VERSION.to_string()
}

fn default_editor_plugin_version() -> String {
    DEFAULT_EDITOR_PLUGIN_VERSION.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            client_id: default_client_id(),
            device_code_url: default_device_code_url(),
            access_token_url: default_access_token_url(),
            token_info_url: default_token_info_url(),
            editor_version: default_editor_version(),
            editor_plugin_version: default_editor_plugin_version(),
            user_agent: default_user_agent(),
            http_proxy: String::new(),
            https_proxy: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then `config.toml` if present, then
    /// environment-variable overrides.
    pub fn new() -> Self {
        let mut config = Config::default();

        //detect the config file exists
        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(client_id) = std::env::var("GITHUB_CLIENT_ID") {
            self.client_id = client_id;
        }
        if let Ok(url) = std::env::var("GITHUB_DEVICE_CODE_URL") {
            self.device_code_url = url;
        }
        if let Ok(url) = std::env::var("GITHUB_ACCESS_TOKEN_URL") {
            self.access_token_url = url;
        }
        if let Ok(url) = std::env::var("COPILOT_TOKEN_URL") {
            self.token_info_url = url;
        }
        if let Ok(http_proxy) = std::env::var("HTTP_PROXY") {
            self.http_proxy = http_proxy;
        }
        if let Ok(https_proxy) = std::env::var("HTTPS_PROXY") {
            self.https_proxy = https_proxy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_github() {
        let config = Config::default();
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
        assert_eq!(config.device_code_url, DEFAULT_DEVICE_CODE_URL);
        assert_eq!(config.access_token_url, DEFAULT_ACCESS_TOKEN_URL);
        assert_eq!(config.token_info_url, DEFAULT_TOKEN_INFO_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.http_proxy.is_empty());
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let parsed: Config =
            toml::from_str("client_id = \"Iv1.deadbeef\"\ntimeout_secs = 5\n").expect("parse");
        assert_eq!(parsed.client_id, "Iv1.deadbeef");
        assert_eq!(parsed.timeout_secs, 5);
        assert_eq!(parsed.device_code_url, DEFAULT_DEVICE_CODE_URL);
        assert_eq!(parsed.editor_version, DEFAULT_EDITOR_VERSION);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");
        assert_eq!(parsed.user_agent, config.user_agent);
        assert_eq!(parsed.token_info_url, config.token_info_url);
    }
}
