//! Gateway configuration
//!
//! Loaded from an optional `config/gateway` file with `GATEWAY_*` environment
//! overrides. Every field has a default so the gateway runs unconfigured.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub reserved: ReservedAccount,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the upstream API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Account authenticated locally without an upstream round trip.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReservedAccount {
    #[serde(default = "default_reserved_email")]
    pub email: String,
    #[serde(default = "default_reserved_password")]
    pub password: String,
    #[serde(default = "default_reserved_user_id")]
    pub user_id: String,
    #[serde(default = "default_reserved_name")]
    pub name: String,
    #[serde(default = "default_reserved_role")]
    pub role: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_base_url() -> String {
    "https://camvitals.azurewebsites.net".to_string()
}

fn default_timeout_seconds() -> u64 {
    15
}

fn default_reserved_email() -> String {
    "hr@camvitals.com".to_string()
}

fn default_reserved_password() -> String {
    "securepassword123".to_string()
}

fn default_reserved_user_id() -> String {
    "hr-001".to_string()
}

fn default_reserved_name() -> String {
    "HR Manager".to_string()
}

fn default_reserved_role() -> String {
    "HR".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for ReservedAccount {
    fn default() -> Self {
        Self {
            email: default_reserved_email(),
            password: default_reserved_password(),
            user_id: default_reserved_user_id(),
            name: default_reserved_name(),
            role: default_reserved_role(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/gateway").required(false))
            .add_source(config::Environment::with_prefix("GATEWAY").separator("_"))
            .build()?;

        let mut cfg: Config = settings.try_deserialize()?;
        while cfg.upstream.base_url.ends_with('/') {
            cfg.upstream.base_url.pop();
        }
        Ok(cfg)
    }
}
