/*
[INPUT]:  Optional config file (YAML/TOML/JSON) and ANBOTO_* environment
[OUTPUT]: Parsed CLI configuration and a ready AnbotoClient
[POS]:    Configuration layer - credentials and transport setup
[UPDATE]: When adding new configuration options
*/

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use anboto_adapter::{AnbotoClient, ClientConfig, TESTNET_BASE_URL};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `ANBOTO_API_KEY`
pub const ENV_PREFIX: &str = "ANBOTO";

/// Top-level configuration for the CLI
#[derive(Clone, Deserialize)]
pub struct CliConfig {
    /// API base URL
    pub base_url: String,
    /// API key sent as X-API-KEY
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base64-encoded API secret
    #[serde(default)]
    pub secret_key: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Connect timeout in seconds
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration: defaults, then the optional file, then environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`CliConfig::load`] with an explicit environment map instead
    /// of the process environment.
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("base_url", TESTNET_BASE_URL)
            .context("set default base_url")?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).source(env));

        let settings = builder
            .build()
            .with_context(|| match path {
                Some(p) => format!("read config from {}", p.display()),
                None => "read config from environment".to_string(),
            })?;
        settings
            .try_deserialize()
            .context("parse configuration")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }

    /// Build an authenticated client; fails when credentials are missing
    pub fn build_client(&self) -> Result<AnbotoClient> {
        let api_key = self
            .api_key
            .as_deref()
            .context("api_key missing: set ANBOTO_API_KEY or api_key in the config file")?;
        let secret_key = self
            .secret_key
            .as_deref()
            .context("secret_key missing: set ANBOTO_SECRET_KEY or secret_key in the config file")?;

        AnbotoClient::with_config(self.client_config(), &self.base_url, api_key, secret_key)
            .context("create Anboto client")
    }
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
