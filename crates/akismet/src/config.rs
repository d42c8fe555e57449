// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! [`AkismetConfig`] carries the credential, the outbound identity and the
//! transport settings. It can be built in code with the `with_*` setters, or
//! loaded with the `config` crate from layered sources:
//!
//! 1. Default values
//! 2. An optional `akismet.{toml,json,yaml}` file in the working directory
//! 3. Environment variables with the `AKISMET_` prefix (`AKISMET_API_KEY`,
//!    `AKISMET_USER_AGENT`, `AKISMET_BASE_URL`, `AKISMET_TIMEOUT_SECONDS`,
//!    `AKISMET_CONNECT_TIMEOUT_SECONDS`)

use std::{fmt, path::Path, time::Duration};

use config::{Config, ConfigBuilder, ConfigError, Environment, File, Map, builder::DefaultState};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{AkismetError, AkismetResult};

/// Production Akismet host
pub const DEFAULT_BASE_URL: &str = "https://rest.akismet.com";

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("akismet-rs/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 5;
const MAX_TIMEOUT_SECONDS: u64 = 300;
const ENV_PREFIX: &str = "AKISMET";
const CONFIG_FILE_NAME: &str = "akismet";

/// Akismet client configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AkismetConfig {
    /// Akismet API key
    pub api_key: String,
    /// Value of the `User-Agent` header on every request
    pub user_agent: String,
    /// Scheme, host and port of the API; scoped endpoints prefix the key to the host
    pub base_url: Url,
    /// Total request timeout in seconds
    pub timeout_seconds: u64,
    /// Connection timeout in seconds
    pub connect_timeout_seconds: u64,
}

impl Default for AkismetConfig {
    #[allow(clippy::missing_panics_doc)]
    fn default() -> Self {
        Self {
            api_key: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            // Static URL is safe - it is a compile-time constant
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default Akismet URL is valid"),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECONDS,
        }
    }
}

impl fmt::Debug for AkismetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AkismetConfig")
            .field("api_key", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url.as_str())
            .field("timeout_seconds", &self.timeout_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

impl AkismetConfig {
    /// Create a configuration with the given key and user agent
    pub fn new(api_key: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the total request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, connect_timeout_seconds: u64) -> Self {
        self.connect_timeout_seconds = connect_timeout_seconds;
        self
    }

    /// Total request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Connection timeout
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Validate the transport settings
    ///
    /// The base URL must name its host by domain, since key-scoped endpoints
    /// prefix the API key to it. The API key itself is validated when a
    /// [`Service`](crate::Service) is built from this configuration.
    pub fn validate(&self) -> AkismetResult<()> {
        if self.user_agent.trim().is_empty() {
            return Err(AkismetError::config("User agent cannot be empty"));
        }

        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(AkismetError::config(format!(
                "Invalid base URL scheme: {} (must be http or https)",
                self.base_url.scheme()
            )));
        }

        if self.base_url.domain().is_none() {
            return Err(AkismetError::config(format!(
                "Invalid base URL host: {} (must be a domain name)",
                self.base_url
            )));
        }

        for (name, seconds) in [
            ("timeout", self.timeout_seconds),
            ("connect timeout", self.connect_timeout_seconds),
        ] {
            if seconds == 0 || seconds > MAX_TIMEOUT_SECONDS {
                return Err(AkismetError::config(format!(
                    "Invalid {name}: {seconds} seconds (must be 1-{MAX_TIMEOUT_SECONDS})"
                )));
            }
        }

        if self.connect_timeout_seconds > self.timeout_seconds {
            return Err(AkismetError::config(format!(
                "Connect timeout ({}s) cannot exceed request timeout ({}s)",
                self.connect_timeout_seconds, self.timeout_seconds
            )));
        }

        Ok(())
    }

    /// Load configuration from the optional config file and `AKISMET_*` variables
    pub fn from_env() -> AkismetResult<Self> {
        Self::load().map_err(|e| AkismetError::config(format!("failed to load configuration: {e}")))
    }

    /// Load configuration from defaults plus a single explicit file
    ///
    /// The format is inferred from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> AkismetResult<Self> {
        let path = path.as_ref();
        debug!("Loading Akismet configuration from: {}", path.display());

        Self::defaults()
            .and_then(|builder| builder.add_source(File::from(path)).build())
            .and_then(Config::try_deserialize)
            .map_err(|e| AkismetError::config(format!("failed to load {}: {e}", path.display())))
    }

    /// Load configuration using the config crate with hierarchical sources
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(None)
    }

    /// Same as [`load`](Self::load), reading variables from `env` instead of the process
    fn load_with_env(env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api_key", "")?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
            .set_default("connect_timeout_seconds", DEFAULT_CONNECT_TIMEOUT_SECONDS)
    }
}
