//! Configuration management for fpsync
//!
//! The configuration file is YAML with two sections: `codedx` describes the
//! server connection, `fpmarkup` names the two disposition statuses applied
//! to reviewed false positives. Key names are kebab-case to match the
//! documented configuration surface.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Application configuration, loaded from the path given via `--config`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Code Dx server connection settings
    pub codedx: CodeDxConfig,

    /// False-positive markup status names
    pub fpmarkup: FpMarkupConfig,
}

/// Connection settings for the Code Dx server
#[derive(Debug, Clone, Deserialize)]
pub struct CodeDxConfig {
    /// URL scheme, `http` or `https`
    pub transport: String,

    /// Server hostname or IP address
    pub ip: String,

    /// Server port; omitted from the URL when absent
    #[serde(default)]
    pub port: Option<u16>,

    /// API key sent in the `API-Key` request header
    #[serde(rename = "api-key")]
    pub api_key: String,

    /// Accept invalid TLS certificates. Off unless explicitly enabled.
    #[serde(default)]
    pub insecure: bool,

    /// Ceiling on bulk-job polling, in seconds. Unbounded when absent.
    #[serde(rename = "job-timeout-secs", default)]
    pub job_timeout_secs: Option<u64>,
}

/// Display names of the two disposition statuses, as configured on the server
#[derive(Debug, Clone, Deserialize)]
pub struct FpMarkupConfig {
    /// Status applied to false positives that fail the authorization check
    #[serde(rename = "status-fp-unauth")]
    pub status_fp_unauth: String,

    /// Status applied to false positives that pass the authorization check
    #[serde(rename = "status-fp-auth")]
    pub status_fp_auth: String,
}

impl Config {
    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate that the parsed configuration is usable
    fn validate(&self) -> Result<()> {
        match self.codedx.transport.as_str() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::Invalid(format!(
                    "unsupported transport \"{other}\", expected \"http\" or \"https\""
                ))
                .into());
            }
        }

        if self.codedx.ip.is_empty() {
            return Err(ConfigError::Invalid("server address is empty".to_string()).into());
        }

        Ok(())
    }
}

impl CodeDxConfig {
    /// Base URL for all API requests: `transport://ip[:port]/codedx`
    pub fn base_url(&self) -> String {
        let mut url = format!("{}://{}", self.transport, self.ip);
        if let Some(port) = self.port {
            url.push(':');
            url.push_str(&port.to_string());
        }
        url.push_str("/codedx");
        url
    }

    /// Polling ceiling as a `Duration`, if configured
    pub fn job_timeout(&self) -> Option<Duration> {
        self.job_timeout_secs.map(Duration::from_secs)
    }
}
