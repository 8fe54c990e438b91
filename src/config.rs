use crate::error::{Result, SdkError};
use serde::Deserialize;
use std::env;
use std::fs;

fn default_timeout_secs() -> u64 {
    120
}

fn default_telemetry_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the R2R backend, e.g. "http://localhost:7272"
    pub base_url: String,

    /// Bearer token attached to requests when present
    #[serde(default)]
    pub api_key: Option<String>,

    /// Whole-request timeout; streaming turns can be long
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Record stream counters on the client's telemetry instance
    #[serde(default = "default_telemetry_enabled")]
    pub telemetry_enabled: bool,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("R2R_BASE_URL").unwrap_or_else(|_| "http://localhost:7272".to_string());

        let api_key = env::var("R2R_API_KEY").ok();

        let timeout_secs = env::var("R2R_TIMEOUT_SECS")
            .unwrap_or_else(|_| default_timeout_secs().to_string())
            .parse::<u64>()
            .map_err(|e| SdkError::ConfigError(format!("Invalid timeout value: {}", e)))?;

        let telemetry_enabled = env::var("R2R_TELEMETRY")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or_else(|_| default_telemetry_enabled());

        Ok(ClientConfig {
            base_url,
            api_key,
            timeout_secs,
            telemetry_enabled,
        })
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SdkError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let mut config: ClientConfig = toml::from_str(&contents)
            .map_err(|e| SdkError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        // Allow environment variables to override file config
        if let Ok(api_key) = env::var("R2R_API_KEY") {
            config.api_key = Some(api_key);
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(SdkError::ConfigError("Base URL is empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(SdkError::ConfigError(format!(
                "Base URL must be http(s): {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(SdkError::ConfigError(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if let Some(key) = &self.api_key
            && key.is_empty()
        {
            return Err(SdkError::ConfigError("API key is empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ClientConfig {
        ClientConfig {
            base_url: "http://localhost:7272".to_string(),
            api_key: Some("test-key".to_string()),
            timeout_secs: 120,
            telemetry_enabled: true,
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(base_config().validate().is_ok());

        let mut config = base_config();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.base_url = "localhost:7272".to_string();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.api_key = Some(String::new());
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.api_key = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            base_url = "https://api.example.com"
            api_key = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 120);
        assert!(config.telemetry_enabled);
    }
}
