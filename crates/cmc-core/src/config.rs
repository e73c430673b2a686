//! Configuration management for the CoinMarketCap client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "COIN_MARKET_CAP_KEY";

/// Main configuration struct for the CoinMarketCap client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// CoinMarketCap Pro API key
  pub api_key: String,

  /// Base URL of the API host
  pub base_url: String,

  /// Request timeout in seconds for the bundled transport
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// A `.env` file in the working directory is honoured if present.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key =
      env::var(API_KEY_ENV).map_err(|_| Error::ApiKey(format!("{} not set", API_KEY_ENV)))?;

    let base_url = env::var("CMC_BASE_URL").unwrap_or_else(|_| crate::PRODUCTION_HOST.to_string());

    let timeout_secs = env::var("CMC_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CMC_TIMEOUT_SECS".to_string()))?;

    Ok(Config { api_key, base_url, timeout_secs })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      base_url: crate::PRODUCTION_HOST.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Point the config at another host, e.g. the sandbox or a mock server
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var(API_KEY_ENV, "test_key");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert!(!config.base_url.is_empty());
  }

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("abc".to_string()).with_base_url(crate::SANDBOX_HOST);
    assert_eq!(config.api_key, "abc");
    assert_eq!(config.base_url, "https://sandbox-api.coinmarketcap.com");
    assert_eq!(config.timeout_secs, 5);
  }
}
