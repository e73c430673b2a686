/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The top level client handing out endpoint groups

use crate::endpoints::{cryptocurrency::CryptocurrencyEndpoints, fiat::FiatEndpoints, key::KeyEndpoints};
use crate::transport::{HttpDoer, RequestExecutor};
use cmc_core::{Config, Result};
use std::sync::Arc;

/// Main CoinMarketCap API client
///
/// Provides access to the API endpoints through endpoint groups that share
/// one [`RequestExecutor`].
///
/// # Examples
///
/// ```ignore
/// use cmc_client::{CoinMarketCapClient, Context, Currency, QuotesLatestOptions};
/// use cmc_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = CoinMarketCapClient::new(config)?;
///
///     let quotes = client
///         .cryptocurrency()
///         .quotes_latest(
///             &Context::background(),
///             &[Currency::symbol("BTC")],
///             &[Currency::symbol("USD")],
///             QuotesLatestOptions::default(),
///         )
///         .await?;
///     println!("BTC price: {:?}", quotes.data.get("BTC"));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CoinMarketCapClient {
  executor: Arc<RequestExecutor>,
}

impl CoinMarketCapClient {
  /// Create a new client from configuration
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self::with_executor(RequestExecutor::from_config(&config)?))
  }

  /// Create a client on top of an existing executor
  pub fn with_executor(executor: RequestExecutor) -> Self {
    Self { executor: Arc::new(executor) }
  }

  /// Create a client sending through a custom transport
  pub fn with_doer(api_key: impl Into<String>, host: impl Into<String>, doer: impl HttpDoer + 'static) -> Self {
    Self::with_executor(RequestExecutor::new(api_key, host, doer))
  }

  /// Get access to cryptocurrency endpoints (info, map, quotes latest)
  pub fn cryptocurrency(&self) -> CryptocurrencyEndpoints {
    CryptocurrencyEndpoints::new(self.executor.clone())
  }

  /// Get access to fiat endpoints
  pub fn fiat(&self) -> FiatEndpoints {
    FiatEndpoints::new(self.executor.clone())
  }

  /// Get access to API key endpoints
  pub fn key(&self) -> KeyEndpoints {
    KeyEndpoints::new(self.executor.clone())
  }

  /// The shared executor
  pub fn executor(&self) -> &Arc<RequestExecutor> {
    &self.executor
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string()).with_base_url(cmc_core::SANDBOX_HOST);
    let client = CoinMarketCapClient::new(config).expect("Failed to create client");

    assert_eq!(client.executor().host(), cmc_core::SANDBOX_HOST);
    assert!(Arc::ptr_eq(client.cryptocurrency().executor(), client.fiat().executor()));
    assert!(Arc::ptr_eq(client.key().executor(), client.executor()));
  }

  #[test]
  fn test_with_doer() {
    let client = CoinMarketCapClient::with_doer("k", "http://localhost:9000", reqwest::Client::new());
    assert_eq!(client.executor().host(), "http://localhost:9000");
  }
}
