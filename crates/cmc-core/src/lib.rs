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

//! # cmc-core
//!
//! Core types shared by the cmc-* crates: the error taxonomy, configuration,
//! cancellation context, currency identifiers and the endpoint catalogue.

pub mod config;
pub mod context;
pub mod error;
pub mod types;

pub use config::Config;
pub use context::{CancelHandle, Context};
pub use error::{ApiError, BoxError, Error, Result};
pub use types::{Currency, CurrencyId};

/// The CoinMarketCap API endpoints supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  /// Static metadata for one or more cryptocurrencies
  CryptocurrencyInfo,
  /// Mapping of cryptocurrencies to CoinMarketCap ids
  CryptocurrencyMap,
  /// Latest market quotes for one or more cryptocurrencies
  QuotesLatest,
  /// Mapping of fiat currencies to CoinMarketCap ids
  FiatMap,
  /// API key details and usage
  KeyInfo,
}

impl Endpoint {
  /// Path of the endpoint relative to the API host.
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::CryptocurrencyInfo => "/v2/cryptocurrency/info",
      Endpoint::CryptocurrencyMap => "/v1/cryptocurrency/map",
      Endpoint::QuotesLatest => "/v2/cryptocurrency/quotes/latest",
      Endpoint::FiatMap => "/v1/fiat/map",
      Endpoint::KeyInfo => "/v1/key/info",
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.path())
  }
}

/// Production host of the CoinMarketCap Pro API
pub const PRODUCTION_HOST: &str = "https://pro-api.coinmarketcap.com";

/// Sandbox host, accepts the public sandbox key
pub const SANDBOX_HOST: &str = "https://sandbox-api.coinmarketcap.com";

/// Header carrying the API key, as the upstream API documents it.
///
/// Header names are case-insensitive and the HTTP stack sends them lowercased.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Default request timeout in seconds for the bundled transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_paths() {
    assert_eq!(Endpoint::QuotesLatest.path(), "/v2/cryptocurrency/quotes/latest");
    assert_eq!(Endpoint::FiatMap.to_string(), "/v1/fiat/map");
    assert_eq!(Endpoint::KeyInfo.path(), "/v1/key/info");
  }
}
