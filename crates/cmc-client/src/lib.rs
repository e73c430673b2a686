//! # cmc-client
//!
//! A CoinMarketCap Pro API client for Rust.
//!
//! ## Features
//!
//! - **Deterministic queries**: identifier lists and options are rendered into
//!   one canonical, key-sorted query string
//! - **Pluggable transport**: requests go through an [`HttpDoer`], implemented
//!   for `reqwest::Client`; wrap it to add retries or rate limiting
//! - **Type Safe**: responses decode into cmc-models structures
//! - **Clear errors**: every failure names the stage that produced it, and
//!   error codes reported by the API surface as [`ApiError`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cmc_client::{CoinMarketCapClient, Context, Currency, InfoOptions};
//! use cmc_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinMarketCapClient::new(Config::from_env()?)?;
//!     let ctx = Context::background();
//!
//!     let info = client
//!         .cryptocurrency()
//!         .info(&ctx, &[Currency::slug("bitcoin")], InfoOptions::default())
//!         .await?;
//!     println!("{:?}", info.data.keys().collect::<Vec<_>>());
//!
//!     let usage = client.key().info(&ctx).await?;
//!     println!("credits used today: {}", usage.data.usage.current_day.credits_used);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cmc_core::Error>`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod query;
pub mod transport;

// Re-export the main client and common types
pub use client::CoinMarketCapClient;
pub use cmc_core::{ApiError, Config, Context, Currency, CurrencyId, Error, Result};
pub use cmc_models::*;
pub use transport::{HttpDoer, RequestExecutor};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  cryptocurrency::{CryptocurrencyEndpoints, InfoOptions, MapOptions, QuotesLatestOptions},
  fiat::{FiatEndpoints, FiatMapOptions},
  key::KeyEndpoints,
};
