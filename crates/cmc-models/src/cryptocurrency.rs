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

use crate::common::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Static metadata keyed by the requested id, symbol or slug
pub type InfoMap = BTreeMap<String, InfoData>;

/// Static metadata for a cryptocurrency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoData {
  /// CoinMarketCap id
  pub id: u64,

  /// Currency name
  pub name: String,

  /// Ticker symbol
  pub symbol: String,

  /// "coin" or "token"
  #[serde(default)]
  pub category: Option<String>,

  /// URL slug
  pub slug: String,

  /// Logo URL
  #[serde(default)]
  pub logo: Option<String>,

  /// Project description
  #[serde(default)]
  pub description: Option<String>,

  /// Date the currency was added to CoinMarketCap
  #[serde(default)]
  pub date_added: Option<DateTime<Utc>>,

  /// Launch date, if known
  #[serde(default)]
  pub date_launched: Option<DateTime<Utc>>,

  /// Notice displayed on the currency page
  #[serde(default)]
  pub notice: Option<String>,

  /// Tags associated with the currency
  #[serde(default)]
  pub tags: Option<Vec<Value>>,

  /// Parent platform for tokens
  #[serde(default)]
  pub platform: Option<Platform>,

  #[serde(default)]
  pub self_reported_circulating_supply: Option<f64>,

  #[serde(default)]
  pub self_reported_market_cap: Option<f64>,

  #[serde(default)]
  pub self_reported_tags: Option<Vec<Value>>,

  /// Whether the supply is unbounded
  #[serde(default)]
  pub infinite_supply: Option<bool>,

  /// Project links
  #[serde(default)]
  pub urls: InfoUrls,
}

/// Links published for a cryptocurrency
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoUrls {
  pub website: Vec<String>,
  pub technical_doc: Vec<String>,
  pub explorer: Vec<String>,
  pub source_code: Vec<String>,
  pub message_board: Vec<String>,
  pub chat: Vec<String>,
  pub announcement: Vec<String>,
  pub reddit: Vec<String>,
  pub twitter: Vec<String>,
}

/// Listing status filter for the map endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapListingStatus {
  Active,
  Inactive,
  Untracked,
}

impl MapListingStatus {
  /// Wire value of the status
  pub fn as_str(&self) -> &'static str {
    match self {
      MapListingStatus::Active => "active",
      MapListingStatus::Inactive => "inactive",
      MapListingStatus::Untracked => "untracked",
    }
  }
}

impl fmt::Display for MapListingStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Sort field for the map endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapSortField {
  Id,
  CmcRank,
}

impl MapSortField {
  /// Wire value of the sort field
  pub fn as_str(&self) -> &'static str {
    match self {
      MapSortField::Id => "id",
      MapSortField::CmcRank => "cmc_rank",
    }
  }
}

impl fmt::Display for MapSortField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A cryptocurrency to CoinMarketCap id mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
  /// CoinMarketCap id
  pub id: u64,

  /// Rank by market cap
  #[serde(default)]
  pub rank: Option<u64>,

  /// Currency name
  pub name: String,

  /// Ticker symbol
  pub symbol: String,

  /// URL slug
  pub slug: String,

  /// 1 if the currency is actively tracked
  #[serde(default)]
  pub is_active: Option<u8>,

  /// Listing status, only present when requested through `listing_status`
  #[serde(default)]
  pub status: Option<MapListingStatus>,

  #[serde(default)]
  pub first_historical_data: Option<DateTime<Utc>>,

  #[serde(default)]
  pub last_historical_data: Option<DateTime<Utc>>,

  /// Parent platform for tokens
  #[serde(default)]
  pub platform: Option<Platform>,
}

/// Latest quotes keyed by the requested id, symbol or slug
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotesLatest(pub BTreeMap<String, QuoteEntry>);

impl QuotesLatest {
  /// Quote data for a key; the first match when a symbol is shared
  pub fn get(&self, key: &str) -> Option<&QuoteData> {
    self.0.get(key).and_then(QuoteEntry::first)
  }

  /// Every currency returned for a key
  pub fn get_all(&self, key: &str) -> &[QuoteData] {
    self.0.get(key).map(QuoteEntry::as_slice).unwrap_or_default()
  }

  /// Number of keys returned
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Whether no currency was returned
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Iterate over `(key, quote data)` pairs in key order, first match per key
  pub fn iter(&self) -> impl Iterator<Item = (&String, &QuoteData)> {
    self.0.iter().filter_map(|(key, entry)| entry.first().map(|data| (key, data)))
  }

  /// How many units of each returned currency one unit of `base` buys.
  ///
  /// Each value is the inverse of the currency's price quoted in `base`;
  /// currencies without a positive quote in `base` map to `0.0`. A key
  /// shared by several currencies uses the first one.
  pub fn quote_prices(&self, base: &str) -> BTreeMap<String, f64> {
    self
      .0
      .iter()
      .map(|(key, entry)| (key.clone(), entry.first().map_or(0.0, |data| data.inverse_price(base))))
      .collect()
  }
}

/// Quotes for one requested key.
///
/// Lookups by id or slug return a single object. Lookups by symbol return an
/// array, since several currencies can share a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteEntry {
  /// Single currency
  One(QuoteData),
  /// All currencies sharing the requested symbol
  Many(Vec<QuoteData>),
}

impl QuoteEntry {
  /// First currency of the entry
  pub fn first(&self) -> Option<&QuoteData> {
    self.as_slice().first()
  }

  /// All currencies of the entry
  pub fn as_slice(&self) -> &[QuoteData] {
    match self {
      QuoteEntry::One(data) => std::slice::from_ref(data),
      QuoteEntry::Many(all) => all,
    }
  }
}

impl From<QuoteData> for QuoteEntry {
  fn from(data: QuoteData) -> Self {
    QuoteEntry::One(data)
  }
}

/// Market data for one cryptocurrency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
  /// CoinMarketCap id
  pub id: u64,

  /// Currency name
  pub name: String,

  /// Ticker symbol
  pub symbol: String,

  /// URL slug
  pub slug: String,

  #[serde(default)]
  pub is_active: Option<u8>,

  #[serde(default)]
  pub is_fiat: Option<u8>,

  #[serde(default)]
  pub cmc_rank: Option<u64>,

  #[serde(default)]
  pub num_market_pairs: Option<u64>,

  #[serde(default)]
  pub circulating_supply: Option<f64>,

  #[serde(default)]
  pub total_supply: Option<f64>,

  #[serde(default)]
  pub market_cap_by_total_supply: Option<f64>,

  #[serde(default)]
  pub max_supply: Option<f64>,

  #[serde(default)]
  pub date_added: Option<DateTime<Utc>>,

  #[serde(default)]
  pub tags: Option<Vec<Value>>,

  #[serde(default)]
  pub platform: Option<Platform>,

  #[serde(default)]
  pub last_updated: Option<DateTime<Utc>>,

  #[serde(default)]
  pub self_reported_circulating_supply: Option<f64>,

  #[serde(default)]
  pub self_reported_market_cap: Option<f64>,

  /// Quotes keyed by the convert currency (symbol or id)
  #[serde(default)]
  pub quote: BTreeMap<String, Quote>,
}

impl QuoteData {
  fn inverse_price(&self, base: &str) -> f64 {
    match self.quote.get(base).and_then(|q| q.price) {
      Some(price) if price > 0.0 => 1.0 / price,
      _ => 0.0,
    }
  }
}

/// Market quote in one convert currency
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
  pub price: Option<f64>,
  pub volume_24h: Option<f64>,
  pub volume_change_24h: Option<f64>,
  pub volume_24h_reported: Option<f64>,
  pub volume_7d: Option<f64>,
  pub volume_7d_reported: Option<f64>,
  pub volume_30d: Option<f64>,
  pub market_cap: Option<f64>,
  pub market_cap_dominance: Option<f64>,
  pub fully_diluted_market_cap: Option<f64>,
  pub percent_change_1h: Option<f64>,
  pub percent_change_24h: Option<f64>,
  pub percent_change_7d: Option<f64>,
  pub percent_change_30d: Option<f64>,
  pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn quote_data(id: u64, symbol: &str, quotes: &[(&str, Option<f64>)]) -> QuoteData {
    let quote =
      quotes.iter().map(|(k, p)| (k.to_string(), Quote { price: *p, ..Default::default() })).collect();

    serde_json::from_value::<QuoteData>(serde_json::json!({
      "id": id,
      "name": symbol,
      "symbol": symbol,
      "slug": symbol.to_lowercase(),
    }))
    .map(|d| QuoteData { quote, ..d })
    .unwrap()
  }

  #[test]
  fn test_quote_prices() {
    let mut data = BTreeMap::new();
    data.insert("1".to_string(), quote_data(1, "BTC", &[("2781", Some(50_000.0))]).into());
    data.insert("2".to_string(), quote_data(2, "LTC", &[("2781", Some(0.0))]).into());
    data.insert("3".to_string(), quote_data(3, "ETH", &[("2790", Some(2_000.0))]).into());
    let quotes = QuotesLatest(data);

    let prices = quotes.quote_prices("2781");
    assert_eq!(prices.len(), 3);
    assert!((prices["1"] - 0.00002).abs() < 1e-12);
    assert_eq!(prices["2"], 0.0);
    assert_eq!(prices["3"], 0.0);

    assert!(QuotesLatest::default().quote_prices("USD").is_empty());
  }

  #[test]
  fn test_quotes_by_symbol_are_arrays() {
    let json = r#"{
      "BTC": [
        {"id": 1, "name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin", "quote": {"USD": {"price": 50000.0}}},
        {"id": 31469, "name": "Batcat", "symbol": "BTC", "slug": "batcat", "quote": {"USD": {"price": null}}}
      ],
      "1027": {"id": 1027, "name": "Ethereum", "symbol": "ETH", "slug": "ethereum", "quote": {"USD": {"price": 2000.0}}}
    }"#;

    let quotes: QuotesLatest = serde_json::from_str(json).unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes.get("BTC").map(|d| d.slug.as_str()), Some("bitcoin"));
    assert_eq!(quotes.get_all("BTC").len(), 2);
    assert_eq!(quotes.get_all("1027").len(), 1);
    assert!(quotes.get_all("DOGE").is_empty());

    let prices = quotes.quote_prices("USD");
    assert!((prices["BTC"] - 0.00002).abs() < 1e-12);
    assert!((prices["1027"] - 0.0005).abs() < 1e-12);

    let reencoded = serde_json::to_value(&quotes).unwrap();
    assert!(reencoded["BTC"].is_array());
    assert!(reencoded["1027"].is_object());
  }

  #[test]
  fn test_map_data_parsing() {
    let json = r#"{
      "id": 1,
      "rank": 1,
      "name": "Bitcoin",
      "symbol": "BTC",
      "slug": "bitcoin",
      "is_active": 1,
      "status": "active",
      "first_historical_data": "2010-07-13T00:05:00.000Z",
      "last_historical_data": "2025-06-28T16:00:00.000Z",
      "platform": null
    }"#;

    let data: MapData = serde_json::from_str(json).unwrap();
    assert_eq!(data.id, 1);
    assert_eq!(data.status, Some(MapListingStatus::Active));
    assert!(data.platform.is_none());
    assert!(data.first_historical_data.is_some());
  }

  #[test]
  fn test_info_data_parsing() {
    let json = r#"{
      "id": 1027,
      "name": "Ethereum",
      "symbol": "ETH",
      "category": "coin",
      "slug": "ethereum",
      "logo": "https://s2.coinmarketcap.com/static/img/coins/64x64/1027.png",
      "tags": ["pos", "smart-contracts"],
      "platform": null,
      "date_added": "2015-08-07T00:00:00.000Z",
      "date_launched": null,
      "urls": {"website": ["https://www.ethereum.org/"], "twitter": []}
    }"#;

    let data: InfoData = serde_json::from_str(json).unwrap();
    assert_eq!(data.symbol, "ETH");
    assert_eq!(data.urls.website, vec!["https://www.ethereum.org/".to_string()]);
    assert!(data.urls.reddit.is_empty());
    assert!(data.date_launched.is_none());
  }

  #[test]
  fn test_enum_wire_values() {
    assert_eq!(MapListingStatus::Untracked.to_string(), "untracked");
    assert_eq!(MapSortField::CmcRank.as_str(), "cmc_rank");
    assert_eq!(serde_json::to_string(&MapSortField::CmcRank).unwrap(), "\"cmc_rank\"");
  }
}
