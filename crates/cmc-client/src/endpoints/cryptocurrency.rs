//! `/cryptocurrency/*` endpoints: info, map and quotes latest

use super::{fetch, impl_endpoint_base};
use crate::query::{
  self, MergeQuery, QueryParams, ADDRESS, AUX, LIMIT, LISTING_STATUS, SKIP_INVALID, SORT, START,
  SYMBOL,
};
use crate::transport::RequestExecutor;
use cmc_core::{Context, Currency, Endpoint, Result};
use cmc_models::{ApiResponse, InfoMap, MapData, MapListingStatus, MapSortField, QuotesLatest};
use std::sync::Arc;
use tracing::instrument;

/// Cryptocurrency endpoints
pub struct CryptocurrencyEndpoints {
  executor: Arc<RequestExecutor>,
}

impl_endpoint_base!(CryptocurrencyEndpoints);

/// Optional parameters of the info endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoOptions {
  address: Option<String>,
  aux: Vec<String>,
  skip_invalid: bool,
}

impl Default for InfoOptions {
  fn default() -> Self {
    Self { address: None, aux: Vec::new(), skip_invalid: true }
  }
}

impl InfoOptions {
  /// Look the currency up by contract address instead of by identifier
  pub fn address(mut self, address: impl Into<String>) -> Self {
    self.address = Some(address.into()).filter(|a: &String| !a.is_empty());
    self
  }

  /// Supplemental fields to return.
  ///
  /// API default: `urls,logo,description,tags,platform,date_added,notice`.
  pub fn aux<I, S>(mut self, fields: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.aux = fields.into_iter().map(Into::into).collect();
    self
  }

  /// Skip invalid lookups instead of failing the whole request. Default `true`.
  pub fn skip_invalid(mut self, skip: bool) -> Self {
    self.skip_invalid = skip;
    self
  }
}

impl MergeQuery for InfoOptions {
  fn merge_into(&self, query: &mut QueryParams) {
    if let Some(address) = &self.address {
      query.set(ADDRESS, address.as_str());
    }
    query.set_list(AUX, &self.aux);
    query.set(SKIP_INVALID, self.skip_invalid.to_string());
  }
}

/// Query for the info endpoint. A contract address replaces the currency list.
pub fn info_query(currencies: &[Currency], options: &InfoOptions) -> QueryParams {
  let mut params = QueryParams::new();

  if options.address.is_none() {
    params.set_currencies(query::source_key(currencies), currencies);
  }
  options.merge_into(&mut params);

  params
}

/// Optional parameters of the map endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapOptions {
  listing_status: Option<MapListingStatus>,
  start: u32,
  limit: u32,
  sort: Option<MapSortField>,
  symbols: Vec<String>,
  aux: Vec<String>,
}

impl Default for MapOptions {
  fn default() -> Self {
    Self {
      listing_status: Some(MapListingStatus::Active),
      start: 1,
      limit: 0,
      sort: Some(MapSortField::Id),
      symbols: Vec::new(),
      aux: Vec::new(),
    }
  }
}

impl MapOptions {
  /// Listing status filter. Default `active`; `None` leaves it out of the query.
  pub fn listing_status(mut self, status: impl Into<Option<MapListingStatus>>) -> Self {
    self.listing_status = status.into();
    self
  }

  /// 1-based offset of the first item. Default `1`.
  pub fn start(mut self, start: u32) -> Self {
    self.start = start;
    self
  }

  /// Number of items to return; `0` leaves it to the API
  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = limit;
    self
  }

  /// Sort field. Default `id`; `None` leaves it out of the query.
  pub fn sort(mut self, field: impl Into<Option<MapSortField>>) -> Self {
    self.sort = field.into();
    self
  }

  /// Only map these symbols. When set, every other option is ignored.
  pub fn symbols<I, S>(mut self, symbols: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.symbols = symbols.into_iter().map(Into::into).collect();
    self
  }

  /// Supplemental fields to return.
  ///
  /// API default: `platform,first_historical_data,last_historical_data,is_active`.
  pub fn aux<I, S>(mut self, fields: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.aux = fields.into_iter().map(Into::into).collect();
    self
  }
}

impl MergeQuery for MapOptions {
  fn merge_into(&self, query: &mut QueryParams) {
    if !self.symbols.is_empty() {
      query.set_list(SYMBOL, &self.symbols);
      return;
    }

    if let Some(status) = self.listing_status {
      query.set(LISTING_STATUS, status.as_str());
    }
    if self.start > 0 {
      query.set(START, self.start.to_string());
    }
    if self.limit > 0 {
      query.set(LIMIT, self.limit.to_string());
    }
    if let Some(sort) = self.sort {
      query.set(SORT, sort.as_str());
    }
    query.set_list(AUX, &self.aux);
  }
}

/// Query for the map endpoint
pub fn map_query(options: &MapOptions) -> QueryParams {
  let mut params = QueryParams::new();
  options.merge_into(&mut params);
  params
}

/// Optional parameters of the quotes latest endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotesLatestOptions {
  aux: Vec<String>,
  skip_invalid: bool,
}

impl Default for QuotesLatestOptions {
  fn default() -> Self {
    Self { aux: Vec::new(), skip_invalid: true }
  }
}

impl QuotesLatestOptions {
  /// Supplemental fields to return.
  ///
  /// API default: `num_market_pairs,cmc_rank,date_added,tags,platform,max_supply,
  /// circulating_supply,total_supply,is_active,is_fiat`.
  pub fn aux<I, S>(mut self, fields: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.aux = fields.into_iter().map(Into::into).collect();
    self
  }

  /// Skip invalid lookups instead of failing the whole request. Default `true`.
  pub fn skip_invalid(mut self, skip: bool) -> Self {
    self.skip_invalid = skip;
    self
  }
}

impl MergeQuery for QuotesLatestOptions {
  fn merge_into(&self, query: &mut QueryParams) {
    query.set_list(AUX, &self.aux);
    query.set(SKIP_INVALID, self.skip_invalid.to_string());
  }
}

/// Query for the quotes latest endpoint
pub fn quotes_latest_query(
  convert_from: &[Currency],
  convert_to: &[Currency],
  options: &QuotesLatestOptions,
) -> QueryParams {
  let mut params = QueryParams::new();
  params.set_currencies(query::convert_key(convert_to), convert_to);
  params.set_currencies(query::source_key(convert_from), convert_from);
  options.merge_into(&mut params);
  params
}

impl CryptocurrencyEndpoints {
  /// Static metadata for one or more cryptocurrencies
  ///
  /// # Arguments
  ///
  /// * `currencies` - Currencies to describe, all by id, all by symbol or all by slug
  /// * `options` - Contract address, aux fields and validation behaviour
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let info = client
  ///   .cryptocurrency()
  ///   .info(&Context::background(), &[Currency::slug("bitcoin")], InfoOptions::default())
  ///   .await?;
  /// for (key, data) in &info.data {
  ///   println!("{}: {}", key, data.name);
  /// }
  /// ```
  #[instrument(skip(self, ctx))]
  pub async fn info(
    &self,
    ctx: &Context,
    currencies: &[Currency],
    options: InfoOptions,
  ) -> Result<ApiResponse<InfoMap>> {
    fetch(&self.executor, ctx, Endpoint::CryptocurrencyInfo, info_query(currencies, &options)).await
  }

  /// Mapping of cryptocurrencies to CoinMarketCap ids
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let map = client
  ///   .cryptocurrency()
  ///   .map(&Context::background(), MapOptions::default().symbols(["BTC"]))
  ///   .await?;
  /// println!("BTC id: {}", map.data[0].id);
  /// ```
  #[instrument(skip(self, ctx))]
  pub async fn map(&self, ctx: &Context, options: MapOptions) -> Result<ApiResponse<Vec<MapData>>> {
    fetch(&self.executor, ctx, Endpoint::CryptocurrencyMap, map_query(&options)).await
  }

  /// Latest market quotes for one or more cryptocurrencies
  ///
  /// # Arguments
  ///
  /// * `convert_from` - Currencies to quote
  /// * `convert_to` - Currencies to quote in, by id or by symbol
  /// * `options` - Aux fields and validation behaviour
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let quotes = client
  ///   .cryptocurrency()
  ///   .quotes_latest(
  ///     &Context::background(),
  ///     &[Currency::id(1), Currency::id(2)],
  ///     &[Currency::id(2781)],
  ///     QuotesLatestOptions::default().skip_invalid(false),
  ///   )
  ///   .await?;
  /// println!("{:?}", quotes.data.quote_prices("2781"));
  /// ```
  #[instrument(skip(self, ctx))]
  pub async fn quotes_latest(
    &self,
    ctx: &Context,
    convert_from: &[Currency],
    convert_to: &[Currency],
    options: QuotesLatestOptions,
  ) -> Result<ApiResponse<QuotesLatest>> {
    let params = quotes_latest_query(convert_from, convert_to, &options);
    fetch(&self.executor, ctx, Endpoint::QuotesLatest, params).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_info_query_by_slug() {
    let params = info_query(&[Currency::slug("bitcoin"), Currency::slug("litecoin")], &InfoOptions::default());
    assert_eq!(params.encode(), "skip_invalid=true&slug=bitcoin%2Clitecoin");
  }

  #[test]
  fn test_info_query_address_takes_precedence() {
    let options = InfoOptions::default().address("0xc40af1e4fecfa05ce6bab79dcd8b373d2e436c4e");
    let params = info_query(&[Currency::id(1)], &options);

    assert_eq!(params.get(ADDRESS), Some("0xc40af1e4fecfa05ce6bab79dcd8b373d2e436c4e"));
    assert!(!params.contains("id"));
    assert!(!params.contains("symbol"));
    assert!(!params.contains("slug"));
  }

  #[test]
  fn test_info_query_skip_invalid_always_emitted() {
    let params = info_query(&[Currency::id(1)], &InfoOptions::default());
    assert_eq!(params.encode(), "id=1&skip_invalid=true");

    let options = InfoOptions::default().skip_invalid(false).aux(["urls", "logo"]);
    let params = info_query(&[Currency::id(1)], &options);
    assert_eq!(params.encode(), "aux=urls%2Clogo&id=1&skip_invalid=false");
  }

  #[test]
  fn test_info_query_empty_currencies_omits_key() {
    let params = info_query(&[], &InfoOptions::default());
    assert_eq!(params.encode(), "skip_invalid=true");
  }

  #[test]
  fn test_later_options_override_earlier() {
    let options = InfoOptions::default().skip_invalid(false).skip_invalid(true).aux(["a"]).aux(["b"]);
    assert_eq!(options, InfoOptions::default().aux(["b"]));
  }

  #[test]
  fn test_map_query_defaults() {
    let params = map_query(&MapOptions::default());
    assert_eq!(params.encode(), "listing_status=active&sort=id&start=1");
  }

  #[test]
  fn test_map_query_with_options() {
    let options = MapOptions::default()
      .listing_status(MapListingStatus::Untracked)
      .start(101)
      .limit(100)
      .sort(MapSortField::CmcRank)
      .aux(["platform", "is_active"]);

    assert_eq!(
      map_query(&options).encode(),
      "aux=platform%2Cis_active&limit=100&listing_status=untracked&sort=cmc_rank&start=101"
    );
  }

  #[test]
  fn test_map_query_cleared_defaults() {
    let options = MapOptions::default().listing_status(None).sort(None);
    assert_eq!(map_query(&options).encode(), "start=1");

    let options = MapOptions::default().sort(MapSortField::CmcRank).sort(None).limit(5);
    assert_eq!(map_query(&options).encode(), "limit=5&listing_status=active&start=1");
  }

  #[test]
  fn test_map_query_symbol_shortcut_supersedes_everything() {
    let options = MapOptions::default().limit(10).sort(MapSortField::CmcRank).aux(["platform"]).symbols(["BTC", "ETH"]);
    assert_eq!(map_query(&options).encode(), "symbol=BTC%2CETH");
  }

  #[test]
  fn test_quotes_latest_query_by_id() {
    let params = quotes_latest_query(&[Currency::id(1), Currency::id(2)], &[Currency::id(2781)], &QuotesLatestOptions::default());
    assert_eq!(params.encode(), "convert_id=2781&id=1%2C2&skip_invalid=true");
  }

  #[test]
  fn test_quotes_latest_query_by_symbol() {
    let options = QuotesLatestOptions::default().skip_invalid(false).aux(["cmc_rank"]);
    let params = quotes_latest_query(
      &[Currency::symbol("BTC"), Currency::symbol("LTC"), Currency::symbol("ETH")],
      &[Currency::symbol("USD"), Currency::symbol("EUR")],
      &options,
    );
    assert_eq!(params.encode(), "aux=cmc_rank&convert=USD%2CEUR&skip_invalid=false&symbol=BTC%2CLTC%2CETH");
  }

  #[test]
  fn test_quotes_latest_query_slug_target_is_dropped() {
    let params =
      quotes_latest_query(&[Currency::slug("bitcoin")], &[Currency::slug("us-dollar")], &QuotesLatestOptions::default());
    assert!(!params.contains("convert"));
    assert!(!params.contains("convert_id"));
    assert_eq!(params.encode(), "skip_invalid=true&slug=bitcoin");
  }
}
