//! `/fiat/*` endpoints

use super::{fetch, impl_endpoint_base};
use crate::query::{MergeQuery, QueryParams, INCLUDE_METALS, LIMIT, SORT, START};
use crate::transport::RequestExecutor;
use cmc_core::{Context, Endpoint, Result};
use cmc_models::{ApiResponse, FiatMapData, FiatSortField};
use std::sync::Arc;
use tracing::instrument;

/// Fiat currency endpoints
pub struct FiatEndpoints {
  executor: Arc<RequestExecutor>,
}

impl_endpoint_base!(FiatEndpoints);

/// Optional parameters of the fiat map endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiatMapOptions {
  start: u32,
  limit: u32,
  sort: Option<FiatSortField>,
  include_metals: bool,
}

impl Default for FiatMapOptions {
  fn default() -> Self {
    Self { start: 1, limit: 0, sort: None, include_metals: false }
  }
}

impl FiatMapOptions {
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

  /// Sort field. The API sorts by `id` when unset.
  pub fn sort(mut self, field: impl Into<Option<FiatSortField>>) -> Self {
    self.sort = field.into();
    self
  }

  /// Include precious metals. Default `false`.
  pub fn include_metals(mut self, include: bool) -> Self {
    self.include_metals = include;
    self
  }
}

impl MergeQuery for FiatMapOptions {
  fn merge_into(&self, query: &mut QueryParams) {
    // start=1 is the API default and is not sent
    if self.start > 1 {
      query.set(START, self.start.to_string());
    }
    if self.limit > 0 {
      query.set(LIMIT, self.limit.to_string());
    }
    if let Some(sort) = self.sort {
      query.set(SORT, sort.as_str());
    }
    if self.include_metals {
      query.set(INCLUDE_METALS, "true");
    }
  }
}

/// Query for the fiat map endpoint
pub fn fiat_map_query(options: &FiatMapOptions) -> QueryParams {
  let mut params = QueryParams::new();
  options.merge_into(&mut params);
  params
}

impl FiatEndpoints {
  /// Mapping of all supported fiat currencies to CoinMarketCap ids
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let fiats = client
  ///   .fiat()
  ///   .map(&Context::background(), FiatMapOptions::default().include_metals(true))
  ///   .await?;
  /// for fiat in &fiats.data {
  ///   println!("{} {} ({})", fiat.id, fiat.symbol, fiat.sign);
  /// }
  /// ```
  #[instrument(skip(self, ctx))]
  pub async fn map(&self, ctx: &Context, options: FiatMapOptions) -> Result<ApiResponse<Vec<FiatMapData>>> {
    fetch(&self.executor, ctx, Endpoint::FiatMap, fiat_map_query(&options)).await
  }
}
