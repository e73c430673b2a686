//! `/key/*` endpoints

use super::{fetch, impl_endpoint_base};
use crate::query::QueryParams;
use crate::transport::RequestExecutor;
use cmc_core::{Context, Endpoint, Result};
use cmc_models::{ApiResponse, KeyData};
use std::sync::Arc;
use tracing::instrument;

/// API key endpoints
pub struct KeyEndpoints {
  executor: Arc<RequestExecutor>,
}

impl_endpoint_base!(KeyEndpoints);

impl KeyEndpoints {
  /// API key plan details and usage statistics
  ///
  /// Useful to monitor usage against the rate limit and the daily and
  /// monthly credit limits of the plan.
  #[instrument(skip(self, ctx))]
  pub async fn info(&self, ctx: &Context) -> Result<ApiResponse<KeyData>> {
    fetch(&self.executor, ctx, Endpoint::KeyInfo, QueryParams::new()).await
  }
}
