//! Endpoint groups of the CoinMarketCap API.
//!
//! Each method builds its query, sends it through the shared executor and
//! translates an error status embedded in the response into [`Error::Api`].

pub mod cryptocurrency;
pub mod fiat;
pub mod key;

use crate::query::QueryParams;
use crate::transport::RequestExecutor;
use cmc_core::{ApiError, Context, Endpoint, Error, Result};
use cmc_models::{ApiResponse, Envelope};
use reqwest::Request;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Macro to implement the shared constructor and accessor for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $struct_name {
      /// Create a new endpoint group on top of a shared executor
      pub fn new(executor: std::sync::Arc<crate::transport::RequestExecutor>) -> Self {
        Self { executor }
      }

      /// The executor requests are sent through
      pub fn executor(&self) -> &std::sync::Arc<crate::transport::RequestExecutor> {
        &self.executor
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Pre-process hook that installs `query` as the request's query string.
pub fn with_query(query: QueryParams) -> impl FnOnce(Request) -> Result<Request> + Send {
  move |mut request| {
    let encoded = query.encode();
    request.url_mut().set_query(if encoded.is_empty() { None } else { Some(&encoded) });
    Ok(request)
  }
}

/// Check the status embedded in a decoded response.
///
/// A non-zero error code becomes [`Error::Api`] and any payload is dropped.
pub fn into_response<T>(endpoint: Endpoint, envelope: Envelope<T>) -> Result<ApiResponse<T>> {
  let Envelope { data, status } = envelope;

  if status.is_error() {
    warn!(%endpoint, code = status.error_code, "API returned error status: {}", status.message());
    return Err(ApiError::new(status.error_code, status.message()).into());
  }

  let data = data.ok_or_else(|| Error::MissingField("data".to_string()))?;
  Ok(ApiResponse { data, status })
}

/// Send `query` to `endpoint` and translate the embedded status.
pub(crate) async fn fetch<T>(
  executor: &RequestExecutor,
  ctx: &Context,
  endpoint: Endpoint,
  query: QueryParams,
) -> Result<ApiResponse<T>>
where
  T: DeserializeOwned,
{
  let envelope: Envelope<T> = executor.get(ctx, endpoint.path(), with_query(query)).await?;
  into_response(endpoint, envelope)
}

#[cfg(test)]
mod tests {
  use super::*;
  use cmc_models::Status;
  use reqwest::Method;

  fn status(code: i64, message: Option<&str>) -> Status {
    Status { error_code: code, error_message: message.map(str::to_string), ..Default::default() }
  }

  #[test]
  fn test_into_response_success() {
    let envelope = Envelope { data: Some(vec![1, 2, 3]), status: status(0, None) };
    let response = into_response(Endpoint::FiatMap, envelope).unwrap();
    assert_eq!(response.data, vec![1, 2, 3]);
  }

  #[test]
  fn test_into_response_api_error_drops_payload() {
    let envelope = Envelope { data: Some(vec![1]), status: status(1002, Some("API key missing.")) };
    let err = into_response(Endpoint::FiatMap, envelope).unwrap_err();
    assert_eq!(err.to_string(), "code: 1002 message: API key missing.");
    assert_eq!(err.api_error().map(|e| e.code), Some(1002));
  }

  #[test]
  fn test_into_response_missing_data() {
    let envelope: Envelope<Vec<u8>> = Envelope { data: None, status: status(0, None) };
    let err = into_response(Endpoint::KeyInfo, envelope).unwrap_err();
    assert!(matches!(err, Error::MissingField(_)));
  }

  #[test]
  fn test_with_query() {
    let url = url::Url::parse("https://pro-api.coinmarketcap.com/v1/fiat/map").unwrap();

    let mut query = QueryParams::new();
    query.set("limit", "10");
    let request = with_query(query)(Request::new(Method::GET, url.clone())).unwrap();
    assert_eq!(request.url().query(), Some("limit=10"));

    let request = with_query(QueryParams::new())(Request::new(Method::GET, url)).unwrap();
    assert_eq!(request.url().query(), None);
  }
}
