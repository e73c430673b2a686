//! HTTP transport layer for CoinMarketCap API requests

use async_trait::async_trait;
use cmc_core::{Config, Context, Error, Result, API_KEY_HEADER, PRODUCTION_HOST};
pub use cmc_core::BoxError;
use reqwest::header::{HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Method, Request, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Sends a fully built request and returns the raw response.
///
/// Implement this to put retries, rate limiting or caching in front of the
/// executor. Status codes are not interpreted by the executor.
#[async_trait]
pub trait HttpDoer: Send + Sync {
  /// Send the request
  async fn send(&self, request: Request) -> std::result::Result<Response, BoxError>;
}

#[async_trait]
impl HttpDoer for Client {
  async fn send(&self, request: Request) -> std::result::Result<Response, BoxError> {
    Client::execute(self, request).await.map_err(Into::into)
  }
}

/// Executes authenticated GET requests against the API host.
///
/// The executor holds no per-call state and can be shared between tasks.
pub struct RequestExecutor {
  api_key: String,
  host: String,
  doer: Arc<dyn HttpDoer>,
}

impl RequestExecutor {
  /// Create an executor for `host` sending through `doer`
  pub fn new(api_key: impl Into<String>, host: impl Into<String>, doer: impl HttpDoer + 'static) -> Self {
    Self::with_shared_doer(api_key, host, Arc::new(doer))
  }

  /// Create an executor sharing an existing doer
  pub fn with_shared_doer(
    api_key: impl Into<String>,
    host: impl Into<String>,
    doer: Arc<dyn HttpDoer>,
  ) -> Self {
    Self { api_key: api_key.into(), host: host.into(), doer }
  }

  /// Create an executor for the production API host
  pub fn production(api_key: impl Into<String>, doer: impl HttpDoer + 'static) -> Self {
    Self::new(api_key, PRODUCTION_HOST, doer)
  }

  /// Create an executor backed by a `reqwest` client configured from `config`
  pub fn from_config(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("cmc-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self::new(config.api_key.clone(), config.base_url.clone(), client))
  }

  /// Host the executor sends requests to
  pub fn host(&self) -> &str {
    &self.host
  }

  /// Absolute url of `path` on the configured host
  pub fn endpoint_url(&self, path: &str) -> Result<Url> {
    let mut url =
      Url::parse(&self.host).map_err(|e| Error::EndpointUrl(format!("parse {:?}: {}", self.host, e)))?;

    url
      .path_segments_mut()
      .map_err(|_| Error::EndpointUrl(format!("{:?} cannot be used as a base url", self.host)))?
      .pop_if_empty()
      .extend(path.split('/').filter(|segment| !segment.is_empty()));

    Ok(url)
  }

  /// Execute a GET request for `path` and decode the JSON body into `T`.
  ///
  /// `pre_process` receives the request after the default headers are set
  /// and before it is sent; it is where callers install the query string.
  /// The decoded body is returned as is: an error status embedded in the
  /// body is left to the caller.
  ///
  /// # Errors
  ///
  /// Each failure is labelled with its stage: [`Error::EndpointUrl`],
  /// [`Error::Request`], [`Error::PreProcess`], [`Error::Transport`] or
  /// [`Error::Decode`].
  #[instrument(skip(self, ctx, pre_process))]
  pub async fn get<T, F>(&self, ctx: &Context, path: &str, pre_process: F) -> Result<T>
  where
    T: DeserializeOwned,
    F: FnOnce(Request) -> Result<Request> + Send,
  {
    let url = self.endpoint_url(path)?;
    let request = self.build_request(ctx, url)?;
    let request = pre_process(request).map_err(|e| Error::PreProcess(Box::new(e)))?;

    debug!("Making request to: {}", request.url());

    // Cancellation covers the whole exchange, body included
    let exchange = async {
      let response = self.doer.send(request).await.map_err(Error::Transport)?;
      debug!("Response status: {}", response.status());
      response.bytes().await.map_err(|e| Error::Transport(Box::new(e)))
    };

    let body = tokio::select! {
      biased;
      _ = ctx.canceled() => Err(Error::Transport("context canceled".into())),
      body = exchange => body,
    }?;

    debug!("Response body length: {} bytes", body.len());

    serde_json::from_slice(&body).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      error!("Response text (first 200 bytes): {}", String::from_utf8_lossy(&body[..body.len().min(200)]));
      Error::Decode(e)
    })
  }

  fn build_request(&self, ctx: &Context, url: Url) -> Result<Request> {
    if ctx.is_canceled() {
      return Err(Error::Request("context canceled".to_string()));
    }

    let mut api_key = HeaderValue::from_str(&self.api_key)
      .map_err(|e| Error::Request(format!("invalid api key header value: {}", e)))?;
    api_key.set_sensitive(true);

    let key_header = HeaderName::from_bytes(API_KEY_HEADER.as_bytes())
      .map_err(|e| Error::Request(format!("invalid api key header name: {}", e)))?;

    let mut request = Request::new(Method::GET, url);
    let headers = request.headers_mut();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(key_header, api_key);

    Ok(request)
  }
}

impl std::fmt::Debug for RequestExecutor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RequestExecutor")
      .field("host", &self.host)
      .field("api_key", &"<redacted>")
      .field("doer", &"HttpDoer")
      .finish()
  }
}
