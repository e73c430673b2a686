use thiserror::Error;

/// Boxed error carried as the source of stage errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error reported by the API itself through the `status` object of a
/// successfully decoded response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("code: {code} message: {message}")]
pub struct ApiError {
  /// Numeric error code from `status.error_code`
  pub code: i64,
  /// Message from `status.error_message`
  pub message: String,
}

impl ApiError {
  /// Create a new API error
  pub fn new(code: i64, message: impl Into<String>) -> Self {
    Self { code, message: message.into() }
  }
}

/// The main error type for cmc-* crates
///
/// Request failures are labelled with the stage that produced them.
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Currency identifier could not be built
  #[error("Invalid currency: {0}")]
  InvalidCurrency(String),

  /// Endpoint url could not be built from host and path
  #[error("make endpoint url: {0}")]
  EndpointUrl(String),

  /// Request could not be constructed
  #[error("create http request: {0}")]
  Request(String),

  /// Pre-process hook rejected the request
  #[error("pre process: {0}")]
  PreProcess(#[source] BoxError),

  /// HTTP transport error, including a failed or canceled body read
  #[error("do http request: {0}")]
  Transport(#[source] BoxError),

  /// Response body could not be decoded
  #[error("json decode: {0}")]
  Decode(#[from] serde_json::Error),

  /// Error code embedded in the response status
  #[error(transparent)]
  Api(#[from] ApiError),

  /// Missing required field in response
  #[error("Missing required field: {0}")]
  MissingField(String),
}

impl Error {
  /// The embedded API error, if this is one
  pub fn api_error(&self) -> Option<&ApiError> {
    match self {
      Error::Api(err) => Some(err),
      _ => None,
    }
  }
}

/// Result type alias for cmc-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_error_display() {
    let err = ApiError::new(1002, "API key missing.");
    assert_eq!(err.to_string(), "code: 1002 message: API key missing.");

    let wrapped: Error = err.clone().into();
    assert_eq!(wrapped.to_string(), "code: 1002 message: API key missing.");
    assert_eq!(wrapped.api_error(), Some(&err));
  }

  #[test]
  fn test_stage_labels() {
    assert_eq!(Error::PreProcess("some pre process error".into()).to_string(), "pre process: some pre process error");
    assert_eq!(Error::Transport("some do error".into()).to_string(), "do http request: some do error");
    assert!(Error::Transport("x".into()).api_error().is_none());
  }

  #[test]
  fn test_stage_errors_keep_source() {
    use std::error::Error as _;

    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    let err = Error::Transport(Box::new(io));
    let source = err.source().expect("transport error has a source");
    assert_eq!(source.to_string(), "connection refused");
    assert!(source.downcast_ref::<std::io::Error>().is_some());

    let err = Error::PreProcess(Box::new(Error::Config("bad query".to_string())));
    let source = err.source().and_then(|s| s.downcast_ref::<Error>());
    assert!(matches!(source, Some(Error::Config(_))));
  }
}
