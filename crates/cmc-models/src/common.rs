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

//! Envelope and shared structures present in every CoinMarketCap response

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status object returned with every response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Status {
  /// Time the response was generated
  #[serde(default)]
  pub timestamp: Option<DateTime<Utc>>,

  /// Error code, `0` on success
  #[serde(default)]
  pub error_code: i64,

  /// Error message, `null` on success
  #[serde(default)]
  pub error_message: Option<String>,

  /// Milliseconds taken to produce the response
  #[serde(default)]
  pub elapsed: i64,

  /// Credits consumed by the call
  #[serde(default)]
  pub credit_count: i64,

  /// Notice about upcoming changes to the endpoint
  #[serde(default)]
  pub notice: Option<String>,
}

impl Status {
  /// Whether the API reported an error
  pub fn is_error(&self) -> bool {
    self.error_code != 0
  }

  /// Error message or an empty string
  pub fn message(&self) -> &str {
    self.error_message.as_deref().unwrap_or_default()
  }
}

/// Raw response as decoded from the wire.
///
/// `data` is optional because error responses usually omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
  /// Endpoint payload, `None` when missing or `null`
  pub data: Option<T>,

  /// Response status
  pub status: Status,
}

/// Successful response with its payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
  /// Endpoint payload
  pub data: T,

  /// Response status
  pub status: Status,
}

/// Platform (parent chain) of a token
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Platform {
  /// Platform id. Some endpoints send it as a number, others as a string.
  #[serde(default, deserialize_with = "string_or_number")]
  pub id: Option<String>,

  /// Platform name
  #[serde(default)]
  pub name: String,

  /// Platform symbol
  #[serde(default)]
  pub symbol: String,

  /// Platform slug
  #[serde(default)]
  pub slug: String,

  /// Token contract address on the platform
  #[serde(default)]
  pub token_address: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  match Value::deserialize(deserializer)? {
    Value::Null => Ok(None),
    Value::String(s) if s.is_empty() => Ok(None),
    Value::String(s) => Ok(Some(s)),
    Value::Number(n) => Ok(Some(n.to_string())),
    other => Err(serde::de::Error::custom(format!("expected string or number, got {}", other))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_envelope_without_data() {
    let json = r#"{
      "status": {
        "timestamp": "2025-06-28T16:19:48.947Z",
        "error_code": 1002,
        "error_message": "API key missing.",
        "elapsed": 0,
        "credit_count": 0
      }
    }"#;

    let envelope: Envelope<Vec<Value>> = serde_json::from_str(json).unwrap();
    assert!(envelope.data.is_none());
    assert!(envelope.status.is_error());
    assert_eq!(envelope.status.message(), "API key missing.");
    assert!(envelope.status.notice.is_none());
  }

  #[test]
  fn test_platform_id_forms() {
    let numeric: Platform = serde_json::from_str(r#"{"id": 1027, "name": "Ethereum"}"#).unwrap();
    assert_eq!(numeric.id.as_deref(), Some("1027"));

    let text: Platform = serde_json::from_str(r#"{"id": "1027"}"#).unwrap();
    assert_eq!(text.id.as_deref(), Some("1027"));

    let empty: Platform = serde_json::from_str(r#"{"id": "", "token_address": ""}"#).unwrap();
    assert!(empty.id.is_none());

    assert!(serde_json::from_str::<Platform>(r#"{"id": [1]}"#).is_err());
  }
}
