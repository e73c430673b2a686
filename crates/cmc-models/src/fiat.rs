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

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fiat currency (or precious metal) to CoinMarketCap id mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiatMapData {
  /// CoinMarketCap id, e.g. `2781` for USD
  pub id: u64,

  /// Currency name
  pub name: String,

  /// Currency sign, e.g. `$`
  #[serde(default)]
  pub sign: String,

  /// Currency code, e.g. `USD`
  pub symbol: String,
}

/// Sort field for the fiat map endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiatSortField {
  Id,
  Name,
}

impl FiatSortField {
  /// Wire value of the sort field
  pub fn as_str(&self) -> &'static str {
    match self {
      FiatSortField::Id => "id",
      FiatSortField::Name => "name",
    }
  }
}

impl fmt::Display for FiatSortField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Envelope;

  #[test]
  fn test_fiat_map_parsing() {
    let json = r#"{
      "data": [
        {"id": 2781, "name": "United States Dollar", "sign": "$", "symbol": "USD"},
        {"id": 3575, "name": "Gold Troy Ounce", "sign": "", "symbol": "XAU"}
      ],
      "status": {"timestamp": "2025-06-28T16:19:48.947Z", "error_code": 0, "error_message": null, "elapsed": 3, "credit_count": 1}
    }"#;

    let envelope: Envelope<Vec<FiatMapData>> = serde_json::from_str(json).unwrap();
    let data = envelope.data.unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].symbol, "USD");
    assert_eq!(data[1].sign, "");
    assert!(!envelope.status.is_error());
  }
}
