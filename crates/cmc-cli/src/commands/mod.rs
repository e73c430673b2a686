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


pub mod fiat;
pub mod info;
pub mod key;
pub mod map;
pub mod quotes;

use anyhow::{bail, Result};
use clap::Args;
use cmc_client::Currency;
use serde::Serialize;

/// Currencies addressed by exactly one identifier form
#[derive(Args, Debug, Default)]
pub struct CurrencyArgs {
  /// CoinMarketCap ids, comma separated
  #[arg(long = "id", value_delimiter = ',')]
  pub ids: Vec<u64>,

  /// Ticker symbols, comma separated
  #[arg(long = "symbol", value_delimiter = ',')]
  pub symbols: Vec<String>,

  /// URL slugs, comma separated
  #[arg(long = "slug", value_delimiter = ',')]
  pub slugs: Vec<String>,
}

impl CurrencyArgs {
  /// Convert to currencies, rejecting a mix of identifier forms
  pub fn currencies(&self) -> Result<Vec<Currency>> {
    to_currencies(&self.ids, &self.symbols, &self.slugs)
  }
}

pub fn to_currencies(ids: &[u64], symbols: &[String], slugs: &[String]) -> Result<Vec<Currency>> {
  let forms = [!ids.is_empty(), !symbols.is_empty(), !slugs.is_empty()];
  match forms.iter().filter(|set| **set).count() {
    0 => bail!("no currency given: use --id, --symbol or --slug"),
    1 => {}
    _ => bail!("currencies must all use the same identifier form"),
  }

  let currencies = ids
    .iter()
    .map(|id| Currency::id(*id))
    .chain(symbols.iter().map(|s| Currency::symbol(s.as_str())))
    .chain(slugs.iter().map(|s| Currency::slug(s.as_str())))
    .filter(|c| !c.is_unset())
    .collect::<Vec<_>>();

  if currencies.is_empty() {
    bail!("all given currencies are empty");
  }
  Ok(currencies)
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_to_currencies_single_form() {
    let currencies = to_currencies(&[1, 1027], &[], &[]).unwrap();
    assert_eq!(currencies, vec![Currency::id(1), Currency::id(1027)]);

    let currencies = to_currencies(&[], &[], &["bitcoin".to_string()]).unwrap();
    assert_eq!(currencies, vec![Currency::slug("bitcoin")]);
  }

  #[test]
  fn test_to_currencies_rejects_mixed_forms() {
    assert!(to_currencies(&[1], &["BTC".to_string()], &[]).is_err());
  }

  #[test]
  fn test_to_currencies_rejects_empty() {
    assert!(to_currencies(&[], &[], &[]).is_err());
    assert!(to_currencies(&[], &[String::new()], &[]).is_err());
  }
}
