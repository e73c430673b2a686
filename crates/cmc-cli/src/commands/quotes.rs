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


use super::{print_json, to_currencies, CurrencyArgs};
use anyhow::{Context as _, Result};
use clap::Args;
use cmc_client::{CoinMarketCapClient, Context, QuotesLatestOptions};
use tracing::info;

#[derive(Args, Debug)]
pub struct QuotesCommand {
  #[command(flatten)]
  currencies: CurrencyArgs,

  /// Quote currency ids, comma separated
  #[arg(long = "convert-id", value_delimiter = ',', default_value = "2781")]
  convert_ids: Vec<u64>,

  /// Quote currency symbols, comma separated; replaces --convert-id
  #[arg(long = "convert", value_delimiter = ',')]
  convert_symbols: Vec<String>,

  /// Supplemental fields, comma separated
  #[arg(long, value_delimiter = ',')]
  aux: Vec<String>,

  /// Fail on invalid lookups instead of skipping them
  #[arg(long)]
  strict: bool,

  /// Print the inverse price of each currency in the first quote currency instead of the raw quotes
  #[arg(long)]
  inverse: bool,
}

pub async fn execute(cmd: QuotesCommand, client: &CoinMarketCapClient, ctx: &Context) -> Result<()> {
  let from = cmd.currencies.currencies()?;
  let to = if cmd.convert_symbols.is_empty() {
    to_currencies(&cmd.convert_ids, &[], &[])?
  } else {
    to_currencies(&[], &cmd.convert_symbols, &[])?
  };

  let options = QuotesLatestOptions::default().aux(cmd.aux).skip_invalid(!cmd.strict);

  info!("Fetching quotes for {} currencies", from.len());
  let response = client
    .cryptocurrency()
    .quotes_latest(ctx, &from, &to, options)
    .await
    .context("Failed to fetch latest quotes")?;

  if cmd.inverse {
    let base = to.first().and_then(|c| c.query_value()).unwrap_or_default();
    return print_json(&response.data.quote_prices(&base));
  }

  print_json(&response.data)
}
