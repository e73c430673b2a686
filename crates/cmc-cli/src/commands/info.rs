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


use super::{print_json, CurrencyArgs};
use anyhow::{Context as _, Result};
use clap::Args;
use cmc_client::{CoinMarketCapClient, Context, InfoOptions};

#[derive(Args, Debug)]
pub struct InfoCommand {
  #[command(flatten)]
  currencies: CurrencyArgs,

  /// Contract address; takes precedence over --id, --symbol and --slug
  #[arg(long)]
  address: Option<String>,

  /// Supplemental fields, comma separated
  #[arg(long, value_delimiter = ',')]
  aux: Vec<String>,

  /// Fail on invalid lookups instead of skipping them
  #[arg(long)]
  strict: bool,
}

pub async fn execute(cmd: InfoCommand, client: &CoinMarketCapClient, ctx: &Context) -> Result<()> {
  let mut options = InfoOptions::default().aux(cmd.aux).skip_invalid(!cmd.strict);

  let currencies = match cmd.address {
    Some(address) => {
      options = options.address(address);
      Vec::new()
    }
    None => cmd.currencies.currencies()?,
  };

  let response = client
    .cryptocurrency()
    .info(ctx, &currencies, options)
    .await
    .context("Failed to fetch cryptocurrency info")?;

  print_json(&response.data)
}
