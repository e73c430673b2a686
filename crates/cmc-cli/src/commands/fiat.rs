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


use super::print_json;
use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use cmc_client::{CoinMarketCapClient, Context, FiatMapOptions, FiatSortField};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortField {
  Id,
  Name,
}

#[derive(Args, Debug)]
pub struct FiatCommand {
  /// 1-based offset
  #[arg(long, default_value = "1")]
  start: u32,

  /// Page size, 0 for the API default
  #[arg(short, long, default_value = "0")]
  limit: u32,

  #[arg(long, value_enum)]
  sort: Option<SortField>,

  /// Include precious metals
  #[arg(long)]
  include_metals: bool,
}

pub async fn execute(cmd: FiatCommand, client: &CoinMarketCapClient, ctx: &Context) -> Result<()> {
  let mut options =
    FiatMapOptions::default().start(cmd.start).limit(cmd.limit).include_metals(cmd.include_metals);
  if let Some(sort) = cmd.sort {
    options = options.sort(match sort {
      SortField::Id => FiatSortField::Id,
      SortField::Name => FiatSortField::Name,
    });
  }

  let response = client.fiat().map(ctx, options).await.context("Failed to fetch fiat map")?;

  print_json(&response.data)
}
