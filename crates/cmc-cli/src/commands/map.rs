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
use cmc_client::{CoinMarketCapClient, Context, MapListingStatus, MapOptions, MapSortField};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ListingStatus {
  Active,
  Inactive,
  Untracked,
}

impl From<ListingStatus> for MapListingStatus {
  fn from(status: ListingStatus) -> Self {
    match status {
      ListingStatus::Active => MapListingStatus::Active,
      ListingStatus::Inactive => MapListingStatus::Inactive,
      ListingStatus::Untracked => MapListingStatus::Untracked,
    }
  }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortField {
  Id,
  CmcRank,
}

impl From<SortField> for MapSortField {
  fn from(field: SortField) -> Self {
    match field {
      SortField::Id => MapSortField::Id,
      SortField::CmcRank => MapSortField::CmcRank,
    }
  }
}

#[derive(Args, Debug)]
pub struct MapCommand {
  /// Only map these symbols; all paging options are ignored
  #[arg(long = "symbol", value_delimiter = ',')]
  symbols: Vec<String>,

  #[arg(long, value_enum, default_value = "active")]
  listing_status: ListingStatus,

  /// 1-based offset
  #[arg(long, default_value = "1")]
  start: u32,

  /// Page size, 0 for the API default
  #[arg(short, long, default_value = "100")]
  limit: u32,

  #[arg(long, value_enum, default_value = "id")]
  sort: SortField,

  /// Supplemental fields, comma separated
  #[arg(long, value_delimiter = ',')]
  aux: Vec<String>,
}

pub async fn execute(cmd: MapCommand, client: &CoinMarketCapClient, ctx: &Context) -> Result<()> {
  let options = MapOptions::default()
    .listing_status(MapListingStatus::from(cmd.listing_status))
    .start(cmd.start)
    .limit(cmd.limit)
    .sort(MapSortField::from(cmd.sort))
    .symbols(cmd.symbols)
    .aux(cmd.aux);

  let response =
    client.cryptocurrency().map(ctx, options).await.context("Failed to fetch cryptocurrency map")?;

  print_json(&response.data)
}
