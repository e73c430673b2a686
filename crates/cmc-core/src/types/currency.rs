//! Currency identifiers accepted by the CoinMarketCap API.
//!
//! A currency can be addressed by its CoinMarketCap id, its ticker symbol or
//! its slug. Each request dimension takes a list of identifiers that all use
//! the same form.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// CoinMarketCap internal currency id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyId(pub u64);

impl fmt::Display for CurrencyId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<u64> for CurrencyId {
  fn from(id: u64) -> Self {
    CurrencyId(id)
  }
}

/// A single currency identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
  /// CoinMarketCap id, e.g. `1` for Bitcoin
  Id(CurrencyId),
  /// Ticker symbol, e.g. `BTC`
  Symbol(String),
  /// URL slug, e.g. `bitcoin`
  Slug(String),
  /// No identifier; skipped when rendering a list
  Unset,
}

impl Currency {
  /// Identify a currency by its CoinMarketCap id
  pub fn id(id: u64) -> Self {
    Currency::Id(CurrencyId(id))
  }

  /// Identify a currency by ticker symbol. An empty symbol yields [`Currency::Unset`].
  pub fn symbol(symbol: impl Into<String>) -> Self {
    let symbol = symbol.into();
    if symbol.is_empty() {
      Currency::Unset
    } else {
      Currency::Symbol(symbol)
    }
  }

  /// Identify a currency by slug. An empty slug yields [`Currency::Unset`].
  pub fn slug(slug: impl Into<String>) -> Self {
    let slug = slug.into();
    if slug.is_empty() {
      Currency::Unset
    } else {
      Currency::Slug(slug)
    }
  }

  /// Build an identifier from loosely typed parts.
  ///
  /// Empty strings count as absent. Supplying more than one form is rejected
  /// instead of silently picking one.
  pub fn from_parts(id: Option<u64>, symbol: Option<&str>, slug: Option<&str>) -> Result<Self> {
    let symbol = symbol.filter(|s| !s.is_empty());
    let slug = slug.filter(|s| !s.is_empty());

    match (id, symbol, slug) {
      (Some(id), None, None) => Ok(Currency::id(id)),
      (None, Some(symbol), None) => Ok(Currency::symbol(symbol)),
      (None, None, Some(slug)) => Ok(Currency::slug(slug)),
      (None, None, None) => Ok(Currency::Unset),
      (id, symbol, slug) => Err(Error::InvalidCurrency(format!(
        "expected exactly one of id, symbol or slug, got id={:?} symbol={:?} slug={:?}",
        id, symbol, slug
      ))),
    }
  }

  /// Value used for this currency in a query string, `None` when unset
  pub fn query_value(&self) -> Option<Cow<'_, str>> {
    match self {
      Currency::Id(id) => Some(Cow::Owned(id.to_string())),
      Currency::Symbol(symbol) => Some(Cow::Borrowed(symbol)),
      Currency::Slug(slug) => Some(Cow::Borrowed(slug)),
      Currency::Unset => None,
    }
  }

  /// Whether no identifier form is populated
  pub fn is_unset(&self) -> bool {
    matches!(self, Currency::Unset)
  }
}

impl fmt::Display for Currency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Currency::Id(id) => write!(f, "{}", id),
      Currency::Symbol(symbol) => f.write_str(symbol),
      Currency::Slug(slug) => f.write_str(slug),
      Currency::Unset => Ok(()),
    }
  }
}
