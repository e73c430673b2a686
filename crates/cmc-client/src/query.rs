//! Query string construction.
//!
//! Turns currency identifier lists and per-call options into the canonical
//! query string sent to the API. Keys are emitted in sorted order so the
//! same inputs always produce the same string.

use cmc_core::Currency;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Separator for list valued parameters
pub const COMMA: &str = ",";

/// Source currency by CoinMarketCap id
pub const ID: &str = "id";
/// Source currency by symbol
pub const SYMBOL: &str = "symbol";
/// Source currency by slug
pub const SLUG: &str = "slug";

/// Conversion targets by symbol
pub const CONVERT: &str = "convert";
/// Conversion targets by CoinMarketCap id
pub const CONVERT_ID: &str = "convert_id";

/// Supplemental fields to return
pub const AUX: &str = "aux";
/// Whether invalid lookups are skipped instead of failing the request
pub const SKIP_INVALID: &str = "skip_invalid";
/// 1-based pagination offset
pub const START: &str = "start";
/// Page size
pub const LIMIT: &str = "limit";
/// Sort field
pub const SORT: &str = "sort";
/// Listing status filter
pub const LISTING_STATUS: &str = "listing_status";
/// Contract address lookup
pub const ADDRESS: &str = "address";
/// Include precious metals in the fiat map
pub const INCLUDE_METALS: &str = "include_metals";

/// Parameter name for a list of source currencies.
///
/// Only the first element is inspected; lists are expected to use one
/// identifier form throughout. Returns `None` for an empty list or an unset
/// first element, in which case the parameter must be left out.
pub fn source_key(currencies: &[Currency]) -> Option<&'static str> {
  match currencies.first()? {
    Currency::Id(_) => Some(ID),
    Currency::Symbol(_) => Some(SYMBOL),
    Currency::Slug(_) => Some(SLUG),
    Currency::Unset => None,
  }
}

/// Parameter name for a list of conversion targets.
///
/// Conversion targets can only be addressed by id or symbol, so a slug list
/// selects no parameter.
pub fn convert_key(currencies: &[Currency]) -> Option<&'static str> {
  match currencies.first()? {
    Currency::Id(_) => Some(CONVERT_ID),
    Currency::Symbol(_) => Some(CONVERT),
    Currency::Slug(_) | Currency::Unset => None,
  }
}

/// Query values of a currency list in order, skipping unset entries.
pub fn render_values(currencies: &[Currency]) -> Vec<Cow<'_, str>> {
  currencies.iter().filter_map(Currency::query_value).collect()
}

/// Join values with [`COMMA`].
///
/// The output buffer is allocated once with its exact final length.
pub fn join_comma<S: AsRef<str>>(values: &[S]) -> String {
  match values {
    [] => String::new(),
    [single] => single.as_ref().to_string(),
    [first, rest @ ..] => {
      let len = values.iter().map(|v| v.as_ref().len()).sum::<usize>() + COMMA.len() * rest.len();

      let mut joined = String::with_capacity(len);
      joined.push_str(first.as_ref());
      for value in rest {
        joined.push_str(COMMA);
        joined.push_str(value.as_ref());
      }

      debug_assert_eq!(joined.len(), len);
      joined
    }
  }
}

/// Options that know how to write themselves into a query.
pub trait MergeQuery {
  /// Write every set option into `query`, in a fixed field order
  fn merge_into(&self, query: &mut QueryParams);
}

/// Query parameters, encoded sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
  pairs: BTreeMap<&'static str, String>,
}

impl QueryParams {
  /// Empty parameter set
  pub fn new() -> Self {
    Self::default()
  }

  /// Set a parameter, replacing any previous value
  pub fn set(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
    self.pairs.insert(key, value.into());
    self
  }

  /// Set a comma joined list; empty lists are left out
  pub fn set_list<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) -> &mut Self {
    if !values.is_empty() {
      self.pairs.insert(key, join_comma(values));
    }
    self
  }

  /// Set a currency list under `key`; nothing is written when no key was selected
  pub fn set_currencies(&mut self, key: Option<&'static str>, currencies: &[Currency]) -> &mut Self {
    if let Some(key) = key {
      self.pairs.insert(key, join_comma(&render_values(currencies)));
    }
    self
  }

  /// Value of a parameter
  pub fn get(&self, key: &str) -> Option<&str> {
    self.pairs.get(key).map(String::as_str)
  }

  /// Whether a parameter is present
  pub fn contains(&self, key: &str) -> bool {
    self.pairs.contains_key(key)
  }

  /// Whether no parameter is set
  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }

  /// Form-urlencode the parameters, `&` separated and sorted by key
  pub fn encode(&self) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in &self.pairs {
      serializer.append_pair(key, value);
    }
    serializer.finish()
  }
}
