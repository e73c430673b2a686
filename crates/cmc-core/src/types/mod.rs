//! Common types used across cmc-* crates

pub mod currency;

pub use currency::{Currency, CurrencyId};
