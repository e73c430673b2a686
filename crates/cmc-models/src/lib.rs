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

//! # cmc-models
//!
//! Data models for CoinMarketCap API responses.
//!
//! Every response shares one envelope: a `status` object and an
//! endpoint-specific `data` payload. [`Envelope`] is the shape responses are
//! decoded into; [`ApiResponse`] is what callers receive once the status has
//! been checked.
//!
//! ## Usage
//!
//! ```ignore
//! use cmc_models::{Envelope, FiatMapData};
//!
//! let envelope: Envelope<Vec<FiatMapData>> = serde_json::from_str(&response_json)?;
//! assert!(!envelope.status.is_error());
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod cryptocurrency;
pub mod fiat;
pub mod key;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use cryptocurrency::*;
pub use fiat::*;
pub use key::*;
