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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API key plan and usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyData {
  /// Limits of the subscription plan
  pub plan: KeyPlan,

  /// Current usage against the limits
  pub usage: KeyUsage,
}

/// Subscription plan limits
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyPlan {
  pub credit_limit_daily: Option<f64>,
  pub credit_limit_daily_reset: Option<String>,
  pub credit_limit_daily_reset_timestamp: Option<DateTime<Utc>>,
  pub credit_limit_monthly: f64,
  pub credit_limit_monthly_reset: String,
  pub credit_limit_monthly_reset_timestamp: Option<DateTime<Utc>>,
  pub rate_limit_minute: f64,
}

/// Usage counters for the current periods
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyUsage {
  pub current_minute: KeyUsageMinute,
  pub current_day: KeyUsageCredits,
  pub current_month: KeyUsageCredits,
}

/// Requests made in the current minute
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyUsageMinute {
  pub requests_made: f64,
  pub requests_left: f64,
}

/// Credits used in the current day or month
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyUsageCredits {
  pub credits_used: f64,
  pub credits_left: Option<f64>,
}
