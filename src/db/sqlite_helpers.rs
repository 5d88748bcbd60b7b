//! SQLite helper utilities for type conversion
//!
//! SQLite has no native decimal or timestamp types. Prices are kept as
//! fixed-scale TEXT and timestamps as ISO8601 TEXT; these helpers convert
//! between those columns and the Rust types used by the repositories.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

// ============================================================================
// Decimal Helpers (stored as TEXT in SQLite)
// ============================================================================

/// Scale used for every stored price (two decimal places).
pub const PRICE_SCALE: u32 = 2;

/// Build a price from an amount in cents.
#[inline]
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, PRICE_SCALE)
}

/// Convert a decimal to the TEXT form stored in SQLite ("28.00")
#[inline]
pub fn decimal_to_str(value: Decimal) -> String {
    let mut value = value;
    value.rescale(PRICE_SCALE);
    value.to_string()
}

/// Parse a stored TEXT price back into a decimal
#[inline]
pub fn str_to_decimal(s: &str) -> Result<Decimal> {
    Decimal::from_str(s.trim()).map_err(|e| anyhow!("Invalid decimal '{}': {}", s, e))
}

// ============================================================================
// Timestamp Helpers (stored as ISO8601 TEXT in SQLite)
// ============================================================================

/// Get current UTC timestamp as ISO8601 string for SQLite
#[inline]
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339()
}

/// Parse an ISO8601 string to DateTime
#[inline]
pub fn str_to_datetime(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Try parsing SQLite's datetime() format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .map(|ndt| ndt.and_utc())
                .map_err(|e| anyhow!("Invalid datetime '{}': {}", s, e))
        })
}
