// crates/title-ledger-core/src/core/time.rs
// ============================================================================
// Module: Ledger Time Model
// Description: Conversion of string-encoded epoch milliseconds to calendar instants.
// Purpose: Provide the fixed-calendar timestamp parsing used by CUSIP derivation.
// Dependencies: thiserror, time
// ============================================================================

//! ## Overview
//! Instrument issue dates arrive as string-encoded counts of milliseconds
//! since the Unix epoch. Conversion targets a fixed reference calendar (UTC,
//! no timezone correction) so derivation stays deterministic regardless of
//! host locale. The core never reads wall-clock time; callers supply every
//! instant.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::Duration;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Milliseconds per second.
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// Nanoseconds per millisecond.
pub const NANOS_PER_MILLISECOND: i64 = 1_000_000;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Timestamp conversion errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// Input was not a decimal integer millisecond count.
    #[error("timestamp is not a decimal millisecond count: {0}")]
    Unparsable(String),
    /// Millisecond count falls outside the representable calendar range.
    #[error("timestamp {0} ms is outside the representable calendar range")]
    OutOfRange(i64),
}

// ============================================================================
// SECTION: Conversion
// ============================================================================

/// Parses a string-encoded epoch-millisecond count into a UTC instant.
///
/// The count splits into whole seconds and a sub-second remainder, mirroring
/// the wire convention of millisecond-precision issue dates.
///
/// # Errors
///
/// Returns [`TimestampError::Unparsable`] when the input is not a decimal
/// integer and [`TimestampError::OutOfRange`] when the instant cannot be
/// represented on the calendar.
pub fn datetime_from_millis(ms: &str) -> Result<OffsetDateTime, TimestampError> {
    let millis: i64 = ms.parse().map_err(|_| TimestampError::Unparsable(ms.to_string()))?;
    let seconds = millis.div_euclid(MILLIS_PER_SECOND);
    let subsec_nanos = millis.rem_euclid(MILLIS_PER_SECOND) * NANOS_PER_MILLISECOND;
    let base = OffsetDateTime::from_unix_timestamp(seconds)
        .map_err(|_| TimestampError::OutOfRange(millis))?;
    base.checked_add(Duration::nanoseconds(subsec_nanos))
        .ok_or(TimestampError::OutOfRange(millis))
}
