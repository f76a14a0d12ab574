// crates/title-ledger-core/src/core/cusip.rs
// ============================================================================
// Module: CUSIP Suffix Derivation
// Description: Date-keyed suffix derivation for commercial paper identifiers.
// Purpose: Compute the two trailing CUSIP characters from an issue instant.
// Dependencies: crate::core::time, thiserror, time
// ============================================================================

//! ## Overview
//! A commercial paper CUSIP is the owner account's six-character prefix
//! followed by a two-character suffix keyed to the issue date: the issue
//! month indexes the month table for the seventh character and the issue
//! day-of-month indexes the day table for the eighth. The lookup tables use
//! the conventional CUSIP alphabet, which omits the ambiguous letters I and
//! O. Derivation is a pure function of its inputs.
//!
//! The maturity offset participates only as a representability check on the
//! shifted date; the table lookup is keyed by the issue month and day, not
//! the maturity date. That matching of the deployed registry's behavior is
//! deliberate and must not be "fixed" without a wire-format migration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::Date;
use time::Duration;

use crate::core::time::TimestampError;
use crate::core::time::datetime_from_millis;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Seconds per day, used for maturity-offset arithmetic.
const SECONDS_PER_DAY: i64 = 86_400;

/// Month-of-issue codes for the seventh CUSIP character, indexed by
/// 1-based month. The table spans 24 entries; calendar months reach only
/// the first twelve. The letter I is omitted, so September (9) maps to J.
pub const MONTH_CODES: [char; 24] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T',
    'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Day-of-issue codes for the eighth CUSIP character, indexed by 1-based
/// day of month: digits for 1 through 9, then letters with I and O omitted,
/// ending at X for the 31st.
pub const DAY_CODES: [char; 31] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J',
    'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X',
];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Identifier derivation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// The issue timestamp failed to parse or convert.
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    /// The maturity offset pushed the date off the representable calendar.
    #[error("maturity offset of {maturity_days} days from {issue_date} leaves the calendar range")]
    MaturityOutOfRange {
        /// Issue date the offset was applied to.
        issue_date: Date,
        /// Offending maturity offset in days.
        maturity_days: i64,
    },
}

// ============================================================================
// SECTION: Derivation
// ============================================================================

/// Derives the two-character CUSIP suffix for an instrument.
///
/// `issue_date_ms` is the string-encoded epoch-millisecond issue instant;
/// `maturity_days` is the instrument's maturity offset. The maturity date
/// must be representable on the calendar, but the suffix is keyed by the
/// issue month and day.
///
/// # Errors
///
/// Returns [`DerivationError::Timestamp`] when the issue instant cannot be
/// parsed or converted, and [`DerivationError::MaturityOutOfRange`] when the
/// maturity offset leaves the representable calendar.
pub fn cusip_suffix(issue_date_ms: &str, maturity_days: i64) -> Result<String, DerivationError> {
    let issued = datetime_from_millis(issue_date_ms)?;
    let issue_date = issued.date();

    let maturity_seconds = maturity_days
        .checked_mul(SECONDS_PER_DAY)
        .ok_or(DerivationError::MaturityOutOfRange { issue_date, maturity_days })?;
    issue_date
        .checked_add(Duration::seconds(maturity_seconds))
        .ok_or(DerivationError::MaturityOutOfRange { issue_date, maturity_days })?;

    let month_index = usize::from(u8::from(issue_date.month()));
    let day_index = usize::from(issue_date.day());

    let mut suffix = String::with_capacity(2);
    suffix.push(MONTH_CODES[month_index - 1]);
    suffix.push(DAY_CODES[day_index - 1]);
    Ok(suffix)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
