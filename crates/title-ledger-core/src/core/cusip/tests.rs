// crates/title-ledger-core/src/core/cusip/tests.rs
// ============================================================================
// Module: CUSIP Derivation Unit Tests
// Description: Table lookups, determinism, and derivation failure modes.
// Purpose: Pin the literal code tables and the issue-date-keyed lookup.
// ============================================================================

//! ## Overview
//! Exercises the suffix derivation against known instants, the skipped
//! letters in both code tables, and the error paths for unparsable
//! timestamps and out-of-range maturity offsets.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions are permitted."
)]

use super::DAY_CODES;
use super::DerivationError;
use super::MONTH_CODES;
use super::cusip_suffix;
use crate::core::time::TimestampError;

/// 2016-01-15T00:00:00Z.
const JAN_15_2016_MS: &str = "1452816000000";
/// 2016-09-05T00:00:00Z.
const SEP_05_2016_MS: &str = "1473033600000";
/// 2016-01-23T00:00:00Z.
const JAN_23_2016_MS: &str = "1453507200000";
/// 2016-12-31T00:00:00Z.
const DEC_31_2016_MS: &str = "1483142400000";
/// 2016-02-22T16:42:43.790Z, the documented sample issue instant.
const SAMPLE_ISSUE_MS: &str = "1456161763790";

#[test]
fn january_fifteenth_derives_a5() {
    let suffix = cusip_suffix(JAN_15_2016_MS, 30).unwrap();
    assert_eq!(suffix, "A5");
}

#[test]
fn september_skips_the_letter_i() {
    let suffix = cusip_suffix(SEP_05_2016_MS, 30).unwrap();
    assert_eq!(suffix, "J5");
}

#[test]
fn day_twenty_three_skips_the_letter_o() {
    let suffix = cusip_suffix(JAN_23_2016_MS, 30).unwrap();
    assert_eq!(suffix, "AP");
}

#[test]
fn december_thirty_first_reaches_the_table_ends() {
    let suffix = cusip_suffix(DEC_31_2016_MS, 30).unwrap();
    assert_eq!(suffix, "MX");
}

#[test]
fn sample_issue_instant_with_subsecond_precision_derives_bn() {
    let suffix = cusip_suffix(SAMPLE_ISSUE_MS, 30).unwrap();
    assert_eq!(suffix, "BN");
}

#[test]
fn pre_epoch_instants_convert_on_the_fixed_calendar() {
    // 1969-12-31T00:00:00Z.
    let suffix = cusip_suffix("-86400000", 30).unwrap();
    assert_eq!(suffix, "MX");
}

#[test]
fn maturity_offset_does_not_shift_the_suffix() {
    let short = cusip_suffix(JAN_15_2016_MS, 1).unwrap();
    let long = cusip_suffix(JAN_15_2016_MS, 3_000).unwrap();
    assert_eq!(short, long);
}

#[test]
fn derivation_is_deterministic() {
    let first = cusip_suffix(SAMPLE_ISSUE_MS, 30).unwrap();
    let second = cusip_suffix(SAMPLE_ISSUE_MS, 30).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unparsable_timestamps_fail_derivation() {
    let err = cusip_suffix("not-a-date", 30).unwrap_err();
    assert!(matches!(
        err,
        DerivationError::Timestamp(TimestampError::Unparsable(_))
    ));
}

#[test]
fn out_of_range_timestamps_fail_derivation() {
    let err = cusip_suffix(&i64::MAX.to_string(), 30).unwrap_err();
    assert!(matches!(
        err,
        DerivationError::Timestamp(TimestampError::OutOfRange(_))
    ));
}

#[test]
fn extreme_maturity_offsets_fail_derivation() {
    let err = cusip_suffix(JAN_15_2016_MS, i64::MAX).unwrap_err();
    assert!(matches!(err, DerivationError::MaturityOutOfRange { .. }));
}

#[test]
fn code_tables_omit_ambiguous_letters() {
    assert!(!MONTH_CODES.contains(&'I'));
    assert!(!DAY_CODES.contains(&'I'));
    assert!(!DAY_CODES.contains(&'O'));
    assert_eq!(MONTH_CODES.len(), 24);
    assert_eq!(DAY_CODES.len(), 31);
}
