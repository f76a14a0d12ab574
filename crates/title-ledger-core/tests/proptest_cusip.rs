// crates/title-ledger-core/tests/proptest_cusip.rs
// ============================================================================
// Module: CUSIP Derivation Property-Based Tests
// Description: Property tests for derivation purity and table membership.
// Purpose: Detect panics and invariants across wide input ranges.
// ============================================================================

//! Property-based tests for derivation invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use title_ledger_core::DAY_CODES;
use title_ledger_core::MONTH_CODES;
use title_ledger_core::cusip_suffix;

/// 2100-01-01T00:00:00Z in epoch milliseconds; the upper bound for
/// realistic issue instants.
const YEAR_2100_MS: i64 = 4_102_444_800_000;

/// A century of maturity offsets either side of the issue date.
const MATURITY_RANGE_DAYS: i64 = 36_500;

proptest! {
    #[test]
    fn realistic_instants_always_derive_a_two_character_suffix(
        ms in 0_i64..YEAR_2100_MS,
        maturity in -MATURITY_RANGE_DAYS..MATURITY_RANGE_DAYS,
    ) {
        let suffix = cusip_suffix(&ms.to_string(), maturity).unwrap();
        let chars: Vec<char> = suffix.chars().collect();
        prop_assert_eq!(chars.len(), 2);
        prop_assert!(MONTH_CODES.contains(&chars[0]));
        prop_assert!(DAY_CODES.contains(&chars[1]));
    }

    #[test]
    fn derivation_is_a_pure_function(
        ms in 0_i64..YEAR_2100_MS,
        maturity in -MATURITY_RANGE_DAYS..MATURITY_RANGE_DAYS,
    ) {
        let first = cusip_suffix(&ms.to_string(), maturity);
        let second = cusip_suffix(&ms.to_string(), maturity);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn the_suffix_is_keyed_by_the_issue_date_alone(
        ms in 0_i64..YEAR_2100_MS,
        first_maturity in -MATURITY_RANGE_DAYS..MATURITY_RANGE_DAYS,
        second_maturity in -MATURITY_RANGE_DAYS..MATURITY_RANGE_DAYS,
    ) {
        let first = cusip_suffix(&ms.to_string(), first_maturity).unwrap();
        let second = cusip_suffix(&ms.to_string(), second_maturity).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn derivation_never_panics_on_arbitrary_timestamps(
        input in ".*",
        maturity in any::<i64>(),
    ) {
        let _ = cusip_suffix(&input, maturity);
    }

    #[test]
    fn extreme_millisecond_counts_fail_rather_than_wrap(
        ms in any::<i64>(),
        maturity in -MATURITY_RANGE_DAYS..MATURITY_RANGE_DAYS,
    ) {
        if let Ok(suffix) = cusip_suffix(&ms.to_string(), maturity) {
            let chars: Vec<char> = suffix.chars().collect();
            prop_assert_eq!(chars.len(), 2);
            prop_assert!(MONTH_CODES.contains(&chars[0]));
            prop_assert!(DAY_CODES.contains(&chars[1]));
        }
    }
}
