// crates/title-ledger-contract/tests/operation_catalog.rs
// ============================================================================
// Module: Operation Catalog Tests
// Description: Tests for catalog/router agreement on the dispatch surface.
// ============================================================================

//! ## Overview
//! Validates that the documented catalog and the live router agree: every
//! contract's arity is enforced by dispatch, and the worked examples execute
//! cleanly in catalog order against the in-memory store.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use title_ledger_contract::operation_contracts;
use title_ledger_core::runtime::InMemoryStateStore;
use title_ledger_core::runtime::LedgerError;
use title_ledger_core::runtime::Router;

#[test]
fn the_router_enforces_every_documented_arity() {
    let store = InMemoryStateStore::new();
    let router = Router::new(&store);

    for contract in operation_contracts() {
        let too_many = vec!["x".to_string(); contract.arity + 1];
        let err = router.dispatch(contract.name.as_str(), &too_many).unwrap_err();
        assert!(
            matches!(
                err,
                LedgerError::BadArity { expected, actual, .. }
                    if expected == contract.arity && actual == contract.arity + 1
            ),
            "operation {}",
            contract.name
        );
    }
}

#[test]
fn catalog_examples_dispatch_cleanly_in_order() {
    let store = InMemoryStateStore::new();
    let router = Router::new(&store);

    for contract in operation_contracts() {
        for example in &contract.examples {
            router.dispatch(contract.name.as_str(), &example.args).unwrap_or_else(|err| {
                panic!("example {:?} failed for {}: {err}", example.description, contract.name)
            });
        }
    }
}
