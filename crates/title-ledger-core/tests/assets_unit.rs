// crates/title-ledger-core/tests/assets_unit.rs
// ============================================================================
// Module: Asset Registry Tests
// Description: Tests for asset creation, transfer, no-op delete, and query.
// ============================================================================

//! ## Overview
//! Validates the uniqueness invariant, owner-only mutation, raw query
//! passthrough, and store-failure propagation for asset records.

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

use serde_json::json;
use title_ledger_core::AssetId;
use title_ledger_core::AssetRecord;
use title_ledger_core::StateStore;
use title_ledger_core::StateStoreError;
use title_ledger_core::runtime::AssetRegistry;
use title_ledger_core::runtime::InMemoryStateStore;
use title_ledger_core::runtime::LedgerError;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Store whose every call fails, for propagation tests.
struct FailingStore;

impl StateStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Vec<u8>, StateStoreError> {
        Err(StateStoreError::Read("backend offline".to_string()))
    }

    fn put(&self, _key: &str, _value: &[u8]) -> Result<(), StateStoreError> {
        Err(StateStoreError::Write("backend offline".to_string()))
    }
}

fn sample_asset_json(id: &str, owner: &str) -> String {
    json!({
        "make": "Vauxhall",
        "model": "Corsa",
        "reg": "CRX 1234",
        "VIN": 123_456_789,
        "owner": owner,
        "scrapped": false,
        "status": 1,
        "colour": "blue",
        "v5cID": id,
        "leaseContractID": "LC-77",
    })
    .to_string()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn create_then_duplicate_create_fails() {
    let store = InMemoryStateStore::new();
    let registry = AssetRegistry::new(&store);

    registry.create(&sample_asset_json("ABC1234", "Alice")).unwrap();
    let err = registry.create(&sample_asset_json("ABC1234", "Mallory")).unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateKey { key } if key == "ABC1234"));
}

#[test]
fn create_requires_an_identifier() {
    let store = InMemoryStateStore::new();
    let registry = AssetRegistry::new(&store);

    let payload = json!({ "make": "Vauxhall", "owner": "Alice" }).to_string();
    let err = registry.create(&payload).unwrap_err();
    assert!(matches!(err, LedgerError::MalformedInput(_)));
    assert_eq!(store.key_count().unwrap(), 0);
}

#[test]
fn create_rejects_undecodable_payloads() {
    let store = InMemoryStateStore::new();
    let registry = AssetRegistry::new(&store);

    let err = registry.create("this is not json").unwrap_err();
    assert!(matches!(err, LedgerError::MalformedInput(_)));
}

#[test]
fn create_round_trips_through_query() {
    let store = InMemoryStateStore::new();
    let registry = AssetRegistry::new(&store);

    let payload = sample_asset_json("ABC1234", "Alice");
    registry.create(&payload).unwrap();

    let stored = registry.query("ABC1234").unwrap();
    let decoded: AssetRecord = serde_json::from_slice(&stored).unwrap();
    let expected: AssetRecord = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded, expected);
}

#[test]
fn partial_payloads_decode_with_defaults() {
    let store = InMemoryStateStore::new();
    let registry = AssetRegistry::new(&store);

    let payload = json!({ "v5cID": "ABC1234" }).to_string();
    registry.create(&payload).unwrap();

    let stored = registry.query("ABC1234").unwrap();
    let decoded: AssetRecord = serde_json::from_slice(&stored).unwrap();
    assert_eq!(decoded.v5c_id.as_str(), "ABC1234");
    assert!(decoded.owner.is_empty());
    assert_eq!(decoded.vin, 0);
    assert!(!decoded.scrapped);
}

#[test]
fn transfer_rewrites_only_the_owner_field() {
    let store = InMemoryStateStore::new();
    let registry = AssetRegistry::new(&store);

    registry.create(&sample_asset_json("ABC1234", "Alice")).unwrap();
    let before: AssetRecord =
        serde_json::from_slice(&registry.query("ABC1234").unwrap()).unwrap();

    registry.transfer(&AssetId::new("ABC1234"), "Bob").unwrap();
    let after: AssetRecord = serde_json::from_slice(&registry.query("ABC1234").unwrap()).unwrap();

    assert_eq!(after.owner, "Bob");
    let mut expected = before;
    expected.owner = "Bob".to_string();
    assert_eq!(after, expected);
}

#[test]
fn transfer_of_a_missing_record_is_not_found() {
    let store = InMemoryStateStore::new();
    let registry = AssetRegistry::new(&store);

    let err = registry.transfer(&AssetId::new("GHOST"), "Bob").unwrap_err();
    assert!(matches!(err, LedgerError::NotFound { key } if key == "GHOST"));
}

#[test]
fn transfer_of_undecodable_bytes_is_corrupt() {
    let store = InMemoryStateStore::new();
    store.put("ABC1234", b"certainly not a record").unwrap();

    let registry = AssetRegistry::new(&store);
    let err = registry.transfer(&AssetId::new("ABC1234"), "Bob").unwrap_err();
    assert!(matches!(err, LedgerError::CorruptRecord { key } if key == "ABC1234"));
}

#[test]
fn delete_changes_nothing_and_succeeds() {
    let store = InMemoryStateStore::new();
    let registry = AssetRegistry::new(&store);

    registry.create(&sample_asset_json("ABC1234", "Alice")).unwrap();
    registry.delete(&AssetId::new("ABC1234")).unwrap();
    registry.delete(&AssetId::new("NEVER-EXISTED")).unwrap();

    let stored = registry.query("ABC1234").unwrap();
    assert!(!stored.is_empty());
    assert_eq!(store.key_count().unwrap(), 1);
}

#[test]
fn query_of_an_absent_key_returns_empty_bytes() {
    let store = InMemoryStateStore::new();
    let registry = AssetRegistry::new(&store);

    let stored = registry.query("GHOST").unwrap();
    assert!(stored.is_empty());
}

#[test]
fn store_failures_propagate_from_every_transition() {
    let registry = AssetRegistry::new(&FailingStore);

    let create_err = registry.create(&sample_asset_json("ABC1234", "Alice")).unwrap_err();
    assert!(matches!(create_err, LedgerError::Store(StateStoreError::Read(_))));

    let transfer_err = registry.transfer(&AssetId::new("ABC1234"), "Bob").unwrap_err();
    assert!(matches!(transfer_err, LedgerError::Store(StateStoreError::Read(_))));

    let query_err = registry.query("ABC1234").unwrap_err();
    assert!(matches!(query_err, LedgerError::Store(StateStoreError::Read(_))));
}
