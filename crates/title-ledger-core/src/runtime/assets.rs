// crates/title-ledger-core/src/runtime/assets.rs
// ============================================================================
// Module: Asset Registry
// Description: Create, transfer, no-op delete, and query for asset records.
// Purpose: Enforce the uniqueness and owner-only mutation invariants.
// Dependencies: crate::core, crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! Asset records are keyed by the caller-supplied registration identifier.
//! Create enforces at-most-once registration by reading before writing;
//! transfer rewrites only the owner field; delete is a recognized no-op kept
//! for wire compatibility; query returns raw stored bytes without decoding.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::AssetId;
use crate::core::keys::asset_key;
use crate::core::records::AssetRecord;
use crate::interfaces::StateStore;
use crate::runtime::errors::LedgerError;

// ============================================================================
// SECTION: Asset Registry
// ============================================================================

/// Registry of asset title records backed by a state store.
///
/// # Invariants
/// - Holds no state of its own; every method is one read-then-write round
///   trip against the store.
#[derive(Clone, Copy)]
pub struct AssetRegistry<'store> {
    /// Backing key-value ledger for the invocation.
    store: &'store dyn StateStore,
}

impl<'store> AssetRegistry<'store> {
    /// Creates a registry over the given store.
    #[must_use]
    pub fn new(store: &'store dyn StateStore) -> Self {
        Self { store }
    }

    /// Registers a new asset record supplied as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MalformedInput`] when the payload does not
    /// decode or the identifier is missing, [`LedgerError::DuplicateKey`]
    /// when the identifier is already registered, and [`LedgerError::Store`]
    /// when the store fails.
    pub fn create(&self, record_json: &str) -> Result<(), LedgerError> {
        let record: AssetRecord = serde_json::from_str(record_json)
            .map_err(|err| LedgerError::MalformedInput(format!("invalid asset record: {err}")))?;
        if record.v5c_id.as_str().is_empty() {
            return Err(LedgerError::MalformedInput(
                "asset record is missing v5cID".to_string(),
            ));
        }

        let key = asset_key(&record.v5c_id);
        if !self.store.get(&key)?.is_empty() {
            return Err(LedgerError::DuplicateKey { key });
        }

        let bytes = encode_asset(&record)?;
        self.store.put(&key, &bytes)?;
        Ok(())
    }

    /// Reassigns the owner of an existing asset record.
    ///
    /// Every field other than `owner` is rewritten byte-for-byte from the
    /// stored record. The write lands under the stored record's own
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotFound`] when no record exists under the
    /// identifier, [`LedgerError::CorruptRecord`] when the stored bytes do
    /// not decode, and [`LedgerError::Store`] when the store fails.
    pub fn transfer(&self, id: &AssetId, new_owner: &str) -> Result<(), LedgerError> {
        let key = asset_key(id);
        let stored = self.store.get(&key)?;
        if stored.is_empty() {
            return Err(LedgerError::NotFound { key });
        }

        let mut record: AssetRecord = serde_json::from_slice(&stored)
            .map_err(|_| LedgerError::CorruptRecord { key })?;
        record.owner = new_owner.to_string();

        let bytes = encode_asset(&record)?;
        self.store.put(&asset_key(&record.v5c_id), &bytes)?;
        Ok(())
    }

    /// Recognized delete operation that performs no state change.
    ///
    /// Records are never removed through this contract; the operation exists
    /// for wire compatibility and always succeeds.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other transitions.
    pub fn delete(&self, _id: &AssetId) -> Result<(), LedgerError> {
        Ok(())
    }

    /// Returns the raw bytes stored under `key`.
    ///
    /// No decoding or validation happens on read; absent keys yield empty
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Store`] when the store read fails.
    pub fn query(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        Ok(self.store.get(key)?)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Encodes an asset record for storage.
fn encode_asset(record: &AssetRecord) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(record)
        .map_err(|err| LedgerError::MalformedInput(format!("unencodable asset record: {err}")))
}
