// crates/title-ledger-core/src/runtime/paper.rs
// ============================================================================
// Module: Paper Registry
// Description: Account batch creation and commercial paper issuance.
// Purpose: Derive instrument identifiers and write issuance records.
// Dependencies: crate::core, crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! Issuing accounts are created in ordinal batches and never mutated.
//! Issuance decodes the caller's instrument payload, resolves the owner
//! account, derives the CUSIP from the account prefix and the issue-date
//! suffix, and writes the record.
//!
//! Two asymmetries with the asset registry are intentional and preserved
//! from the deployed registry: account batch creation performs no uniqueness
//! check (re-running a batch overwrites silently), and issuance overwrites
//! any prior instrument that derived the same CUSIP.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::cusip::cusip_suffix;
use crate::core::identifiers::Cusip;
use crate::core::keys::account_key;
use crate::core::keys::instrument_key;
use crate::core::records::AccountRecord;
use crate::core::records::InstrumentRecord;
use crate::interfaces::StateStore;
use crate::runtime::errors::LedgerError;

// ============================================================================
// SECTION: Paper Registry
// ============================================================================

/// Registry of issuing accounts and commercial paper records.
///
/// # Invariants
/// - Holds no state of its own; every method round-trips through the store.
#[derive(Clone, Copy)]
pub struct PaperRegistry<'store> {
    /// Backing key-value ledger for the invocation.
    store: &'store dyn StateStore,
}

impl<'store> PaperRegistry<'store> {
    /// Creates a registry over the given store.
    #[must_use]
    pub fn new(store: &'store dyn StateStore) -> Self {
        Self { store }
    }

    /// Creates issuing accounts for ordinals `1..=count`.
    ///
    /// `count` is the caller's decimal string argument; zero succeeds and
    /// writes nothing. Writes are sequential and fail-fast: the first store
    /// error aborts the remaining ordinals with no rollback, leaving a
    /// partially populated batch.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MalformedInput`] when `count` is not an
    /// unsigned decimal integer and [`LedgerError::Store`] when a write
    /// fails.
    pub fn create_accounts(&self, count: &str) -> Result<(), LedgerError> {
        let requested: u32 = count.parse().map_err(|_| {
            LedgerError::MalformedInput(format!(
                "createAccounts expects an unsigned decimal count, got {count}"
            ))
        })?;

        for ordinal in 1..=requested {
            let account = AccountRecord::for_ordinal(ordinal);
            let bytes = encode(&account, "account record")?;
            self.store.put(&account_key(&account.id), &bytes)?;
        }
        Ok(())
    }

    /// Issues a commercial paper record supplied as JSON.
    ///
    /// The owner account must already exist; its prefix and the issue-date
    /// suffix form the CUSIP under which the record is stored. The write is
    /// an unconditional overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MalformedInput`] when the payload does not
    /// decode, [`LedgerError::NotFound`] when the owner account is absent,
    /// [`LedgerError::CorruptRecord`] when the stored account does not
    /// decode, [`LedgerError::Derivation`] when the suffix cannot be
    /// derived, and [`LedgerError::Store`] when the store fails.
    pub fn issue(&self, record_json: &str) -> Result<(), LedgerError> {
        let mut paper: InstrumentRecord = serde_json::from_str(record_json).map_err(|err| {
            LedgerError::MalformedInput(format!("invalid commercial paper record: {err}"))
        })?;

        let owner_key = account_key(&paper.owner);
        let stored = self.store.get(&owner_key)?;
        if stored.is_empty() {
            return Err(LedgerError::NotFound { key: owner_key });
        }
        let account: AccountRecord = serde_json::from_slice(&stored)
            .map_err(|_| LedgerError::CorruptRecord { key: owner_key })?;

        let suffix = cusip_suffix(&paper.issue_date, paper.maturity)?;
        paper.cusip = Cusip::new(format!("{}{suffix}", account.prefix));

        let bytes = encode(&paper, "commercial paper record")?;
        self.store.put(&instrument_key(&paper.cusip), &bytes)?;
        Ok(())
    }

    /// Returns the raw bytes stored under `key`.
    ///
    /// Identical contract to the asset registry query: a raw passthrough of
    /// the store read with no decoding.
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

/// Encodes a record for storage.
fn encode<T: Serialize>(record: &T, what: &str) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(record)
        .map_err(|err| LedgerError::MalformedInput(format!("unencodable {what}: {err}")))
}
