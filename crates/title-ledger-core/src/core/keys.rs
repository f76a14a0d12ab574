// crates/title-ledger-core/src/core/keys.rs
// ============================================================================
// Module: Ledger Key Naming
// Description: Key-naming scheme for asset, account, and instrument records.
// Purpose: Keep stored-key literals stable for compatibility with existing state.
// Dependencies: crate::core::identifiers
// ============================================================================

//! ## Overview
//! Every record round-trips through the store under a string key. Accounts
//! and instruments are namespaced with fixed literal prefixes; assets are
//! stored under their bare identifier. The literals are load-bearing: state
//! written by earlier deployments must remain addressable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::AccountId;
use crate::core::identifiers::AssetId;
use crate::core::identifiers::Cusip;

// ============================================================================
// SECTION: Key Prefixes
// ============================================================================

/// Key prefix for account records.
pub const ACCOUNT_KEY_PREFIX: &str = "acct:";
/// Key prefix for commercial paper records.
pub const INSTRUMENT_KEY_PREFIX: &str = "cp:";

// ============================================================================
// SECTION: Key Construction
// ============================================================================

/// Returns the store key for an asset record (the bare identifier).
#[must_use]
pub fn asset_key(id: &AssetId) -> String {
    id.as_str().to_string()
}

/// Returns the store key for an account record.
#[must_use]
pub fn account_key(id: &AccountId) -> String {
    format!("{ACCOUNT_KEY_PREFIX}{id}")
}

/// Returns the store key for a commercial paper record.
#[must_use]
pub fn instrument_key(cusip: &Cusip) -> String {
    format!("{INSTRUMENT_KEY_PREFIX}{cusip}")
}
