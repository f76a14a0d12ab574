// crates/title-ledger-core/src/core/records.rs
// ============================================================================
// Module: Ledger Records
// Description: Asset, account, and instrument record schemas.
// Purpose: Provide wire-exact entity shapes for ledger state transitions.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Record schemas mirror the JSON stored in the ledger byte-for-byte in
//! field naming. Decoding is permissive in the original registry's manner:
//! missing fields take their zero defaults and unknown fields are ignored,
//! so partial caller payloads still decode. The registries validate only
//! what the transitions require (asset identifier presence); descriptive
//! fields are carried verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::AccountId;
use crate::core::identifiers::AccountPrefix;
use crate::core::identifiers::AssetId;
use crate::core::identifiers::Cusip;

// ============================================================================
// SECTION: Asset Records
// ============================================================================

/// Vehicle title record keyed by its registration-document identifier.
///
/// # Invariants
/// - `v5c_id` is the primary key; a given identifier is created at most once.
/// - Only `owner` is mutable after creation (via transfer); every other
///   field is carried verbatim from the creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetRecord {
    /// Manufacturer name.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Registration plate.
    pub reg: String,
    /// Numeric vehicle identification number.
    #[serde(rename = "VIN")]
    pub vin: i64,
    /// Current holder identifier.
    pub owner: String,
    /// Scrapped lifecycle flag; opaque to the transitions.
    pub scrapped: bool,
    /// Numeric lifecycle status; opaque to the transitions.
    pub status: i64,
    /// Paint colour.
    pub colour: String,
    /// Registration-document identifier and ledger key.
    #[serde(rename = "v5cID")]
    pub v5c_id: AssetId,
    /// Associated lease contract identifier, when any.
    #[serde(rename = "leaseContractID")]
    pub lease_contract_id: String,
}

// ============================================================================
// SECTION: Account Records
// ============================================================================

/// Issuing account created through batch account creation.
///
/// # Invariants
/// - Immutable once created; no update or delete transition exists.
/// - `prefix` is generated deterministically from the batch ordinal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRecord {
    /// Account identifier (`"company" + ordinal` for batch-created accounts).
    pub id: AccountId,
    /// Six-character issuance prefix.
    pub prefix: AccountPrefix,
}

impl AccountRecord {
    /// Builds the record for a batch ordinal (1-based).
    #[must_use]
    pub fn for_ordinal(ordinal: u32) -> Self {
        Self {
            id: AccountId::for_ordinal(ordinal),
            prefix: AccountPrefix::from_ordinal(ordinal),
        }
    }
}

// ============================================================================
// SECTION: Instrument Records
// ============================================================================

/// Commercial paper record keyed by its derived CUSIP.
///
/// # Invariants
/// - `cusip` is computed at issuance from the owner account's prefix and
///   the issue-date suffix; a caller-supplied value is ignored.
/// - Never mutated or deleted after issuance; reissuing with an identical
///   derived CUSIP overwrites the prior record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentRecord {
    /// Derived instrument identifier.
    pub cusip: Cusip,
    /// Ticker symbol of the issuer.
    pub ticker: String,
    /// Par value.
    pub par: f64,
    /// Quantity issued.
    pub qty: i64,
    /// Discount rate.
    pub discount: f64,
    /// Maturity offset in days from the issue date.
    pub maturity: i64,
    /// Owning account identifier; must refer to an existing account.
    pub owner: AccountId,
    /// Issuing account identifier; carried verbatim.
    pub issuer: AccountId,
    /// Issue instant as a string-encoded count of epoch milliseconds.
    #[serde(rename = "issueDate")]
    pub issue_date: String,
}
