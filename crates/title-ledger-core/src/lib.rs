// crates/title-ledger-core/src/lib.rs
// ============================================================================
// Module: Title Ledger Core
// Description: Ledger state-transition layer for asset and instrument registries.
// Purpose: Provide entity schemas, key naming, CUSIP derivation, and dispatch.
// Dependencies: serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! Title Ledger models ownership of uniquely identified assets (vehicle
//! titles) and issuance of commercial paper as records in an external
//! key-value ledger. This crate is the state-transition layer: it decodes
//! caller-supplied records, enforces uniqueness and mutation invariants,
//! derives instrument identifiers, and routes named invocations to the
//! registry transitions. Persistence, transport, and consensus belong to the
//! host behind the [`StateStore`] interface.
//!
//! The core holds no state between invocations; every operation is a single
//! read-then-write round trip against the store (account batch creation is
//! the one multi-write exception).

pub mod core;
pub mod interfaces;
pub mod runtime;

pub use crate::core::cusip::DAY_CODES;
pub use crate::core::cusip::DerivationError;
pub use crate::core::cusip::MONTH_CODES;
pub use crate::core::cusip::cusip_suffix;
pub use crate::core::identifiers::AccountId;
pub use crate::core::identifiers::AccountPrefix;
pub use crate::core::identifiers::AssetId;
pub use crate::core::identifiers::Cusip;
pub use crate::core::keys::ACCOUNT_KEY_PREFIX;
pub use crate::core::keys::INSTRUMENT_KEY_PREFIX;
pub use crate::core::keys::account_key;
pub use crate::core::keys::asset_key;
pub use crate::core::keys::instrument_key;
pub use crate::core::operations::OperationName;
pub use crate::core::records::AccountRecord;
pub use crate::core::records::AssetRecord;
pub use crate::core::records::InstrumentRecord;
pub use crate::core::time::TimestampError;
pub use crate::core::time::datetime_from_millis;
pub use crate::interfaces::StateStore;
pub use crate::interfaces::StateStoreError;
