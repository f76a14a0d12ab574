// crates/title-ledger-core/src/interfaces/mod.rs
// ============================================================================
// Module: Ledger Interfaces
// Description: Backend-agnostic interface for key-value ledger state.
// Purpose: Define the store contract consumed by the registry transitions.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The state store is an external collaborator: persistence, replication,
//! and consensus are its problem. The core consumes a narrow get/put surface
//! and assumes read-your-writes consistency within one invocation. Stored
//! bytes are untrusted input; registries decode them defensively and fail
//! closed on records that do not parse.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: State Store
// ============================================================================

/// State store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateStoreError {
    /// Store read failed.
    #[error("state store read failed: {0}")]
    Read(String),
    /// Store write failed.
    #[error("state store write failed: {0}")]
    Write(String),
}

/// Key-value ledger state consumed by the registry transitions.
///
/// # Invariants
/// - `get` returns empty bytes, not an error, for keys that have never been
///   written. The core treats empty as absent for uniqueness and existence
///   checks and relies on nothing else about that distinction.
/// - `put` is an unconditional overwrite; no compare-and-swap is offered.
///   Isolation between concurrent invocations racing on one key is the
///   store's responsibility: a `get` immediately preceding a `put` must
///   observe any write the store ordered before it. Backends with
///   conditional-write support should enforce create-uniqueness there.
pub trait StateStore {
    /// Reads the bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StateStoreError`] when the read fails. Absent keys are not
    /// an error; they yield empty bytes.
    fn get(&self, key: &str) -> Result<Vec<u8>, StateStoreError>;

    /// Writes `value` under `key`, replacing any prior bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StateStoreError`] when the write fails.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StateStoreError>;
}
