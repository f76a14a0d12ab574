// crates/title-ledger-core/src/runtime/errors.rs
// ============================================================================
// Module: Ledger Transition Errors
// Description: Error taxonomy for registry transitions and dispatch.
// Purpose: Surface every failure as a stable, matchable variant.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! Every operation returns its failure to the immediate caller; there is no
//! local recovery, retry, or rollback. Partial failure in a multi-write
//! account batch is surfaced as the first error encountered, with the writes
//! already committed left in place.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::cusip::DerivationError;
use crate::core::operations::OperationName;
use crate::interfaces::StateStoreError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures raised by registry transitions and the dispatch router.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Every variant is terminal for the invocation that raised it.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Caller-supplied data failed to decode or parse.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// Create would violate the one-record-per-identifier invariant.
    #[error("record already exists under key {key}")]
    DuplicateKey {
        /// Store key that already holds a record.
        key: String,
    },
    /// A required lookup found no record.
    #[error("no record under key {key}")]
    NotFound {
        /// Store key that held nothing.
        key: String,
    },
    /// The underlying state store failed.
    #[error(transparent)]
    Store(#[from] StateStoreError),
    /// Stored bytes failed to decode into the expected schema.
    #[error("stored bytes under key {key} do not decode as the expected record")]
    CorruptRecord {
        /// Store key holding the undecodable bytes.
        key: String,
    },
    /// Instrument identifier derivation failed.
    #[error(transparent)]
    Derivation(#[from] DerivationError),
    /// Argument count did not match the operation's fixed arity.
    #[error("operation {operation} expects {expected} argument(s), got {actual}")]
    BadArity {
        /// Operation whose arity was violated.
        operation: OperationName,
        /// Fixed arity for the operation.
        expected: usize,
        /// Argument count actually supplied.
        actual: usize,
    },
    /// Operation name matched nothing in the dispatch surface.
    #[error("unknown operation {0}")]
    UnknownOperation(String),
}
