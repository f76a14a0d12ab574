// crates/title-ledger-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Shared data models for Title Ledger operation contracts.
// Purpose: Provide canonical shapes for the operation catalog and listings.
// Dependencies: serde, serde_json, title-ledger-core
// ============================================================================

//! ## Overview
//! This module defines the typed contract shapes serialized into generated
//! documentation and client listings. The operation name set itself is owned
//! by the core crate; this crate re-exports it so catalog consumers need one
//! import.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

/// Canonical operation names for the dispatch surface.
pub use title_ledger_core::OperationName;

// ============================================================================
// SECTION: Operation Contracts
// ============================================================================

/// Operation definition used by catalog listings.
///
/// # Invariants
/// - `name` is a stable wire identifier.
/// - `input_schema` is a JSON Schema payload for the ordered argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDefinition {
    /// Wire operation name.
    pub name: OperationName,
    /// Operation description for clients.
    pub description: String,
    /// JSON schema for the ordered argument list.
    pub input_schema: Value,
}

/// Operation contract with full argument and payload schemas.
///
/// # Invariants
/// - `arity` matches the fixed argument count the router enforces.
/// - `input_schema` describes the ordered argument list; `payload_schema`,
///   when present, describes the decoded JSON record carried in the first
///   argument.
/// - `examples` validate against the schemas when emitted by
///   [`crate::tooling::operation_contracts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationContract {
    /// Wire operation name.
    pub name: OperationName,
    /// Operation description.
    pub description: String,
    /// Fixed argument count.
    pub arity: usize,
    /// JSON schema for the ordered argument list.
    pub input_schema: Value,
    /// JSON schema for the decoded first-argument record, when the
    /// operation carries one.
    pub payload_schema: Option<Value>,
    /// Worked invocations for documentation and clients.
    pub examples: Vec<OperationExample>,
    /// Notes describing behavior callers must plan around.
    pub notes: Vec<String>,
}

/// Worked invocation example for one operation.
///
/// # Invariants
/// - `args` align with the operation's arity and schemas when generated by
///   the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationExample {
    /// Short example description.
    pub description: String,
    /// Ordered wire arguments.
    pub args: Vec<String>,
}
