// crates/title-ledger-contract/src/lib.rs
// ============================================================================
// Module: Title Ledger Contract
// Description: Canonical operation contracts for the dispatch surface.
// Purpose: Provide operation catalogs for docs, clients, and validation tooling.
// Dependencies: serde, serde_json, title-ledger-core
// ============================================================================

//! ## Overview
//! This crate is the canonical description of the Title Ledger invocation
//! surface: one contract per dispatchable operation, carrying the wire name,
//! fixed arity, argument-list schema, decoded-payload schema where the
//! argument is a JSON record, worked examples, and usage notes. The core
//! crate owns the behavior; this crate keeps the description of that
//! behavior in one deterministic, testable place.

pub mod tooling;
pub mod types;

pub use crate::tooling::operation_contracts;
pub use crate::tooling::operation_definitions;
pub use crate::types::OperationContract;
pub use crate::types::OperationDefinition;
pub use crate::types::OperationExample;
pub use crate::types::OperationName;
