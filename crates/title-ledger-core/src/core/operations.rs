// crates/title-ledger-core/src/core/operations.rs
// ============================================================================
// Module: Operation Names
// Description: Closed set of dispatchable operation names and their arities.
// Purpose: Give the router and the contract catalog one source of truth.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The dispatch surface is a fixed set of six named operations. Names are
//! matched exactly against the wire strings; each operation has a fixed
//! argument count that the router validates before invoking a registry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Operation Names
// ============================================================================

/// Canonical operation names accepted by the dispatch router.
///
/// # Invariants
/// - Wire names are stable; matching is exact and case-sensitive.
/// - Arities are fixed per operation and validated before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationName {
    /// Register a new asset record.
    #[serde(rename = "create")]
    Create,
    /// Reassign an asset record's owner.
    #[serde(rename = "transfer")]
    Transfer,
    /// Recognized no-op retained for wire compatibility.
    #[serde(rename = "delete")]
    Delete,
    /// Read raw record bytes by store key.
    #[serde(rename = "query")]
    Query,
    /// Create a batch of issuing accounts.
    #[serde(rename = "createAccounts")]
    CreateAccounts,
    /// Issue a commercial paper record against an existing account.
    #[serde(rename = "issueCommercialPaper")]
    IssueCommercialPaper,
}

impl OperationName {
    /// Every dispatchable operation, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Create,
        Self::Transfer,
        Self::Delete,
        Self::Query,
        Self::CreateAccounts,
        Self::IssueCommercialPaper,
    ];

    /// Returns the stable wire name for the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Transfer => "transfer",
            Self::Delete => "delete",
            Self::Query => "query",
            Self::CreateAccounts => "createAccounts",
            Self::IssueCommercialPaper => "issueCommercialPaper",
        }
    }

    /// Resolves a wire name to an operation, if it is known.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|operation| operation.as_str() == name)
    }

    /// Returns the fixed argument count for the operation.
    ///
    /// Transfer takes an identifier plus a new owner; every other operation
    /// takes a single argument.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Transfer => 2,
            Self::Create
            | Self::Delete
            | Self::Query
            | Self::CreateAccounts
            | Self::IssueCommercialPaper => 1,
        }
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
