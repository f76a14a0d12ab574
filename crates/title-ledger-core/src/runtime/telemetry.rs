// crates/title-ledger-core/src/runtime/telemetry.rs
// ============================================================================
// Module: Runtime Telemetry
// Description: Observability hooks for dispatch routing.
// Purpose: Provide invocation metric events without hard dependencies.
// Dependencies: crate::runtime::errors
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for dispatch counters. It is
//! intentionally dependency-light so embedding hosts can plug in Prometheus
//! or OpenTelemetry without redesign. Labels are drawn from the closed
//! operation and outcome sets; no caller payload data ever reaches a label.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::runtime::errors::LedgerError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Label recorded for dispatches whose operation name is unknown.
pub const UNKNOWN_OPERATION_LABEL: &str = "unknown";

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// Dispatch outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling and mirror the transition
///   error taxonomy one-for-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum InvokeOutcome {
    /// Successful dispatch.
    Ok,
    /// Caller-supplied data failed to decode or parse.
    MalformedInput,
    /// Create hit an already-registered identifier.
    DuplicateKey,
    /// A required lookup found no record.
    NotFound,
    /// The state store failed.
    Store,
    /// Stored bytes failed to decode.
    CorruptRecord,
    /// Identifier derivation failed.
    Derivation,
    /// Argument count mismatched the operation arity.
    BadArity,
    /// Operation name was not recognized.
    UnknownOperation,
}

impl InvokeOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::MalformedInput => "malformed_input",
            Self::DuplicateKey => "duplicate_key",
            Self::NotFound => "not_found",
            Self::Store => "store_error",
            Self::CorruptRecord => "corrupt_record",
            Self::Derivation => "derivation_error",
            Self::BadArity => "bad_arity",
            Self::UnknownOperation => "unknown_operation",
        }
    }

    /// Classifies a transition error.
    #[must_use]
    pub const fn from_error(error: &LedgerError) -> Self {
        match error {
            LedgerError::MalformedInput(_) => Self::MalformedInput,
            LedgerError::DuplicateKey { .. } => Self::DuplicateKey,
            LedgerError::NotFound { .. } => Self::NotFound,
            LedgerError::Store(_) => Self::Store,
            LedgerError::CorruptRecord { .. } => Self::CorruptRecord,
            LedgerError::Derivation(_) => Self::Derivation,
            LedgerError::BadArity { .. } => Self::BadArity,
            LedgerError::UnknownOperation(_) => Self::UnknownOperation,
        }
    }

    /// Classifies a dispatch result.
    #[must_use]
    pub fn from_result<T>(result: &Result<T, LedgerError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(error) => Self::from_error(error),
        }
    }
}

// ============================================================================
// SECTION: Metrics Sink
// ============================================================================

/// Sink for dispatch metric events.
pub trait MetricsSink {
    /// Records one dispatch under a stable operation label and outcome.
    fn record_invoke(&self, operation: &str, outcome: InvokeOutcome);
}

/// Metrics sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn record_invoke(&self, _operation: &str, _outcome: InvokeOutcome) {}
}
