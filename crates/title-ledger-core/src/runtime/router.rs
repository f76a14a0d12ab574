// crates/title-ledger-core/src/runtime/router.rs
// ============================================================================
// Module: Dispatch Router
// Description: Named-operation dispatch over the registry transitions.
// Purpose: Resolve operation names, validate arity, and propagate results verbatim.
// Dependencies: crate::core, crate::interfaces, crate::runtime
// ============================================================================

//! ## Overview
//! The router is the sole entry point into the registries. It exact-matches
//! the operation name against the closed [`OperationName`] set, validates
//! the fixed argument count, and invokes the corresponding transition. It
//! performs no authorization, no idempotency tracking, and no recovery;
//! registry results and errors pass through untouched. One metric event is
//! recorded per dispatch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::AssetId;
use crate::core::operations::OperationName;
use crate::interfaces::StateStore;
use crate::runtime::assets::AssetRegistry;
use crate::runtime::errors::LedgerError;
use crate::runtime::paper::PaperRegistry;
use crate::runtime::telemetry::InvokeOutcome;
use crate::runtime::telemetry::MetricsSink;
use crate::runtime::telemetry::NoopMetrics;
use crate::runtime::telemetry::UNKNOWN_OPERATION_LABEL;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Shared sink for routers constructed without metrics.
const NOOP_METRICS: &NoopMetrics = &NoopMetrics;

// ============================================================================
// SECTION: Router
// ============================================================================

/// Dispatch router over a state store.
///
/// # Invariants
/// - Stateless per invocation; the store supplied at construction is the
///   only collaborator.
/// - Mutating operations return no payload; `query` returns raw bytes.
#[derive(Clone, Copy)]
pub struct Router<'store> {
    /// Backing key-value ledger for dispatched operations.
    store: &'store dyn StateStore,
    /// Sink receiving one event per dispatch.
    metrics: &'store dyn MetricsSink,
}

impl<'store> Router<'store> {
    /// Creates a router with metrics disabled.
    #[must_use]
    pub fn new(store: &'store dyn StateStore) -> Self {
        Self { store, metrics: NOOP_METRICS }
    }

    /// Creates a router that records one metric event per dispatch.
    #[must_use]
    pub fn with_metrics(store: &'store dyn StateStore, metrics: &'store dyn MetricsSink) -> Self {
        Self { store, metrics }
    }

    /// Dispatches a named operation with its ordered argument list.
    ///
    /// Returns `Some(bytes)` for `query` and `None` for every mutating
    /// operation.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownOperation`] for unrecognized names,
    /// [`LedgerError::BadArity`] on argument-count mismatch, and otherwise
    /// whatever the invoked registry transition returns.
    pub fn dispatch(
        &self,
        operation: &str,
        args: &[String],
    ) -> Result<Option<Vec<u8>>, LedgerError> {
        let result = self.route(operation, args);
        let label =
            OperationName::from_name(operation).map_or(UNKNOWN_OPERATION_LABEL, OperationName::as_str);
        self.metrics.record_invoke(label, InvokeOutcome::from_result(&result));
        result
    }

    /// Resolves and invokes the transition for one operation.
    fn route(&self, operation: &str, args: &[String]) -> Result<Option<Vec<u8>>, LedgerError> {
        let Some(name) = OperationName::from_name(operation) else {
            return Err(LedgerError::UnknownOperation(operation.to_string()));
        };

        let assets = AssetRegistry::new(self.store);
        let paper = PaperRegistry::new(self.store);
        match name {
            OperationName::Create => match args {
                [record] => assets.create(record).map(|()| None),
                _ => Err(arity_mismatch(name, args.len())),
            },
            OperationName::Transfer => match args {
                [id, new_owner] => {
                    assets.transfer(&AssetId::new(id.as_str()), new_owner).map(|()| None)
                }
                _ => Err(arity_mismatch(name, args.len())),
            },
            OperationName::Delete => match args {
                [id] => assets.delete(&AssetId::new(id.as_str())).map(|()| None),
                _ => Err(arity_mismatch(name, args.len())),
            },
            OperationName::Query => match args {
                [key] => assets.query(key).map(Some),
                _ => Err(arity_mismatch(name, args.len())),
            },
            OperationName::CreateAccounts => match args {
                [count] => paper.create_accounts(count).map(|()| None),
                _ => Err(arity_mismatch(name, args.len())),
            },
            OperationName::IssueCommercialPaper => match args {
                [record] => paper.issue(record).map(|()| None),
                _ => Err(arity_mismatch(name, args.len())),
            },
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the arity-mismatch error for an operation.
const fn arity_mismatch(operation: OperationName, actual: usize) -> LedgerError {
    LedgerError::BadArity { operation, expected: operation.arity(), actual }
}
