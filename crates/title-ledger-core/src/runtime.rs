// crates/title-ledger-core/src/runtime.rs
// ============================================================================
// Module: Ledger Runtime
// Description: Registry transitions, dispatch routing, and runtime adapters.
// Purpose: Execute named invocations as single read-then-write round trips.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The runtime layer is stateless per invocation: a router resolves the
//! operation name, validates arity, and hands the arguments to the asset or
//! paper registry, which round-trips records through the [`StateStore`]
//! supplied by the host. An in-memory reference store and a dependency-light
//! metrics seam round out the module for embedding and tests.
//!
//! [`StateStore`]: crate::interfaces::StateStore

pub mod assets;
pub mod errors;
pub mod memory;
pub mod paper;
pub mod router;
pub mod telemetry;

pub use assets::AssetRegistry;
pub use errors::LedgerError;
pub use memory::InMemoryStateStore;
pub use paper::PaperRegistry;
pub use router::Router;
pub use telemetry::InvokeOutcome;
pub use telemetry::MetricsSink;
pub use telemetry::NoopMetrics;
pub use telemetry::UNKNOWN_OPERATION_LABEL;
