// crates/title-ledger-core/src/runtime/memory.rs
// ============================================================================
// Module: In-Memory State Store
// Description: Reference StateStore backed by a mutexed ordered map.
// Purpose: Support tests, examples, and single-process embedding hosts.
// Dependencies: crate::interfaces, std
// ============================================================================

//! ## Overview
//! The in-memory store implements the absent-as-empty contract over a
//! `BTreeMap`. It is a reference implementation, not a persistence layer:
//! contents vanish with the process, and the interior mutex provides only
//! per-call atomicity, matching the isolation the core already assumes from
//! external stores.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::interfaces::StateStore;
use crate::interfaces::StateStoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory key-value store with absent-as-empty reads.
///
/// # Invariants
/// - Never-written keys read back as empty bytes, not errors.
/// - Writes are unconditional overwrites.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    /// Stored entries, keyed by ledger key.
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys currently written.
    ///
    /// # Errors
    ///
    /// Returns [`StateStoreError::Read`] when the interior lock is poisoned.
    pub fn key_count(&self) -> Result<usize, StateStoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StateStoreError::Read("state store mutex poisoned".to_string()))?;
        Ok(entries.len())
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, StateStoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StateStoreError::Read("state store mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned().unwrap_or_default())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StateStoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StateStoreError::Write("state store mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
