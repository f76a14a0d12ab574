// crates/title-ledger-core/src/core/identifiers.rs
// ============================================================================
// Module: Ledger Identifiers
// Description: Canonical opaque identifiers for assets, accounts, and instruments.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical identifiers used throughout Title
//! Ledger. Identifiers are opaque strings on the wire. The one identifier
//! with internal structure is [`AccountPrefix`], which is generated from a
//! batch ordinal and forms the leading component of every CUSIP issued
//! against its account.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fixed literal suffix appended to every generated account prefix.
pub const ACCOUNT_PREFIX_SUFFIX: &str = "000A";

// ============================================================================
// SECTION: Asset Identifiers
// ============================================================================

/// Asset identifier supplied by the caller at creation time.
///
/// On the wire this is the `v5cID` field of an asset record: the official
/// registration-document identifier that doubles as the ledger key.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Creates a new asset identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AssetId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Account Identifiers
// ============================================================================

/// Account identifier for an issuing account.
///
/// Batch-created accounts use the synthetic form `"company" + ordinal`
/// (1-based); the type itself accepts any opaque string.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new account identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates the synthetic identifier for a batch ordinal (1-based).
    #[must_use]
    pub fn for_ordinal(ordinal: u32) -> Self {
        Self(format!("company{ordinal}"))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Six-character issuance prefix assigned to an account at creation.
///
/// The prefix is the leading component of every CUSIP issued against the
/// account.
///
/// # Invariants
/// - Generated prefixes are six characters: the ordinal rendering plus the
///   literal `"000A"` suffix.
/// - Construction is deterministic in the ordinal; the rule is reproduced
///   exactly from the original registry, so ordinals 1 and 10 both render
///   `"10000A"`. Batches of ten or more accounts can repeat prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountPrefix(String);

impl AccountPrefix {
    /// Creates a prefix from an already-rendered string.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    /// Generates the prefix for a batch ordinal (1-based).
    ///
    /// Ordinals below ten carry a trailing zero after the digit so the
    /// prefix stays six characters: ordinal 1 renders `"10000A"`. Ordinals
    /// of ten and above concatenate directly: ordinal 12 renders `"12000A"`.
    #[must_use]
    pub fn from_ordinal(ordinal: u32) -> Self {
        if ordinal < 10 {
            Self(format!("{ordinal}0{ACCOUNT_PREFIX_SUFFIX}"))
        } else {
            Self(format!("{ordinal}{ACCOUNT_PREFIX_SUFFIX}"))
        }
    }

    /// Returns the prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for AccountPrefix {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountPrefix {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Instrument Identifiers
// ============================================================================

/// Derived instrument identifier: account prefix plus date suffix.
///
/// # Invariants
/// - Always computed at issuance from the owner account's prefix and the
///   issue-date suffix; never supplied by callers. A caller-supplied value
///   is overwritten during issuance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cusip(String);

impl Cusip {
    /// Creates a CUSIP from an already-derived string.
    #[must_use]
    pub fn new(cusip: impl Into<String>) -> Self {
        Self(cusip.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cusip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Cusip {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Cusip {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
