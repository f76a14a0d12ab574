// crates/title-ledger-contract/src/tooling.rs
// ============================================================================
// Module: Operation Contracts
// Description: Canonical operation contract definitions and schemas.
// Purpose: Provide the dispatch-surface catalog for docs and client listings.
// Dependencies: serde_json, title-ledger-core, crate::types
// ============================================================================

//! ## Overview
//! This module defines the canonical dispatch surface: one contract per
//! operation with argument schemas, decoded-payload schemas, worked
//! examples, and behavioral notes. Catalog order is stable and preserved in
//! generated docs to keep diffs small; append new operations at the end.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::types::OperationContract;
use crate::types::OperationDefinition;
use crate::types::OperationExample;
use crate::types::OperationName;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Returns the canonical operation contracts in catalog order.
///
/// The order matches [`OperationName::ALL`] and is preserved in generated
/// docs and listings.
#[must_use]
pub fn operation_contracts() -> Vec<OperationContract> {
    vec![
        create_contract(),
        transfer_contract(),
        delete_contract(),
        query_contract(),
        create_accounts_contract(),
        issue_commercial_paper_contract(),
    ]
}

/// Returns the lightweight definitions used by catalog listings.
#[must_use]
pub fn operation_definitions() -> Vec<OperationDefinition> {
    operation_contracts()
        .into_iter()
        .map(|contract| OperationDefinition {
            name: contract.name,
            description: contract.description,
            input_schema: contract.input_schema,
        })
        .collect()
}

// ============================================================================
// SECTION: Operation Contracts
// ============================================================================

/// Builds the contract for `create`.
fn create_contract() -> OperationContract {
    build_contract(
        OperationName::Create,
        "Register a new asset record under its registration-document identifier.",
        json!({
            "type": "array",
            "prefixItems": [
                {
                    "type": "string",
                    "description": "JSON-encoded asset record, keyed by v5cID.",
                },
            ],
            "items": false,
            "minItems": 1,
        }),
        Some(asset_record_schema()),
        vec![OperationExample {
            description: "Register a vehicle title.".to_string(),
            args: vec![
                json!({
                    "make": "Vauxhall",
                    "model": "Corsa",
                    "reg": "CRX 1234",
                    "VIN": 123_456_789,
                    "owner": "Alice",
                    "scrapped": false,
                    "status": 1,
                    "colour": "blue",
                    "v5cID": "ABC1234",
                    "leaseContractID": "LC-77",
                })
                .to_string(),
            ],
        }],
        vec![
            "v5cID is the ledger key; registering an existing identifier fails with a duplicate-key error.".to_string(),
            "Descriptive fields are stored verbatim; only v5cID presence is validated.".to_string(),
            "Returns no payload.".to_string(),
        ],
    )
}

/// Builds the contract for `transfer`.
fn transfer_contract() -> OperationContract {
    build_contract(
        OperationName::Transfer,
        "Reassign the owner of an existing asset record.",
        json!({
            "type": "array",
            "prefixItems": [
                { "type": "string", "description": "Asset identifier (v5cID)." },
                { "type": "string", "description": "New owner identifier." },
            ],
            "items": false,
            "minItems": 2,
        }),
        None,
        vec![OperationExample {
            description: "Hand the vehicle title to a new owner.".to_string(),
            args: vec!["ABC1234".to_string(), "Bob".to_string()],
        }],
        vec![
            "Only the owner field changes; every other field is rewritten from the stored record.".to_string(),
            "Fails when no record exists under the identifier.".to_string(),
            "Returns no payload.".to_string(),
        ],
    )
}

/// Builds the contract for `delete`.
fn delete_contract() -> OperationContract {
    build_contract(
        OperationName::Delete,
        "Recognized no-op retained for wire compatibility; removes nothing.",
        json!({
            "type": "array",
            "prefixItems": [
                { "type": "string", "description": "Asset identifier (v5cID)." },
            ],
            "items": false,
            "minItems": 1,
        }),
        None,
        vec![OperationExample {
            description: "Acknowledged and ignored.".to_string(),
            args: vec!["ABC1234".to_string()],
        }],
        vec![
            "Performs no state change and always succeeds; records are never removed through this surface.".to_string(),
        ],
    )
}

/// Builds the contract for `query`.
fn query_contract() -> OperationContract {
    build_contract(
        OperationName::Query,
        "Read the raw bytes stored under a ledger key.",
        json!({
            "type": "array",
            "prefixItems": [
                {
                    "type": "string",
                    "description": "Store key: a bare asset identifier, acct:<id>, or cp:<cusip>.",
                },
            ],
            "items": false,
            "minItems": 1,
        }),
        None,
        vec![
            OperationExample {
                description: "Read an asset record.".to_string(),
                args: vec!["ABC1234".to_string()],
            },
            OperationExample {
                description: "Read an issuing account.".to_string(),
                args: vec!["acct:company1".to_string()],
            },
        ],
        vec![
            "No decoding or validation happens on read; callers decode the returned bytes.".to_string(),
            "Keys that have never been written yield empty bytes, not an error.".to_string(),
        ],
    )
}

/// Builds the contract for `createAccounts`.
fn create_accounts_contract() -> OperationContract {
    build_contract(
        OperationName::CreateAccounts,
        "Create issuing accounts for ordinals 1 through the requested count.",
        json!({
            "type": "array",
            "prefixItems": [
                {
                    "type": "string",
                    "pattern": "^[0-9]+$",
                    "description": "Decimal count of accounts to create.",
                },
            ],
            "items": false,
            "minItems": 1,
        }),
        None,
        vec![OperationExample {
            description: "Create three issuing accounts.".to_string(),
            args: vec!["3".to_string()],
        }],
        vec![
            "Accounts are company<ordinal> with a six-character issuance prefix ending in 000A.".to_string(),
            "No uniqueness check: re-running a batch overwrites existing accounts silently.".to_string(),
            "Writes are fail-fast with no rollback; a mid-batch store error leaves a partial batch.".to_string(),
            "A count of zero succeeds and writes nothing.".to_string(),
        ],
    )
}

/// Builds the contract for `issueCommercialPaper`.
fn issue_commercial_paper_contract() -> OperationContract {
    build_contract(
        OperationName::IssueCommercialPaper,
        "Issue a commercial paper record against an existing issuing account.",
        json!({
            "type": "array",
            "prefixItems": [
                {
                    "type": "string",
                    "description": "JSON-encoded commercial paper record; the CUSIP is derived, never supplied.",
                },
            ],
            "items": false,
            "minItems": 1,
        }),
        Some(instrument_record_schema()),
        vec![OperationExample {
            description: "Issue thirty-day paper for company1.".to_string(),
            args: vec![
                json!({
                    "ticker": "ACME",
                    "par": 1000.00,
                    "qty": 10,
                    "discount": 7.5,
                    "maturity": 30,
                    "owner": "company1",
                    "issuer": "company1",
                    "issueDate": "1456161763790",
                })
                .to_string(),
            ],
        }],
        vec![
            "The owner account must already exist; its prefix forms the leading six CUSIP characters.".to_string(),
            "issueDate is a string-encoded count of epoch milliseconds; the issue month and day key the two-character suffix.".to_string(),
            "Unlike create, issuance performs no uniqueness check: an identical derived CUSIP overwrites the prior record.".to_string(),
            "Returns no payload; query cp:<cusip> to read the stored record.".to_string(),
        ],
    )
}

// ============================================================================
// SECTION: Payload Schemas
// ============================================================================

/// JSON schema for the decoded asset record payload.
fn asset_record_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "make": { "type": "string" },
            "model": { "type": "string" },
            "reg": { "type": "string" },
            "VIN": { "type": "integer" },
            "owner": { "type": "string" },
            "scrapped": { "type": "boolean" },
            "status": { "type": "integer" },
            "colour": { "type": "string" },
            "v5cID": { "type": "string", "minLength": 1 },
            "leaseContractID": { "type": "string" },
        },
        "required": ["v5cID"],
        "additionalProperties": true,
    })
}

/// JSON schema for the decoded commercial paper payload.
fn instrument_record_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "ticker": { "type": "string" },
            "par": { "type": "number" },
            "qty": { "type": "integer" },
            "discount": { "type": "number" },
            "maturity": { "type": "integer" },
            "owner": { "type": "string" },
            "issuer": { "type": "string" },
            "issueDate": { "type": "string", "pattern": "^-?[0-9]+$" },
        },
        "required": ["owner", "issueDate"],
        "additionalProperties": true,
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Assembles one contract, sourcing the arity from the operation itself.
fn build_contract(
    name: OperationName,
    description: &str,
    input_schema: Value,
    payload_schema: Option<Value>,
    examples: Vec<OperationExample>,
    notes: Vec<String>,
) -> OperationContract {
    OperationContract {
        name,
        description: description.to_string(),
        arity: name.arity(),
        input_schema,
        payload_schema,
        examples,
        notes,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
