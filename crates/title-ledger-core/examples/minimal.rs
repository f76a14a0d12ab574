// crates/title-ledger-core/examples/minimal.rs
// ============================================================================
// Module: Title Ledger Minimal Example
// Description: Minimal end-to-end dispatch walkthrough on the in-memory store.
// Purpose: Demonstrate account creation, issuance, asset transfer, and query.
// Dependencies: title-ledger-core
// ============================================================================

//! ## Overview
//! Drives the dispatch router through the full operation surface using the
//! in-memory reference store. The example is backend-agnostic and suitable
//! for quick verification.

use serde_json::json;
use title_ledger_core::AssetRecord;
use title_ledger_core::InstrumentRecord;
use title_ledger_core::runtime::InMemoryStateStore;
use title_ledger_core::runtime::Router;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryStateStore::new();
    let router = Router::new(&store);

    router.dispatch("createAccounts", &["2".to_string()])?;

    let paper = json!({
        "ticker": "ACME",
        "par": 1000.00,
        "qty": 10,
        "discount": 7.5,
        "maturity": 30,
        "owner": "company1",
        "issuer": "company2",
        "issueDate": "1456161763790",
    });
    router.dispatch("issueCommercialPaper", &[paper.to_string()])?;

    let asset = json!({
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
    });
    router.dispatch("create", &[asset.to_string()])?;
    router.dispatch("transfer", &["ABC1234".to_string(), "Bob".to_string()])?;

    let asset_bytes = router
        .dispatch("query", &["ABC1234".to_string()])?
        .ok_or(ExampleError("query returned no payload"))?;
    let transferred: AssetRecord = serde_json::from_slice(&asset_bytes)?;

    let paper_bytes = router
        .dispatch("query", &["cp:10000ABN".to_string()])?
        .ok_or(ExampleError("query returned no payload"))?;
    let issued: InstrumentRecord = serde_json::from_slice(&paper_bytes)?;

    let _ = (transferred, issued);
    Ok(())
}
