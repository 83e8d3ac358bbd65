//! Bounded payload logging end to end: JSON text in, one legible log
//! line-block out.
//!
//! Run with: cargo run --example log_payloads

use serde_summary::{summarize_value, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A payload as it might arrive from an upstream API
    let body = r#"{
        "request_id": "3f2a9c",
        "page": 1,
        "results": [
            {"id": 1, "name": "alpha", "score": 0.75},
            {"id": 2, "name": "beta", "score": 0.5},
            {"id": 3, "name": "gamma", "score": 0.25},
            {"id": 4, "name": "delta", "score": 0.125},
            {"id": 5, "name": "epsilon", "score": 0.0625},
            {"id": 6, "name": "zeta", "score": 0.03125},
            {"id": 7, "name": "eta", "score": 0.015625}
        ],
        "next_cursor": null
    }"#;

    // Classify once at the boundary, then summarize
    let payload: Value = serde_json::from_str(body)?;
    println!("response body: {}", summarize_value(&payload)?);

    Ok(())
}
