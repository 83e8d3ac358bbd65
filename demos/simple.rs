//! Your first summary: a derived struct rendered with default bounds.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_summary::summarize;
use std::error::Error;

#[derive(Serialize)]
struct Response {
    status: u16,
    endpoint: String,
    user_ids: Vec<u32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let response = Response {
        status: 200,
        endpoint: "/api/users".to_string(),
        user_ids: (1..=50).collect(),
    };

    // Fifty ids collapse to five plus a count marker
    println!("{}", summarize(&response)?);

    Ok(())
}
