//! Tuning summary bounds with SummaryOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_summary::{summarize_with_options, SummaryOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Batch {
    name: String,
    items: Vec<u32>,
    shards: Vec<Vec<u32>>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let batch = Batch {
        name: "nightly-import".to_string(),
        items: (1..=40).collect(),
        shards: (0..6).map(|s| (s * 10..s * 10 + 10).collect()).collect(),
    };

    // Default bounds: 5 array items, depth 3, 2-space indent
    println!("Defaults:");
    println!(
        "{}",
        summarize_with_options(&batch, SummaryOptions::default())?
    );

    // Wider arrays
    println!("Ten items per array:");
    let wide = SummaryOptions::new().with_max_array_items(10);
    println!("{}", summarize_with_options(&batch, wide)?);

    // Shallow view: inner arrays collapse to placeholders
    println!("Depth 1:");
    let shallow = SummaryOptions::new().with_max_depth(1);
    println!("{}", summarize_with_options(&batch, shallow)?);

    // Wider indentation steps
    println!("Four-space indent:");
    let indented = SummaryOptions::new().with_indent(4);
    println!("{}", summarize_with_options(&batch, indented)?);

    Ok(())
}
