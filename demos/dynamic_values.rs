//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use serde_summary::{summarize_value, summary, to_value, Value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build a tree dynamically with the summary! macro
    let config = summary!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "stopped_at": null,
        "last_error": undefined
    });

    println!("Config summary:\n{}", summarize_value(&config)?);

    // Access values dynamically
    if let Value::Object(obj) = &config {
        if let Some(Value::String(host)) = obj.get("host") {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = obj.get("port").and_then(|v| v.as_i64()) {
            println!("Accessing field 'port': {}", port);
        }

        if let Some(Value::Array(features)) = obj.get("features") {
            println!("Accessing field 'features': {} items\n", features.len());
        }
    }

    // Convert an existing struct to a Value
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User summary:\n{}", summarize_value(&user_value)?);

    // Runtime type checking
    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}", user_value.is_string());

    Ok(())
}
