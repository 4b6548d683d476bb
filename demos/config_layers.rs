//! Layered configuration example.
//!
//! Uses an intersection schema to require that one config document
//! satisfies several partial schemas at once, merging their outputs into
//! a single object. Also shows unions for alternative representations
//! and literals for enumerated settings.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p value-schema-demos --example config_layers
//! ```

use serde_json::json;
use value_schema_core::IntoSchemaRef;
use value_schema_validators::{
    boolean, flatten, integer, intersection, is_valid, literal, number_with, object, optional,
    parse, string, tuple, union,
};

fn main() {
    // Layer 1: network settings
    let network = object(vec![
        (
            "port",
            union(vec![
                number_with(vec![integer()]).into_ref(),
                string().into_ref(),
            ])
            .into_ref(),
        ),
        ("host", string().into_ref()),
    ]);

    // Layer 2: logging settings
    let logging = object(vec![
        (
            "log_level",
            union(vec![
                literal("debug").into_ref(),
                literal("info").into_ref(),
                literal("warn").into_ref(),
                literal("error").into_ref(),
            ])
            .into_ref(),
        ),
        ("verbose", optional(boolean().into_ref()).into_ref()),
    ]);

    // The full config must satisfy both layers; outputs merge.
    let config = intersection(vec![network.into_ref(), logging.into_ref()]);

    let input = json!({
        "port": 8080,
        "host": "0.0.0.0",
        "log_level": "info",
        "extra": "stripped by both layers"
    });
    match parse(&config, &input) {
        Ok(output) => {
            println!("Merged config:");
            println!("  {output}");
        }
        Err(err) => println!("Unexpected rejection: {err}"),
    }

    println!();

    // A config that fails one layer: the intersection reports a single
    // wrapper issue whose nested issues carry field-level paths.
    let broken = json!({
        "port": 8080,
        "host": "0.0.0.0",
        "log_level": "chatty"
    });
    match parse(&config, &broken) {
        Ok(_) => println!("Unexpected acceptance"),
        Err(err) => {
            println!("Rejected config:");
            println!("{err}");
            println!();
            println!("Flattened:");
            let flat = flatten(&err);
            for (path, messages) in &flat.nested {
                println!("  {path}: {}", messages.join("; "));
            }
        }
    }

    println!();

    // Tuples validate fixed-shape arrays such as coordinates.
    let corner = tuple(vec![
        number_with(vec![integer()]).into_ref(),
        number_with(vec![integer()]).into_ref(),
    ]);
    println!("Corner [4, 2] valid: {}", is_valid(&corner, &json!([4, 2])));
    println!(
        "Corner [4, \"2\"] valid: {}",
        is_valid(&corner, &json!([4, "2"]))
    );
}
