//! Form validation example.
//!
//! Builds a signup form schema with per-field pipes, parses good and bad
//! submissions, and renders the failures both as a `ParseError` display
//! and as flattened per-field buckets.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p value-schema-demos --example form_validation
//! ```

use regex::Regex;
use serde_json::json;
use value_schema_core::{IntoSchemaRef, ParseContext};
use value_schema_validators::{
    ObjectSchema, check, flatten, integer, max_length, min_length, min_value, number_with, object,
    optional, parse_with, pattern, string, string_with, trimmed,
};

fn signup_schema() -> ObjectSchema {
    let email = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    object(vec![
        (
            "username",
            string_with((
                "Username is required",
                vec![
                    trimmed(),
                    min_length(3),
                    max_length(20),
                    check("no_spaces", "Username may not contain spaces", |value| {
                        value.as_str().is_some_and(|s| !s.contains(' '))
                    }),
                ],
            ))
            .into_ref(),
        ),
        (
            "email",
            string_with(("Email is required", vec![pattern(email)])).into_ref(),
        ),
        (
            "age",
            number_with(vec![integer(), min_value(13.0)]).into_ref(),
        ),
        ("bio", optional(string().into_ref()).into_ref()),
    ])
}

fn main() {
    let schema = signup_schema();
    let ctx = ParseContext::new().with_root_label("signup form");

    // A submission that passes every check
    let good = json!({
        "username": "  ada  ",
        "email": "ada@example.org",
        "age": 36
    });
    match parse_with(&schema, &good, &ctx) {
        Ok(output) => {
            println!("Accepted submission:");
            println!("  {output}");
            println!("  (username was trimmed, bio stayed absent)");
        }
        Err(err) => println!("Unexpected rejection: {err}"),
    }

    println!();

    // A submission that fails three fields at once
    let bad = json!({
        "username": "a b",
        "email": "not-an-email",
        "age": 11.5
    });
    match parse_with(&schema, &bad, &ctx) {
        Ok(_) => println!("Unexpected acceptance"),
        Err(err) => {
            println!("Rejected submission:");
            println!("{err}");
            println!();

            println!("Flattened for form rendering:");
            let flat = flatten(&err);
            for (field, messages) in &flat.nested {
                println!("  {field}: {}", messages.join("; "));
            }
        }
    }
}
