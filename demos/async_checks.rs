//! Async validation example.
//!
//! Combines synchronous shape checks with an async predicate, the way a
//! signup flow would consult a user store while validating a form. The
//! async intersection awaits its children strictly in order, so the
//! cheap sync checks run before the simulated lookup.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p value-schema-demos --example async_checks
//! ```

use serde_json::{Value, json};
use value_schema_core::IntoSchemaRef;
use value_schema_validators::{
    custom_async, flatten, intersection_async, min_length, parse_async, string_with,
};

/// Pretends to ask a user store whether a username is still free.
async fn username_is_free(value: Value) -> bool {
    let taken = ["admin", "root", "ada"];
    match value.as_str() {
        Some(name) => !taken.contains(&name),
        None => false,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let shape = string_with(("Username is required", vec![min_length(3)]));
    let free = custom_async(|value| Box::pin(username_is_free(value)))
        .with_message("Username is already taken");

    let username = intersection_async(vec![shape.into_ref(), free.into_ref()]);

    for candidate in [json!("grace"), json!("ada"), json!("x")] {
        match parse_async(&username, &candidate).await {
            Ok(output) => println!("{candidate}: available ({output} accepted)"),
            Err(err) => {
                let flat = flatten(&err);
                let mut messages = flat.root.clone();
                for field in flat.nested.values() {
                    messages.extend(field.iter().cloned());
                }
                println!("{candidate}: rejected ({})", messages.join("; "));
            }
        }
    }
}
