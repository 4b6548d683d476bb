//! Schema catalog, pipe actions, and parse methods for value schemas.
//!
//! This crate provides the user-facing surface on top of
//! [`value_schema_core`]:
//!
//! - **Schemas**: constructor functions like [`string`], [`object`] and
//!   [`intersection`] for every supported kind, including async-native
//!   variants such as [`custom_async`]
//! - **Actions**: reusable pipe steps like [`min_length`] and
//!   [`transform`] for refining and rewriting parsed values
//! - **Methods**: [`parse`], [`safe_parse`], [`is_valid`] and friends
//!   for running a schema, plus [`flatten`] for rendering failures
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use value_schema_core::IntoSchemaRef;
//! use value_schema_validators::{min_length, object, optional, parse, string, string_with};
//!
//! let signup = object(vec![
//!     (
//!         "username",
//!         string_with(("Username is required", vec![min_length(3)])).into_ref(),
//!     ),
//!     ("bio", optional(string().into_ref()).into_ref()),
//! ]);
//!
//! let output = parse(&signup, &json!({"username": "ada"})).unwrap();
//! assert_eq!(output, json!({"username": "ada"}));
//!
//! let err = parse(&signup, &json!({"username": "ab"})).unwrap_err();
//! assert_eq!(err.issues.first().unwrap().path_string(), "username");
//! assert_eq!(err.issues.first().unwrap().message, "Invalid length");
//! ```

mod actions;
mod methods;
mod schemas;

pub use actions::{
    check, integer, max_items, max_length, max_value, min_items, min_length, min_value, pattern,
    rfc3339_timestamp, transform, trimmed,
};
pub use methods::{
    FlatErrors, flatten, is_valid, parse, parse_async, parse_with, parse_with_async, safe_parse,
    safe_parse_async,
};
pub use schemas::*;
