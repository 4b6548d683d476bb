//! Core parsing contract and shared engine primitives for value schemas.
//!
//! This crate defines the foundational pieces every schema builds on:
//!
//! - [`Issue`], [`Issues`] — structured diagnostics: category and schema
//!   tags, message, offending-value snapshot, path from the parse root,
//!   and optional nested detail.
//! - [`ParseResult`] — output or issues, exactly one at a time.
//! - [`ParseContext`] — per-call flags (abort-early, abort-pipe-early)
//!   and the root display label.
//! - [`Schema`], [`SchemaRef`] — the parse contract and the shared
//!   handle composites hold their children through.
//! - [`schema_issues`], [`flatten_nested`], [`prefix_issues`] — issue
//!   construction and the aggregation rules wrapping composites rely on.
//! - [`resolve_default_args`], [`resolve_tuple_args`] — shape dispatch
//!   for optional trailing constructor arguments.
//! - [`execute_pipe`], [`Action`] — the post-validation refinement and
//!   transform runner shared by all schema kinds.
//! - [`ParseError`] — the `std::error::Error` carrier for failed parses.
//!
//! Concrete schema kinds (string, object, intersection, ...) live in the
//! `value-schema-validators` crate; this crate only defines what they
//! all have in common.
//!
//! # Example
//!
//! ```
//! use serde_json::{Value, json};
//! use value_schema_core::*;
//!
//! // A minimal leaf schema: accepts any finite number.
//! #[derive(Debug)]
//! struct Finite;
//!
//! impl Schema for Finite {
//!     fn kind(&self) -> SchemaKind {
//!         SchemaKind::Number
//!     }
//!
//!     fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
//!         match input.as_f64() {
//!             Some(n) if n.is_finite() => {
//!                 execute_pipe(input.clone(), None, ctx, IssueKind::Number, SchemaKind::Number)
//!             }
//!             _ => ParseResult::Issues(schema_issues(
//!                 IssueKind::Type,
//!                 SchemaKind::Number,
//!                 INVALID_TYPE,
//!                 input,
//!                 None,
//!             )),
//!         }
//!     }
//! }
//!
//! let ctx = ParseContext::new();
//! assert_eq!(Finite.parse(&json!(2.5), &ctx).into_output(), Some(json!(2.5)));
//!
//! let issues = Finite.parse(&json!("abc"), &ctx).into_issues().unwrap();
//! assert_eq!(issues.first().unwrap().message, "Invalid type");
//! ```

mod args;
mod context;
mod error;
mod issue;
mod pipe;
mod schema;
mod types;

pub use args::{
    DefaultArg, DefaultArgs, TupleArg, TupleArgs, resolve_default_args, resolve_tuple_args,
};
pub use context::ParseContext;
pub use error::{ParseError, Result};
pub use issue::{INVALID_INPUT, INVALID_TYPE, flatten_nested, prefix_issues, schema_issues};
pub use pipe::{Action, ActionResult, Pipe, execute_pipe};
pub use schema::{IntoSchemaRef, ParseFuture, Schema, SchemaRef};
pub use types::*;
