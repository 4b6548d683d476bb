//! The parsing contract every schema satisfies.
//!
//! A schema is immutable configuration plus a parse operation. Schemas
//! hold no mutable state, so they can be shared behind [`SchemaRef`]
//! across threads and across unrelated parse calls with no locking.
//!
//! Most schemas are synchronous: they implement [`Schema::parse`] and get
//! [`Schema::parse_async`] for free as an immediately-ready future, so
//! they compose into async composites unchanged. Async-native schemas
//! (checks that await something) override `parse_async`, report
//! `is_async() == true`, and have no synchronous parse.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::{ParseContext, ParseResult, SchemaKind};

/// Boxed future returned by [`Schema::parse_async`].
pub type ParseFuture<'a> = Pin<Box<dyn Future<Output = ParseResult> + Send + 'a>>;

/// Shared handle to a schema.
///
/// Composite schemas hold their children through this type, and callers
/// can reuse one handle across any number of parse calls.
pub type SchemaRef = Arc<dyn Schema>;

/// Contract for all schemas, sync or async.
///
/// Parsing has no side effects beyond allocating its result: the input
/// value and ambient state are never mutated. On success the returned
/// output conforms to the schema's declared shape; on failure the result
/// carries a non-empty issue collection.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use value_schema_core::*;
///
/// #[derive(Debug)]
/// struct Finite;
///
/// impl Schema for Finite {
///     fn kind(&self) -> SchemaKind {
///         SchemaKind::Number
///     }
///
///     fn parse(&self, input: &Value, _ctx: &ParseContext) -> ParseResult {
///         match input.as_f64() {
///             Some(n) if n.is_finite() => ParseResult::Output(input.clone()),
///             _ => ParseResult::Issues(schema_issues(
///                 IssueKind::Type,
///                 SchemaKind::Number,
///                 "Invalid type",
///                 input,
///                 None,
///             )),
///         }
///     }
/// }
///
/// let ctx = ParseContext::new();
/// assert!(Finite.parse(&json!(1.5), &ctx).is_ok());
/// assert!(!Finite.parse(&json!("abc"), &ctx).is_ok());
/// assert!(!Finite.is_async());
/// ```
pub trait Schema: fmt::Debug + Send + Sync {
    /// Discriminant tag for the concrete validator kind.
    fn kind(&self) -> SchemaKind;

    /// True for schemas whose parse must suspend (see [`Schema::parse_async`]).
    fn is_async(&self) -> bool {
        false
    }

    /// Parses `input` synchronously.
    ///
    /// # Panics
    ///
    /// Async-native schemas have no synchronous parse; calling this on
    /// one is a programming error and panics.
    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult;

    /// Parses `input` under the async contract.
    ///
    /// The default wraps [`Schema::parse`] in an immediately-ready
    /// future, which is how synchronous schemas participate in async
    /// composition. Async-native schemas override this and may suspend
    /// while awaiting a child's parse.
    fn parse_async<'a>(&'a self, input: &'a Value, ctx: &'a ParseContext) -> ParseFuture<'a> {
        Box::pin(std::future::ready(self.parse(input, ctx)))
    }
}

/// Conversion into a shared [`SchemaRef`] handle.
///
/// Blanket-implemented for every schema type, so `string().into_ref()`
/// style construction works without naming [`Arc`].
pub trait IntoSchemaRef {
    /// Wraps the schema in a shared handle.
    fn into_ref(self) -> SchemaRef;
}

impl<T: Schema + 'static> IntoSchemaRef for T {
    fn into_ref(self) -> SchemaRef {
        Arc::new(self)
    }
}
