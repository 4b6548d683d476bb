//! Custom schemas built from free-form predicates.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use value_schema_core::{
    INVALID_INPUT, IssueKind, ParseContext, ParseFuture, ParseResult, Schema, SchemaKind,
    schema_issues,
};

type CheckFn = dyn Fn(&Value) -> bool + Send + Sync;
type AsyncCheckFn = dyn Fn(Value) -> Pin<Box<dyn Future<Output = bool> + Send>> + Send + Sync;

/// Schema accepting whatever a caller-supplied predicate accepts.
///
/// The predicate sees the raw input and the value passes through
/// unchanged on success.
#[derive(Clone)]
pub struct CustomSchema {
    check: Arc<CheckFn>,
    message: Option<String>,
}

impl CustomSchema {
    /// Overrides the rejection message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Debug for CustomSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomSchema")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Schema for CustomSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Custom
    }

    fn parse(&self, input: &Value, _ctx: &ParseContext) -> ParseResult {
        if (self.check)(input) {
            ParseResult::Output(input.clone())
        } else {
            ParseResult::Issues(schema_issues(
                IssueKind::Custom,
                SchemaKind::Custom,
                self.message.as_deref().unwrap_or(INVALID_INPUT),
                input,
                None,
            ))
        }
    }
}

/// Creates a schema from a synchronous predicate.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{custom, is_valid};
///
/// let even = custom(|value| value.as_i64().is_some_and(|n| n % 2 == 0));
/// assert!(is_valid(&even, &json!(4)));
/// assert!(!is_valid(&even, &json!(3)));
/// ```
pub fn custom(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> CustomSchema {
    CustomSchema {
        check: Arc::new(check),
        message: None,
    }
}

/// Schema accepting whatever an async predicate accepts.
#[derive(Clone)]
pub struct AsyncCustomSchema {
    check: Arc<AsyncCheckFn>,
    message: Option<String>,
}

impl AsyncCustomSchema {
    /// Overrides the rejection message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Debug for AsyncCustomSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncCustomSchema")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Schema for AsyncCustomSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Custom
    }

    fn is_async(&self) -> bool {
        true
    }

    /// # Panics
    ///
    /// Always panics; async-native schemas must be parsed through
    /// [`Schema::parse_async`].
    fn parse(&self, _input: &Value, _ctx: &ParseContext) -> ParseResult {
        panic!("custom_async schemas cannot be parsed synchronously; use parse_async");
    }

    fn parse_async<'a>(&'a self, input: &'a Value, _ctx: &'a ParseContext) -> ParseFuture<'a> {
        Box::pin(async move {
            if (self.check)(input.clone()).await {
                ParseResult::Output(input.clone())
            } else {
                ParseResult::Issues(schema_issues(
                    IssueKind::Custom,
                    SchemaKind::Custom,
                    self.message.as_deref().unwrap_or(INVALID_INPUT),
                    input,
                    None,
                ))
            }
        })
    }
}

/// Creates a schema from an async predicate. The predicate returns a
/// boxed future so non-capturing and capturing closures both fit.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_core::{ParseContext, Schema};
/// use value_schema_validators::custom_async;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let reserved = custom_async(|value| {
///     Box::pin(async move { value.as_str() != Some("admin") })
/// });
/// let ctx = ParseContext::new();
/// assert!(reserved.parse_async(&json!("ada"), &ctx).await.is_ok());
/// assert!(!reserved.parse_async(&json!("admin"), &ctx).await.is_ok());
/// # });
/// ```
pub fn custom_async(
    check: impl Fn(Value) -> Pin<Box<dyn Future<Output = bool> + Send>> + Send + Sync + 'static,
) -> AsyncCustomSchema {
    AsyncCustomSchema {
        check: Arc::new(check),
        message: None,
    }
}
