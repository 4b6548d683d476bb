//! Union schema.

use serde_json::Value;
use tracing::trace;

use value_schema_core::{
    INVALID_TYPE, Issue, IssueKind, Issues, ParseContext, ParseFuture, ParseResult, Schema,
    SchemaKind, SchemaRef, schema_issues,
};

fn union_issue(message: Option<&str>, input: &Value, collected: Vec<Issue>) -> ParseResult {
    ParseResult::Issues(schema_issues(
        IssueKind::Type,
        SchemaKind::Union,
        message.unwrap_or(INVALID_TYPE),
        input,
        Some(Issues::from_vec(collected)),
    ))
}

/// Schema accepting input that matches at least one of its options.
///
/// Options are tried in declaration order and the first success wins.
/// When every option rejects, the failure is a single union issue whose
/// nested issues aggregate each option's complaints in order.
#[derive(Debug, Clone)]
pub struct UnionSchema {
    options: Vec<SchemaRef>,
    message: Option<String>,
}

impl UnionSchema {
    /// Overrides the no-option-matched message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Schema for UnionSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Union
    }

    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
        let mut collected: Vec<Issue> = Vec::new();
        for option in &self.options {
            match option.parse(input, ctx) {
                ParseResult::Output(output) => return ParseResult::Output(output),
                ParseResult::Issues(nested) => {
                    trace!(option = %option.kind(), "Union option rejected input");
                    collected.extend(nested);
                }
            }
        }
        union_issue(self.message.as_deref(), input, collected)
    }
}

/// Creates a union schema over two or more options.
///
/// # Panics
///
/// Panics when fewer than two options are supplied or when any option is
/// async-native; async options belong in [`union_async`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{is_valid, number, string, union};
/// use value_schema_core::IntoSchemaRef;
///
/// let id = union(vec![string().into_ref(), number().into_ref()]);
/// assert!(is_valid(&id, &json!("abc")));
/// assert!(is_valid(&id, &json!(123)));
/// assert!(!is_valid(&id, &json!(true)));
/// ```
pub fn union(options: Vec<SchemaRef>) -> UnionSchema {
    assert!(
        options.len() >= 2,
        "union requires at least two option schemas"
    );
    assert!(
        options.iter().all(|option| !option.is_async()),
        "union options must be synchronous; use union_async"
    );
    UnionSchema {
        options,
        message: None,
    }
}

/// Async-native union over two or more options.
///
/// Options are awaited strictly in declaration order; synchronous
/// options participate through their ready futures.
#[derive(Debug, Clone)]
pub struct AsyncUnionSchema {
    options: Vec<SchemaRef>,
    message: Option<String>,
}

impl AsyncUnionSchema {
    /// Overrides the no-option-matched message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Schema for AsyncUnionSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Union
    }

    fn is_async(&self) -> bool {
        true
    }

    /// # Panics
    ///
    /// Always panics; async-native schemas must be parsed through
    /// [`Schema::parse_async`].
    fn parse(&self, _input: &Value, _ctx: &ParseContext) -> ParseResult {
        panic!("union_async schemas cannot be parsed synchronously; use parse_async");
    }

    fn parse_async<'a>(&'a self, input: &'a Value, ctx: &'a ParseContext) -> ParseFuture<'a> {
        Box::pin(async move {
            let mut collected: Vec<Issue> = Vec::new();
            for option in &self.options {
                match option.parse_async(input, ctx).await {
                    ParseResult::Output(output) => return ParseResult::Output(output),
                    ParseResult::Issues(nested) => {
                        trace!(option = %option.kind(), "Union option rejected input");
                        collected.extend(nested);
                    }
                }
            }
            union_issue(self.message.as_deref(), input, collected)
        })
    }
}

/// Creates an async-native union schema. Options may be any mix of
/// synchronous and async-native schemas.
///
/// # Panics
///
/// Panics when fewer than two options are supplied.
pub fn union_async(options: Vec<SchemaRef>) -> AsyncUnionSchema {
    assert!(
        options.len() >= 2,
        "union requires at least two option schemas"
    );
    AsyncUnionSchema {
        options,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use value_schema_core::IntoSchemaRef;

    use super::*;
    use crate::schemas::{custom, literal, number, string};

    #[test]
    fn test_first_matching_option_wins() {
        let schema = union(vec![literal("auto").into_ref(), string().into_ref()]);
        let result = schema.parse(&json!("auto"), &ParseContext::new());
        assert_eq!(result.into_output().unwrap(), json!("auto"));
    }

    #[test]
    fn test_failure_aggregates_every_option_issue_in_order() {
        let schema = union(vec![string().into_ref(), number().into_ref()]);
        let result = schema.parse(&json!(true), &ParseContext::new());
        let issues = result.into_issues().unwrap();
        assert_eq!(issues.len(), 1);

        let wrapper = issues.first().unwrap();
        assert_eq!(wrapper.schema, SchemaKind::Union);
        let nested = wrapper.issues.as_ref().unwrap();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested.as_slice()[0].schema, SchemaKind::String);
        assert_eq!(nested.as_slice()[1].schema, SchemaKind::Number);
    }

    #[test]
    fn test_later_options_are_not_tried_after_a_match() {
        let schema = union(vec![
            number().into_ref(),
            custom(|_| panic!("must not be reached")).into_ref(),
        ]);
        assert!(schema.parse(&json!(5), &ParseContext::new()).is_ok());
    }

    #[test]
    #[should_panic(expected = "at least two")]
    fn test_single_option_union_is_rejected() {
        union(vec![string().into_ref()]);
    }

    #[tokio::test]
    async fn test_async_union_mixes_sync_and_async_options() {
        let schema = union_async(vec![
            crate::schemas::custom_async(|value| {
                Box::pin(async move { value.as_str().is_some_and(|s| s.len() > 3) })
            })
            .into_ref(),
            number().into_ref(),
        ]);
        let ctx = ParseContext::new();
        assert!(schema.parse_async(&json!("long enough"), &ctx).await.is_ok());
        assert!(schema.parse_async(&json!(7), &ctx).await.is_ok());
        assert!(!schema.parse_async(&json!("ab"), &ctx).await.is_ok());
    }
}
