//! Intersection schema.

use serde_json::Value;
use tracing::debug;

use value_schema_core::{
    INVALID_TYPE, IssueKind, Issues, ParseContext, ParseFuture, ParseResult, Schema, SchemaKind,
    SchemaRef, flatten_nested, schema_issues,
};

fn intersection_issue(message: Option<&str>, input: &Value, nested: Issues) -> ParseResult {
    ParseResult::Issues(schema_issues(
        IssueKind::Type,
        SchemaKind::Intersection,
        message.unwrap_or(INVALID_TYPE),
        input,
        Some(flatten_nested(nested)),
    ))
}

/// Left-to-right reduction of the per-child outputs.
///
/// An incoming object spreads its keys over the accumulator, later keys
/// winning; any other incoming value replaces the accumulator outright.
/// The spread is one level deep.
fn merge_outputs(outputs: Vec<Value>) -> Value {
    outputs.into_iter().reduce(merge_pair).unwrap_or(Value::Null)
}

fn merge_pair(acc: Value, incoming: Value) -> Value {
    match incoming {
        Value::Object(entries) => {
            let mut merged = match acc {
                Value::Object(existing) => existing,
                _ => serde_json::Map::new(),
            };
            merged.extend(entries);
            Value::Object(merged)
        }
        other => other,
    }
}

/// Schema requiring input to satisfy every one of its children.
///
/// Children all parse the same original input in declaration order. The
/// first failure short-circuits: its issues are flattened until no
/// nested detail remains, then wrapped in a single intersection issue.
/// When every child accepts, the per-child outputs are merged with
/// [`merge_outputs`] semantics.
#[derive(Debug, Clone)]
pub struct IntersectionSchema {
    options: Vec<SchemaRef>,
    message: Option<String>,
}

impl IntersectionSchema {
    /// Overrides the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Schema for IntersectionSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Intersection
    }

    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
        let mut outputs = Vec::with_capacity(self.options.len());
        for option in &self.options {
            match option.parse(input, ctx) {
                ParseResult::Output(output) => outputs.push(output),
                ParseResult::Issues(nested) => {
                    debug!(
                        option = %option.kind(),
                        "Intersection short-circuited on failing child"
                    );
                    return intersection_issue(self.message.as_deref(), input, nested);
                }
            }
        }
        ParseResult::Output(merge_outputs(outputs))
    }
}

/// Creates an intersection schema over two or more children.
///
/// # Panics
///
/// Panics when fewer than two children are supplied or when any child is
/// async-native; async children belong in [`intersection_async`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{intersection, number, object, parse, string};
/// use value_schema_core::IntoSchemaRef;
///
/// let named = object(vec![("name", string().into_ref())]);
/// let aged = object(vec![("age", number().into_ref())]);
/// let person = intersection(vec![named.into_ref(), aged.into_ref()]);
///
/// let input = json!({"name": "Ada", "age": 36});
/// assert_eq!(parse(&person, &input).unwrap(), input);
/// ```
pub fn intersection(options: Vec<SchemaRef>) -> IntersectionSchema {
    assert!(
        options.len() >= 2,
        "intersection requires at least two child schemas"
    );
    assert!(
        options.iter().all(|option| !option.is_async()),
        "intersection children must be synchronous; use intersection_async"
    );
    IntersectionSchema {
        options,
        message: None,
    }
}

/// Async-native intersection over two or more children.
///
/// Children are awaited strictly in declaration order, each against the
/// original input; synchronous children participate through their ready
/// futures. Failure and merge behavior match [`IntersectionSchema`].
#[derive(Debug, Clone)]
pub struct AsyncIntersectionSchema {
    options: Vec<SchemaRef>,
    message: Option<String>,
}

impl AsyncIntersectionSchema {
    /// Overrides the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Schema for AsyncIntersectionSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Intersection
    }

    fn is_async(&self) -> bool {
        true
    }

    /// # Panics
    ///
    /// Always panics; async-native schemas must be parsed through
    /// [`Schema::parse_async`].
    fn parse(&self, _input: &Value, _ctx: &ParseContext) -> ParseResult {
        panic!("intersection_async schemas cannot be parsed synchronously; use parse_async");
    }

    fn parse_async<'a>(&'a self, input: &'a Value, ctx: &'a ParseContext) -> ParseFuture<'a> {
        Box::pin(async move {
            let mut outputs = Vec::with_capacity(self.options.len());
            for option in &self.options {
                match option.parse_async(input, ctx).await {
                    ParseResult::Output(output) => outputs.push(output),
                    ParseResult::Issues(nested) => {
                        debug!(
                            option = %option.kind(),
                            "Intersection short-circuited on failing child"
                        );
                        return intersection_issue(self.message.as_deref(), input, nested);
                    }
                }
            }
            ParseResult::Output(merge_outputs(outputs))
        })
    }
}

/// Creates an async-native intersection schema. Children may be any mix
/// of synchronous and async-native schemas.
///
/// # Panics
///
/// Panics when fewer than two children are supplied.
pub fn intersection_async(options: Vec<SchemaRef>) -> AsyncIntersectionSchema {
    assert!(
        options.len() >= 2,
        "intersection requires at least two child schemas"
    );
    AsyncIntersectionSchema {
        options,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use value_schema_core::IntoSchemaRef;

    use super::*;
    use crate::actions::transform;
    use crate::schemas::{custom, number, object, object_with, string};

    fn named() -> SchemaRef {
        object(vec![("name", string().into_ref())]).into_ref()
    }

    fn aged() -> SchemaRef {
        object(vec![("age", number().into_ref())]).into_ref()
    }

    #[test]
    fn test_object_outputs_merge() {
        let schema = intersection(vec![named(), aged()]);
        let result = schema.parse(&json!({"name": "Ada", "age": 36}), &ParseContext::new());
        assert_eq!(
            result.into_output().unwrap(),
            json!({"name": "Ada", "age": 36})
        );
    }

    #[test]
    fn test_non_object_output_replaces_the_accumulator() {
        let echo = custom(|_| true).into_ref();
        // Accepts the object, then transforms it to a plain number.
        let to_size = object_with(
            vec![("x", number().into_ref())],
            vec![transform("size", |value| {
                json!(value.as_object().map_or(0, |map| map.len()))
            })],
        )
        .into_ref();

        let replaced = intersection(vec![echo.clone(), to_size.clone()]);
        let result = replaced.parse(&json!({"x": 1}), &ParseContext::new());
        assert_eq!(result.into_output().unwrap(), json!(1));

        let restored = intersection(vec![to_size, echo]);
        let result = restored.parse(&json!({"x": 1}), &ParseContext::new());
        assert_eq!(result.into_output().unwrap(), json!({"x": 1}));
    }

    #[test]
    fn test_merge_mixes_objects_across_non_object_interruptions() {
        assert_eq!(
            merge_outputs(vec![json!(5), json!({"a": 1}), json!({"b": 2})]),
            json!({"a": 1, "b": 2})
        );
        assert_eq!(
            merge_outputs(vec![json!({"a": 1}), json!(5), json!({"b": 2})]),
            json!({"b": 2})
        );
    }

    #[test]
    fn test_shared_keys_take_the_later_value() {
        assert_eq!(
            merge_outputs(vec![json!({"a": 1}), json!({"a": 2, "b": 3})]),
            json!({"a": 2, "b": 3})
        );
        assert_eq!(
            merge_outputs(vec![json!({"a": 2, "b": 3}), json!({"a": 1})]),
            json!({"a": 1, "b": 3})
        );
    }

    #[test]
    fn test_arrays_replace_rather_than_merge() {
        assert_eq!(merge_outputs(vec![json!([1, 2]), json!([3])]), json!([3]));
        assert_eq!(merge_outputs(vec![json!({"a": 1}), json!(null)]), json!(null));
    }

    #[test]
    fn test_first_failing_child_short_circuits() {
        let schema = intersection(vec![
            string().into_ref(),
            custom(|_| panic!("must not be reached")).into_ref(),
        ]);
        let result = schema.parse(&json!(42), &ParseContext::new());
        let issues = result.into_issues().unwrap();
        assert_eq!(issues.first().unwrap().schema, SchemaKind::Intersection);
    }

    #[test]
    fn test_failure_wraps_flattened_child_issues() {
        let schema = intersection(vec![named(), aged()]);
        let result = schema.parse(&json!({"name": 1, "age": 36}), &ParseContext::new());
        let issues = result.into_issues().unwrap();
        assert_eq!(issues.len(), 1);

        let wrapper = issues.first().unwrap();
        assert!(wrapper.path.is_empty());
        let nested = wrapper.issues.as_ref().unwrap();
        assert_eq!(nested.len(), 1);
        assert_eq!(nested.as_slice()[0].path_string(), "name");
        assert_eq!(nested.as_slice()[0].schema, SchemaKind::String);
    }

    #[tokio::test]
    async fn test_async_intersection_merges_like_the_sync_one() {
        let schema = intersection_async(vec![named(), aged()]);
        let input = json!({"name": "Ada", "age": 36});
        let result = schema.parse_async(&input, &ParseContext::new()).await;
        assert_eq!(result.into_output().unwrap(), input);
    }

    #[test]
    #[should_panic(expected = "parse_async")]
    fn test_sync_parse_of_async_intersection_panics() {
        let schema = intersection_async(vec![named(), aged()]);
        schema.parse(&json!({}), &ParseContext::new());
    }
}
