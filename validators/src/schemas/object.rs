//! Object schema.

use serde_json::{Map, Value};

use value_schema_core::{
    DefaultArgs, INVALID_TYPE, Issue, IssueKind, Issues, ParseContext, ParseResult, PathSegment,
    Pipe, Schema, SchemaKind, SchemaRef, execute_pipe, prefix_issues, schema_issues,
};

/// Schema accepting JSON objects with a fixed set of named entries.
///
/// Entries are checked in declaration order. Missing keys parse as null,
/// so wrapping an entry in `optional` makes it omittable. Keys not named
/// in the entry list are stripped from the output.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    entries: Vec<(String, SchemaRef)>,
    message: Option<String>,
    pipe: Option<Pipe>,
}

impl ObjectSchema {
    /// Overrides the type-mismatch message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches a validation pipe run after all entries pass.
    pub fn with_pipe(mut self, pipe: Pipe) -> Self {
        self.pipe = Some(pipe);
        self
    }
}

impl Schema for ObjectSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Object
    }

    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
        let Value::Object(map) = input else {
            return ParseResult::Issues(schema_issues(
                IssueKind::Type,
                SchemaKind::Object,
                self.message.as_deref().unwrap_or(INVALID_TYPE),
                input,
                None,
            ));
        };

        let mut output = Map::with_capacity(self.entries.len());
        let mut issues: Vec<Issue> = Vec::new();
        for (key, schema) in &self.entries {
            let present = map.contains_key(key);
            let value = map.get(key).unwrap_or(&Value::Null);
            match schema.parse(value, ctx) {
                ParseResult::Output(parsed) => {
                    // An absent key that parsed to null stays absent; an
                    // explicit null is kept.
                    if present || !parsed.is_null() {
                        output.insert(key.clone(), parsed);
                    }
                }
                ParseResult::Issues(nested) => {
                    issues.extend(prefix_issues(nested, &PathSegment::Key(key.clone())));
                    if ctx.abort_early {
                        break;
                    }
                }
            }
        }

        if !issues.is_empty() {
            return ParseResult::Issues(Issues::from_vec(issues));
        }
        execute_pipe(
            Value::Object(output),
            self.pipe.as_ref(),
            ctx,
            IssueKind::Object,
            SchemaKind::Object,
        )
    }
}

/// Creates an object schema from `(key, schema)` entries.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{is_valid, number, object, string};
/// use value_schema_core::IntoSchemaRef;
///
/// let point = object(vec![
///     ("x", number().into_ref()),
///     ("y", number().into_ref()),
/// ]);
/// assert!(is_valid(&point, &json!({"x": 1, "y": 2})));
/// assert!(!is_valid(&point, &json!({"x": 1})));
/// ```
pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, SchemaRef)>) -> ObjectSchema {
    let entries: Vec<(String, SchemaRef)> = entries
        .into_iter()
        .map(|(key, schema)| (key.into(), schema))
        .collect();
    assert!(
        entries.iter().all(|(_, schema)| !schema.is_async()),
        "object entries must be synchronous schemas"
    );
    ObjectSchema {
        entries,
        message: None,
        pipe: None,
    }
}

/// Creates an object schema with trailing arguments: an error message, a
/// pipe, or both.
pub fn object_with<K: Into<String>>(
    entries: impl IntoIterator<Item = (K, SchemaRef)>,
    args: impl Into<DefaultArgs>,
) -> ObjectSchema {
    let DefaultArgs { message, pipe } = args.into();
    let mut schema = object(entries);
    schema.message = message;
    schema.pipe = pipe;
    schema
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use value_schema_core::IntoSchemaRef;

    use super::*;
    use crate::schemas::{number, optional, string};

    fn point() -> ObjectSchema {
        object(vec![("x", number().into_ref()), ("y", number().into_ref())])
    }

    #[test]
    fn test_collects_issues_for_every_failing_entry() {
        let result = point().parse(&json!({"x": "a", "y": "b"}), &ParseContext::new());
        let issues = result.into_issues().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues.as_slice()[0].path_string(), "x");
        assert_eq!(issues.as_slice()[1].path_string(), "y");
    }

    #[test]
    fn test_abort_early_stops_at_the_first_failing_entry() {
        let ctx = ParseContext::new().with_abort_early();
        let result = point().parse(&json!({"x": "a", "y": "b"}), &ctx);
        assert_eq!(result.into_issues().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_keys_are_stripped_from_the_output() {
        let result = point().parse(&json!({"x": 1, "y": 2, "z": 3}), &ParseContext::new());
        assert_eq!(result.into_output().unwrap(), json!({"x": 1, "y": 2}));
    }

    #[test]
    fn test_missing_optional_entry_stays_absent_but_explicit_null_is_kept() {
        let schema = object(vec![
            ("name", string().into_ref()),
            ("nickname", optional(string().into_ref()).into_ref()),
        ]);
        let ctx = ParseContext::new();

        let absent = schema.parse(&json!({"name": "Ada"}), &ctx);
        assert_eq!(absent.into_output().unwrap(), json!({"name": "Ada"}));

        let explicit = schema.parse(&json!({"name": "Ada", "nickname": null}), &ctx);
        assert_eq!(
            explicit.into_output().unwrap(),
            json!({"name": "Ada", "nickname": null})
        );
    }

    #[test]
    fn test_non_object_input_fails_the_type_check() {
        let result = point().parse(&json!([1, 2]), &ParseContext::new());
        let issues = result.into_issues().unwrap();
        assert_eq!(issues.first().unwrap().schema, SchemaKind::Object);
        assert_eq!(issues.first().unwrap().message, INVALID_TYPE);
    }
}
