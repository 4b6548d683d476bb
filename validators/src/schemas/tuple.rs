//! Tuple schema.

use serde_json::Value;

use value_schema_core::{
    INVALID_TYPE, Issue, IssueKind, Issues, ParseContext, ParseResult, PathSegment, Pipe, Schema,
    SchemaKind, SchemaRef, TupleArgs, execute_pipe, prefix_issues, schema_issues,
};

/// Schema accepting JSON arrays with a fixed schema per position.
///
/// Without a rest schema the input length must match the item count
/// exactly. With one, extra elements are each checked against the rest
/// schema.
#[derive(Debug, Clone)]
pub struct TupleSchema {
    items: Vec<SchemaRef>,
    rest: Option<SchemaRef>,
    message: Option<String>,
    pipe: Option<Pipe>,
}

impl TupleSchema {
    /// Overrides the type-mismatch message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches a validation pipe run after all positions pass.
    pub fn with_pipe(mut self, pipe: Pipe) -> Self {
        self.pipe = Some(pipe);
        self
    }

    fn type_issue(&self, input: &Value) -> ParseResult {
        ParseResult::Issues(schema_issues(
            IssueKind::Type,
            SchemaKind::Tuple,
            self.message.as_deref().unwrap_or(INVALID_TYPE),
            input,
            None,
        ))
    }
}

impl Schema for TupleSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Tuple
    }

    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
        let Value::Array(values) = input else {
            return self.type_issue(input);
        };
        let length_ok = match self.rest {
            Some(_) => values.len() >= self.items.len(),
            None => values.len() == self.items.len(),
        };
        if !length_ok {
            return self.type_issue(input);
        }

        let mut output = Vec::with_capacity(values.len());
        let mut issues: Vec<Issue> = Vec::new();
        for (index, (value, schema)) in values.iter().zip(&self.items).enumerate() {
            match schema.parse(value, ctx) {
                ParseResult::Output(parsed) => output.push(parsed),
                ParseResult::Issues(nested) => {
                    issues.extend(prefix_issues(nested, &PathSegment::Index(index)));
                    if ctx.abort_early {
                        return ParseResult::Issues(Issues::from_vec(issues));
                    }
                }
            }
        }
        if let Some(rest) = &self.rest {
            for (offset, value) in values[self.items.len()..].iter().enumerate() {
                let index = self.items.len() + offset;
                match rest.parse(value, ctx) {
                    ParseResult::Output(parsed) => output.push(parsed),
                    ParseResult::Issues(nested) => {
                        issues.extend(prefix_issues(nested, &PathSegment::Index(index)));
                        if ctx.abort_early {
                            return ParseResult::Issues(Issues::from_vec(issues));
                        }
                    }
                }
            }
        }

        if !issues.is_empty() {
            return ParseResult::Issues(Issues::from_vec(issues));
        }
        execute_pipe(
            Value::Array(output),
            self.pipe.as_ref(),
            ctx,
            IssueKind::Array,
            SchemaKind::Tuple,
        )
    }
}

/// Creates a tuple schema with one schema per position.
///
/// # Panics
///
/// Panics if `items` is empty or any schema is async-native.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{is_valid, number, string, tuple};
/// use value_schema_core::IntoSchemaRef;
///
/// let pair = tuple(vec![string().into_ref(), number().into_ref()]);
/// assert!(is_valid(&pair, &json!(["x", 1])));
/// assert!(!is_valid(&pair, &json!(["x", 1, 2])));
/// ```
pub fn tuple(items: Vec<SchemaRef>) -> TupleSchema {
    assert!(!items.is_empty(), "tuple requires at least one item schema");
    assert!(
        items.iter().all(|item| !item.is_async()),
        "tuple items must be synchronous schemas"
    );
    TupleSchema {
        items,
        rest: None,
        message: None,
        pipe: None,
    }
}

/// Creates a tuple schema with trailing arguments: a rest schema, an
/// error message, a pipe, or combinations of them.
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{is_valid, number, string, tuple_with};
/// use value_schema_core::IntoSchemaRef;
///
/// let row = tuple_with(vec![string().into_ref()], number().into_ref());
/// assert!(is_valid(&row, &json!(["label", 1, 2, 3])));
/// assert!(!is_valid(&row, &json!(["label", 1, "2"])));
/// ```
pub fn tuple_with(items: Vec<SchemaRef>, args: impl Into<TupleArgs>) -> TupleSchema {
    let TupleArgs { rest, message, pipe } = args.into();
    if let Some(rest) = &rest {
        assert!(!rest.is_async(), "tuple rest must be a synchronous schema");
    }
    let mut schema = tuple(items);
    schema.rest = rest;
    schema.message = message;
    schema.pipe = pipe;
    schema
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use value_schema_core::IntoSchemaRef;

    use super::*;
    use crate::schemas::{boolean, number, string};

    fn pair() -> TupleSchema {
        tuple(vec![string().into_ref(), number().into_ref()])
    }

    #[test]
    fn test_exact_length_without_rest() {
        let ctx = ParseContext::new();
        assert!(pair().parse(&json!(["a", 1]), &ctx).is_ok());
        assert!(!pair().parse(&json!(["a"]), &ctx).is_ok());
        assert!(!pair().parse(&json!(["a", 1, true]), &ctx).is_ok());
    }

    #[test]
    fn test_rest_schema_checks_every_extra_element() {
        let schema = tuple_with(vec![string().into_ref()], boolean().into_ref());
        let ctx = ParseContext::new();
        assert!(schema.parse(&json!(["go"]), &ctx).is_ok());
        assert!(schema.parse(&json!(["go", true, false]), &ctx).is_ok());

        let result = schema.parse(&json!(["go", true, 3]), &ctx);
        let issues = result.into_issues().unwrap();
        assert_eq!(issues.first().unwrap().path_string(), "[2]");
    }

    #[test]
    fn test_position_issues_carry_index_paths() {
        let result = pair().parse(&json!([1, "a"]), &ParseContext::new());
        let issues = result.into_issues().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues.as_slice()[0].path_string(), "[0]");
        assert_eq!(issues.as_slice()[1].path_string(), "[1]");
    }

    #[test]
    fn test_wrong_length_reports_a_tuple_type_issue() {
        let result = pair().parse(&json!(["only"]), &ParseContext::new());
        let issues = result.into_issues().unwrap();
        assert_eq!(issues.first().unwrap().schema, SchemaKind::Tuple);
        assert_eq!(issues.first().unwrap().kind, IssueKind::Type);
    }
}
