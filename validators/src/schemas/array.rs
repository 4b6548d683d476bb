//! Array schema.

use serde_json::Value;

use value_schema_core::{
    DefaultArgs, INVALID_TYPE, Issue, IssueKind, Issues, ParseContext, ParseResult, PathSegment,
    Pipe, Schema, SchemaKind, SchemaRef, execute_pipe, prefix_issues, schema_issues,
};

/// Schema accepting JSON arrays whose elements all match one item
/// schema.
#[derive(Debug, Clone)]
pub struct ArraySchema {
    item: SchemaRef,
    message: Option<String>,
    pipe: Option<Pipe>,
}

impl ArraySchema {
    /// Overrides the type-mismatch message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches a validation pipe run after all elements pass.
    pub fn with_pipe(mut self, pipe: Pipe) -> Self {
        self.pipe = Some(pipe);
        self
    }
}

impl Schema for ArraySchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Array
    }

    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
        let Value::Array(values) = input else {
            return ParseResult::Issues(schema_issues(
                IssueKind::Type,
                SchemaKind::Array,
                self.message.as_deref().unwrap_or(INVALID_TYPE),
                input,
                None,
            ));
        };

        let mut output = Vec::with_capacity(values.len());
        let mut issues: Vec<Issue> = Vec::new();
        for (index, value) in values.iter().enumerate() {
            match self.item.parse(value, ctx) {
                ParseResult::Output(parsed) => output.push(parsed),
                ParseResult::Issues(nested) => {
                    issues.extend(prefix_issues(nested, &PathSegment::Index(index)));
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
            Value::Array(output),
            self.pipe.as_ref(),
            ctx,
            IssueKind::Array,
            SchemaKind::Array,
        )
    }
}

/// Creates an array schema with one item schema for every element.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{array, is_valid, number};
/// use value_schema_core::IntoSchemaRef;
///
/// let scores = array(number().into_ref());
/// assert!(is_valid(&scores, &json!([1, 2, 3])));
/// assert!(!is_valid(&scores, &json!([1, "2", 3])));
/// ```
pub fn array(item: SchemaRef) -> ArraySchema {
    assert!(!item.is_async(), "array items must be synchronous schemas");
    ArraySchema {
        item,
        message: None,
        pipe: None,
    }
}

/// Creates an array schema with trailing arguments: an error message, a
/// pipe, or both.
pub fn array_with(item: SchemaRef, args: impl Into<DefaultArgs>) -> ArraySchema {
    let DefaultArgs { message, pipe } = args.into();
    let mut schema = array(item);
    schema.message = message;
    schema.pipe = pipe;
    schema
}
