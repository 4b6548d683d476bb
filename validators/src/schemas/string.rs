//! String schema.

use serde_json::Value;

use value_schema_core::{
    DefaultArgs, INVALID_TYPE, IssueKind, ParseContext, ParseResult, Pipe, Schema, SchemaKind,
    execute_pipe, schema_issues,
};

/// Schema accepting JSON string values.
///
/// Created by [`string`] or [`string_with`].
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    message: Option<String>,
    pipe: Option<Pipe>,
}

impl StringSchema {
    /// Overrides the type-mismatch message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches a validation pipe run after the type check.
    pub fn with_pipe(mut self, pipe: Pipe) -> Self {
        self.pipe = Some(pipe);
        self
    }
}

impl Schema for StringSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::String
    }

    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
        if !input.is_string() {
            return ParseResult::Issues(schema_issues(
                IssueKind::Type,
                SchemaKind::String,
                self.message.as_deref().unwrap_or(INVALID_TYPE),
                input,
                None,
            ));
        }
        execute_pipe(
            input.clone(),
            self.pipe.as_ref(),
            ctx,
            IssueKind::String,
            SchemaKind::String,
        )
    }
}

/// Creates a string schema.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{parse, string};
///
/// assert_eq!(parse(&string(), &json!("hello")).unwrap(), json!("hello"));
/// assert!(parse(&string(), &json!(42)).is_err());
/// ```
pub fn string() -> StringSchema {
    StringSchema::default()
}

/// Creates a string schema from trailing arguments: an error message, a
/// pipe, or both.
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{is_valid, min_length, string_with};
///
/// let username = string_with(("Username is required", vec![min_length(3)]));
/// assert!(is_valid(&username, &json!("ada")));
/// assert!(!is_valid(&username, &json!("ab")));
/// ```
pub fn string_with(args: impl Into<DefaultArgs>) -> StringSchema {
    let DefaultArgs { message, pipe } = args.into();
    StringSchema { message, pipe }
}
