//! Literal schema.

use serde_json::Value;

use value_schema_core::{
    INVALID_TYPE, IssueKind, ParseContext, ParseResult, Schema, SchemaKind, schema_issues,
};

/// Schema accepting exactly one expected value.
#[derive(Debug, Clone)]
pub struct LiteralSchema {
    expected: Value,
    message: Option<String>,
}

impl LiteralSchema {
    /// Overrides the mismatch message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The value this schema accepts.
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Schema for LiteralSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Literal
    }

    fn parse(&self, input: &Value, _ctx: &ParseContext) -> ParseResult {
        if *input == self.expected {
            ParseResult::Output(input.clone())
        } else {
            ParseResult::Issues(schema_issues(
                IssueKind::Type,
                SchemaKind::Literal,
                self.message.as_deref().unwrap_or(INVALID_TYPE),
                input,
                None,
            ))
        }
    }
}

/// Creates a literal schema accepting only `expected`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{is_valid, literal};
///
/// let version = literal(2);
/// assert!(is_valid(&version, &json!(2)));
/// assert!(!is_valid(&version, &json!(3)));
/// assert!(!is_valid(&version, &json!("2")));
/// ```
pub fn literal(expected: impl Into<Value>) -> LiteralSchema {
    LiteralSchema {
        expected: expected.into(),
        message: None,
    }
}
