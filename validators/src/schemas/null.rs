//! Null schema.

use serde_json::Value;

use value_schema_core::{
    INVALID_TYPE, IssueKind, ParseContext, ParseResult, Schema, SchemaKind, schema_issues,
};

/// Schema accepting only JSON null.
#[derive(Debug, Clone, Default)]
pub struct NullSchema {
    message: Option<String>,
}

impl NullSchema {
    /// Overrides the type-mismatch message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Schema for NullSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Null
    }

    fn parse(&self, input: &Value, _ctx: &ParseContext) -> ParseResult {
        if input.is_null() {
            ParseResult::Output(Value::Null)
        } else {
            ParseResult::Issues(schema_issues(
                IssueKind::Type,
                SchemaKind::Null,
                self.message.as_deref().unwrap_or(INVALID_TYPE),
                input,
                None,
            ))
        }
    }
}

/// Creates a null schema.
pub fn null() -> NullSchema {
    NullSchema::default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_accepts_null_only() {
        let schema = null();
        let ctx = ParseContext::new();
        assert!(schema.parse(&json!(null), &ctx).is_ok());
        assert!(!schema.parse(&json!(0), &ctx).is_ok());
        assert!(!schema.parse(&json!(""), &ctx).is_ok());
        assert!(!schema.parse(&json!(false), &ctx).is_ok());
    }
}
