//! Boolean schema.

use serde_json::Value;

use value_schema_core::{
    DefaultArgs, INVALID_TYPE, IssueKind, ParseContext, ParseResult, Pipe, Schema, SchemaKind,
    execute_pipe, schema_issues,
};

/// Schema accepting JSON booleans.
#[derive(Debug, Clone, Default)]
pub struct BooleanSchema {
    message: Option<String>,
    pipe: Option<Pipe>,
}

impl BooleanSchema {
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

impl Schema for BooleanSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Boolean
    }

    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
        if !input.is_boolean() {
            return ParseResult::Issues(schema_issues(
                IssueKind::Type,
                SchemaKind::Boolean,
                self.message.as_deref().unwrap_or(INVALID_TYPE),
                input,
                None,
            ));
        }
        execute_pipe(
            input.clone(),
            self.pipe.as_ref(),
            ctx,
            IssueKind::Boolean,
            SchemaKind::Boolean,
        )
    }
}

/// Creates a boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema::default()
}

/// Creates a boolean schema from trailing arguments: an error message, a
/// pipe, or both.
pub fn boolean_with(args: impl Into<DefaultArgs>) -> BooleanSchema {
    let DefaultArgs { message, pipe } = args.into();
    BooleanSchema { message, pipe }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_accepts_both_truth_values_only() {
        let schema = boolean();
        let ctx = ParseContext::new();
        assert!(schema.parse(&json!(true), &ctx).is_ok());
        assert!(schema.parse(&json!(false), &ctx).is_ok());
        assert!(!schema.parse(&json!(0), &ctx).is_ok());
        assert!(!schema.parse(&json!("true"), &ctx).is_ok());
    }
}
