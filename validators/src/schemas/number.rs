//! Number schema.

use serde_json::Value;

use value_schema_core::{
    DefaultArgs, INVALID_TYPE, IssueKind, ParseContext, ParseResult, Pipe, Schema, SchemaKind,
    execute_pipe, schema_issues,
};

/// Schema accepting JSON numbers.
///
/// JSON numbers are finite by construction, so no separate NaN or
/// infinity check is needed.
#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    message: Option<String>,
    pipe: Option<Pipe>,
}

impl NumberSchema {
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

impl Schema for NumberSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Number
    }

    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
        if !input.is_number() {
            return ParseResult::Issues(schema_issues(
                IssueKind::Type,
                SchemaKind::Number,
                self.message.as_deref().unwrap_or(INVALID_TYPE),
                input,
                None,
            ));
        }
        execute_pipe(
            input.clone(),
            self.pipe.as_ref(),
            ctx,
            IssueKind::Number,
            SchemaKind::Number,
        )
    }
}

/// Creates a number schema.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{is_valid, number};
///
/// assert!(is_valid(&number(), &json!(3.25)));
/// assert!(!is_valid(&number(), &json!("3.25")));
/// ```
pub fn number() -> NumberSchema {
    NumberSchema::default()
}

/// Creates a number schema from trailing arguments: an error message, a
/// pipe, or both.
pub fn number_with(args: impl Into<DefaultArgs>) -> NumberSchema {
    let DefaultArgs { message, pipe } = args.into();
    NumberSchema { message, pipe }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::actions::{integer, min_value};

    #[test]
    fn test_accepts_integers_and_floats() {
        let schema = number();
        let ctx = ParseContext::new();
        assert!(schema.parse(&json!(0), &ctx).is_ok());
        assert!(schema.parse(&json!(-7), &ctx).is_ok());
        assert!(schema.parse(&json!(1.5), &ctx).is_ok());
        assert!(!schema.parse(&json!("1.5"), &ctx).is_ok());
        assert!(!schema.parse(&json!(null), &ctx).is_ok());
    }

    #[test]
    fn test_pipe_refinements_apply_in_order() {
        let schema = number_with(vec![min_value(0.0), integer()]);
        let ctx = ParseContext::new();
        assert!(schema.parse(&json!(3), &ctx).is_ok());
        assert!(!schema.parse(&json!(-1), &ctx).is_ok());
        assert!(!schema.parse(&json!(2.5), &ctx).is_ok());
    }
}
