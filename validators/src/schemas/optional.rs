//! Optional schema.

use serde_json::Value;

use value_schema_core::{ParseContext, ParseResult, Schema, SchemaKind, SchemaRef};

/// Schema that lets null pass through and otherwise defers to the
/// wrapped schema.
///
/// Inside an object this absorbs missing entries, since absent keys
/// parse as null.
#[derive(Debug, Clone)]
pub struct OptionalSchema {
    wrapped: SchemaRef,
}

impl Schema for OptionalSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Optional
    }

    fn parse(&self, input: &Value, ctx: &ParseContext) -> ParseResult {
        if input.is_null() {
            return ParseResult::Output(Value::Null);
        }
        self.wrapped.parse(input, ctx)
    }
}

/// Wraps a schema so that null input is accepted as-is.
///
/// # Panics
///
/// Panics if the wrapped schema is async-native.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{is_valid, optional, string};
/// use value_schema_core::IntoSchemaRef;
///
/// let nickname = optional(string().into_ref());
/// assert!(is_valid(&nickname, &json!("Ada")));
/// assert!(is_valid(&nickname, &json!(null)));
/// assert!(!is_valid(&nickname, &json!(42)));
/// ```
pub fn optional(wrapped: SchemaRef) -> OptionalSchema {
    assert!(
        !wrapped.is_async(),
        "optional cannot wrap an async-native schema"
    );
    OptionalSchema { wrapped }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use value_schema_core::IntoSchemaRef;

    use super::*;
    use crate::schemas::number;

    #[test]
    fn test_null_short_circuits_the_wrapped_schema() {
        let schema = optional(number().into_ref());
        let ctx = ParseContext::new();
        assert_eq!(
            schema.parse(&json!(null), &ctx).into_output(),
            Some(Value::Null)
        );
        assert!(schema.parse(&json!(9), &ctx).is_ok());
        assert!(!schema.parse(&json!("9"), &ctx).is_ok());
    }

    #[test]
    fn test_wrapped_issues_surface_unchanged() {
        let schema = optional(number().into_ref());
        let result = schema.parse(&json!("nope"), &ParseContext::new());
        let issues = result.as_issues().unwrap();
        assert_eq!(issues.first().unwrap().schema, SchemaKind::Number);
    }
}
