//! Parse methods: the public entry points for running schemas.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use value_schema_core::{Issue, ParseContext, ParseError, ParseResult, Result, Schema};

/// Parses `input` against `schema` with default settings, turning
/// failure into a [`ParseError`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{parse, string};
///
/// assert_eq!(parse(&string(), &json!("ok")).unwrap(), json!("ok"));
///
/// let err = parse(&string(), &json!(1)).unwrap_err();
/// assert_eq!(err.to_string(), "validation failed (1 issue)\n  (root): Invalid type");
/// ```
pub fn parse(schema: &dyn Schema, input: &Value) -> Result<Value> {
    parse_with(schema, input, &ParseContext::new())
}

/// Parses `input` against `schema` under an explicit context.
pub fn parse_with(schema: &dyn Schema, input: &Value, ctx: &ParseContext) -> Result<Value> {
    match schema.parse(input, ctx) {
        ParseResult::Output(output) => Ok(output),
        ParseResult::Issues(issues) => {
            debug!(kind = %schema.kind(), issues = issues.len(), "Parse rejected input");
            Err(ParseError {
                issues,
                root_label: ctx.root_label.clone(),
            })
        }
    }
}

/// Async twin of [`parse`]. Works for every schema; async-native ones
/// require it.
pub async fn parse_async(schema: &dyn Schema, input: &Value) -> Result<Value> {
    parse_with_async(schema, input, &ParseContext::new()).await
}

/// Async twin of [`parse_with`].
pub async fn parse_with_async(
    schema: &dyn Schema,
    input: &Value,
    ctx: &ParseContext,
) -> Result<Value> {
    match schema.parse_async(input, ctx).await {
        ParseResult::Output(output) => Ok(output),
        ParseResult::Issues(issues) => {
            debug!(kind = %schema.kind(), issues = issues.len(), "Parse rejected input");
            Err(ParseError {
                issues,
                root_label: ctx.root_label.clone(),
            })
        }
    }
}

/// Parses without converting failure into an error, handing back the
/// raw [`ParseResult`].
pub fn safe_parse(schema: &dyn Schema, input: &Value) -> ParseResult {
    schema.parse(input, &ParseContext::new())
}

/// Async twin of [`safe_parse`].
pub async fn safe_parse_async(schema: &dyn Schema, input: &Value) -> ParseResult {
    schema.parse_async(input, &ParseContext::new()).await
}

/// Reports whether `input` satisfies `schema`, discarding output and
/// issues.
pub fn is_valid(schema: &dyn Schema, input: &Value) -> bool {
    safe_parse(schema, input).is_ok()
}

/// Issue messages bucketed by location, ready for rendering next to
/// form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlatErrors {
    /// Messages for issues at the parse root.
    pub root: Vec<String>,
    /// Messages keyed by dotted path, such as `items[2].name`.
    pub nested: BTreeMap<String, Vec<String>>,
}

impl FlatErrors {
    /// Total number of bucketed messages.
    pub fn len(&self) -> usize {
        self.root.len() + self.nested.values().map(Vec::len).sum::<usize>()
    }

    /// Reports whether no messages were recorded in either bucket.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flattens a parse error into per-path message lists.
///
/// Container issues such as a failed intersection contribute their leaf
/// issues rather than themselves; paths are absolute, so a leaf raised
/// deep inside a composite lands in the right bucket.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_core::IntoSchemaRef;
/// use value_schema_validators::{flatten, number, object, parse, string};
///
/// let schema = object(vec![
///     ("name", string().into_ref()),
///     ("age", number().into_ref()),
/// ]);
/// let err = parse(&schema, &json!({"name": 1, "age": "x"})).unwrap_err();
///
/// let flat = flatten(&err);
/// assert!(flat.root.is_empty());
/// assert_eq!(flat.nested["name"], vec!["Invalid type"]);
/// assert_eq!(flat.nested["age"], vec!["Invalid type"]);
/// ```
pub fn flatten(error: &ParseError) -> FlatErrors {
    let mut flat = FlatErrors::default();
    for issue in &error.issues {
        flatten_issue(issue, &mut flat);
    }
    flat
}

fn flatten_issue(issue: &Issue, flat: &mut FlatErrors) {
    if let Some(nested) = &issue.issues {
        for inner in nested {
            flatten_issue(inner, flat);
        }
        return;
    }
    if issue.path.is_empty() {
        flat.root.push(issue.message.clone());
    } else {
        flat.nested
            .entry(issue.path_string())
            .or_default()
            .push(issue.message.clone());
    }
}
