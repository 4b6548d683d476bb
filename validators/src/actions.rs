//! Pipe actions: refinements that inspect a value and transforms that
//! rewrite it.
//!
//! Every action receives the value produced by the previous pipe step.
//! Refinements hand the value back untouched or raise an issue;
//! transforms always succeed. An action that receives a value of the
//! wrong basic type raises an issue instead of panicking, since a pipe
//! may run after a transform changed the value's type.

use chrono::DateTime;
use regex::Regex;
use serde_json::Value;

use value_schema_core::{Action, ActionResult};

fn reject(message: impl Into<String>, input: Value) -> ActionResult {
    ActionResult::Issue {
        message: message.into(),
        input,
    }
}

/// Requires a string of at least `min` characters.
pub fn min_length(min: usize) -> Action {
    Action::new("min_length", move |value| match &value {
        Value::String(s) if s.chars().count() >= min => ActionResult::Output(value),
        _ => reject("Invalid length", value),
    })
}

/// Requires a string of at most `max` characters.
pub fn max_length(max: usize) -> Action {
    Action::new("max_length", move |value| match &value {
        Value::String(s) if s.chars().count() <= max => ActionResult::Output(value),
        _ => reject("Invalid length", value),
    })
}

/// Requires a string matching the given regular expression.
pub fn pattern(regex: Regex) -> Action {
    Action::new("pattern", move |value| match &value {
        Value::String(s) if regex.is_match(s) => ActionResult::Output(value),
        _ => reject("Invalid format", value),
    })
}

/// Requires a string holding an RFC 3339 timestamp.
pub fn rfc3339_timestamp() -> Action {
    Action::new("rfc3339_timestamp", |value| match &value {
        Value::String(s) if DateTime::parse_from_rfc3339(s).is_ok() => {
            ActionResult::Output(value)
        }
        _ => reject("Invalid timestamp", value),
    })
}

/// Trims surrounding whitespace from a string.
pub fn trimmed() -> Action {
    Action::new("trimmed", |value| match value {
        Value::String(s) => ActionResult::Output(Value::String(s.trim().to_string())),
        other => reject("Invalid type", other),
    })
}

/// Requires a number of at least `min`.
pub fn min_value(min: f64) -> Action {
    Action::new("min_value", move |value| match value.as_f64() {
        Some(n) if n >= min => ActionResult::Output(value),
        _ => reject("Invalid value", value),
    })
}

/// Requires a number of at most `max`.
pub fn max_value(max: f64) -> Action {
    Action::new("max_value", move |value| match value.as_f64() {
        Some(n) if n <= max => ActionResult::Output(value),
        _ => reject("Invalid value", value),
    })
}

/// Requires a whole number.
pub fn integer() -> Action {
    Action::new("integer", |value| {
        let whole = value.as_i64().is_some()
            || value.as_u64().is_some()
            || value.as_f64().is_some_and(|n| n.fract() == 0.0);
        if whole {
            ActionResult::Output(value)
        } else {
            reject("Invalid integer", value)
        }
    })
}

/// Requires an array with at least `min` elements.
pub fn min_items(min: usize) -> Action {
    Action::new("min_items", move |value| match &value {
        Value::Array(items) if items.len() >= min => ActionResult::Output(value),
        _ => reject("Invalid length", value),
    })
}

/// Requires an array with at most `max` elements.
pub fn max_items(max: usize) -> Action {
    Action::new("max_items", move |value| match &value {
        Value::Array(items) if items.len() <= max => ActionResult::Output(value),
        _ => reject("Invalid length", value),
    })
}

/// Builds a refinement from a named predicate.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_validators::{check, is_valid, number_with};
///
/// let port = number_with(vec![check("port_range", "Port out of range", |value| {
///     value.as_u64().is_some_and(|n| (1..=65535).contains(&n))
/// })]);
/// assert!(is_valid(&port, &json!(8080)));
/// assert!(!is_valid(&port, &json!(0)));
/// ```
pub fn check(
    name: &'static str,
    message: impl Into<String>,
    predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
) -> Action {
    let message = message.into();
    Action::new(name, move |value| {
        if predicate(&value) {
            ActionResult::Output(value)
        } else {
            reject(message.clone(), value)
        }
    })
}

/// Builds a transform from a named function. Transforms cannot fail.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use value_schema_validators::{parse, string_with, transform};
///
/// let upper = string_with(vec![transform("uppercase", |value| {
///     match value {
///         Value::String(s) => Value::String(s.to_uppercase()),
///         other => other,
///     }
/// })]);
/// assert_eq!(parse(&upper, &json!("abc")).unwrap(), json!("ABC"));
/// ```
pub fn transform(
    name: &'static str,
    transform: impl Fn(Value) -> Value + Send + Sync + 'static,
) -> Action {
    Action::new(name, move |value| ActionResult::Output(transform(value)))
}
