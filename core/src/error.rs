//! Error type for the fallible parse surface.
//!
//! Validation failures are values ([`Issues`]) all the way through the
//! engine; [`ParseError`] is the [`std::error::Error`] carrier those
//! values travel in when a caller wants `Result`-shaped parsing.

use thiserror::Error;

use crate::{Issue, Issues};

/// A failed parse, carrying the issues that rejected the input.
///
/// The `Display` impl renders the issue tree one line per issue, nested
/// detail indented, with the root label (when set) standing in for
/// "(root)".
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_core::{Issue, Issues, IssueKind, ParseError, SchemaKind};
///
/// let error = ParseError::new(Issues::single(Issue::new(
///     IssueKind::Type,
///     SchemaKind::String,
///     "Invalid type",
///     json!(1),
/// )))
/// .with_root_label("username");
///
/// assert_eq!(error.to_string(), "validation failed (1 issue)\n  username: Invalid type");
/// ```
#[derive(Debug, Clone, Error)]
#[error("{}", render(.issues, .root_label))]
pub struct ParseError {
    /// Issues reported by the failed parse.
    pub issues: Issues,
    /// Display name standing in for "(root)" when rendering.
    pub root_label: Option<String>,
}

impl ParseError {
    /// Wraps the issues of a failed parse.
    pub fn new(issues: Issues) -> Self {
        Self {
            issues,
            root_label: None,
        }
    }

    /// Sets the root label used when rendering.
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = Some(label.into());
        self
    }
}

fn render(issues: &Issues, root_label: &Option<String>) -> String {
    let label = root_label.as_deref().unwrap_or("(root)");
    let noun = if issues.len() == 1 { "issue" } else { "issues" };
    let mut out = format!("validation failed ({} {noun})", issues.len());
    for issue in issues {
        render_issue(&mut out, issue, label, 1);
    }
    out
}

fn render_issue(out: &mut String, issue: &Issue, label: &str, depth: usize) {
    out.push('\n');
    for _ in 0..depth * 2 {
        out.push(' ');
    }
    if issue.path.is_empty() {
        out.push_str(label);
    } else {
        out.push_str(&issue.path_string());
    }
    out.push_str(": ");
    out.push_str(&issue.message);
    if let Some(nested) = &issue.issues {
        for inner in nested {
            render_issue(out, inner, label, depth + 1);
        }
    }
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
