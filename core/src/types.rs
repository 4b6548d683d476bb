//! Diagnostic and result types for value parsing.
//!
//! This module defines the data model every schema reports through. The
//! types are designed for serialization with [`serde`] so issues can be
//! rendered, logged, or shipped to another process as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of schema that raised an issue.
///
/// Used as the discriminant tag on schemas themselves and on the issues
/// they produce, so downstream formatters can categorize failures by the
/// validator that reported them.
///
/// # Examples
///
/// ```
/// use value_schema_core::SchemaKind;
///
/// assert_eq!(SchemaKind::Intersection.as_str(), "intersection");
/// assert_eq!(SchemaKind::String.to_string(), "string");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// String leaf schema.
    String,
    /// Number leaf schema.
    Number,
    /// Boolean leaf schema.
    Boolean,
    /// Null leaf schema.
    Null,
    /// Literal value schema.
    Literal,
    /// Optional wrapper schema.
    Optional,
    /// Object composite schema.
    Object,
    /// Array composite schema.
    Array,
    /// Tuple composite schema.
    Tuple,
    /// Union composite schema.
    Union,
    /// Intersection composite schema.
    Intersection,
    /// Caller-supplied predicate schema.
    Custom,
}

impl SchemaKind {
    /// Lowercase tag used in messages and serialized issues.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Null => "null",
            SchemaKind::Literal => "literal",
            SchemaKind::Optional => "optional",
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::Tuple => "tuple",
            SchemaKind::Union => "union",
            SchemaKind::Intersection => "intersection",
            SchemaKind::Custom => "custom",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a failed check.
///
/// `Type` covers structural mismatches (wrong basic type, wrong shape);
/// the remaining variants tag refinement failures with the domain of the
/// schema whose pipe raised them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Structural type mismatch.
    Type,
    /// String refinement failure.
    String,
    /// Number refinement failure.
    Number,
    /// Boolean refinement failure.
    Boolean,
    /// Object refinement failure.
    Object,
    /// Array refinement failure.
    Array,
    /// Caller-supplied check failure.
    Custom,
}

impl IssueKind {
    /// Lowercase tag used in serialized issues.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Type => "type",
            IssueKind::String => "string",
            IssueKind::Number => "number",
            IssueKind::Boolean => "boolean",
            IssueKind::Object => "object",
            IssueKind::Array => "array",
            IssueKind::Custom => "custom",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step in the path from the parse root to an offending value.
///
/// Serializes untagged, so a path renders as a plain JSON array of keys
/// and indices (e.g. `["items", 2, "name"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object entry key.
    Key(String),
    /// Array element index.
    Index(usize),
}

/// Renders a path as a dotted string (e.g. `items[2].name`).
///
/// An empty path renders as an empty string.
///
/// # Examples
///
/// ```
/// use value_schema_core::{PathSegment, path_to_string};
///
/// let path = vec![
///     PathSegment::Key("items".into()),
///     PathSegment::Index(2),
///     PathSegment::Key("name".into()),
/// ];
/// assert_eq!(path_to_string(&path), "items[2].name");
/// assert_eq!(path_to_string(&[]), "");
/// ```
pub fn path_to_string(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            PathSegment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

/// One validation diagnostic.
///
/// Issues are the sole failure signal of a parse: a failing schema builds
/// one (or aggregates its children's) instead of panicking or raising.
/// The offending value is snapshotted at construction time, which only
/// costs on the failure path.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_core::{Issue, IssueKind, SchemaKind};
///
/// let issue = Issue::new(IssueKind::Type, SchemaKind::Number, "Invalid type", json!("abc"));
/// assert_eq!(issue.message, "Invalid type");
/// assert_eq!(issue.to_string(), "(root): Invalid type");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Category of the failed check.
    pub kind: IssueKind,
    /// Kind of the schema that raised the issue.
    pub schema: SchemaKind,
    /// Human-readable description.
    pub message: String,
    /// Snapshot of the offending input value.
    pub input: Value,
    /// Location of `input` relative to the parse root (empty at the root).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
    /// Nested detail attached when a composite wraps its children's failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Issues>,
}

impl Issue {
    /// Creates an issue at the parse root with no nested detail.
    pub fn new(
        kind: IssueKind,
        schema: SchemaKind,
        message: impl Into<String>,
        input: Value,
    ) -> Self {
        Self {
            kind,
            schema,
            message: message.into(),
            input,
            path: Vec::new(),
            issues: None,
        }
    }

    /// Attaches nested detail from a wrapped child failure.
    pub fn with_nested(mut self, issues: Issues) -> Self {
        self.issues = Some(issues);
        self
    }

    /// Sets the path from the parse root.
    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    /// Renders the path as a dotted string (empty at the root).
    pub fn path_string(&self) -> String {
        path_to_string(&self.path)
    }

    /// Walks nested detail down to the most specific issue.
    ///
    /// Follows the first nested issue at each level; returns `self` when
    /// no nested detail is attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use value_schema_core::{Issue, Issues, IssueKind, SchemaKind};
    ///
    /// let leaf = Issue::new(IssueKind::Type, SchemaKind::String, "Invalid type", json!(1));
    /// let wrapper = Issue::new(IssueKind::Type, SchemaKind::Intersection, "Invalid type", json!(1))
    ///     .with_nested(Issues::single(leaf));
    /// assert_eq!(wrapper.deepest().schema, SchemaKind::String);
    /// ```
    pub fn deepest(&self) -> &Issue {
        let mut current = self;
        while let Some(nested) = current.issues.as_ref().and_then(Issues::first) {
            current = nested;
        }
        current
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path_string(), self.message)
        }
    }
}

/// Ordered collection of issues from one failed parse.
///
/// Never empty: a failing parse always reports at least one issue.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_core::{Issue, Issues, IssueKind, SchemaKind};
///
/// let mut issues = Issues::single(Issue::new(
///     IssueKind::Type,
///     SchemaKind::String,
///     "Invalid type",
///     json!(1),
/// ));
/// issues.push(Issue::new(IssueKind::Type, SchemaKind::Number, "Invalid type", json!("x")));
/// assert_eq!(issues.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Issues(Vec<Issue>);

impl Issues {
    /// Creates a collection holding one issue.
    pub fn single(issue: Issue) -> Self {
        Self(vec![issue])
    }

    /// Creates a collection from a non-empty vector of issues.
    pub fn from_vec(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty(), "an Issues collection holds at least one issue");
        Self(issues)
    }

    /// Number of issues at this level.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the collection holds no issues.
    ///
    /// Always false for collections built through this crate; present so
    /// deserialized data can be checked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First issue in declaration order.
    pub fn first(&self) -> Option<&Issue> {
        self.0.first()
    }

    /// Issues as a slice.
    pub fn as_slice(&self) -> &[Issue] {
        &self.0
    }

    /// Iterates over the issues.
    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.0.iter()
    }

    /// Appends one issue.
    pub fn push(&mut self, issue: Issue) {
        self.0.push(issue);
    }

    /// Appends all issues from another collection.
    pub fn extend(&mut self, other: Issues) {
        self.0.extend(other.0);
    }

    /// Consumes the collection, returning the underlying vector.
    pub fn into_inner(self) -> Vec<Issue> {
        self.0
    }
}

impl From<Issue> for Issues {
    fn from(issue: Issue) -> Self {
        Self::single(issue)
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Result of one parse operation: a validated output or the issues that
/// rejected the input. Exactly one variant holds at a time.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_core::ParseResult;
///
/// let ok = ParseResult::Output(json!(42));
/// assert!(ok.is_ok());
/// assert_eq!(ok.into_output(), Some(json!(42)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// Validated (possibly transformed) output value.
    Output(Value),
    /// Diagnostics for a failed parse.
    Issues(Issues),
}

impl ParseResult {
    /// True for the `Output` variant.
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseResult::Output(_))
    }

    /// Borrows the output value, if any.
    pub fn as_output(&self) -> Option<&Value> {
        match self {
            ParseResult::Output(output) => Some(output),
            ParseResult::Issues(_) => None,
        }
    }

    /// Borrows the issues, if any.
    pub fn as_issues(&self) -> Option<&Issues> {
        match self {
            ParseResult::Output(_) => None,
            ParseResult::Issues(issues) => Some(issues),
        }
    }

    /// Consumes the result, returning the output value, if any.
    pub fn into_output(self) -> Option<Value> {
        match self {
            ParseResult::Output(output) => Some(output),
            ParseResult::Issues(_) => None,
        }
    }

    /// Consumes the result, returning the issues, if any.
    pub fn into_issues(self) -> Option<Issues> {
        match self {
            ParseResult::Output(_) => None,
            ParseResult::Issues(issues) => Some(issues),
        }
    }
}
