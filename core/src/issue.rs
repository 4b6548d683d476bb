//! Issue construction and aggregation helpers.
//!
//! Failing schemas report through [`schema_issues`]; composites that wrap
//! or re-key child failures use [`flatten_nested`] and [`prefix_issues`]
//! to keep the most specific diagnostics at the surface.

use serde_json::Value;
use tracing::trace;

use crate::{Issue, IssueKind, Issues, PathSegment, SchemaKind};

/// Default message for structural type mismatches.
pub const INVALID_TYPE: &str = "Invalid type";

/// Default message for failed caller-supplied checks.
pub const INVALID_INPUT: &str = "Invalid input";

// Upper bound on the flatten descent; nesting depth is caller-controlled.
const MAX_FLATTEN_DEPTH: usize = 32;

/// Builds the single-issue collection a failing schema reports.
///
/// `nested` attaches a wrapped child failure's own diagnostics, which is
/// how a composite reports "my child failed" without discarding the
/// child's detail.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_schema_core::*;
///
/// let issues = schema_issues(
///     IssueKind::Type,
///     SchemaKind::String,
///     INVALID_TYPE,
///     &json!(42),
///     None,
/// );
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues.first().unwrap().schema, SchemaKind::String);
/// ```
pub fn schema_issues(
    kind: IssueKind,
    schema: SchemaKind,
    message: impl Into<String>,
    input: &Value,
    nested: Option<Issues>,
) -> Issues {
    let mut issue = Issue::new(kind, schema, message, input.clone());
    issue.issues = nested;
    Issues::single(issue)
}

/// Replaces a collection with its elements' nested detail, level by
/// level, until no element carries nested issues.
///
/// This surfaces the most specific failure while discarding wrapper
/// layers that add no information. Flattening never reorders issues
/// within a level and never touches the paths already accumulated by
/// children. The descent stops at a fixed depth cap; wrapping composites
/// nest one level per wrap, so the cap only matters for hand-built
/// issue trees.
pub fn flatten_nested(mut issues: Issues) -> Issues {
    for _ in 0..MAX_FLATTEN_DEPTH {
        let nested: Vec<Issue> = issues
            .iter()
            .filter_map(|issue| issue.issues.as_ref())
            .flat_map(|nested| nested.iter().cloned())
            .collect();
        if nested.is_empty() {
            return issues;
        }
        issues = Issues::from_vec(nested);
    }
    trace!(depth = MAX_FLATTEN_DEPTH, "Stopped issue flattening at depth cap");
    issues
}

/// Prepends a path segment to every issue, recursing into nested detail.
///
/// Keyed and indexed composites call this when surfacing a child's
/// failure, so even the deepest nested issues keep absolute paths from
/// the parse root.
pub fn prefix_issues(issues: Issues, segment: &PathSegment) -> Issues {
    Issues::from_vec(
        issues
            .into_iter()
            .map(|issue| prefix_issue(issue, segment))
            .collect(),
    )
}

fn prefix_issue(mut issue: Issue, segment: &PathSegment) -> Issue {
    issue.path.insert(0, segment.clone());
    issue.issues = issue.issues.map(|nested| prefix_issues(nested, segment));
    issue
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn leaf(message: &str) -> Issue {
        Issue::new(IssueKind::Type, SchemaKind::String, message, json!(1))
    }

    #[test]
    fn test_schema_issues_snapshots_input_and_nesting() {
        let nested = Issues::single(leaf("inner"));
        let issues = schema_issues(
            IssueKind::Type,
            SchemaKind::Intersection,
            INVALID_TYPE,
            &json!({"a": 1}),
            Some(nested.clone()),
        );

        assert_eq!(issues.len(), 1);
        let issue = issues.first().unwrap();
        assert_eq!(issue.message, INVALID_TYPE);
        assert_eq!(issue.input, json!({"a": 1}));
        assert_eq!(issue.issues.as_ref(), Some(&nested));
    }

    #[test]
    fn test_flatten_without_nesting_is_identity() {
        let issues = Issues::from_vec(vec![leaf("one"), leaf("two")]);
        assert_eq!(flatten_nested(issues.clone()), issues);
    }

    #[test]
    fn test_flatten_descends_to_deepest_level() {
        let deepest = Issues::from_vec(vec![leaf("first"), leaf("second")]);
        let middle = Issues::single(
            Issue::new(IssueKind::Type, SchemaKind::Union, INVALID_TYPE, json!(1))
                .with_nested(deepest.clone()),
        );
        let outer = Issues::single(
            Issue::new(IssueKind::Type, SchemaKind::Intersection, INVALID_TYPE, json!(1))
                .with_nested(middle),
        );

        let flattened = flatten_nested(outer);
        assert_eq!(flattened, deepest);
    }

    #[test]
    fn test_flatten_keeps_order_and_paths() {
        let first = leaf("first").with_path(vec![PathSegment::Key("a".into())]);
        let second = leaf("second").with_path(vec![PathSegment::Key("b".into())]);
        let wrapper = Issues::single(
            Issue::new(IssueKind::Type, SchemaKind::Intersection, INVALID_TYPE, json!(1))
                .with_nested(Issues::from_vec(vec![first.clone(), second.clone()])),
        );

        let flattened = flatten_nested(wrapper);
        assert_eq!(flattened.as_slice(), &[first, second]);
    }

    #[test]
    fn test_flatten_replaces_level_when_any_element_nests() {
        // Once one element carries nested detail, the whole level is
        // replaced by the nested lists; elements without detail drop out.
        let nested = leaf("nested");
        let level = Issues::from_vec(vec![
            Issue::new(IssueKind::Type, SchemaKind::Union, INVALID_TYPE, json!(1))
                .with_nested(Issues::single(nested.clone())),
            leaf("plain"),
        ]);

        let flattened = flatten_nested(level);
        assert_eq!(flattened.as_slice(), &[nested]);
    }

    #[test]
    fn test_prefix_reaches_nested_issues() {
        let nested = leaf("inner").with_path(vec![PathSegment::Key("name".into())]);
        let issues = Issues::single(
            Issue::new(IssueKind::Type, SchemaKind::Intersection, INVALID_TYPE, json!(1))
                .with_nested(Issues::single(nested)),
        );

        let prefixed = prefix_issues(issues, &PathSegment::Key("profile".into()));
        let outer = prefixed.first().unwrap();
        assert_eq!(outer.path_string(), "profile");

        let inner = outer.issues.as_ref().unwrap().first().unwrap();
        assert_eq!(inner.path_string(), "profile.name");
    }

    #[test]
    fn test_prefix_with_index_segment() {
        let issues = Issues::single(leaf("x").with_path(vec![PathSegment::Key("id".into())]));
        let prefixed = prefix_issues(issues, &PathSegment::Index(2));
        assert_eq!(prefixed.first().unwrap().path_string(), "[2].id");
    }
}
