//! Per-call parse configuration.

use serde::{Deserialize, Serialize};

/// Configuration for one root-level parse invocation.
///
/// Created once per root call, passed by shared reference down the
/// recursion, and never mutated by children. Sharing a context across
/// unrelated calls is safe (it carries only read-only flags) but not
/// recommended practice.
///
/// # Examples
///
/// ```
/// use value_schema_core::ParseContext;
///
/// let ctx = ParseContext::new()
///     .with_abort_early()
///     .with_root_label("request body");
///
/// assert!(ctx.abort_early);
/// assert_eq!(ctx.root_label.as_deref(), Some("request body"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseContext {
    /// Stop at the first issue instead of collecting all of them.
    pub abort_early: bool,
    /// Stop a pipe at its first issue even when `abort_early` is off.
    pub abort_pipe_early: bool,
    /// Display name standing in for "(root)" when rendering failures.
    pub root_label: Option<String>,
}

impl ParseContext {
    /// Creates a context with default settings: collect all issues, run
    /// pipes to completion, no root label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops validation at the first issue.
    pub fn with_abort_early(mut self) -> Self {
        self.abort_early = true;
        self
    }

    /// Stops each pipe at its first issue.
    pub fn with_abort_pipe_early(mut self) -> Self {
        self.abort_pipe_early = true;
        self
    }

    /// Overrides the root label used when rendering failures.
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collects_all_issues() {
        let ctx = ParseContext::new();
        assert!(!ctx.abort_early);
        assert!(!ctx.abort_pipe_early);
        assert!(ctx.root_label.is_none());
    }

    #[test]
    fn test_builders_chain() {
        let ctx = ParseContext::new()
            .with_abort_early()
            .with_abort_pipe_early()
            .with_root_label("config");
        assert!(ctx.abort_early);
        assert!(ctx.abort_pipe_early);
        assert_eq!(ctx.root_label.as_deref(), Some("config"));
    }
}
