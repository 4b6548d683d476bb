//! Post-validation pipe execution.
//!
//! A pipe is an ordered list of refinement and transform actions that a
//! schema runs after its own structural check succeeds. The executor is
//! shared by every schema kind; the schema passes its own tags so pipe
//! issues are categorized like any other failure.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::{Issue, IssueKind, Issues, ParseContext, ParseResult, SchemaKind};

/// Ordered sequence of refinement and transform actions.
///
/// Owned by the schema that declares it; immutable after construction.
pub type Pipe = Vec<Action>;

/// Result of one action invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// Possibly-transformed value to pass to the next action.
    Output(Value),
    /// Rejection, with the action's default message and a snapshot of
    /// the rejected value.
    Issue {
        /// Why the value was rejected.
        message: String,
        /// The rejected value.
        input: Value,
    },
}

/// One refinement or transform step in a [`Pipe`].
///
/// An action consumes the accumulated value and either passes a
/// (possibly transformed) value to the next action or rejects it.
/// A caller-supplied message set via [`with_message`](Action::with_message)
/// overrides the action's default on rejection.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use value_schema_core::{Action, ActionResult};
///
/// let positive = Action::new("positive", |value: Value| match value.as_f64() {
///     Some(n) if n > 0.0 => ActionResult::Output(value),
///     _ => ActionResult::Issue {
///         message: "Invalid value".into(),
///         input: value,
///     },
/// });
/// assert_eq!(positive.name(), "positive");
/// ```
#[derive(Clone)]
pub struct Action {
    name: &'static str,
    message: Option<String>,
    run: Arc<dyn Fn(Value) -> ActionResult + Send + Sync>,
}

impl Action {
    /// Creates an action from a name and a check/transform function.
    ///
    /// The name identifies the action in trace logs.
    pub fn new(
        name: &'static str,
        run: impl Fn(Value) -> ActionResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            message: None,
            run: Arc::new(run),
        }
    }

    /// Overrides the message reported when this action rejects a value.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Name of the action.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Runs a pipe against an already-validated value.
///
/// Actions run strictly in declared order, each receiving the previous
/// action's output. When an action rejects, the issue is tagged with the
/// calling schema's `kind` and `schema`, and the pipe continues with the
/// rejected value, collecting further issues, unless the context's
/// `abort_early` or `abort_pipe_early` flag stops it at the first one.
///
/// A missing or empty pipe passes the value through unchanged.
pub fn execute_pipe(
    input: Value,
    pipe: Option<&Pipe>,
    ctx: &ParseContext,
    kind: IssueKind,
    schema: SchemaKind,
) -> ParseResult {
    let Some(actions) = pipe else {
        return ParseResult::Output(input);
    };

    let mut output = input;
    let mut issues: Vec<Issue> = Vec::new();
    for action in actions {
        match (action.run)(output) {
            ActionResult::Output(next) => output = next,
            ActionResult::Issue { message, input } => {
                debug!(action = action.name, schema = %schema, "Pipe action rejected value");
                let message = action.message.clone().unwrap_or(message);
                output = input.clone();
                issues.push(Issue::new(kind, schema, message, input));
                if ctx.abort_early || ctx.abort_pipe_early {
                    break;
                }
            }
        }
    }

    if issues.is_empty() {
        ParseResult::Output(output)
    } else {
        ParseResult::Issues(Issues::from_vec(issues))
    }
}
