//! Trailing-argument resolution for schema constructors.
//!
//! Schema constructors accept an optional rest-schema, an optional error
//! message, and an optional pipe, each independently omittable without
//! named parameters. Resolution dispatches purely on the shape of each
//! argument, never on argument count; absent arguments propagate as
//! absent outputs.
//!
//! Constructors consume the resolved [`DefaultArgs`]/[`TupleArgs`] forms,
//! whose `From` conversions cover the flexible call shapes:
//!
//! ```
//! use value_schema_core::DefaultArgs;
//!
//! let args = DefaultArgs::from("must be a string");
//! assert_eq!(args.message.as_deref(), Some("must be a string"));
//! assert!(args.pipe.is_none());
//! ```

use crate::{Pipe, SchemaRef};

/// A trailing constructor argument that is either an error message or a
/// pipe.
#[derive(Debug, Clone)]
pub enum DefaultArg {
    /// Caller-supplied error message.
    Message(String),
    /// Post-validation pipe.
    Pipe(Pipe),
}

impl DefaultArg {
    /// The pipe, when this argument is pipe-shaped.
    pub fn into_pipe(self) -> Option<Pipe> {
        match self {
            DefaultArg::Pipe(pipe) => Some(pipe),
            DefaultArg::Message(_) => None,
        }
    }
}

impl From<&str> for DefaultArg {
    fn from(message: &str) -> Self {
        DefaultArg::Message(message.to_string())
    }
}

impl From<String> for DefaultArg {
    fn from(message: String) -> Self {
        DefaultArg::Message(message)
    }
}

impl From<Pipe> for DefaultArg {
    fn from(pipe: Pipe) -> Self {
        DefaultArg::Pipe(pipe)
    }
}

/// A leading tuple-constructor argument: rest-schema, error message, or
/// pipe.
#[derive(Debug, Clone)]
pub enum TupleArg {
    /// Schema for elements beyond the positional items.
    Rest(SchemaRef),
    /// Caller-supplied error message.
    Message(String),
    /// Post-validation pipe.
    Pipe(Pipe),
}

impl TupleArg {
    /// Demotes to a [`DefaultArg`]; a rest-schema has no two-argument
    /// counterpart and resolves to absent.
    pub fn into_default(self) -> Option<DefaultArg> {
        match self {
            TupleArg::Message(message) => Some(DefaultArg::Message(message)),
            TupleArg::Pipe(pipe) => Some(DefaultArg::Pipe(pipe)),
            TupleArg::Rest(_) => None,
        }
    }
}

impl From<SchemaRef> for TupleArg {
    fn from(rest: SchemaRef) -> Self {
        TupleArg::Rest(rest)
    }
}

impl From<&str> for TupleArg {
    fn from(message: &str) -> Self {
        TupleArg::Message(message.to_string())
    }
}

impl From<String> for TupleArg {
    fn from(message: String) -> Self {
        TupleArg::Message(message)
    }
}

impl From<Pipe> for TupleArg {
    fn from(pipe: Pipe) -> Self {
        TupleArg::Pipe(pipe)
    }
}

/// Resolves an optional message-or-pipe argument plus an optional pipe
/// into the `(message, pipe)` pair.
///
/// A message-shaped `arg1` claims the message slot and leaves the pipe
/// to `arg2`; a pipe-shaped `arg1` is the pipe itself and there is no
/// message; an absent `arg1` lets `arg2` through unchanged.
///
/// # Examples
///
/// ```
/// use value_schema_core::{DefaultArg, resolve_default_args};
///
/// let (message, pipe) = resolve_default_args(Some(DefaultArg::from("oops")), None);
/// assert_eq!(message.as_deref(), Some("oops"));
/// assert!(pipe.is_none());
///
/// let (message, pipe) = resolve_default_args(None, None);
/// assert!(message.is_none() && pipe.is_none());
/// ```
pub fn resolve_default_args(
    arg1: Option<DefaultArg>,
    arg2: Option<Pipe>,
) -> (Option<String>, Option<Pipe>) {
    match arg1 {
        Some(DefaultArg::Message(message)) => (Some(message), arg2),
        Some(DefaultArg::Pipe(pipe)) => (None, Some(pipe)),
        None => (None, arg2),
    }
}

/// Resolves the three trailing tuple-constructor arguments into the
/// `(rest, message, pipe)` triple.
///
/// A rest-shaped `arg1` claims the rest slot and hands `arg2`/`arg3` to
/// [`resolve_default_args`]. Otherwise there is no rest-schema and
/// `arg1`/`arg2` stand in for the two-argument resolver's slots; `arg3`
/// is ignored, and a message-shaped `arg2` has no slot left to claim and
/// resolves to absent.
pub fn resolve_tuple_args(
    arg1: Option<TupleArg>,
    arg2: Option<DefaultArg>,
    arg3: Option<Pipe>,
) -> (Option<SchemaRef>, Option<String>, Option<Pipe>) {
    match arg1 {
        Some(TupleArg::Rest(rest)) => {
            let (message, pipe) = resolve_default_args(arg2, arg3);
            (Some(rest), message, pipe)
        }
        arg1 => {
            let (message, pipe) = resolve_default_args(
                arg1.and_then(TupleArg::into_default),
                arg2.and_then(DefaultArg::into_pipe),
            );
            (None, message, pipe)
        }
    }
}

/// Resolved trailing arguments for most schema constructors.
///
/// Build one through the `From` conversions (a bare message, a bare
/// pipe, or a `(message, pipe)` pair) rather than field by field.
#[derive(Debug, Clone, Default)]
pub struct DefaultArgs {
    /// Caller-supplied error message override.
    pub message: Option<String>,
    /// Post-validation pipe.
    pub pipe: Option<Pipe>,
}

impl From<&str> for DefaultArgs {
    fn from(message: &str) -> Self {
        let (message, pipe) = resolve_default_args(Some(message.into()), None);
        Self { message, pipe }
    }
}

impl From<String> for DefaultArgs {
    fn from(message: String) -> Self {
        let (message, pipe) = resolve_default_args(Some(message.into()), None);
        Self { message, pipe }
    }
}

impl From<Pipe> for DefaultArgs {
    fn from(pipe: Pipe) -> Self {
        let (message, pipe) = resolve_default_args(Some(pipe.into()), None);
        Self { message, pipe }
    }
}

impl From<(&str, Pipe)> for DefaultArgs {
    fn from((message, pipe): (&str, Pipe)) -> Self {
        let (message, pipe) = resolve_default_args(Some(message.into()), Some(pipe));
        Self { message, pipe }
    }
}

impl From<(String, Pipe)> for DefaultArgs {
    fn from((message, pipe): (String, Pipe)) -> Self {
        let (message, pipe) = resolve_default_args(Some(message.into()), Some(pipe));
        Self { message, pipe }
    }
}

/// Resolved trailing arguments for the tuple constructor.
#[derive(Debug, Clone, Default)]
pub struct TupleArgs {
    /// Schema for elements beyond the positional items.
    pub rest: Option<SchemaRef>,
    /// Caller-supplied error message override.
    pub message: Option<String>,
    /// Post-validation pipe.
    pub pipe: Option<Pipe>,
}

impl TupleArgs {
    fn resolved(arg1: Option<TupleArg>, arg2: Option<DefaultArg>, arg3: Option<Pipe>) -> Self {
        let (rest, message, pipe) = resolve_tuple_args(arg1, arg2, arg3);
        Self { rest, message, pipe }
    }
}

impl From<SchemaRef> for TupleArgs {
    fn from(rest: SchemaRef) -> Self {
        Self::resolved(Some(rest.into()), None, None)
    }
}

impl From<&str> for TupleArgs {
    fn from(message: &str) -> Self {
        Self::resolved(Some(message.into()), None, None)
    }
}

impl From<String> for TupleArgs {
    fn from(message: String) -> Self {
        Self::resolved(Some(message.into()), None, None)
    }
}

impl From<Pipe> for TupleArgs {
    fn from(pipe: Pipe) -> Self {
        Self::resolved(Some(pipe.into()), None, None)
    }
}

impl From<(SchemaRef, &str)> for TupleArgs {
    fn from((rest, message): (SchemaRef, &str)) -> Self {
        Self::resolved(Some(rest.into()), Some(message.into()), None)
    }
}

impl From<(SchemaRef, String)> for TupleArgs {
    fn from((rest, message): (SchemaRef, String)) -> Self {
        Self::resolved(Some(rest.into()), Some(message.into()), None)
    }
}

impl From<(SchemaRef, Pipe)> for TupleArgs {
    fn from((rest, pipe): (SchemaRef, Pipe)) -> Self {
        Self::resolved(Some(rest.into()), Some(pipe.into()), None)
    }
}

impl From<(SchemaRef, &str, Pipe)> for TupleArgs {
    fn from((rest, message, pipe): (SchemaRef, &str, Pipe)) -> Self {
        Self::resolved(Some(rest.into()), Some(message.into()), Some(pipe))
    }
}

impl From<(SchemaRef, String, Pipe)> for TupleArgs {
    fn from((rest, message, pipe): (SchemaRef, String, Pipe)) -> Self {
        Self::resolved(Some(rest.into()), Some(message.into()), Some(pipe))
    }
}

impl From<(&str, Pipe)> for TupleArgs {
    fn from((message, pipe): (&str, Pipe)) -> Self {
        Self::resolved(Some(message.into()), Some(pipe.into()), None)
    }
}

impl From<(String, Pipe)> for TupleArgs {
    fn from((message, pipe): (String, Pipe)) -> Self {
        Self::resolved(Some(message.into()), Some(pipe.into()), None)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        Action, ActionResult, IntoSchemaRef, ParseContext, ParseResult, Schema, SchemaKind,
    };

    use super::*;

    #[derive(Debug)]
    struct Anything;

    impl Schema for Anything {
        fn kind(&self) -> SchemaKind {
            SchemaKind::Custom
        }

        fn parse(&self, input: &serde_json::Value, _ctx: &ParseContext) -> ParseResult {
            ParseResult::Output(input.clone())
        }
    }

    fn noop(name: &'static str) -> Action {
        Action::new(name, ActionResult::Output)
    }

    #[test]
    fn test_default_args_message_claims_first_slot() {
        let (message, pipe) = resolve_default_args(Some("custom message".into()), None);
        assert_eq!(message.as_deref(), Some("custom message"));
        assert!(pipe.is_none());
    }

    #[test]
    fn test_default_args_pipe_shape_has_no_message() {
        let pipe: Pipe = vec![noop("a"), noop("b")];
        let (message, resolved) = resolve_default_args(Some(pipe.into()), None);
        assert!(message.is_none());
        assert_eq!(resolved.unwrap().len(), 2);
    }

    #[test]
    fn test_default_args_absent_propagates_absent() {
        let (message, pipe) = resolve_default_args(None, None);
        assert!(message.is_none());
        assert!(pipe.is_none());
    }

    #[test]
    fn test_default_args_message_with_pipe() {
        let pipe: Pipe = vec![noop("a")];
        let (message, resolved) = resolve_default_args(Some("oops".into()), Some(pipe));
        assert_eq!(message.as_deref(), Some("oops"));
        assert_eq!(resolved.unwrap().len(), 1);
    }

    #[test]
    fn test_default_args_absent_first_passes_pipe_through() {
        let pipe: Pipe = vec![noop("a")];
        let (message, resolved) = resolve_default_args(None, Some(pipe));
        assert!(message.is_none());
        assert_eq!(resolved.unwrap().len(), 1);
    }

    #[test]
    fn test_tuple_args_rest_then_message_then_pipe() {
        let rest = Anything.into_ref();
        let pipe: Pipe = vec![noop("a")];
        let (resolved_rest, message, resolved_pipe) =
            resolve_tuple_args(Some(rest.into()), Some("msg".into()), Some(pipe));

        assert!(resolved_rest.is_some());
        assert_eq!(message.as_deref(), Some("msg"));
        assert_eq!(resolved_pipe.unwrap().len(), 1);
    }

    #[test]
    fn test_tuple_args_without_rest_shift_down() {
        let pipe: Pipe = vec![noop("a")];
        let (rest, message, resolved_pipe) =
            resolve_tuple_args(Some("msg".into()), Some(pipe.into()), None);

        assert!(rest.is_none());
        assert_eq!(message.as_deref(), Some("msg"));
        assert_eq!(resolved_pipe.unwrap().len(), 1);
    }

    #[test]
    fn test_tuple_args_third_ignored_without_rest() {
        let ignored: Pipe = vec![noop("ignored")];
        let kept: Pipe = vec![noop("kept"), noop("kept_too")];
        let (rest, message, pipe) =
            resolve_tuple_args(Some("msg".into()), Some(kept.into()), Some(ignored));

        assert!(rest.is_none());
        assert_eq!(message.as_deref(), Some("msg"));
        assert_eq!(pipe.unwrap().len(), 2);
    }

    #[test]
    fn test_tuple_args_message_in_pipe_slot_resolves_absent() {
        let (rest, message, pipe) =
            resolve_tuple_args(Some("first".into()), Some("second".into()), None);

        assert!(rest.is_none());
        assert_eq!(message.as_deref(), Some("first"));
        assert!(pipe.is_none());
    }

    #[test]
    fn test_tuple_args_all_absent() {
        let (rest, message, pipe) = resolve_tuple_args(None, None, None);
        assert!(rest.is_none() && message.is_none() && pipe.is_none());
    }

    #[test]
    fn test_default_args_conversions() {
        let from_message = DefaultArgs::from("oops");
        assert_eq!(from_message.message.as_deref(), Some("oops"));
        assert!(from_message.pipe.is_none());

        let from_pipe = DefaultArgs::from(vec![noop("a")]);
        assert!(from_pipe.message.is_none());
        assert_eq!(from_pipe.pipe.unwrap().len(), 1);

        let from_pair = DefaultArgs::from(("oops", vec![noop("a")]));
        assert_eq!(from_pair.message.as_deref(), Some("oops"));
        assert_eq!(from_pair.pipe.unwrap().len(), 1);
    }

    #[test]
    fn test_tuple_args_conversions() {
        let rest = Anything.into_ref();
        let full = TupleArgs::from((rest, "msg", vec![noop("a")]));
        assert!(full.rest.is_some());
        assert_eq!(full.message.as_deref(), Some("msg"));
        assert_eq!(full.pipe.unwrap().len(), 1);

        let message_only = TupleArgs::from("msg");
        assert!(message_only.rest.is_none());
        assert_eq!(message_only.message.as_deref(), Some("msg"));

        // Shape, not position: a bare pipe lands in the pipe slot.
        let pipe_only = TupleArgs::from(vec![noop("a")]);
        assert!(pipe_only.rest.is_none());
        assert!(pipe_only.message.is_none());
        assert_eq!(pipe_only.pipe.unwrap().len(), 1);
    }

    #[test]
    fn test_schema_ref_check_still_works_after_conversion() {
        // The resolved rest-schema parses like the original handle.
        let args = TupleArgs::from(Anything.into_ref());
        let rest = args.rest.unwrap();
        let ctx = ParseContext::new();
        assert!(rest.parse(&json!([1, 2]), &ctx).is_ok());
    }
}
