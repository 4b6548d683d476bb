//! The schema catalog.
//!
//! Each submodule defines one schema kind as a struct implementing
//! [`value_schema_core::Schema`] plus lowercase constructor functions.
//! Constructors taking child schemas expect [`value_schema_core::SchemaRef`]
//! handles; build those with
//! [`IntoSchemaRef::into_ref`](value_schema_core::IntoSchemaRef::into_ref).

mod array;
mod boolean;
mod custom;
mod intersection;
mod literal;
mod null;
mod number;
mod object;
mod optional;
mod string;
mod tuple;
mod union;

pub use array::{ArraySchema, array, array_with};
pub use boolean::{BooleanSchema, boolean, boolean_with};
pub use custom::{AsyncCustomSchema, CustomSchema, custom, custom_async};
pub use intersection::{
    AsyncIntersectionSchema, IntersectionSchema, intersection, intersection_async,
};
pub use literal::{LiteralSchema, literal};
pub use null::{NullSchema, null};
pub use number::{NumberSchema, number, number_with};
pub use object::{ObjectSchema, object, object_with};
pub use optional::{OptionalSchema, optional};
pub use string::{StringSchema, string, string_with};
pub use tuple::{TupleSchema, tuple, tuple_with};
pub use union::{AsyncUnionSchema, UnionSchema, union, union_async};
