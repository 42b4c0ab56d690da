//! Binding targets and their field descriptions
//!
//! A type becomes a binding target by implementing [`Bindable`], usually through
//! `#[derive(Bind)]`. The implementation describes the type as a [`Shape`]: its kind and,
//! for records, the ordered list of [`Field`]s with their raw tags and setters.

use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// A type that can be populated from a request.
///
/// Unbound and skipped fields keep the value they have in [`Default::default`].
///
/// # Example
/// ```
/// use micro_bind::{Bindable, Field, Shape};
///
/// #[derive(Default)]
/// struct Params {
///     email: String,
/// }
///
/// impl Bindable for Params {
///     fn shape() -> Shape<Self> {
///         Shape::record(
///             "Params",
///             vec![Field::new("email", Some("in=header,label=x-user-email"), |params: &mut Params, value| {
///                 params.email = value
///             })],
///         )
///     }
/// }
/// ```
pub trait Bindable: Default {
    fn shape() -> Shape<Self>;
}

/// The structural kind of a binding target, only [`ShapeKind::Record`] can be bound.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A struct with named fields.
    Record,
    Scalar,
    Sequence,
    Tuple,
    Unit,
    Enum,
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Record => "record",
            ShapeKind::Scalar => "scalar",
            ShapeKind::Sequence => "sequence",
            ShapeKind::Tuple => "tuple struct",
            ShapeKind::Unit => "unit struct",
            ShapeKind::Enum => "enum",
        };
        f.write_str(name)
    }
}

/// Description of a binding target.
pub struct Shape<T> {
    type_name: &'static str,
    kind: ShapeKind,
    fields: Vec<Field<T>>,
}

impl<T> Shape<T> {
    /// A struct with named fields, `fields` in declaration order.
    pub fn record(type_name: &'static str, fields: Vec<Field<T>>) -> Self {
        Self { type_name, kind: ShapeKind::Record, fields }
    }

    /// A type without named fields, binding into it always fails.
    pub fn unsupported(type_name: &'static str, kind: ShapeKind) -> Self {
        Self { type_name, kind, fields: Vec::new() }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    pub(crate) fn into_fields(self) -> Vec<Field<T>> {
        self.fields
    }
}

impl<T> Debug for Shape<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .field("fields", &self.fields)
            .finish()
    }
}

/// One named field of a record shape.
pub struct Field<T> {
    name: &'static str,
    tag: Option<&'static str>,
    setter: fn(&mut T, String),
}

impl<T> Field<T> {
    /// `tag` is the raw tag text, `None` when the field carries no tag at all.
    pub fn new(name: &'static str, tag: Option<&'static str>, setter: fn(&mut T, String)) -> Self {
        Self { name, tag, setter }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw tag, an absent tag reads as the empty string.
    #[inline]
    pub fn tag(&self) -> &'static str {
        self.tag.unwrap_or_default()
    }

    #[inline]
    pub(crate) fn set(&self, target: &mut T, value: String) {
        (self.setter)(target, value);
    }
}

impl<T> Debug for Field<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).field("tag", &self.tag).finish_non_exhaustive()
    }
}

impl Bindable for String {
    fn shape() -> Shape<Self> {
        Shape::unsupported("String", ShapeKind::Scalar)
    }
}

impl Bindable for Vec<String> {
    fn shape() -> Shape<Self> {
        Shape::unsupported("Vec<String>", ShapeKind::Sequence)
    }
}
