//! Populating [`Bindable`] targets from a [`RequestView`]

use crate::error::BindError;
use crate::shape::{Bindable, Field, ShapeKind};
use crate::tag::{SKIP_SENTINEL, Source, Tag};
use crate::view::{RequestParts, RequestView};
use http::Request;
use http::request::Parts;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Bind `T` from `view`, checking and parsing the shape of `T` on every call.
///
/// Use a [`Binder`] to parse the shape once and bind many requests.
pub fn bind<T: Bindable>(view: &(impl RequestView + ?Sized)) -> Result<T, BindError> {
    Binder::<T>::new()?.bind(view)
}

/// Bind `T` from the headers and query string of `request`.
pub fn bind_request<T: Bindable, B>(request: &Request<B>) -> Result<T, BindError> {
    bind(&RequestParts::from(request))
}

/// Bind `T` from the headers and query string of `parts`.
pub fn bind_parts<T: Bindable>(parts: &Parts) -> Result<T, BindError> {
    bind(&RequestParts::from(parts))
}

/// The parsed binding plan of a record type.
///
/// Building a binder fails if `T` is not a record. Once built it holds no per-request state
/// and can be shared between threads.
pub struct Binder<T> {
    type_name: &'static str,
    bindings: Vec<FieldBinding<T>>,
}

struct FieldBinding<T> {
    field: Field<T>,
    lookup: Lookup,
}

enum Lookup {
    Resolved(Source),
    // `in` named neither headers nor query, such a field never has a value
    Unresolved { key: String, location: String },
}

impl<T: Bindable> Binder<T> {
    pub fn new() -> Result<Self, BindError> {
        let shape = T::shape();
        if shape.kind() != ShapeKind::Record {
            return Err(BindError::shape(shape.type_name(), shape.kind()));
        }

        let type_name = shape.type_name();
        let bindings = shape
            .into_fields()
            .into_iter()
            .filter(|field| field.tag() != SKIP_SENTINEL)
            .map(|field| {
                let lookup = Lookup::new(&Tag::parse(field.tag()), field.name());
                FieldBinding { field, lookup }
            })
            .collect();

        Ok(Self { type_name, bindings })
    }

    /// Bind a new `T` from `view`, failing on the first field without a value.
    ///
    /// Fields are looked up in declaration order and nothing after the failing field is read.
    pub fn bind(&self, view: &(impl RequestView + ?Sized)) -> Result<T, BindError> {
        let mut target = T::default();

        for FieldBinding { field, lookup } in &self.bindings {
            let value = match lookup {
                Lookup::Resolved(Source::Header(key)) => view.header(key),
                Lookup::Resolved(Source::Query(key)) => view.query(key),
                Lookup::Unresolved { .. } => None,
            };

            match value {
                Some(value) if !value.is_empty() => field.set(&mut target, value),
                _ => return Err(lookup.missing(field.name())),
            }
        }

        Ok(target)
    }

    /// Bind a new `T` from the headers and query string of `request`.
    pub fn bind_request<B>(&self, request: &Request<B>) -> Result<T, BindError> {
        self.bind(&RequestParts::from(request))
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The fields taking part in binding, skipped fields excluded.
    pub fn fields(&self) -> impl Iterator<Item = &Field<T>> {
        self.bindings.iter().map(|binding| &binding.field)
    }
}

impl Lookup {
    fn new(tag: &Tag, field_name: &str) -> Self {
        match tag.source(field_name) {
            // query keys are conventionally lower-case while field names may not be
            Some(Source::Query(key)) => Lookup::Resolved(Source::Query(key.to_lowercase())),
            Some(source) => Lookup::Resolved(source),
            None => Lookup::Unresolved {
                key: tag.lookup_key(field_name).to_owned(),
                location: tag.source_kind().to_owned(),
            },
        }
    }

    fn missing(&self, field_name: &'static str) -> BindError {
        match self {
            Lookup::Resolved(source) => BindError::missing_field(field_name, source.key(), source.kind()),
            Lookup::Unresolved { key, location } => BindError::missing_field(field_name, key, location),
        }
    }
}

impl<T> Debug for Binder<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("type_name", &self.type_name)
            .field("fields", &self.bindings.iter().map(|binding| binding.field.name()).collect::<Vec<_>>())
            .finish()
    }
}
