//! Request-scoped storage of bound values
//!
//! A bound value travels with its request inside [`http::Extensions`], keyed by its type, so
//! any number of differently typed targets can be attached to the same request.

use http::Request;
use std::ops::{Deref, DerefMut};

/// A value bound from the request it is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound<T>(pub T);

impl<T> Bound<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Attach `value` to `request`, returning the value previously bound for `T`.
    pub fn insert<B>(request: &mut Request<B>, value: T) -> Option<T> {
        request.extensions_mut().insert(Bound(value)).map(Bound::into_inner)
    }

    /// The value bound for `T`, if any.
    pub fn get<B>(request: &Request<B>) -> Option<&T> {
        request.extensions().get::<Bound<T>>().map(|bound| &bound.0)
    }

    /// Detach the value bound for `T`; a second call returns `None`.
    pub fn take<B>(request: &mut Request<B>) -> Option<T> {
        request.extensions_mut().remove::<Bound<T>>().map(Bound::into_inner)
    }
}

impl<T> Bound<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Bound<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Bound<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
