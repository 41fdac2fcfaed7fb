//! The capability a repository-like collaborator exposes.
//!
//! A [`Source`] maps a request to an [`Outcome`]. Implementations must
//! translate every lower-level failure into a [`LayeredError`](crate::LayeredError)
//! tagged with their own layer before returning; nothing unclassified may
//! cross this interface. [`Classify`](crate::traits::Classify) does that for
//! typed `Result`s and [`guard`](crate::compose::guard) does it for panics.
//!
//! # Examples
//!
//! ```
//! use layer_rail::traits::{Classify, Source};
//! use layer_rail::Outcome;
//!
//! struct NumberSource;
//!
//! impl Source<str> for NumberSource {
//!     type Output = u32;
//!
//!     fn fetch(&self, request: &str) -> Outcome<u32> {
//!         request.parse::<u32>().classify("numbers", format!("`{request}` is not a number"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "numbers"
//!     }
//! }
//!
//! assert_eq!(NumberSource.fetch("42").into_success(), Some(42));
//! assert!(NumberSource.fetch("forty-two").is_failure());
//! ```

use crate::types::Outcome;
use std::borrow::Cow;
use std::sync::Arc;

/// A backing data provider.
///
/// `fetch` takes `&self`: configuration held by a source is read-only after
/// construction, and no state is shared between requests.
pub trait Source<R: ?Sized> {
    type Output;

    /// Produces the value for `request`, or a classified failure.
    fn fetch(&self, request: &R) -> Outcome<Self::Output>;

    /// Name used in logs and in the errors this source raises.
    fn name(&self) -> &str {
        "source"
    }
}

impl<R: ?Sized, S: Source<R> + ?Sized> Source<R> for &S {
    type Output = S::Output;

    #[inline]
    fn fetch(&self, request: &R) -> Outcome<Self::Output> {
        (**self).fetch(request)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: ?Sized, S: Source<R> + ?Sized> Source<R> for Box<S> {
    type Output = S::Output;

    #[inline]
    fn fetch(&self, request: &R) -> Outcome<Self::Output> {
        (**self).fetch(request)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: ?Sized, S: Source<R> + ?Sized> Source<R> for Arc<S> {
    type Output = S::Output;

    #[inline]
    fn fetch(&self, request: &R) -> Outcome<Self::Output> {
        (**self).fetch(request)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Boxed, type-erased source, the element type of a fallback chain.
pub type BoxedSource<R, T> = Box<dyn Source<R, Output = T> + Send + Sync>;

/// A [`Source`] backed by a closure. Created by [`source_fn`].
#[derive(Clone)]
pub struct FnSource<F> {
    name: Cow<'static, str>,
    f: F,
}

/// Builds a named [`Source`] from a closure.
///
/// # Examples
///
/// ```
/// use layer_rail::traits::{source_fn, Source};
/// use layer_rail::Outcome;
///
/// let titles = source_fn("memory", |id: &u32| Outcome::success(format!("Book {id}")));
/// assert_eq!(titles.fetch(&1u32).into_success().as_deref(), Some("Book 1"));
/// assert_eq!(titles.name(), "memory");
/// ```
pub fn source_fn<R, T, F>(name: impl Into<Cow<'static, str>>, f: F) -> FnSource<F>
where
    R: ?Sized,
    F: Fn(&R) -> Outcome<T>,
{
    FnSource { name: name.into(), f }
}

impl<F> FnSource<F> {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<R, T, F> Source<R> for FnSource<F>
where
    R: ?Sized,
    F: Fn(&R) -> Outcome<T>,
{
    type Output = T;

    #[inline]
    fn fetch(&self, request: &R) -> Outcome<T> {
        (self.f)(request)
    }

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource").field("name", &self.name).finish_non_exhaustive()
    }
}
