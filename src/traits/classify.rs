//! Classification of a collaborator's typed failures at a source boundary.
//!
//! [`Classify`] is implemented for `Result<T, E>` where `E` is one concrete
//! error type. A source calls it on the result of its direct collaborator
//! (a decoder, a database driver), so only that collaborator's failure kind
//! is turned into a [`LayeredError`]. There is no implementation over
//! `Box<dyn Error>`, which keeps unrelated fault classes from being merged.
//!
//! # Examples
//!
//! ```
//! use layer_rail::traits::Classify;
//! use layer_rail::FailureKind;
//!
//! let outcome = "not json".parse::<u8>().classify("json-books", "could not decode books");
//! let err = outcome.into_failure().unwrap();
//!
//! assert_eq!(err.kind(), FailureKind::Source);
//! assert_eq!(err.layer(), "json-books");
//! assert!(err.cause().is_some());
//! assert_eq!(err.client_message(), None);
//! ```

use crate::types::{LayeredError, Outcome};
use std::borrow::Cow;
use std::error::Error;

/// Extension turning a typed `Result` into an [`Outcome`].
pub trait Classify<T, E> {
    /// Wraps the error as a [`FailureKind::Source`](crate::FailureKind::Source)
    /// failure of `layer`, keeping the original as the opaque cause.
    fn classify(
        self,
        layer: impl Into<Cow<'static, str>>,
        internal_message: impl Into<Cow<'static, str>>,
    ) -> Outcome<T>;

    /// Builds the failure with `f`, for layers that attach a client message
    /// or context while classifying.
    fn classify_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> LayeredError;
}

impl<T, E> Classify<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn classify(
        self,
        layer: impl Into<Cow<'static, str>>,
        internal_message: impl Into<Cow<'static, str>>,
    ) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(
                LayeredError::source(layer, internal_message).caused_by_opaque(error),
            ),
        }
    }

    #[inline]
    fn classify_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> LayeredError,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(f(error)),
        }
    }
}
