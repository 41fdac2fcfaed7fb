//! What [`LayeredError::with_context`](crate::LayeredError::with_context) accepts.
//!
//! Plain text becomes an [`ErrorContext::Message`], a `(key, value)` pair
//! becomes an [`ErrorContext::Metadata`] entry, and an `ErrorContext` is
//! passed through as is.
//!
//! ```
//! use layer_rail::{ErrorContext, LayeredError};
//!
//! let err = LayeredError::source("db-books", "query failed")
//!     .with_context("while listing books")
//!     .with_context(("book_id", "123"))
//!     .with_context(ErrorContext::tag("db"));
//!
//! let rendered: Vec<String> = err.context().iter().map(ErrorContext::message).collect();
//! assert_eq!(rendered, ["while listing books", "book_id=123", "[db]"]);
//! ```
use crate::types::error_context::ErrorContext;
use std::borrow::Cow;

/// Conversion into a diagnostic annotation.
///
/// Implement it for request types that should describe themselves when a
/// lookup for them fails:
///
/// ```
/// use layer_rail::{traits::IntoErrorContext, ErrorContext};
///
/// struct BookId(u64);
///
/// impl IntoErrorContext for &BookId {
///     fn into_error_context(self) -> ErrorContext {
///         ErrorContext::metadata("book_id", self.0.to_string())
///     }
/// }
///
/// assert_eq!((&BookId(7)).into_error_context().message(), "book_id=7");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot annotate a `LayeredError`",
    label = "expected text, a `(key, value)` pair or an `ErrorContext`",
    note = "implement `IntoErrorContext` for this type or build an `ErrorContext` directly"
)]
pub trait IntoErrorContext {
    fn into_error_context(self) -> ErrorContext;
}

macro_rules! text_context {
    ($($text:ty),+ $(,)?) => {
        $(
            impl IntoErrorContext for $text {
                #[inline]
                fn into_error_context(self) -> ErrorContext {
                    ErrorContext::Message(self.into())
                }
            }
        )+
    };
}

text_context!(&'static str, String, Cow<'static, str>);

impl<K, V> IntoErrorContext for (K, V)
where
    K: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::metadata(self.0, self.1)
    }
}

impl IntoErrorContext for ErrorContext {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        self
    }
}
