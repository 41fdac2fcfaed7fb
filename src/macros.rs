//! Shorthand macros for building contexts and failures.
//!
//! - [`macro@crate::context`] - formats a message context.
//! - [`macro@crate::location`] - captures the current file and line.
//! - [`macro@crate::fail`] - a ready-to-return `Outcome::Failure` of a given kind.
//!
//! # Examples
//!
//! ```
//! use layer_rail::{context, fail, location, FailureKind, Outcome};
//!
//! fn book(id: u32) -> Outcome<String> {
//!     if id == 0 {
//!         return fail!(source "db-books", "id {} is reserved", id);
//!     }
//!     Outcome::success(format!("Book {id}"))
//! }
//!
//! let err = book(0).into_failure().unwrap();
//! assert_eq!(err.kind(), FailureKind::Source);
//! assert_eq!(err.internal_message(), "id 0 is reserved");
//!
//! let annotated = err.with_context(context!("book_id={}", 0)).with_context(location!());
//! assert_eq!(annotated.context().len(), 2);
//! ```

/// Creates a message [`ErrorContext`](crate::ErrorContext) from format arguments.
#[macro_export]
macro_rules! context {
    ($($arg:tt)*) => {
        $crate::ErrorContext::new(format!($($arg)*))
    };
}

/// Captures the current source file and line as an [`ErrorContext`](crate::ErrorContext).
#[macro_export]
macro_rules! location {
    () => {
        $crate::ErrorContext::location(file!(), line!())
    };
}

/// Builds an `Outcome::Failure` holding a [`LayeredError`](crate::LayeredError).
///
/// The first token picks the kind (`source` or `service`), followed by the
/// layer name and format arguments for the internal message.
///
/// ```
/// use layer_rail::{fail, FailureKind, Outcome};
///
/// let outcome: Outcome<()> = fail!(service "book-service", "could not list {} books", 3);
/// assert_eq!(outcome.into_failure().unwrap().kind(), FailureKind::Service);
/// ```
#[macro_export]
macro_rules! fail {
    (source $layer:expr, $($arg:tt)+) => {
        $crate::Outcome::Failure($crate::LayeredError::source($layer, format!($($arg)+)))
    };
    (service $layer:expr, $($arg:tt)+) => {
        $crate::Outcome::Failure($crate::LayeredError::service($layer, format!($($arg)+)))
    };
}
