//! Value types carried between layers.
//!
//! # Examples
//!
//! ```
//! use layer_rail::{ErrorContext, LayeredError, Outcome};
//!
//! let err = LayeredError::source("db-books", "connection refused")
//!     .with_context(ErrorContext::tag("db"))
//!     .with_context(ErrorContext::metadata("book_id", "123"));
//!
//! let outcome: Outcome<String> = Outcome::failure(err);
//! println!("{}", outcome.failure_ref().unwrap().error_chain());
//! // Output: [db-books] connection refused ([db], book_id=123)
//! ```
use smallvec::SmallVec;

pub mod batch_result;
pub mod error_context;
pub mod error_formatter;
pub mod layered_error;
pub mod outcome;

pub use batch_result::*;
pub use error_context::*;
pub use layered_error::*;
pub use outcome::*;

/// SmallVec-backed collection used for contexts and collected errors.
///
/// Uses inline storage for one element, the common case of a single
/// annotation or a single failed request.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
