//! Combinators that build one [`Source`](crate::traits::Source) out of others.
//!
//! - [`Fallback`] / [`compose`]: ordered fallback across alternate sources
//! - [`guard`]: a boundary that turns panics into classified failures
//!
//! # Examples
//!
//! ```
//! use layer_rail::compose::{guard, Fallback};
//! use layer_rail::traits::{source_fn, Source};
//! use layer_rail::{FailureKind, LayeredError, Outcome};
//!
//! let books = Fallback::new("book-repository")
//!     .with_client_message("Books are unavailable, please try later")
//!     .with_source(guard(source_fn("db", |_: &str| -> Outcome<String> {
//!         Outcome::failure(LayeredError::source("db", "connection refused"))
//!     })))
//!     .with_source(source_fn("json", |_: &str| -> Outcome<String> {
//!         Outcome::failure(LayeredError::source("json", "unexpected end of input"))
//!     }));
//!
//! let err = books.fetch("123").into_failure().unwrap();
//! assert_eq!(err.kind(), FailureKind::SourcesExhausted);
//! assert_eq!(err.cause().and_then(|c| c.as_layered()).map(|c| c.layer()), Some("json"));
//! ```

pub mod boundary;
pub mod fallback;

pub use boundary::{guard, SourceBoundary};
pub use fallback::{compose, Fallback};
