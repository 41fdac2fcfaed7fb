//! Layered typed-error propagation for read paths with several backing sources.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `layer_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Layered Error with Separate Client Message
//!
//! ```
//! use layer_rail::{ErrorContext, LayeredError};
//!
//! let db = LayeredError::source("db-books", "connection to db-primary:5432 refused")
//!     .with_context(ErrorContext::tag("db"));
//! let service = LayeredError::service("book-service", "could not load book 123")
//!     .with_client_message("Error when get book, please try later")
//!     .caused_by(db);
//!
//! assert_eq!(service.effective_client_message(), Some("Error when get book, please try later"));
//! assert!(service.error_chain().contains("db-primary:5432"));
//! ```
//!
//! ## Fallback Across Sources
//!
//! ```
//! use layer_rail::compose::Fallback;
//! use layer_rail::traits::{source_fn, Source};
//! use layer_rail::{LayeredError, Outcome};
//!
//! let books = Fallback::new("book-repository")
//!     .with_source(source_fn("db", |_: &str| -> Outcome<Vec<String>> {
//!         Outcome::failure(LayeredError::source("db", "connection refused"))
//!     }))
//!     .with_source(source_fn("json", |_: &str| Outcome::success(vec!["Book 1".to_string()])));
//!
//! assert_eq!(books.fetch("all").into_success().map(|b| b.len()), Some(1));
//! ```
//!
//! ## Batch Policies
//!
//! ```
//! use layer_rail::batch::{run_collect_all, run_fail_fast};
//! use layer_rail::traits::source_fn;
//! use layer_rail::{LayeredError, Outcome};
//!
//! let books = source_fn("books", |id: &u32| match id {
//!     2 => Outcome::failure(LayeredError::source("books", "book 2 is corrupt")),
//!     _ => Outcome::success(*id),
//! });
//!
//! assert!(run_fail_fast(&books, [1u32, 2, 3]).is_failure());
//! assert_eq!(run_collect_all(&books, [1u32, 2, 3]).failure_count(), 1);
//! ```

/// Batch policies: fail-fast and collect-all
pub mod batch;
/// Fallback composition and source boundaries
pub mod compose;
/// Shorthand macros for contexts and failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Outcome presentation and diagnostic logging
pub mod present;
/// Reference source implementations (requires `json` feature)
#[cfg(feature = "json")]
pub mod sources;
/// Core traits: `Source`, `Classify`, `IntoErrorContext`
pub mod traits;
/// Outcome, LayeredError and the types around them
pub mod types;

pub use traits::*;
pub use types::{
    error_formatter::{ChainFormatBuilder, ChainFormatConfig, ChainFormatter, ChainLayout},
    BatchResult, Cause, Chain, ChainLink, ErrorContext, ErrorReport, ErrorVec, FailureKind,
    LayeredError, Outcome, ReportLink,
};
