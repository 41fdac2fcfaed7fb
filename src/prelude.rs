//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use layer_rail::prelude::*;
//!
//! let books = Fallback::new("books")
//!     .with_source(source_fn("db", |_: &u32| -> Outcome<String> {
//!         fail!(source "db", "connection refused")
//!     }))
//!     .with_source(source_fn("json", |id: &u32| Outcome::success(format!("Book {id}"))));
//!
//! let presenter = OutcomePresenter::new();
//! let decision = presenter.present(books.fetch(&1u32));
//! assert_eq!(decision, RenderDecision::Show("Book 1".to_string()));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`context!`], [`fail!`], [`location!`]
//! - **Types**: [`Outcome`], [`LayeredError`], [`FailureKind`], [`ErrorContext`], [`BatchResult`]
//! - **Traits**: [`Source`], [`Classify`], [`IntoErrorContext`]
//! - **Combinators**: [`Fallback`], [`guard`], [`BatchRunner`], [`OutcomePresenter`]

// Macros
pub use crate::{context, fail, location};

// Core types
pub use crate::types::{BatchResult, ErrorContext, FailureKind, LayeredError, Outcome};

// Traits
pub use crate::traits::{source_fn, Classify, IntoErrorContext, Source};

// Combinators
pub use crate::batch::{run_collect_all, run_fail_fast, BatchRunner};
pub use crate::compose::{guard, Fallback};
pub use crate::present::{OutcomePresenter, RenderDecision};
