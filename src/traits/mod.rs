//! Core traits for error propagation across layers.
//!
//! - [`Source`]: the fetch capability every backing provider exposes
//! - [`Classify`]: turns a collaborator's typed `Result` into an [`Outcome`](crate::Outcome)
//! - [`IntoErrorContext`]: conversion trait for structured error annotations
//!
//! # Examples
//!
//! ```
//! use layer_rail::traits::{source_fn, Classify, Source};
//!
//! let parse = source_fn("numbers", |raw: &str| {
//!     raw.trim().parse::<i64>().classify("numbers", "input is not an integer")
//! });
//!
//! assert_eq!(parse.fetch(" 7 ").into_success(), Some(7));
//! assert!(parse.fetch("seven").is_failure());
//! ```

pub mod classify;
pub mod into_error_context;
pub mod source;

pub use classify::Classify;
pub use into_error_context::IntoErrorContext;
pub use source::{source_fn, BoxedSource, FnSource, Source};
