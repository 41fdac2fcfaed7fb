//! Reference [`Source`](crate::traits::Source) implementations.
//!
//! Requires the `json` feature.

pub mod json;

pub use json::JsonSource;
