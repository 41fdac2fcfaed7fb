//! Batch policies over a single [`Source`](crate::traits::Source).
//!
//! - Fail-fast ([`run_fail_fast`]): stop at the first failure and return it.
//! - Collect-all ([`run_collect_all`]): attempt every request and return a
//!   [`BatchResult`](crate::BatchResult) with one outcome per request.
//!
//! With the `rayon` feature, [`run_collect_all_parallel`] runs the collect-all
//! policy on the rayon thread pool while keeping input order.

#[cfg(feature = "rayon")]
pub mod parallel;
pub mod runner;

#[cfg(feature = "rayon")]
pub use parallel::run_collect_all_parallel;
pub use runner::{run_collect_all, run_fail_fast, BatchRunner};
