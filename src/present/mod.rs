//! Translation of an [`Outcome`](crate::Outcome) into what an end user sees.
//!
//! [`OutcomePresenter::present`] decides between showing the value, a
//! curated client message, or a fixed generic message. Independently of
//! that decision, every failure is logged with its full internal chain
//! through `tracing`.
//!
//! # Examples
//!
//! ```
//! use layer_rail::present::{OutcomePresenter, RenderDecision};
//! use layer_rail::{LayeredError, Outcome};
//!
//! let presenter = OutcomePresenter::new();
//!
//! let failed: Outcome<String> = Outcome::failure(
//!     LayeredError::service("book-service", "SELECT NAME FROM BOOK failed: relation missing")
//!         .with_client_message("try later"),
//! );
//! assert_eq!(presenter.present(failed), RenderDecision::ShowUserMessage("try later".to_string()));
//!
//! let silent: Outcome<String> = Outcome::failure(LayeredError::source("db", "password rejected"));
//! assert_eq!(presenter.present(silent), RenderDecision::ShowGenericFailure);
//! ```

pub mod presenter;

pub use presenter::{OutcomePresenter, RenderDecision, DEFAULT_GENERIC_MESSAGE};
