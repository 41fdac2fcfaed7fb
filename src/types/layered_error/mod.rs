//! The error value that travels up through the layers.
//!
//! [`LayeredError`] keeps three concerns apart:
//! - an internal diagnostic message meant for logs only,
//! - an optional client message a layer has decided is safe to show,
//! - an optional cause, either another `LayeredError` or an opaque
//!   lower-level error, forming a singly linked chain.
//!
//! A `LayeredError` is built once through consuming builder methods and is
//! never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use layer_rail::{FailureKind, LayeredError};
//!
//! let parse = LayeredError::source("json-books", "unexpected end of input at line 1");
//! let service = LayeredError::service("book-service", "could not list books")
//!     .with_client_message("Books are unavailable, please try later")
//!     .caused_by(parse);
//!
//! assert_eq!(service.kind(), FailureKind::Service);
//! assert_eq!(service.effective_client_message(), Some("Books are unavailable, please try later"));
//! assert_eq!(service.depth(), 2);
//! ```

use crate::traits::IntoErrorContext;
use crate::types::error_formatter::{ChainFormatBuilder, ChainFormatConfig, ChainFormatter};
use crate::types::{ErrorContext, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

mod chain;
mod report;

pub use chain::{Chain, ChainLink};
pub use report::{ErrorReport, ReportLink};

/// Which part of the taxonomy raised an error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A lower-level fault wrapped at the point closest to the external system.
    Source,
    /// Every source of a fallback chain failed.
    SourcesExhausted,
    /// A fallback chain was built without any source.
    NoSources,
    /// A higher layer re-wrapping failures of its own collaborators.
    Service,
}

impl FailureKind {
    /// Returns `true` for the two composition failures.
    #[inline]
    pub fn is_composition(self) -> bool {
        matches!(self, Self::SourcesExhausted | Self::NoSources)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::SourcesExhausted => "sources-exhausted",
            Self::NoSources => "no-sources",
            Self::Service => "service",
        }
    }
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The previous link of a [`LayeredError`] chain.
#[derive(Debug, Clone)]
pub enum Cause {
    /// A failure already classified by a lower layer.
    Layered(Box<LayeredError>),
    /// A lower-level error captured at a source boundary.
    Opaque(Arc<dyn Error + Send + Sync + 'static>),
}

impl Cause {
    /// Returns the inner `LayeredError` if this cause was classified.
    pub fn as_layered(&self) -> Option<&LayeredError> {
        match self {
            Self::Layered(err) => Some(&**err),
            Self::Opaque(_) => None,
        }
    }

    /// Views the cause as a standard error.
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Self::Layered(err) => &**err as &(dyn Error + 'static),
            Self::Opaque(err) => &**err as &(dyn Error + 'static),
        }
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Layered(a), Self::Layered(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// Immutable, chain-linked error tagged with the layer that raised it.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredError {
    kind: FailureKind,
    layer: Cow<'static, str>,
    internal_message: Cow<'static, str>,
    client_message: Option<Cow<'static, str>>,
    context: ErrorVec<ErrorContext>,
    cause: Option<Cause>,
}

impl LayeredError {
    /// Creates an error of the given kind without client message or cause.
    #[inline]
    pub fn new(
        kind: FailureKind,
        layer: impl Into<Cow<'static, str>>,
        internal_message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            layer: layer.into(),
            internal_message: internal_message.into(),
            client_message: None,
            context: ErrorVec::new(),
            cause: None,
        }
    }

    /// Creates a [`FailureKind::Source`] error.
    #[inline]
    pub fn source(
        layer: impl Into<Cow<'static, str>>,
        internal_message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(FailureKind::Source, layer, internal_message)
    }

    /// Creates a [`FailureKind::Service`] error.
    #[inline]
    pub fn service(
        layer: impl Into<Cow<'static, str>>,
        internal_message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(FailureKind::Service, layer, internal_message)
    }

    /// Creates the error a fallback chain reports once every source failed.
    ///
    /// `last` becomes the cause, so its whole chain stays reachable.
    pub fn exhausted(layer: impl Into<Cow<'static, str>>, last: LayeredError) -> Self {
        let internal = format!("all sources failed, last failure from `{}`", last.layer());
        Self::new(FailureKind::SourcesExhausted, layer, internal).caused_by(last)
    }

    /// Creates the error a fallback chain reports when it holds no source.
    pub fn no_sources(layer: impl Into<Cow<'static, str>>) -> Self {
        Self::new(FailureKind::NoSources, layer, "no sources configured")
    }

    /// Sets the message that may be shown to an end user.
    ///
    /// An outer layer calls this to override the text of an inner one with a
    /// more specific message. There is no way to clear it.
    #[inline]
    pub fn with_client_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.client_message = Some(message.into());
        self
    }

    /// Links a lower layer's error as the cause.
    #[inline]
    pub fn caused_by(mut self, cause: LayeredError) -> Self {
        self.cause = Some(Cause::Layered(Box::new(cause)));
        self
    }

    /// Links an unclassified lower-level error as the cause.
    #[inline]
    pub fn caused_by_opaque<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Cause::Opaque(Arc::new(cause)));
        self
    }

    /// Attaches a diagnostic annotation.
    #[inline]
    pub fn with_context<C>(mut self, ctx: C) -> Self
    where
        C: IntoErrorContext,
    {
        self.context.push(ctx.into_error_context());
        self
    }

    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    #[inline]
    pub fn layer(&self) -> &str {
        &self.layer
    }

    #[inline]
    pub fn internal_message(&self) -> &str {
        &self.internal_message
    }

    /// Returns the client message set by this layer, if any.
    ///
    /// This never falls back to the internal message.
    #[inline]
    pub fn client_message(&self) -> Option<&str> {
        self.client_message.as_deref()
    }

    /// Returns the contexts in insertion order.
    #[inline]
    pub fn context(&self) -> &[ErrorContext] {
        &self.context
    }

    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Iterates over this error and every cause below it, outermost first.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Returns the number of links in the chain, this error included.
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Returns the originating low-level failure.
    pub fn root_cause(&self) -> ChainLink<'_> {
        self.chain().last().unwrap_or(ChainLink::Layered(self))
    }

    /// Returns the client message of the nearest layer that set one.
    ///
    /// Outer layers win over inner ones, which is what lets an outer layer
    /// refine an inner message without erasing it.
    pub fn effective_client_message(&self) -> Option<&str> {
        self.chain().filter_map(|link| link.as_layered()).find_map(LayeredError::client_message)
    }

    /// Returns a builder for customizing chain formatting.
    #[inline]
    pub fn fmt(&self) -> ChainFormatBuilder<'_> {
        ChainFormatBuilder::new(self)
    }

    /// Formats the whole chain with the default configuration.
    pub fn error_chain(&self) -> String {
        ChainFormatConfig::default().format_chain(self.chain())
    }

    /// Formats the whole chain with a custom formatter.
    pub fn error_chain_with<F>(&self, formatter: F) -> String
    where
        F: ChainFormatter,
    {
        formatter.format_chain(self.chain())
    }

    /// Captures the chain as plain data, e.g. for structured logs.
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from_error(self)
    }
}

impl Display for LayeredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.layer, self.internal_message)
    }
}

impl Error for LayeredError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }
}
