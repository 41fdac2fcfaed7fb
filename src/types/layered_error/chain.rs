use super::{Cause, LayeredError};
use std::error::Error;
use std::fmt::{self, Display};
use std::iter::FusedIterator;

/// One link of a cause chain.
#[derive(Debug, Clone, Copy)]
pub enum ChainLink<'a> {
    /// A link raised by a layer.
    Layered(&'a LayeredError),
    /// A lower-level error that was never classified by a layer.
    Opaque(&'a (dyn Error + 'static)),
}

impl<'a> ChainLink<'a> {
    #[inline]
    pub fn as_layered(self) -> Option<&'a LayeredError> {
        match self {
            Self::Layered(err) => Some(err),
            Self::Opaque(_) => None,
        }
    }

    #[inline]
    pub fn as_error(self) -> &'a (dyn Error + 'static) {
        match self {
            Self::Layered(err) => err as &(dyn Error + 'static),
            Self::Opaque(err) => err,
        }
    }

    /// Returns the diagnostic text of this link.
    ///
    /// For a layered link this is the internal message, never the client one.
    pub fn message(self) -> String {
        match self {
            Self::Layered(err) => err.internal_message().to_string(),
            Self::Opaque(err) => err.to_string(),
        }
    }

    fn following(self) -> Option<ChainLink<'a>> {
        match self {
            Self::Layered(err) => err.cause().map(|cause| match cause {
                Cause::Layered(inner) => ChainLink::Layered(&**inner),
                Cause::Opaque(inner) => ChainLink::from_error(&**inner),
            }),
            Self::Opaque(err) => err.source().map(ChainLink::from_error),
        }
    }

    fn from_error(err: &'a (dyn Error + 'static)) -> Self {
        match err.downcast_ref::<LayeredError>() {
            Some(layered) => Self::Layered(layered),
            None => Self::Opaque(err),
        }
    }
}

impl Display for ChainLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layered(err) => Display::fmt(err, f),
            Self::Opaque(err) => Display::fmt(err, f),
        }
    }
}

/// Iterator over a cause chain, outermost link first.
///
/// Created by [`LayeredError::chain`]. Opaque causes are followed through
/// [`Error::source`], and a `LayeredError` found there is reported as a
/// layered link again.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<ChainLink<'a>>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(head: &'a LayeredError) -> Self {
        Self { next: Some(ChainLink::Layered(head)) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = ChainLink<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.following();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
