use super::{ChainLink, FailureKind, LayeredError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owned snapshot of a cause chain, outermost link first.
///
/// Holds internal messages, so it belongs in logs and never in a response
/// body shown to an end user.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub links: Vec<ReportLink>,
}

/// One link of an [`ErrorReport`].
///
/// `kind` and `layer` are `None` for opaque lower-level errors.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLink {
    pub kind: Option<FailureKind>,
    pub layer: Option<String>,
    pub message: String,
    pub client_message: Option<String>,
    pub context: Vec<String>,
}

impl ErrorReport {
    pub(crate) fn from_error(error: &LayeredError) -> Self {
        Self { links: error.chain().map(ReportLink::from_link).collect() }
    }

    /// Returns the message of the innermost link.
    pub fn root_message(&self) -> Option<&str> {
        self.links.last().map(|link| link.message.as_str())
    }
}

impl ReportLink {
    fn from_link(link: ChainLink<'_>) -> Self {
        match link {
            ChainLink::Layered(err) => Self {
                kind: Some(err.kind()),
                layer: Some(err.layer().to_string()),
                message: err.internal_message().to_string(),
                client_message: err.client_message().map(str::to_string),
                context: err.context().iter().map(|ctx| ctx.message()).collect(),
            },
            ChainLink::Opaque(err) => Self {
                kind: None,
                layer: None,
                message: err.to_string(),
                client_message: None,
                context: Vec::new(),
            },
        }
    }
}
