use crate::types::error_formatter::{ChainFormatConfig, ChainFormatter};
use crate::types::{LayeredError, Outcome};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Text shown when no layer supplied a client message.
pub const DEFAULT_GENERIC_MESSAGE: &str = "Something went wrong, please try again later";

/// What a consumer should render for one outcome.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision<T> {
    /// Render the value.
    Show(T),
    /// Render this curated message.
    ShowUserMessage(String),
    /// Render the presenter's generic failure message.
    ShowGenericFailure,
}

impl<T> RenderDecision<T> {
    #[inline]
    pub fn is_show(&self) -> bool {
        matches!(self, Self::Show(_))
    }

    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Show(value) => Some(value),
            _ => None,
        }
    }
}

/// Turns outcomes into [`RenderDecision`]s and logs every failure.
///
/// The internal message of an error is never part of a decision. Lookup
/// order for a failure is: the nearest client message in the chain
/// (outermost first), then a per-layer default configured with
/// [`with_layer_default`](Self::with_layer_default) for any layer in the
/// chain (outermost first), then [`RenderDecision::ShowGenericFailure`].
#[derive(Debug, Clone)]
pub struct OutcomePresenter {
    generic_message: Cow<'static, str>,
    layer_defaults: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    format: ChainFormatConfig,
}

impl Default for OutcomePresenter {
    fn default() -> Self {
        Self {
            generic_message: Cow::Borrowed(DEFAULT_GENERIC_MESSAGE),
            layer_defaults: Vec::new(),
            format: ChainFormatConfig::default(),
        }
    }
}

impl OutcomePresenter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text rendered for [`RenderDecision::ShowGenericFailure`].
    pub fn with_generic_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.generic_message = message.into();
        self
    }

    /// Shows `message` for failures raised by `layer` when no layer in the
    /// chain set a client message.
    pub fn with_layer_default(
        mut self,
        layer: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.layer_defaults.push((layer.into(), message.into()));
        self
    }

    /// Sets how the diagnostic chain is formatted in logs.
    pub fn with_format(mut self, format: ChainFormatConfig) -> Self {
        self.format = format;
        self
    }

    #[inline]
    pub fn generic_message(&self) -> &str {
        &self.generic_message
    }

    /// Decides what to render for `outcome`.
    ///
    /// A failure is logged at `error` level with its full chain whatever the
    /// decision is.
    pub fn present<T>(&self, outcome: Outcome<T>) -> RenderDecision<T> {
        match outcome {
            Outcome::Success(value) => RenderDecision::Show(value),
            Outcome::Failure(error) => {
                self.log(&error);
                self.decide(&error)
            },
        }
    }

    /// Returns the text to display for a message decision.
    ///
    /// `None` for [`RenderDecision::Show`], whose value the consumer renders itself.
    pub fn user_text<'a, T>(&'a self, decision: &'a RenderDecision<T>) -> Option<&'a str> {
        match decision {
            RenderDecision::Show(_) => None,
            RenderDecision::ShowUserMessage(text) => Some(text.as_str()),
            RenderDecision::ShowGenericFailure => Some(&*self.generic_message),
        }
    }

    /// Formats the full diagnostic chain of `error`, internal messages included.
    pub fn diagnostic_report(&self, error: &LayeredError) -> String {
        self.format.format_chain(error.chain())
    }

    fn decide<T>(&self, error: &LayeredError) -> RenderDecision<T> {
        if let Some(message) = error.effective_client_message() {
            return RenderDecision::ShowUserMessage(message.to_string());
        }

        let layer_default = error
            .chain()
            .filter_map(|link| link.as_layered())
            .find_map(|link| self.layer_default(link.layer()));

        match layer_default {
            Some(message) => RenderDecision::ShowUserMessage(message.to_string()),
            None => RenderDecision::ShowGenericFailure,
        }
    }

    fn layer_default(&self, layer: &str) -> Option<&str> {
        self.layer_defaults
            .iter()
            .find(|(name, _)| name == layer)
            .map(|(_, message)| &**message)
    }

    fn log(&self, error: &LayeredError) {
        tracing::error!(
            layer = error.layer(),
            kind = %error.kind(),
            depth = error.depth(),
            chain = %self.diagnostic_report(error),
            "outcome failed"
        );
    }
}
