//! Cause chain formatting for diagnostics.
//!
//! Every rendering here is built from internal messages. Client messages
//! never appear in a formatted chain.

use crate::types::layered_error::{ChainLink, LayeredError};
use std::fmt::{self, Display, Write};

/// Trait for customizing how a cause chain is rendered.
pub trait ChainFormatter {
    fn format_link(&self, link: ChainLink<'_>) -> String {
        link.to_string()
    }

    fn separator(&self) -> &str {
        " -> "
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = ChainLink<'a>>) -> String {
        chain.map(|link| self.format_link(link)).collect::<Vec<_>>().join(self.separator())
    }
}

/// How the links of a chain are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainLayout {
    /// One line, links joined by the separator.
    #[default]
    Inline,
    /// One line per link, each level indented one step further.
    Cascade,
    /// One line per link with box-drawing markers.
    Tree,
}

/// Configuration-based chain formatter.
///
/// # Examples
///
/// ```
/// use layer_rail::{ChainFormatConfig, ChainFormatter, LayeredError};
///
/// let err = LayeredError::service("book-service", "could not list")
///     .caused_by(LayeredError::source("db-books", "connection refused"));
///
/// let tree = ChainFormatConfig::pretty().format_chain(err.chain());
/// assert_eq!(tree, "┌ [book-service] could not list\n└─ [db-books] connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainFormatConfig {
    pub layout: ChainLayout,
    /// Joins links in [`ChainLayout::Inline`]. Other layouts break lines.
    pub separator: String,
    /// One level of indentation in [`ChainLayout::Cascade`].
    pub indent: String,
    pub show_layer: bool,
    pub show_context: bool,
}

impl Default for ChainFormatConfig {
    fn default() -> Self {
        Self {
            layout: ChainLayout::Inline,
            separator: " -> ".into(),
            indent: "  ".into(),
            show_layer: true,
            show_context: true,
        }
    }
}

impl ChainFormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self { layout: ChainLayout::Tree, ..Default::default() }
    }

    #[inline]
    pub fn cascaded() -> Self {
        Self { layout: ChainLayout::Cascade, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), show_context: false, ..Default::default() }
    }

    #[inline]
    pub fn no_context() -> Self {
        Self { show_context: false, ..Default::default() }
    }

    fn tree_marker(index: usize, last: usize) -> &'static str {
        if index == 0 {
            "┌ "
        } else if index == last {
            "└─ "
        } else {
            "├─ "
        }
    }
}

impl ChainFormatter for ChainFormatConfig {
    fn format_link(&self, link: ChainLink<'_>) -> String {
        let err = match link {
            ChainLink::Layered(err) => err,
            ChainLink::Opaque(err) => return err.to_string(),
        };

        let mut out = String::new();
        if self.show_layer {
            let _ = write!(out, "[{}] ", err.layer());
        }
        out.push_str(err.internal_message());
        if self.show_context && !err.context().is_empty() {
            let annotations: Vec<String> = err.context().iter().map(ToString::to_string).collect();
            let _ = write!(out, " ({})", annotations.join(", "));
        }
        out
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = ChainLink<'a>>) -> String {
        let lines: Vec<String> = chain.map(|link| self.format_link(link)).collect();
        let last = lines.len().saturating_sub(1);

        match self.layout {
            ChainLayout::Inline => lines.join(&self.separator),
            ChainLayout::Cascade => lines
                .iter()
                .enumerate()
                .map(|(depth, line)| format!("{}{}", self.indent.repeat(depth), line))
                .collect::<Vec<_>>()
                .join("\n"),
            ChainLayout::Tree => lines
                .iter()
                .enumerate()
                .map(|(index, line)| format!("{}{}", Self::tree_marker(index, last), line))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Builder for customizing how one error's chain is displayed.
///
/// Created by [`LayeredError::fmt`].
pub struct ChainFormatBuilder<'a> {
    error: &'a LayeredError,
    config: ChainFormatConfig,
    root_first: bool,
}

impl<'a> ChainFormatBuilder<'a> {
    pub fn new(error: &'a LayeredError) -> Self {
        Self { error, config: ChainFormatConfig::default(), root_first: false }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Renders the originating failure first instead of the outermost layer.
    pub fn root_first(mut self, enabled: bool) -> Self {
        self.root_first = enabled;
        self
    }

    pub fn show_layer(mut self, show: bool) -> Self {
        self.config.show_layer = show;
        self
    }

    pub fn show_context(mut self, show: bool) -> Self {
        self.config.show_context = show;
        self
    }

    pub fn layout(mut self, layout: ChainLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn pretty(self) -> Self {
        self.layout(ChainLayout::Tree)
    }

    pub fn cascaded(self) -> Self {
        self.layout(ChainLayout::Cascade)
    }

    pub fn compact(mut self) -> Self {
        self.config = ChainFormatConfig::compact();
        self
    }
}

impl Display for ChainFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = if self.root_first {
            let links: Vec<_> = self.error.chain().collect();
            self.config.format_chain(links.into_iter().rev())
        } else {
            self.config.format_chain(self.error.chain())
        };
        f.write_str(&rendered)
    }
}
