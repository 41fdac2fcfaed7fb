//! Structured annotations a layer attaches to the error it raises.
//!
//! Contexts never carry user-facing text. They travel with the diagnostic
//! side of a [`LayeredError`](crate::LayeredError) and show up in logs and
//! formatted chains only.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Display};

/// A single diagnostic annotation.
///
/// # Examples
///
/// ```
/// use layer_rail::ErrorContext;
///
/// assert_eq!(ErrorContext::tag("db").message(), "[db]");
/// assert_eq!(ErrorContext::metadata("id", "42").message(), "id=42");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Message(Cow<'static, str>),
    Location { file: Cow<'static, str>, line: u32 },
    Tag(Cow<'static, str>),
    Metadata { key: Cow<'static, str>, value: Cow<'static, str> },
}

impl ErrorContext {
    /// Creates a free-form message context.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Message(message.into())
    }

    /// Creates a source location context, usually from `file!()` and `line!()`.
    #[inline]
    pub fn location(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self::Location { file: file.into(), line }
    }

    /// Creates a short categorical label.
    #[inline]
    pub fn tag(tag: impl Into<Cow<'static, str>>) -> Self {
        Self::Tag(tag.into())
    }

    /// Creates a key/value pair, e.g. the request id that failed.
    #[inline]
    pub fn metadata(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Self::Metadata { key: key.into(), value: value.into() }
    }

    /// Returns the rendered form of this context.
    pub fn message(&self) -> String {
        match self {
            Self::Message(msg) => msg.to_string(),
            Self::Location { file, line } => format!("at {}:{}", file, line),
            Self::Tag(tag) => format!("[{}]", tag),
            Self::Metadata { key, value } => format!("{}={}", key, value),
        }
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(msg) => f.write_str(msg),
            Self::Location { file, line } => write!(f, "at {}:{}", file, line),
            Self::Tag(tag) => write!(f, "[{}]", tag),
            Self::Metadata { key, value } => write!(f, "{}={}", key, value),
        }
    }
}
