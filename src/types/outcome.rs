use crate::types::LayeredError;

/// Result of asking a layer for a value.
///
/// `Outcome<T>` is either a successful value or a [`LayeredError`]. Unlike a
/// generic `Result<T, E>`, the failure side is always the same typed error,
/// which is what lets fallback, batching and presentation compose without
/// ever catching an unrelated error type.
///
/// # Variants
///
/// * `Success(T)` - Contains the produced value
/// * `Failure(LayeredError)` - Contains the classified failure
///
/// # Examples
///
/// ```
/// use layer_rail::{LayeredError, Outcome};
///
/// let ok = Outcome::success(21).map(|x| x * 2);
/// assert_eq!(ok.into_success(), Some(42));
///
/// let failed: Outcome<i32> = Outcome::failure(LayeredError::source("db", "connection refused"));
/// assert!(failed.is_failure());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(LayeredError),
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub fn failure(error: LayeredError) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Maps the success value using the provided function.
    ///
    /// A failure passes through untouched: the error is neither inspected nor
    /// re-wrapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use layer_rail::Outcome;
    ///
    /// let titles = Outcome::success(vec!["Book 1", "Book 2"]).map(|books| books.len());
    /// assert_eq!(titles.into_success(), Some(2));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a step that may itself fail, invoked only on success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Replaces a failure with the outcome produced by `f`.
    ///
    /// This is the building block of fallback: `f` receives the typed error
    /// and decides whether to try something else. A success is returned
    /// unchanged and `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use layer_rail::{LayeredError, Outcome};
    ///
    /// let primary: Outcome<&str> = Outcome::failure(LayeredError::source("db", "timeout"));
    /// let recovered = primary.recover_with(|_err| Outcome::success("from cache"));
    /// assert_eq!(recovered.into_success(), Some("from cache"));
    /// ```
    #[inline]
    pub fn recover_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(LayeredError) -> Outcome<T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Transforms the error, typically to re-wrap it in a higher layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use layer_rail::{FailureKind, LayeredError, Outcome};
    ///
    /// let repo: Outcome<()> = Outcome::failure(LayeredError::source("db", "syntax error"));
    /// let service = repo.map_failure(|err| {
    ///     LayeredError::service("book-service", "could not load book").caused_by(err)
    /// });
    ///
    /// let err = service.into_failure().unwrap();
    /// assert_eq!(err.kind(), FailureKind::Service);
    /// assert_eq!(err.depth(), 2);
    /// ```
    #[inline]
    pub fn map_failure<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(LayeredError) -> LayeredError,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(f(error)),
        }
    }

    /// Returns the value, or `default` when the outcome failed.
    ///
    /// Calling this is the caller's explicit decision to drop the error.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value, or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(LayeredError) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn failure_ref(&self) -> Option<&LayeredError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Extracts the value, if any.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, if any.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<LayeredError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a `Result` so the outcome can be propagated with `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, LayeredError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, LayeredError>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, LayeredError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, LayeredError> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Collects outcomes, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use layer_rail::{LayeredError, Outcome};
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.into_success(), Some(vec![1, 2]));
///
/// let mixed: Outcome<Vec<i32>> = vec![
///     Outcome::success(1),
///     Outcome::failure(LayeredError::source("db", "gone")),
/// ]
/// .into_iter()
/// .collect();
/// assert!(mixed.is_failure());
/// ```
impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        for outcome in iter {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => return Outcome::Failure(error),
            }
        }
        Outcome::Success(values)
    }
}
