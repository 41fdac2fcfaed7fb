use crate::traits::Source;
use crate::types::{ErrorContext, LayeredError, Outcome};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Wraps a source so that a panic inside `fetch` is returned as a failure.
///
/// The failure is a [`FailureKind::Source`](crate::FailureKind::Source) error
/// tagged with the inner source's name. The panic payload only reaches the
/// internal message; no client message is set.
///
/// Created by [`guard`].
#[derive(Debug, Clone)]
pub struct SourceBoundary<S> {
    inner: S,
}

/// Puts `source` behind a [`SourceBoundary`].
///
/// # Examples
///
/// ```
/// use layer_rail::compose::guard;
/// use layer_rail::traits::{source_fn, Source};
/// use layer_rail::{FailureKind, Outcome};
///
/// let flaky = guard(source_fn("legacy-db", |id: &u32| -> Outcome<u32> {
///     if *id == 0 {
///         panic!("driver assertion failed");
///     }
///     Outcome::success(*id)
/// }));
///
/// assert_eq!(flaky.fetch(&3u32).into_success(), Some(3));
///
/// let err = flaky.fetch(&0u32).into_failure().unwrap();
/// assert_eq!(err.kind(), FailureKind::Source);
/// assert_eq!(err.layer(), "legacy-db");
/// assert!(err.internal_message().contains("driver assertion failed"));
/// ```
pub fn guard<S>(source: S) -> SourceBoundary<S> {
    SourceBoundary { inner: source }
}

impl<S> SourceBoundary<S> {
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<R, S> Source<R> for SourceBoundary<S>
where
    R: ?Sized,
    S: Source<R>,
{
    type Output = S::Output;

    fn fetch(&self, request: &R) -> Outcome<S::Output> {
        // `fetch` only borrows the source immutably, so nothing is left half-updated by an unwind.
        match panic::catch_unwind(AssertUnwindSafe(|| self.inner.fetch(request))) {
            Ok(outcome) => outcome,
            Err(payload) => {
                let detail = panic_message(&*payload);
                tracing::warn!(source = self.inner.name(), panic = %detail, "source panicked");
                Outcome::Failure(
                    LayeredError::source(
                        self.inner.name().to_string(),
                        format!("source panicked: {}", detail),
                    )
                    .with_context(ErrorContext::tag("panic")),
                )
            },
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
