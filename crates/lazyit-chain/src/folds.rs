//! Terminal reductions.

use std::fmt;

use lazyit_core::error::{BoxError, LazyError, Result};
use lazyit_core::sequence::Fold;

/// Gets the last element of the sequence, or `None` when it is empty.
///
/// Always drains the whole source.
pub fn last() -> Last {
    Last
}

/// Left-folds the sequence into `initial` with `f`.
pub fn reduce<T, U, F>(f: F, initial: U) -> Reduce<F, U>
where
    F: FnMut(U, T) -> U,
{
    Reduce { f, initial }
}

/// Like [`reduce`], but `f` may fail.
///
/// Stops pulling at the first failure and returns it as
/// [`LazyError::Callback`] with the position of the offending element.
pub fn try_reduce<T, U, E, F>(f: F, initial: U) -> TryReduce<F, U>
where
    F: FnMut(U, T) -> Result<U, E>,
    E: Into<BoxError>,
{
    TryReduce { f, initial }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Last;

impl<I: Iterator> Fold<I> for Last {
    type Output = Option<I::Item>;

    fn apply(self, source: I) -> Self::Output {
        let mut last = None;
        for value in source {
            last = Some(value);
        }
        last
    }
}

#[derive(Clone)]
pub struct Reduce<F, U> {
    f: F,
    initial: U,
}

impl<F, U: fmt::Debug> fmt::Debug for Reduce<F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reduce")
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

impl<I, F, U> Fold<I> for Reduce<F, U>
where
    I: Iterator,
    F: FnMut(U, I::Item) -> U,
{
    type Output = U;

    fn apply(mut self, source: I) -> Self::Output {
        let mut acc = self.initial;
        for value in source {
            acc = (self.f)(acc, value);
        }
        acc
    }
}

#[derive(Clone)]
pub struct TryReduce<F, U> {
    f: F,
    initial: U,
}

impl<F, U: fmt::Debug> fmt::Debug for TryReduce<F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryReduce")
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

impl<I, F, U, E> Fold<I> for TryReduce<F, U>
where
    I: Iterator,
    F: FnMut(U, I::Item) -> Result<U, E>,
    E: Into<BoxError>,
{
    type Output = Result<U>;

    fn apply(mut self, source: I) -> Self::Output {
        let mut acc = self.initial;
        for (index, value) in source.enumerate() {
            acc = (self.f)(acc, value).map_err(|e| {
                let err = LazyError::callback(index, e);
                tracing::debug!(index, error = %err, "try_reduce callback failed");
                err
            })?;
        }
        Ok(acc)
    }
}
