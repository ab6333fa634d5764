use lazyit_core::config::SeqConfig;
use lazyit_core::sequence::{Fold, Pipe};

/// A lazy sequence. Its steps only run when the sequence is iterated, and
/// each element goes through the full pipeline before the next one is
/// pulled from the source.
///
/// Create one with [`lazy`] (or [`LazyExt::lazy`]). `pipe` consumes the
/// wrapper and returns a new one, so a wrapper is never changed after it is
/// built. `LazySeq` is itself `IntoIterator`, so it works in `for` loops, as
/// the source of another [`lazy`] call, or as the inner sequence returned
/// from a `flat_map` callback.
///
/// ```
/// use lazyit_chain::prelude::*;
///
/// let result = lazy([1, 2, 3]).pipe(map(|x: i32| x * 2)).fold(last());
/// assert_eq!(result, Some(6));
/// ```
#[derive(Debug, Clone)]
pub struct LazySeq<S> {
    source: S,
    config: SeqConfig,
    stages: usize,
}

/// Wrap any sequence in a [`LazySeq`] without pulling from it.
pub fn lazy<T: IntoIterator>(source: T) -> LazySeq<T::IntoIter> {
    lazy_with(source, SeqConfig::default())
}

/// Like [`lazy`], with an explicit pipeline configuration.
pub fn lazy_with<T: IntoIterator>(source: T, config: SeqConfig) -> LazySeq<T::IntoIter> {
    LazySeq {
        source: source.into_iter(),
        config,
        stages: 0,
    }
}

impl<S: Iterator> LazySeq<S> {
    /// Feed the sequence into a pipe, returning a new `LazySeq` over the
    /// pipe's output. Nothing is pulled.
    pub fn pipe<P>(self, pipe: P) -> LazySeq<P::Output>
    where
        P: Pipe<S>,
    {
        let stages = self.stages + 1;
        tracing::trace!(pipeline = self.config.label(), stages, "pipe attached");
        LazySeq {
            source: Pipe::apply(pipe, self.source),
            config: self.config,
            stages,
        }
    }

    /// Feed the sequence into a fold and return its result, **not** wrapped
    /// in a `LazySeq`. This is what drives the whole chain.
    pub fn fold<F>(self, fold: F) -> F::Output
    where
        F: Fold<S>,
    {
        let span = tracing::debug_span!(
            "lazy_fold",
            pipeline = self.config.label(),
            stages = self.stages,
            tags = ?self.config.tags
        );
        let _guard = span.enter();
        tracing::debug!("fold started");
        let output = Fold::apply(fold, self.source);
        tracing::debug!("fold completed");
        output
    }

    /// [`pipe`](Self::pipe) for a closure taking the current iterator.
    ///
    /// Pinning the closure to `FnOnce(S)` lets its argument type be inferred,
    /// so `.pipe_fn(|s| s.filter(..))` needs no annotation.
    pub fn pipe_fn<O, F>(self, f: F) -> LazySeq<O::IntoIter>
    where
        F: FnOnce(S) -> O,
        O: IntoIterator,
    {
        self.pipe(f)
    }

    /// [`fold`](Self::fold) for a closure taking the current iterator, with
    /// its argument type inferred.
    pub fn fold_fn<U, F>(self, f: F) -> U
    where
        F: FnOnce(S) -> U,
    {
        self.fold(f)
    }

    /// Drive the chain into any collection.
    pub fn collect<C>(self) -> C
    where
        C: FromIterator<S::Item>,
    {
        self.fold_fn(|source| source.collect())
    }

    /// Drive the chain into a `Vec`.
    pub fn to_vec(self) -> Vec<S::Item> {
        self.collect()
    }
}

impl<S> LazySeq<S> {
    /// Replace the pipeline configuration, keeping the source and stage count.
    pub fn with_config(mut self, config: SeqConfig) -> Self {
        self.config = config;
        self
    }

    /// Configuration carried through the chain.
    pub fn config(&self) -> &SeqConfig {
        &self.config
    }

    /// Number of pipes applied since the sequence was wrapped.
    pub fn stages(&self) -> usize {
        self.stages
    }
}

impl<S: Iterator> IntoIterator for LazySeq<S> {
    type Item = S::Item;
    type IntoIter = S;

    fn into_iter(self) -> S {
        self.source
    }
}

/// Iterating a borrowed `LazySeq` replays a clone of its source. Whether
/// that yields the same elements again depends on the source.
impl<S: Iterator + Clone> IntoIterator for &LazySeq<S> {
    type Item = S::Item;
    type IntoIter = S;

    fn into_iter(self) -> S {
        self.source.clone()
    }
}

/// Extension trait providing `.lazy()` on anything iterable.
pub trait LazyExt: IntoIterator + Sized {
    fn lazy(self) -> LazySeq<Self::IntoIter> {
        lazy(self)
    }
}

impl<T: IntoIterator> LazyExt for T {}
