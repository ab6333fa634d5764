//! Sequence-to-sequence combinators.
//!
//! Each constructor captures the caller's function and returns a pipe value.
//! Applying the pipe wraps the upstream iterator in a small state machine
//! that pulls from upstream only when its own `next` is called.

use std::fmt;
use std::iter::FusedIterator;

use lazyit_core::error::{BoxError, LazyError};
use lazyit_core::sequence::Pipe;

/// Transforms each element into another, one at a time.
pub fn map<T, U, F>(f: F) -> Map<F>
where
    F: FnMut(T) -> U,
{
    Map { f }
}

/// Lets elements through until one fails `f`.
///
/// The first failing element is dropped and ends the sequence for good.
pub fn take_while<T, F>(f: F) -> TakeWhile<F>
where
    F: FnMut(&T) -> bool,
{
    TakeWhile { f }
}

/// Transforms each element into a sequence and yields the elements of
/// those sequences in order, draining each before pulling the next element.
pub fn flat_map<T, U, F>(f: F) -> FlatMap<F>
where
    F: FnMut(T) -> U,
    U: IntoIterator,
{
    FlatMap { f }
}

/// Like [`map`], but `f` may fail.
///
/// Yields `Ok` values until the first failure, which is yielded as
/// [`LazyError::Callback`] carrying the element's position. The sequence
/// ends after that.
pub fn try_map<T, U, E, F>(f: F) -> TryMap<F>
where
    F: FnMut(T) -> Result<U, E>,
    E: Into<BoxError>,
{
    TryMap { f }
}

#[derive(Clone)]
pub struct Map<F> {
    f: F,
}

#[derive(Clone)]
pub struct TakeWhile<F> {
    f: F,
}

#[derive(Clone)]
pub struct FlatMap<F> {
    f: F,
}

#[derive(Clone)]
pub struct TryMap<F> {
    f: F,
}

macro_rules! opaque_debug {
    ($($name:ident),*) => {
        $(
            impl<F> fmt::Debug for $name<F> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($name)).finish_non_exhaustive()
                }
            }
        )*
    };
}

opaque_debug!(Map, TakeWhile, FlatMap, TryMap);

impl<I, F, U> Pipe<I> for Map<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Output = MapIter<I, F>;

    fn apply(self, source: I) -> Self::Output {
        MapIter { source, f: self.f }
    }
}

impl<I, F> Pipe<I> for TakeWhile<F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Output = TakeWhileIter<I, F>;

    fn apply(self, source: I) -> Self::Output {
        TakeWhileIter {
            source: Some(source),
            f: self.f,
        }
    }
}

impl<I, F, U> Pipe<I> for FlatMap<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    type Output = FlatMapIter<I, F, U>;

    fn apply(self, source: I) -> Self::Output {
        FlatMapIter {
            source: Some(source),
            f: self.f,
            inner: None,
        }
    }
}

impl<I, F, U, E> Pipe<I> for TryMap<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Result<U, E>,
    E: Into<BoxError>,
{
    type Output = TryMapIter<I, F>;

    fn apply(self, source: I) -> Self::Output {
        TryMapIter {
            source: Some(source),
            f: self.f,
            index: 0,
        }
    }
}

/// Iterator produced by [`map`].
#[derive(Clone)]
pub struct MapIter<I, F> {
    source: I,
    f: F,
}

impl<I, F, U> Iterator for MapIter<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.source.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F, U> FusedIterator for MapIter<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> U,
{
}

/// Iterator produced by [`take_while`].
///
/// The upstream iterator is dropped as soon as the sequence ends.
#[derive(Clone)]
pub struct TakeWhileIter<I, F> {
    source: Option<I>,
    f: F,
}

impl<I, F> Iterator for TakeWhileIter<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let source = self.source.as_mut()?;
        match source.next() {
            Some(item) if (self.f)(&item) => Some(item),
            _ => {
                self.source = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => (0, source.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<I, F> FusedIterator for TakeWhileIter<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
}

/// Iterator produced by [`flat_map`].
///
/// Holds at most one inner iterator, which is dropped as soon as it runs dry.
/// The outer iterator is dropped once it is exhausted.
pub struct FlatMapIter<I, F, U: IntoIterator> {
    source: Option<I>,
    f: F,
    inner: Option<U::IntoIter>,
}

impl<I, F, U> Clone for FlatMapIter<I, F, U>
where
    I: Clone,
    F: Clone,
    U: IntoIterator,
    U::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            f: self.f.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<I, F, U> Iterator for FlatMapIter<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                match inner.next() {
                    Some(item) => return Some(item),
                    None => self.inner = None,
                }
            }
            let Some(outer) = self.source.as_mut()?.next() else {
                self.source = None;
                return None;
            };
            self.inner = Some((self.f)(outer).into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self
            .inner
            .as_ref()
            .map_or((0, Some(0)), |inner| inner.size_hint());
        match self.source.as_ref().map(|source| source.size_hint()) {
            None | Some((0, Some(0))) => (lo, hi),
            Some(_) => (lo, None),
        }
    }
}

impl<I, F, U> FusedIterator for FlatMapIter<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
}

/// Iterator produced by [`try_map`].
#[derive(Clone)]
pub struct TryMapIter<I, F> {
    source: Option<I>,
    f: F,
    index: usize,
}

impl<I, F, U, E> Iterator for TryMapIter<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Result<U, E>,
    E: Into<BoxError>,
{
    type Item = Result<U, LazyError>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(item) = self.source.as_mut()?.next() else {
            self.source = None;
            return None;
        };
        let index = self.index;
        self.index += 1;
        match (self.f)(item) {
            Ok(value) => Some(Ok(value)),
            Err(e) => {
                self.source = None;
                let err = LazyError::callback(index, e);
                tracing::debug!(index, error = %err, "try_map callback failed");
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => (0, source.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<I, F, U, E> FusedIterator for TryMapIter<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Result<U, E>,
    E: Into<BoxError>,
{
}
