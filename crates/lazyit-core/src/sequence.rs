/// Transforms one sequence into another.
///
/// Applying a pipe must not pull anything from `source`: elements are only
/// consumed once the returned iterator is advanced. Every combinator in the
/// lazyit ecosystem, as well as any `FnOnce(I) -> impl IntoIterator`
/// closure, implements this trait.
pub trait Pipe<I: Iterator> {
    type Output: Iterator;

    fn apply(self, source: I) -> Self::Output;
}

/// Reduces a sequence into a single, unwrapped value.
///
/// Folds are terminal and eager: after one runs, a single-pass source is
/// exhausted (or abandoned, for folds that stop early).
pub trait Fold<I: Iterator> {
    type Output;

    fn apply(self, source: I) -> Self::Output;
}

impl<I, F, O> Pipe<I> for F
where
    I: Iterator,
    F: FnOnce(I) -> O,
    O: IntoIterator,
{
    type Output = O::IntoIter;

    fn apply(self, source: I) -> Self::Output {
        self(source).into_iter()
    }
}

impl<I, F, U> Fold<I> for F
where
    I: Iterator,
    F: FnOnce(I) -> U,
{
    type Output = U;

    fn apply(self, source: I) -> Self::Output {
        self(source)
    }
}

/// A pipe that passes its source through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

pub fn identity() -> Identity {
    Identity
}

impl<I: Iterator> Pipe<I> for Identity {
    type Output = I;

    fn apply(self, source: I) -> Self::Output {
        source
    }
}

/// A pipe composed of two sequential pipes.
///
/// The output of `first` becomes the source of `second`.
#[derive(Debug, Clone)]
pub struct PipeSequence<A, B> {
    first: A,
    second: B,
}

/// Compose two pipes into one, applying `first` and then `second`.
pub fn compose<A, B>(first: A, second: B) -> PipeSequence<A, B> {
    PipeSequence { first, second }
}

impl<A, B> PipeSequence<A, B> {
    /// Append another pipe after this sequence.
    pub fn then<C>(self, next: C) -> PipeSequence<Self, C> {
        compose(self, next)
    }

    /// Terminate this sequence with a fold, producing a fold.
    pub fn then_fold<F>(self, fold: F) -> PipedFold<Self, F> {
        compose_fold(self, fold)
    }
}

impl<I, A, B> Pipe<I> for PipeSequence<A, B>
where
    I: Iterator,
    A: Pipe<I>,
    B: Pipe<A::Output>,
{
    type Output = B::Output;

    fn apply(self, source: I) -> Self::Output {
        let intermediate = Pipe::apply(self.first, source);
        Pipe::apply(self.second, intermediate)
    }
}

/// A fold preceded by a pipe.
#[derive(Debug, Clone)]
pub struct PipedFold<P, F> {
    pipe: P,
    fold: F,
}

/// Feed the output of `pipe` into `fold`, producing a single fold.
pub fn compose_fold<P, F>(pipe: P, fold: F) -> PipedFold<P, F> {
    PipedFold { pipe, fold }
}

impl<I, P, F> Fold<I> for PipedFold<P, F>
where
    I: Iterator,
    P: Pipe<I>,
    F: Fold<P::Output>,
{
    type Output = F::Output;

    fn apply(self, source: I) -> Self::Output {
        Fold::apply(self.fold, Pipe::apply(self.pipe, source))
    }
}
