use thiserror::Error;

/// Boxed error produced by a caller-supplied callback.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for the lazyit library.
///
/// The plain combinators never produce this; it only surfaces from the
/// fallible `try_*` combinators, which tag the failure with the position of
/// the element being processed.
#[derive(Debug, Error)]
pub enum LazyError {
    #[error("Callback failed at element {index}: {source}")]
    Callback { index: usize, source: BoxError },
}

impl LazyError {
    pub fn callback(index: usize, source: impl Into<BoxError>) -> Self {
        Self::Callback {
            index,
            source: source.into(),
        }
    }

    /// Zero-based position, within the failing stage's input, of the element
    /// whose callback failed.
    pub fn index(&self) -> usize {
        match self {
            Self::Callback { index, .. } => *index,
        }
    }
}

pub type Result<T, E = LazyError> = std::result::Result<T, E>;
