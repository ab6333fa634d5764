pub mod config;
pub mod error;
pub mod sequence;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::SeqConfig;
    pub use crate::error::{BoxError, LazyError, Result};
    pub use crate::sequence::{
        Fold, Identity, Pipe, PipeSequence, PipedFold, compose, compose_fold, identity,
    };
}
