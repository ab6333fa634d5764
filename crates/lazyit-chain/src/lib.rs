//! Lazy, pull-based pipes and folds over Rust iterators.
//!
//! ```
//! use lazyit_chain::prelude::*;
//!
//! let firsts: Vec<u64> = lazy(1..)
//!     .pipe(map(|x: u64| x * x))
//!     .pipe(take_while(|x: &u64| *x < 50))
//!     .to_vec();
//! assert_eq!(firsts, vec![1, 4, 9, 16, 25, 36, 49]);
//! ```

pub mod folds;
pub mod lazy;
pub mod pipes;

pub mod prelude {
    pub use crate::folds::{Last, Reduce, TryReduce, last, reduce, try_reduce};
    pub use crate::lazy::{LazyExt, LazySeq, lazy, lazy_with};
    pub use crate::pipes::{
        FlatMap, FlatMapIter, Map, MapIter, TakeWhile, TakeWhileIter, TryMap, TryMapIter, flat_map,
        map, take_while, try_map,
    };
    pub use lazyit_core::prelude::*;
}
