use lazyit_core::config::SeqConfig;
use lazyit_core::error::LazyError;
use lazyit_core::sequence::{Fold, Pipe, compose, compose_fold, identity};
use proptest::prelude::*;

type Source = std::vec::IntoIter<i32>;

// ---------------------------------------------------------------------------
// Helper pipes for property-based tests
// ---------------------------------------------------------------------------

/// Adds a constant to every element.
#[derive(Clone, Copy)]
struct AddN(i32);

impl<I: Iterator<Item = i32>> Pipe<I> for AddN {
    type Output = std::iter::Map<I, Box<dyn FnMut(i32) -> i32>>;

    fn apply(self, source: I) -> Self::Output {
        let n = self.0;
        let add: Box<dyn FnMut(i32) -> i32> = Box::new(move |x: i32| x.wrapping_add(n));
        source.map(add)
    }
}

/// Keeps only the first `n` elements.
#[derive(Clone, Copy)]
struct FirstN(usize);

impl<I: Iterator> Pipe<I> for FirstN {
    type Output = std::iter::Take<I>;

    fn apply(self, source: I) -> Self::Output {
        source.take(self.0)
    }
}

// ---------------------------------------------------------------------------
// Property-based tests
// ---------------------------------------------------------------------------

proptest! {
    // 1. Composition associativity:
    //    compose(compose(a, b), c) ≡ compose(a, compose(b, c))
    #[test]
    fn compose_associativity(
        input in prop::collection::vec(any::<i32>(), 0..32),
        a in -100i32..100,
        b in -100i32..100,
        n in 0usize..40,
    ) {
        let left: Vec<i32> =
            Pipe::apply(compose(compose(AddN(a), AddN(b)), FirstN(n)), input.clone().into_iter())
                .collect();
        let right: Vec<i32> =
            Pipe::apply(compose(AddN(a), compose(AddN(b), FirstN(n))), input.into_iter())
                .collect();
        prop_assert_eq!(left, right);
    }

    // 2. Identity is a left and right unit for composition
    #[test]
    fn identity_is_unit(input in prop::collection::vec(any::<i32>(), 0..32), a in -100i32..100) {
        let direct: Vec<i32> = Pipe::apply(AddN(a), input.clone().into_iter()).collect();
        let left: Vec<i32> =
            Pipe::apply(compose(identity(), AddN(a)), input.clone().into_iter()).collect();
        let right: Vec<i32> =
            Pipe::apply(compose(AddN(a), identity()), input.into_iter()).collect();
        prop_assert_eq!(&left, &direct);
        prop_assert_eq!(&right, &direct);
    }

    // 3. A piped fold equals running the pipe and then the fold
    #[test]
    fn piped_fold_matches_manual(input in prop::collection::vec(-1000i32..1000, 0..32), n in 0usize..40) {
        let sum = |s: std::iter::Take<Source>| s.map(i64::from).sum::<i64>();
        let fused = Fold::apply(compose_fold(FirstN(n), sum), input.clone().into_iter());
        let manual: i64 = input.iter().take(n).map(|&x| i64::from(x)).sum();
        prop_assert_eq!(fused, manual);
    }

    // 4. Config tags survive a serde round-trip
    #[test]
    fn config_serde_roundtrip(name in "[a-z]{1,12}", tags in prop::collection::vec("[a-z0-9_]{1,8}", 0..5)) {
        let config = tags
            .iter()
            .fold(SeqConfig::new().with_name(name.clone()), |c, t| c.with_tag(t.clone()));
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SeqConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed.label(), name.as_str());
        prop_assert_eq!(parsed.tags, tags);
    }

    // 5. Callback errors always report the index they were built with
    #[test]
    fn callback_error_index_preserved(index in any::<usize>(), msg in "[a-z ]{0,20}") {
        let err = LazyError::callback(index, msg.clone());
        prop_assert_eq!(err.index(), index);
        prop_assert!(err.to_string().contains(&msg));
    }
}
