use log::trace;
use maybe::{bind, just, map, match_with, nothing, Maybe};

mod common;

fn samples() -> Vec<Maybe<i64>> {
    vec![
        nothing(),
        just(0),
        just(1),
        just(-7),
        just(i64::MAX),
        just(i64::MIN),
    ]
}

fn halve(x: i64) -> Maybe<i64> {
    if x % 2 == 0 {
        just(x / 2)
    } else {
        nothing()
    }
}

fn positive(x: i64) -> Maybe<u64> {
    u64::try_from(x).ok().filter(|x| *x > 0).into()
}

#[test]
fn functor_identity() {
    common::init();
    let id = map(|x: i64| x);
    for m in samples() {
        trace!("functor identity for {m:?}");
        assert_eq!(id(m), m);
    }
}

#[test]
fn functor_composition() {
    common::init();
    let f = |x: i64| x.wrapping_mul(3);
    let g = |x: i64| x.to_string();

    let composed = map(move |x| g(f(x)));
    let separately = |m| map(g)(map(f)(m));
    for m in samples() {
        trace!("functor composition for {m:?}");
        assert_eq!(composed(m), separately(m));
    }
}

#[test]
fn monad_left_identity() {
    common::init();
    for x in [0, 1, 2, -4, i64::MAX] {
        assert_eq!(bind(halve)(just(x)), halve(x));
        assert_eq!(bind(positive)(just(x)), positive(x));
    }
}

#[test]
fn monad_right_identity() {
    common::init();
    let rewrap = bind(just::<i64>);
    for m in samples() {
        assert_eq!(rewrap(m), m);
    }
}

#[test]
fn monad_associativity() {
    common::init();
    for m in samples() {
        let left = bind(positive)(bind(halve)(m));
        let right = bind(|x| bind(positive)(halve(x)))(m);
        assert_eq!(left, right);
    }
}

#[test]
fn match_eliminates() {
    common::init();
    let on_nothing = || -1i64;
    let on_just = |x: i64| x.saturating_add(1);
    let eliminate = match_with(on_nothing, on_just);

    assert_eq!(eliminate(just(41)), on_just(41));
    assert_eq!(eliminate(nothing()), on_nothing());
}

#[test]
fn match_expresses_value_or() {
    common::init();
    for m in samples() {
        let fallback = 99;
        let via_match = match_with(|| fallback, |x| x)(m);
        assert_eq!(via_match, m.value_or(fallback));
    }
}

#[test]
fn map_and_bind_agree() {
    common::init();
    let f = |x: i64| x.wrapping_sub(1);
    for m in samples() {
        assert_eq!(map(f)(m), bind(move |x| just(f(x)))(m));
    }
}
