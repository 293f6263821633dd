//! Curried combinators
//!
//! Each function here takes the "what to do" part up front and returns a
//! function from `Maybe` to the result, so that it can be stored, passed to
//! iterator adapters or composed:
//!
//! ```
//! use maybe::{map, Maybe};
//!
//! let double = map(|x: i32| x * 2);
//! let values: Vec<_> = [Maybe::just(1), Maybe::nothing()]
//!     .into_iter()
//!     .map(double)
//!     .collect();
//! assert_eq!(values, [Maybe::just(2), Maybe::nothing()]);
//! ```
//!
//! The method forms on [`Maybe`] do the same thing for a single value.

use crate::{Maybe, Nullable};

pub fn just<T>(value: T) -> Maybe<T> {
    Maybe::just(value)
}

pub fn nothing<T>() -> Maybe<T> {
    Maybe::nothing()
}

/// Wrap `value`, collapsing it to `Nothing` if it is null.
pub fn nullable<T: Nullable>(value: T) -> Maybe<T> {
    Maybe::from_nullable(value)
}

/// Lift `f` to work on `Maybe` values.
///
/// The returned function gives `Just(f(x))` for `Just(x)` and `Nothing`
/// otherwise. `f` is only called in the first case.
pub fn map<A, B>(f: impl Fn(A) -> B) -> impl Fn(Maybe<A>) -> Maybe<B> {
    move |m| m.map(&f)
}

/// Like [`map`], but a null result of `f` becomes `Nothing`.
pub fn map_nullable<A, B: Nullable>(
    f: impl Fn(A) -> B,
) -> impl Fn(Maybe<A>) -> Maybe<B> {
    move |m| m.map_nullable(&f)
}

/// Chain a function that itself returns a `Maybe`.
///
/// The result of `f` is returned unchanged; there is no extra wrapping or
/// collapsing.
pub fn bind<A, B>(
    f: impl Fn(A) -> Maybe<B>,
) -> impl Fn(Maybe<A>) -> Maybe<B> {
    move |m| m.bind(&f)
}

/// Eliminate a `Maybe` by handling both cases.
///
/// Exactly one of `on_nothing` and `on_just` runs per call.
pub fn match_with<A, B>(
    on_nothing: impl Fn() -> B,
    on_just: impl Fn(A) -> B,
) -> impl Fn(Maybe<A>) -> B {
    move |m| m.match_with(&on_nothing, &on_just)
}
