//! Defines the [`Maybe`] type

use crate::error::NothingError;

/// A value that may or may not be present
///
/// `Maybe` is either [`Maybe::Just`], holding a value, or [`Maybe::Nothing`].
/// It converts freely from and into [`Option`], but it adds a few things
/// that `Option` does not have:
///
/// - constructors that collapse nilable payloads (see
///   [`Maybe::from_nullable`]),
/// - a zero-value accessor, [`Maybe::value`],
/// - curried combinators in [`crate::combinators`],
/// - JSON helpers in [`crate::codec`].
///
/// All operations return new values; a `Maybe` is never changed in place,
/// with the exception of [`Maybe::decode_into`], which replaces the whole
/// value and only does so when decoding succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub enum Maybe<T> {
    Just(T),
    Nothing,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> Maybe<T> {
    /// Wrap `value` as present.
    ///
    /// This never inspects `value`. When `T` is itself nilable, use
    /// [`Maybe::from_nullable`] to turn a null payload into `Nothing`.
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Build a `Maybe` from a value and a success flag
    ///
    /// A `false` flag always gives `Nothing`, whatever `value` is. Callers
    /// without a flag use [`Maybe::just`].
    pub fn from_tuple(value: T, ok: bool) -> Self {
        if ok {
            Self::Just(value)
        } else {
            Self::Nothing
        }
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    pub const fn is_just(&self) -> bool {
        self.has_value()
    }

    pub const fn is_nothing(&self) -> bool {
        !self.has_value()
    }

    /// Return the stored value, or `T::default()` if there is none.
    ///
    /// **This does not fail on `Nothing`.** A `Maybe<i32>` without a value
    /// gives `0`, a `Maybe<String>` gives `""`. If the default cannot be told
    /// apart from a real value in your context, check
    /// [`Maybe::has_value`] first or use [`Maybe::try_value`].
    pub fn value(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Just(x) => x,
            Self::Nothing => T::default(),
        }
    }

    /// Return the stored value, or an error if there is none.
    pub fn try_value(self) -> Result<T, NothingError> {
        match self {
            Self::Just(x) => Ok(x),
            Self::Nothing => Err(NothingError::new::<T>()),
        }
    }

    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Just(x) => x,
            Self::Nothing => fallback,
        }
    }

    pub fn value_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Self::Just(x) => x,
            Self::Nothing => fallback(),
        }
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(x) => Maybe::Just(x),
            Self::Nothing => Maybe::Nothing,
        }
    }

    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Just(x) => Maybe::Just(x),
            Self::Nothing => Maybe::Nothing,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: Option::from(self.as_ref()).into_iter(),
        }
    }

    /// Apply `f` to the stored value, if any, and wrap the result with
    /// [`Maybe::just`].
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Just(x) => Maybe::just(f(x)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Apply `f` to the stored value, if any, and return its result as is.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Just(x) => f(x),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Consume the `Maybe` by calling exactly one of the two functions.
    pub fn match_with<B>(
        self,
        on_nothing: impl FnOnce() -> B,
        on_just: impl FnOnce(T) -> B,
    ) -> B {
        match self {
            Self::Just(x) => on_just(x),
            Self::Nothing => on_nothing(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Self::Just(x),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Just(x) => Some(x),
            Maybe::Nothing => None,
        }
    }
}

impl<T> From<(T, bool)> for Maybe<T> {
    fn from((value, ok): (T, bool)) -> Self {
        Self::from_tuple(value, ok)
    }
}

/// Iterator over the value of a [`Maybe`], yielding at most one item
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::option::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Owning iterator over the value of a [`Maybe`]
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::option::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: Option::from(self).into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
