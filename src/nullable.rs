//! Collapsing of nilable payloads
//!
//! A `Maybe<Option<u32>>` can be `Just(None)`: present, but holding nothing.
//! That is almost never what the caller meant. Types that have their own
//! notion of "null" implement [`Nullable`], and the constructors and
//! combinators in this module normalize a present null into
//! [`Maybe::Nothing`].
//!
//! Collapsing is opt-in at the type level. [`Maybe::just`] never looks at
//! its argument, so `Maybe::just(None::<u32>)` stays `Just(None)`.

use std::{rc::Rc, sync::Arc};

use crate::Maybe;

/// A type with a null value of its own
///
/// Implemented for [`Option`], [`Maybe`], raw pointers, and for references
/// and smart pointers to nilable types. Wrapper types can derive it with
/// `#[derive(Nullable)]`, which delegates to the single (or `#[nullable]`)
/// field.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullable for Maybe<T> {
    fn is_null(&self) -> bool {
        self.is_nothing()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for Rc<T> {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for Arc<T> {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Nullable> Maybe<T> {
    /// Wrap `value` as present, unless it is null.
    pub fn from_nullable(value: T) -> Self {
        if value.is_null() {
            Self::Nothing
        } else {
            Self::Just(value)
        }
    }

    /// Like [`Maybe::from_tuple`], but also collapses a null `value`.
    ///
    /// The flag is checked first: `(value, false)` is `Nothing` without
    /// looking at `value`.
    pub fn from_nullable_tuple(value: T, ok: bool) -> Self {
        if !ok {
            return Self::Nothing;
        }
        Self::from_nullable(value)
    }

    /// Turn `Just(null)` into `Nothing`; other values are returned as is.
    pub fn normalize(self) -> Self {
        self.bind(Self::from_nullable)
    }
}

impl<T> Maybe<T> {
    /// Like [`Maybe::map`], but the result goes through
    /// [`Maybe::from_nullable`].
    pub fn map_nullable<U: Nullable>(
        self,
        f: impl FnOnce(T) -> U,
    ) -> Maybe<U> {
        self.bind(|x| Maybe::from_nullable(f(x)))
    }
}
