//! An optional value type
//!
//! [`Maybe<T>`] is either `Just(value)` or `Nothing`. Next to the usual
//! constructors and accessors it provides:
//!
//! - collapsing of nilable payloads through the [`Nullable`] trait, so that
//!   a present `None` does not end up as `Just(None)`,
//! - curried combinators ([`map`], [`bind`], [`match_with`]),
//! - serde support and JSON helpers ([`encode`], [`decode`]).
//!
//! ```
//! use maybe::Maybe;
//!
//! let port = Maybe::just("8443")
//!     .bind(|p| Maybe::from(p.parse::<u16>().ok()));
//! assert_eq!(port.value_or(8080), 8443);
//!
//! let port = Maybe::just("http")
//!     .bind(|p| Maybe::from(p.parse::<u16>().ok()));
//! assert_eq!(port.value_or(8080), 8080);
//! ```
//!
//! Note that [`Maybe::value`] returns `T::default()` for `Nothing` instead
//! of failing. Use [`Maybe::try_value`] when that is not acceptable.

// Needed for the maybe macros
extern crate self as maybe;

pub mod codec;
pub mod combinators;
mod container;
mod error;
mod nullable;


pub use codec::{
    decode, decode_str, encode, encode_to_string, DecodeError, EncodeError,
};
pub use combinators::{
    bind, just, map, map_nullable, match_with, nothing, nullable,
};
pub use container::{IntoIter, Iter, Maybe};
pub use error::NothingError;
pub use maybe_macros::Nullable;
pub use nullable::Nullable;
