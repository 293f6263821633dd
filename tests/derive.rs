use std::sync::Arc;

use maybe::{map_nullable, nullable, Maybe, Nullable};

/// A handle that is null when it has no id
#[derive(Debug, Clone, PartialEq, Nullable)]
struct Handle(Option<u32>);

#[derive(Debug, PartialEq, Nullable)]
struct Lookup<T> {
    #[nullable]
    found: Maybe<T>,
    attempts: usize,
}

#[derive(Nullable)]
struct Shared {
    inner: Arc<Option<String>>,
}

#[test]
fn tuple_struct() {
    assert!(Handle(None).is_null());
    assert!(!Handle(Some(3)).is_null());

    assert_eq!(nullable(Handle(None)), Maybe::nothing());
    assert_eq!(nullable(Handle(Some(3))), Maybe::just(Handle(Some(3))));
}

#[test]
fn marked_field_in_generic_struct() {
    let missing = Lookup::<String> {
        found: Maybe::nothing(),
        attempts: 3,
    };
    assert!(missing.is_null());

    let hit = Lookup {
        found: Maybe::just(1),
        attempts: 1,
    };
    assert_eq!(Maybe::from_nullable(hit).map(|l| l.attempts), Maybe::just(1));
}

#[test]
fn single_named_field() {
    let shared = Shared {
        inner: Arc::new(None),
    };
    assert!(shared.is_null());
    assert!(Maybe::from_nullable_tuple(shared, true).is_nothing());
}

#[test]
fn map_into_derived_type() {
    let to_handle = map_nullable(|id: i64| Handle(u32::try_from(id).ok()));
    assert_eq!(to_handle(Maybe::just(7)), Maybe::just(Handle(Some(7))));
    assert_eq!(to_handle(Maybe::just(-7)), Maybe::nothing());
    assert_eq!(to_handle(Maybe::nothing()), Maybe::nothing());
}
