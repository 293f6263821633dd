use std::fmt::Display;

/// Error returned by [`Maybe::try_value`](crate::Maybe::try_value) when
/// there is no value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NothingError {
    type_name: &'static str,
}

impl NothingError {
    pub(crate) fn new<T>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the type that was requested.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Display for NothingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "value is absent (expected `{}`)", self.type_name)
    }
}

impl std::error::Error for NothingError {}
