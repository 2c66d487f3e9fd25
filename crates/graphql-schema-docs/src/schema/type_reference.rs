use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a named type, possibly wrapped in lists and non-null
/// markers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeReference {
    Named(String),
    List(Box<TypeReference>),
    NonNull(Box<TypeReference>),
}

impl TypeReference {
    pub fn named(name: impl Into<String>) -> Self {
        TypeReference::Named(name.into())
    }

    /// Wraps `self` in a list: `T` becomes `[T]`.
    #[must_use]
    pub fn list(self) -> Self {
        TypeReference::List(Box::new(self))
    }

    /// Wraps `self` in a non-null marker: `T` becomes `T!`.
    #[must_use]
    pub fn non_null(self) -> Self {
        TypeReference::NonNull(Box::new(self))
    }
}

/// Full SDL notation, e.g. `[String!]!`.
impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Named(name) => f.write_str(name),
            TypeReference::List(inner) => write!(f, "[{inner}]"),
            TypeReference::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
