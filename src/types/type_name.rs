//! Namespaced type identifiers, e.g. `My::Fancy::FooThing`.

use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Delimiter between namespace segments.
pub const NAMESPACE_DELIMITER: &str = "::";

/// A type identifier split into its namespace path and final name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeIdentifier {
    name: String,
    namespace: Vec<String>,
}

impl TypeIdentifier {
    /// Construct from its parts.
    pub fn new(name: impl Into<String>, namespace: Option<Vec<String>>) -> Self {
        TypeIdentifier {
            name: name.into(),
            namespace: namespace.unwrap_or_default(),
        }
    }

    /// Split a `::`-delimited identifier. Any string decomposes.
    pub fn parse(s: &str) -> Self {
        let mut segments: Vec<String> = s.split(NAMESPACE_DELIMITER).map(str::to_string).collect();
        let name = segments.pop().unwrap_or_default();
        TypeIdentifier::new(name, Some(segments))
    }

    /// The identifier of a Rust type, as reported by `std::any::type_name`.
    pub fn of<T: ?Sized>() -> Self {
        TypeIdentifier::parse(std::any::type_name::<T>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    /// Every segment, outermost namespace first, ending with the name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.namespace
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
    }
}

impl Display for TypeIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.segments().join(NAMESPACE_DELIMITER))
    }
}
