//! Product identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog record.
///
/// Ids arrive as opaque strings in the catalog feed and in detail-view
/// routes; this wrapper keeps them from being mixed up with other string
/// data. Identity of a [`crate::types::ProductRecord`] is its id, which is
/// unique and stable across fetches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from its string form.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// The underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_the_raw_id() {
        let id = ProductId::from("meal-planner");
        assert_eq!(id.to_string(), "meal-planner");
        assert_eq!(id.as_str(), "meal-planner");
    }

    #[test]
    fn serde_is_transparent() {
        let id: ProductId = serde_json::from_str(r#""meal-planner""#).unwrap();
        assert_eq!(id, ProductId::from("meal-planner"));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""meal-planner""#);
    }
}
