//! Category label
//!
//! Categories are free text. The known list only feeds UI suggestions and is
//! never enforced.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{DomainError, DomainResult};

/// Standard due diligence categories, in seed order
pub const KNOWN_CATEGORIES: [&str; 8] = [
    "Title & Survey",
    "Environmental",
    "Zoning",
    "Financial",
    "Lease Review",
    "Physical/Engineering",
    "Legal",
    "Insurance",
];

/// A trimmed, non-empty category label (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(label: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("category must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this label is one of the standard categories
    pub fn is_known(&self) -> bool {
        KNOWN_CATEGORIES.contains(&self.0.as_str())
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::new(value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Merge categories in use with the standard list, sorted and deduplicated
pub fn suggest_categories(in_use: &[String]) -> Vec<String> {
    let mut all: Vec<String> = KNOWN_CATEGORIES
        .iter()
        .map(|c| c.to_string())
        .chain(in_use.iter().cloned())
        .collect();
    all.sort();
    all.dedup();
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_trims_and_rejects_empty() {
        assert_eq!(Category::new("  Legal ").unwrap().as_str(), "Legal");
        assert!(Category::new("   ").is_err());
    }

    #[test]
    fn test_unknown_category_allowed() {
        let cat = Category::new("Tenant Interviews").unwrap();
        assert!(!cat.is_known());
        assert!(Category::new("Environmental").unwrap().is_known());
    }

    #[test]
    fn test_category_is_case_sensitive() {
        assert_ne!(Category::new("legal").unwrap(), Category::new("Legal").unwrap());
    }

    #[test]
    fn test_suggest_categories() {
        let merged = suggest_categories(&["Legal".to_string(), "Capital Plan".to_string()]);
        assert_eq!(merged.len(), 9);
        assert_eq!(merged[0], "Capital Plan");
        assert!(merged.windows(2).all(|w| w[0] < w[1]));
    }
}
