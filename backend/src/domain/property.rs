//! Property domain entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

pub const DEFAULT_PROPERTY_NAME: &str = "Property Name";

/// The property under review. There is only ever one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub property_name: String,
    pub last_updated: NaiveDateTime,
}

impl Entity for PropertyInfo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        1
    }
}

impl PropertyInfo {
    pub fn new(property_name: String, last_updated: NaiveDateTime) -> Self {
        Self {
            property_name,
            last_updated,
        }
    }
}

/// Trimmed, non-empty property name
pub fn validate_property_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("property name must not be empty"));
    }
    Ok(trimmed.to_string())
}
