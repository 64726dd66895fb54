//! Property name commands

use crate::domain::{timestamp, DomainResult, PropertyInfo};
use crate::AppState;

pub fn get_property_name(state: &AppState) -> DomainResult<String> {
    Ok(state.property().load()?.property_name)
}

pub fn get_property_info(state: &AppState) -> DomainResult<PropertyInfo> {
    state.property().load()
}

pub fn set_property_name(state: &AppState, name: String) -> DomainResult<PropertyInfo> {
    state.property().save_name(&name, timestamp::now())
}
