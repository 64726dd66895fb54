//! Report and dashboard commands

use serde::{Deserialize, Serialize};

use crate::domain::{timestamp, DomainResult};
use crate::report::{ChecklistSummary, GeneratedReport};
use crate::AppState;

/// Data behind the dashboard view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub property_name: String,
    pub summary: ChecklistSummary,
}

/// Render the status report as of now
pub fn generate_report(state: &AppState) -> DomainResult<GeneratedReport> {
    state
        .report_generator()
        .generate(timestamp::today(), timestamp::now())
}

pub fn dashboard(state: &AppState) -> DomainResult<Dashboard> {
    let property_name = state.property().load()?.property_name;
    let summary = state.report_generator().summary(timestamp::today())?;
    Ok(Dashboard {
        property_name,
        summary,
    })
}
