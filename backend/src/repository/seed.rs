//! Standard due diligence checklist
//!
//! Inserted once into an empty store. Due dates are offsets from the day the
//! store is initialized.

use chrono::{Days, NaiveDate};

pub struct SeedItem {
    pub category: &'static str,
    pub item_name: &'static str,
    pub due_in_days: u64,
    pub notes: &'static str,
}

impl SeedItem {
    pub fn due_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        today.checked_add_days(Days::new(self.due_in_days))
    }
}

const fn seed(category: &'static str, item_name: &'static str, due_in_days: u64, notes: &'static str) -> SeedItem {
    SeedItem {
        category,
        item_name,
        due_in_days,
        notes,
    }
}

pub const SEED_ITEMS: [SeedItem; 29] = [
    seed("Title & Survey", "Title Commitment Review", 7, "Review title commitment for exceptions and encumbrances"),
    seed("Title & Survey", "ALTA Survey", 14, "Obtain current ALTA/NSPS Land Title Survey"),
    seed("Title & Survey", "Zoning Report", 10, "Third-party zoning compliance report"),
    seed("Title & Survey", "Title Policy Review", 30, "Review proposed title policy and endorsements"),
    seed("Environmental", "Phase I ESA", 21, "Environmental Site Assessment per ASTM E1527-21"),
    seed("Environmental", "Phase II ESA (if needed)", 35, "Soil and groundwater testing if Phase I identifies concerns"),
    seed("Environmental", "Asbestos Survey", 14, "Building materials testing for ACM"),
    seed("Environmental", "Environmental Compliance Review", 15, "Review permits, violations, and remediation status"),
    seed("Environmental", "Wetlands Delineation", 20, "If applicable based on property location"),
    seed("Zoning", "Zoning Compliance Verification", 10, "Verify current use is legally conforming"),
    seed("Zoning", "Certificate of Occupancy", 7, "Obtain and review current CO"),
    seed("Zoning", "Parking Requirement Analysis", 10, "Verify compliance with parking code requirements"),
    seed("Financial", "Rent Roll Verification", 5, "Verify current rent roll against leases"),
    seed("Financial", "Operating Statements (3 years)", 7, "Review historical income and expense statements"),
    seed("Financial", "Tax Bill Review", 10, "Review current and historical property tax bills"),
    seed("Financial", "Utility Bills Analysis", 14, "Review 12 months of utility bills"),
    seed("Lease Review", "Estoppel Certificates", 21, "Obtain from all tenants representing >80% of NRA"),
    seed("Lease Review", "Lease Abstraction", 14, "Abstract all leases with key terms"),
    seed("Lease Review", "SNDA Agreements", 25, "Review subordination, non-disturbance agreements"),
    seed("Physical/Engineering", "Property Condition Assessment", 21, "ASTM E2018 PCA by qualified engineer"),
    seed("Physical/Engineering", "Roof Inspection", 14, "Detailed roof condition assessment"),
    seed("Physical/Engineering", "HVAC Systems Review", 14, "Review age, condition, and maintenance records"),
    seed("Physical/Engineering", "ADA Compliance Survey", 18, "Accessibility compliance assessment"),
    seed("Legal", "Purchase Agreement Review", 3, "Legal review of PSA terms and conditions"),
    seed("Legal", "Entity Formation", 20, "Form acquisition entity (LLC/LP)"),
    seed("Legal", "Service Contracts Review", 14, "Review all property management and service contracts"),
    seed("Legal", "Litigation & Lien Search", 14, "Search for pending litigation, judgments, and mechanics liens"),
    seed("Insurance", "Insurance Quote", 21, "Obtain property and liability insurance quotes"),
    seed("Insurance", "Loss Runs Review", 10, "Review 5-year property loss history"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KNOWN_CATEGORIES;
    use std::collections::BTreeSet;

    #[test]
    fn test_seed_covers_known_categories() {
        let used: BTreeSet<&str> = SEED_ITEMS.iter().map(|s| s.category).collect();
        let known: BTreeSet<&str> = KNOWN_CATEGORIES.iter().copied().collect();
        assert_eq!(used, known);
    }

    #[test]
    fn test_seed_names_unique_within_category() {
        let pairs: BTreeSet<(&str, &str)> = SEED_ITEMS.iter().map(|s| (s.category, s.item_name)).collect();
        assert_eq!(pairs.len(), SEED_ITEMS.len());
    }

    #[test]
    fn test_seed_due_dates_offset_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let psa = SEED_ITEMS.iter().find(|s| s.item_name == "Purchase Agreement Review").unwrap();
        assert_eq!(psa.due_date(today), NaiveDate::from_ymd_opt(2025, 1, 2));
    }
}
