//! Report Generator
//!
//! Reads the checklist through the repositories, aggregates it, and renders
//! a Markdown status report:
//! - summary: counts, completion percentage, flagged and upcoming items
//! - document: section/block model of the report
//! - builder: summary -> document
//! - render: document -> Markdown

mod summary;
mod document;
mod builder;
mod render;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;
use crate::repository::{ItemRepository, PropertyRepository, Repository};

pub use summary::{
    completion_percentage, summarize, CategorySummary, ChecklistSummary, StatusCounts, DUE_SOON_DAYS,
};
pub use document::{Block, Entry, ReportDocument, Section, SectionKind};
pub use builder::{build_report, REPORT_TITLE};
pub use render::render_markdown;

/// A rendered report ready for display or download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub property_name: String,
    pub generated_at: NaiveDateTime,
    pub file_name: String,
    pub document: ReportDocument,
    pub markdown: String,
}

/// `DD_Report_<property name>_<YYYYMMDD>.md`
///
/// Spaces, path separators and characters that file systems reject become
/// underscores, so the result is always a single path component.
pub fn report_file_name(property_name: &str, date: NaiveDate) -> String {
    let name: String = property_name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("DD_Report_{}_{}.md", name, date.format("%Y%m%d"))
}

/// Builds reports from the current store contents
pub struct ReportGenerator<'a> {
    items: &'a ItemRepository,
    property: &'a PropertyRepository,
    window_days: u64,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(items: &'a ItemRepository, property: &'a PropertyRepository) -> Self {
        Self {
            items,
            property,
            window_days: DUE_SOON_DAYS,
        }
    }

    pub fn with_window_days(mut self, days: u64) -> Self {
        self.window_days = days;
        self
    }

    /// Aggregate the current checklist as of `today`
    pub fn summary(&self, today: NaiveDate) -> DomainResult<ChecklistSummary> {
        let items = self.items.list()?;
        Ok(summarize(&items, today, self.window_days))
    }

    /// `today` drives both the deadline window and the file name date
    pub fn generate(&self, today: NaiveDate, generated_at: NaiveDateTime) -> DomainResult<GeneratedReport> {
        let property_name = self.property.load()?.property_name;
        let summary = self.summary(today)?;
        let document = build_report(&property_name, &summary, generated_at);
        let markdown = render_markdown(&document);
        log::info!(
            "Generated report for '{}': {} items, {} flagged, {} due soon",
            property_name,
            summary.total(),
            summary.flagged.len(),
            summary.upcoming.len()
        );

        Ok(GeneratedReport {
            file_name: report_file_name(&property_name, today),
            property_name,
            generated_at,
            document,
            markdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

    use crate::domain::{ItemStatus, ItemUpdate, NewItem};
    use crate::repository::{initialize, DbState};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    fn generated_at() -> NaiveDateTime {
        today().and_hms_opt(15, 30, 0).unwrap()
    }

    struct Fixture {
        items: ItemRepository,
        property: PropertyRepository,
    }

    impl Fixture {
        fn blank() -> Self {
            let db = DbState::open_in_memory().unwrap();
            initialize(&db, today()).unwrap();
            db.lock().unwrap().execute("DELETE FROM dd_items", []).unwrap();
            Self {
                items: ItemRepository::new(db.clone()),
                property: PropertyRepository::new(db),
            }
        }

        fn add(&self, category: &str, name: &str, status: ItemStatus, due_in: Option<u64>) {
            let mut new = NewItem::new(category, name).with_status(status);
            if let Some(days) = due_in {
                new = new.with_due_date(today().checked_add_days(Days::new(days)).unwrap());
            }
            self.items.add(new, generated_at()).unwrap();
        }

        fn report(&self) -> GeneratedReport {
            ReportGenerator::new(&self.items, &self.property)
                .generate(today(), generated_at())
                .unwrap()
        }
    }

    fn headings(markdown: &str, level: HeadingLevel) -> Vec<String> {
        let mut out = Vec::new();
        let mut current: Option<String> = None;
        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Heading { level: l, .. }) if l == level => current = Some(String::new()),
                Event::Text(text) => {
                    if let Some(h) = current.as_mut() {
                        h.push_str(&text);
                    }
                }
                Event::End(TagEnd::Heading(l)) if l == level => out.extend(current.take()),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn test_completion_percentage_in_report() {
        let fx = Fixture::blank();
        for i in 0..10 {
            let status = if i < 3 { ItemStatus::Complete } else { ItemStatus::InProgress };
            fx.add("Financial", &format!("Item {}", i), status, None);
        }
        let report = fx.report();
        assert!(report.markdown.contains("- **Completed:** 3 (30.0%)"));
        assert!(report.markdown.contains("- **Total Items:** 10"));
        assert!(report.markdown.contains("- **Progress:** 3/10 (30%)"));
    }

    #[test]
    fn test_upcoming_excludes_complete() {
        let fx = Fixture::blank();
        fx.add("Legal", "Draft Estoppel", ItemStatus::InProgress, Some(3));
        fx.add("Legal", "Signed Estoppel", ItemStatus::Complete, Some(3));
        let report = fx.report();

        let upcoming = report.document.section(SectionKind::UpcomingDeadlines).unwrap();
        let Block::List { entries } = &upcoming.blocks[0] else {
            panic!("expected a list of upcoming items");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Draft Estoppel");
        assert!(!report.markdown.contains("Signed Estoppel"));
    }

    #[test]
    fn test_flagged_item_listed_once() {
        let fx = Fixture::blank();
        fx.add("Environmental", "Phase I ESA", ItemStatus::IssueFlagged, Some(1));
        fx.add("Zoning", "Parking Analysis", ItemStatus::NotStarted, None);
        let report = fx.report();

        let titles = headings(&report.markdown, HeadingLevel::H3);
        let flagged: Vec<_> = titles.iter().filter(|t| t.as_str() == "Environmental: Phase I ESA").collect();
        assert_eq!(flagged.len(), 1);
        assert!(!report.markdown.contains("No issues flagged"));
    }

    #[test]
    fn test_sections_in_order() {
        let fx = Fixture::blank();
        fx.property.save_name("Cedar Court", generated_at()).unwrap();
        fx.add("Zoning", "Certificate of Occupancy", ItemStatus::UnderReview, None);
        fx.add("Insurance", "Insurance Quote", ItemStatus::NotStarted, None);
        let report = fx.report();

        assert_eq!(headings(&report.markdown, HeadingLevel::H1), vec![REPORT_TITLE.to_string()]);
        assert_eq!(
            headings(&report.markdown, HeadingLevel::H2),
            vec![
                "Cedar Court",
                "Executive Summary",
                "Status by Category",
                "Flagged Issues",
                "Overdue Items",
                "Items Due in Next 7 Days",
            ]
        );
        let h3 = headings(&report.markdown, HeadingLevel::H3);
        assert_eq!(h3, vec!["Insurance", "Zoning"]);
        assert!(report.markdown.contains("**Generated:** 2024-06-03 15:30:00"));
        assert_eq!(report.file_name, "DD_Report_Cedar_Court_20240603.md");
    }

    #[test]
    fn test_empty_store_report() {
        let fx = Fixture::blank();
        let report = fx.report();
        assert!(report.markdown.contains("No items are being tracked"));
        assert!(report.markdown.contains("No issues flagged"));
        assert!(report.markdown.contains("No overdue items"));
        assert!(report.markdown.contains("No items due in the next 7 days"));
        assert!(report.markdown.ends_with("*End of Report*\n"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let fx = Fixture::blank();
        fx.add("Legal", "Entity Formation", ItemStatus::IssueFlagged, Some(2));
        fx.add("Financial", "Rent Roll", ItemStatus::Complete, Some(1));
        let first = fx.report();
        let second = fx.report();
        assert_eq!(first.markdown, second.markdown);
        assert_eq!(first.document, second.document);
    }

    #[test]
    fn test_report_tracks_updates() {
        let fx = Fixture::blank();
        fx.add("Legal", "Entity Formation", ItemStatus::NotStarted, None);
        let id = fx.items.list().unwrap()[0].id;
        fx.items
            .apply_update(id, &ItemUpdate::status(ItemStatus::Complete), generated_at())
            .unwrap();
        assert!(fx.report().markdown.contains("- **Completed:** 1 (100.0%)"));
    }

    #[test]
    fn test_custom_window() {
        let fx = Fixture::blank();
        fx.add("Legal", "Closing Binder", ItemStatus::NotStarted, Some(10));
        let generator = ReportGenerator::new(&fx.items, &fx.property).with_window_days(14);
        let summary = generator.summary(today()).unwrap();
        assert_eq!(summary.upcoming.len(), 1);
    }

    #[test]
    fn test_overdue_items_named_in_report() {
        let fx = Fixture::blank();
        fx.add("Legal", "Title Cure", ItemStatus::InProgress, None);
        let id = fx.items.list().unwrap()[0].id;
        let update = ItemUpdate {
            responsible_party: Some(Some("Escrow Officer".into())),
            due_date: Some(today().checked_sub_days(Days::new(2))),
            ..Default::default()
        };
        fx.items.apply_update(id, &update, generated_at()).unwrap();

        let report = fx.report();
        let overdue = report.document.section(SectionKind::OverdueItems).unwrap();
        let Block::List { entries } = &overdue.blocks[0] else {
            panic!("expected a list of overdue items");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Title Cure");
        assert!(report.markdown.contains("  - Responsible: Escrow Officer"));
        assert!(report.markdown.contains("  - Was due: 2024-06-01"));
        assert!(report.markdown.contains("- **Overdue:** 1"));
        assert!(!report.markdown.contains("No overdue items"));
    }

    #[test]
    fn test_file_name_uses_report_day() {
        let fx = Fixture::blank();
        // Late evening locally, already the next day in UTC
        let utc_next_day = today().succ_opt().unwrap().and_hms_opt(1, 0, 0).unwrap();
        let report = ReportGenerator::new(&fx.items, &fx.property)
            .generate(today(), utc_next_day)
            .unwrap();
        assert_eq!(report.file_name, "DD_Report_Property_Name_20240603.md");
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("Property Name", today()),
            "DD_Report_Property_Name_20240603.md"
        );
        assert_eq!(
            report_file_name("Unit 4/5 Main St", today()),
            "DD_Report_Unit_4_5_Main_St_20240603.md"
        );
        assert_eq!(report_file_name("../x", today()), "DD_Report_.._x_20240603.md");
        assert_eq!(
            report_file_name(r#"A\B:C*D?"E"<F>|G"#, today()),
            "DD_Report_A_B_C_D__E__F__G_20240603.md"
        );
    }
}
