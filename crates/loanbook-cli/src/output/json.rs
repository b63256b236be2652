//! JSON output formatting.

use loanbook_core::aggregate::{BORROW_TREND_TITLE, MOST_BORROWED_TITLE, TOP_STUDENTS_TITLE};
use loanbook_core::{Analytics, ExportArtifact, LoanRecord};

/// Convert one loan record to JSON for output.
pub fn record_json(index: usize, record: &LoanRecord) -> serde_json::Value {
    serde_json::json!({
        "row": index + 1,
        "student_name": record.student_name,
        "book_name": record.book_name,
        "date_borrowed": record.date_borrowed,
        "date_returned": record.date_returned,
    })
}

/// Convert a run of records to a JSON array. `offset` is the index of the
/// first record within the full ledger.
pub fn records_json(offset: usize, records: &[LoanRecord]) -> Vec<serde_json::Value> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| record_json(offset + i, record))
        .collect()
}

/// The three charts, keyed by purpose and carrying their titles.
pub fn analytics_json(analytics: &Analytics) -> serde_json::Value {
    serde_json::json!({
        "most_borrowed": {
            "title": MOST_BORROWED_TITLE,
            "data": analytics.most_borrowed,
        },
        "borrow_trend": {
            "title": BORROW_TREND_TITLE,
            "data": analytics.borrow_trend,
        },
        "top_students": {
            "title": TOP_STUDENTS_TITLE,
            "data": analytics.top_students,
        },
    })
}

/// Description of a written export.
pub fn export_json(artifact: &ExportArtifact, destination: &str) -> serde_json::Value {
    serde_json::json!({
        "path": destination,
        "file_name": artifact.file_name,
        "mime_type": artifact.mime_type,
        "bytes": artifact.len(),
    })
}
