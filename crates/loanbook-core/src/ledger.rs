//! Core data types for the loan ledger.
//!
//! A ledger is an ordered sequence of loan records. Rows have no key; a
//! record's identity is its position, which only ever shifts by appends.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{LoanbookError, Result};

/// Display name of the student column.
pub const STUDENT_NAME: &str = "Student Name";
/// Display name of the book column.
pub const BOOK_NAME: &str = "Book Name";
/// Display name of the borrow date column.
pub const DATE_BORROWED: &str = "Date Borrowed";
/// Display name of the return date column.
pub const DATE_RETURNED: &str = "Date Returned";

/// The four ledger columns, in file order.
pub const COLUMNS: [&str; 4] = [STUDENT_NAME, BOOK_NAME, DATE_BORROWED, DATE_RETURNED];

/// One student-book borrowing event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Who borrowed the book
    pub student_name: String,

    /// Which book was borrowed
    pub book_name: String,

    /// Calendar date the book left the library
    pub date_borrowed: NaiveDate,

    /// Calendar date the book came back (not checked against `date_borrowed`)
    pub date_returned: NaiveDate,
}

/// The full ordered collection of loan records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<LoanRecord>,
}

impl Ledger {
    /// An empty ledger with the four canonical columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<LoanRecord>) -> Self {
        Self { records }
    }

    /// Column names, in file order.
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn records(&self) -> &[LoanRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoanRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&LoanRecord> {
        self.records.last()
    }

    pub(crate) fn push(&mut self, record: LoanRecord) {
        self.records.push(record);
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LoanRecord;
    type IntoIter = std::slice::Iter<'a, LoanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Input for appending one loan, before validation.
#[derive(Debug, Clone)]
pub struct NewLoan {
    pub student_name: String,
    pub book_name: String,
    pub date_borrowed: NaiveDate,
    pub date_returned: NaiveDate,
}

impl NewLoan {
    /// New loan borrowed and returned on the same day.
    pub fn new(
        student_name: impl Into<String>,
        book_name: impl Into<String>,
        date_borrowed: NaiveDate,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            book_name: book_name.into(),
            date_borrowed,
            date_returned: date_borrowed,
        }
    }

    pub fn with_returned(mut self, date_returned: NaiveDate) -> Self {
        self.date_returned = date_returned;
        self
    }

    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns `LoanbookError::Validation` if the student or book name is
    /// empty after trimming.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.student_name.trim().is_empty() {
            missing.push(STUDENT_NAME);
        }
        if self.book_name.trim().is_empty() {
            missing.push(BOOK_NAME);
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(LoanbookError::Validation(format!(
                "{} must not be empty",
                missing.join(" and ")
            )))
        }
    }

    pub(crate) fn into_record(self) -> LoanRecord {
        LoanRecord {
            student_name: self.student_name,
            book_name: self.book_name,
            date_borrowed: self.date_borrowed,
            date_returned: self.date_returned,
        }
    }
}

/// Normalize a textual date or timestamp to a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
/// (optionally with fractional seconds) and RFC 3339. Time of day is dropped.
///
/// # Errors
///
/// Returns `LoanbookError::Validation` if the text matches none of the formats.
pub fn parse_loan_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }

    Err(LoanbookError::Validation(format!(
        "Invalid date (expected YYYY-MM-DD or ISO-8601): {}",
        value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_ledger_has_fixed_columns() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(
            ledger.columns(),
            &["Student Name", "Book Name", "Date Borrowed", "Date Returned"]
        );
    }

    #[test]
    fn test_new_loan_builder() {
        let loan = NewLoan::new("Alice", "Moby Dick", date(2024, 1, 1))
            .with_returned(date(2024, 1, 10));
        assert_eq!(loan.student_name, "Alice");
        assert_eq!(loan.date_borrowed, date(2024, 1, 1));
        assert_eq!(loan.date_returned, date(2024, 1, 10));
    }

    #[test]
    fn test_new_loan_defaults_return_to_borrow_date() {
        let loan = NewLoan::new("Alice", "Moby Dick", date(2024, 1, 1));
        assert_eq!(loan.date_returned, loan.date_borrowed);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let loan = NewLoan::new("   ", "Moby Dick", date(2024, 1, 1));
        let err = loan.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Student Name"));

        let loan = NewLoan::new("", "", date(2024, 1, 1));
        let message = loan.validate().unwrap_err().to_string();
        assert!(message.contains("Student Name and Book Name"));
    }

    #[test]
    fn test_validate_allows_return_before_borrow() {
        let loan = NewLoan::new("Bob", "Dune", date(2024, 2, 1)).with_returned(date(2024, 1, 1));
        assert!(loan.validate().is_ok());
    }

    #[test]
    fn test_parse_loan_date_formats() {
        let expected = date(2024, 1, 2);
        assert_eq!(parse_loan_date("2024-01-02").unwrap(), expected);
        assert_eq!(parse_loan_date("2024-01-02 13:45:00").unwrap(), expected);
        assert_eq!(parse_loan_date("2024-01-02T00:00:00").unwrap(), expected);
        assert_eq!(parse_loan_date("2024-01-02T08:30:00.250").unwrap(), expected);
        assert_eq!(parse_loan_date("2024-01-02T23:00:00+00:00").unwrap(), expected);
        assert_eq!(parse_loan_date(" 2024-01-02 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_loan_date_rejects_garbage() {
        assert!(parse_loan_date("next tuesday").is_err());
        assert!(parse_loan_date("2024-13-01").is_err());
    }

    #[test]
    fn test_ledger_serializes_as_array() {
        let ledger = Ledger::from_records(vec![LoanRecord {
            student_name: "Alice".to_string(),
            book_name: "Moby Dick".to_string(),
            date_borrowed: date(2024, 1, 1),
            date_returned: date(2024, 1, 10),
        }]);
        let value = serde_json::to_value(&ledger).unwrap();
        assert_eq!(value[0]["student_name"], "Alice");
        assert_eq!(value[0]["date_borrowed"], "2024-01-01");
    }
}
