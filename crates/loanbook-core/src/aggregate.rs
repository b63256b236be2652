//! Read-only summaries of a ledger snapshot.
//!
//! Frequencies are sorted by descending count. Ties keep the order in which
//! the name first appears in the ledger. An empty ledger yields empty
//! sequences everywhere.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::ledger::{Ledger, LoanRecord};

/// Title of the per-book chart.
pub const MOST_BORROWED_TITLE: &str = "Most Borrowed Books";
/// Title of the per-day chart.
pub const BORROW_TREND_TITLE: &str = "Borrowing Trend Over Time";
/// Title of the per-student chart.
pub const TOP_STUDENTS_TITLE: &str = "Top Library Users";

/// How often one name occurs in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// Number of loans that started on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// All three summaries, ready for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub most_borrowed: Vec<NameCount>,
    pub borrow_trend: Vec<DailyCount>,
    pub top_students: Vec<NameCount>,
}

impl Analytics {
    pub fn is_empty(&self) -> bool {
        self.most_borrowed.is_empty()
            && self.borrow_trend.is_empty()
            && self.top_students.is_empty()
    }
}

/// Count loans per distinct book name.
pub fn book_frequency(ledger: &Ledger) -> Vec<NameCount> {
    frequency(ledger, |record| &record.book_name)
}

/// Count loans per distinct student name.
pub fn student_frequency(ledger: &Ledger) -> Vec<NameCount> {
    frequency(ledger, |record| &record.student_name)
}

/// Count loans per borrow date, ascending. Dates with no loans are omitted.
pub fn daily_borrow_counts(ledger: &Ledger) -> Vec<DailyCount> {
    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in ledger {
        *by_date.entry(record.date_borrowed).or_insert(0) += 1;
    }
    by_date
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Compute every summary over the same snapshot.
pub fn summarize(ledger: &Ledger) -> Analytics {
    Analytics {
        most_borrowed: book_frequency(ledger),
        borrow_trend: daily_borrow_counts(ledger),
        top_students: student_frequency(ledger),
    }
}

fn frequency<F>(ledger: &Ledger, key: F) -> Vec<NameCount>
where
    F: Fn(&LoanRecord) -> &String,
{
    let mut counts: Vec<NameCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in ledger {
        let name = key(record);
        match index.get(name.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(name.as_str(), counts.len());
                counts.push(NameCount {
                    name: name.clone(),
                    count: 1,
                });
            }
        }
    }

    // Stable: equal counts stay in first-encountered order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
