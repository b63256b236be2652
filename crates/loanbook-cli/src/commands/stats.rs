//! Stats command handler: the three borrowing charts.

use loanbook_core::aggregate::{BORROW_TREND_TITLE, MOST_BORROWED_TITLE, TOP_STUDENTS_TITLE};
use loanbook_core::{summarize, Analytics, LedgerStore};

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::helpers::ensure_format_compatible;
use crate::output::analytics_json;
use crate::ui::{
    bar_chart, blank_line, format_date, format_percent, header_with_context, hint, print,
    section, Bar, UiContext,
};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    ensure_format_compatible(args.json, args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    let store = ctx.store()?;
    let ledger = store.load()?;
    let analytics = summarize(&ledger);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&analytics_json(&analytics))?);
        return Ok(());
    }

    if !ctx.quiet() {
        let context = format!("{} loans", ledger.len());
        let path = store.path().display().to_string();
        print(
            &ui_ctx,
            &header_with_context(&ui_ctx, "stats", Some(&context), Some(&path)),
        );
        blank_line(&ui_ctx);
    }

    let charts = chart_bars(&analytics, ledger.len(), args.limit);
    for (index, (title, bars)) in charts.iter().enumerate() {
        if index > 0 {
            blank_line(&ui_ctx);
        }
        print_chart(&ui_ctx, title, bars);
    }
    Ok(())
}

/// Bars for each chart, in display order, capped at `limit` per chart.
fn chart_bars(
    analytics: &Analytics,
    total: usize,
    limit: Option<usize>,
) -> Vec<(&'static str, Vec<Bar>)> {
    let cap = limit.unwrap_or(usize::MAX);

    let most_borrowed = analytics
        .most_borrowed
        .iter()
        .take(cap)
        .map(|entry| Bar::new(entry.name.clone(), entry.count))
        .collect();

    // Keep the most recent days when capped; the trend reads left to right.
    let skip = analytics.borrow_trend.len().saturating_sub(cap);
    let borrow_trend = analytics
        .borrow_trend
        .iter()
        .skip(skip)
        .map(|entry| Bar::new(format_date(&entry.date), entry.count))
        .collect();

    let top_students = analytics
        .top_students
        .iter()
        .take(cap)
        .map(|entry| {
            Bar::new(entry.name.clone(), entry.count).with_note(format_percent(entry.count, total))
        })
        .collect();

    vec![
        (MOST_BORROWED_TITLE, most_borrowed),
        (BORROW_TREND_TITLE, borrow_trend),
        (TOP_STUDENTS_TITLE, top_students),
    ]
}

fn print_chart(ui_ctx: &UiContext, title: &str, bars: &[Bar]) {
    print(ui_ctx, &section(ui_ctx, title));
    if bars.is_empty() {
        print(ui_ctx, &hint(ui_ctx, "No loans recorded yet."));
    } else {
        print(ui_ctx, &bar_chart(ui_ctx, bars));
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use loanbook_core::{Ledger, LoanRecord};

    use super::*;

    fn ledger() -> Ledger {
        let records = [
            ("Alice", "Moby Dick", 1),
            ("Bob", "Moby Dick", 2),
            ("Alice", "Dune", 3),
            ("Carol", "Emma", 3),
        ]
        .iter()
        .map(|(student, book, day)| {
            let date = NaiveDate::from_ymd_opt(2024, 1, *day).unwrap();
            LoanRecord {
                student_name: student.to_string(),
                book_name: book.to_string(),
                date_borrowed: date,
                date_returned: date,
            }
        })
        .collect();
        Ledger::from_records(records)
    }

    #[test]
    fn test_chart_bars_titles_and_order() {
        let ledger = ledger();
        let charts = chart_bars(&summarize(&ledger), ledger.len(), None);
        let titles: Vec<&str> = charts.iter().map(|(title, _)| *title).collect();
        assert_eq!(
            titles,
            vec!["Most Borrowed Books", "Borrowing Trend Over Time", "Top Library Users"]
        );
        assert_eq!(charts[0].1[0], Bar::new("Moby Dick", 2));
        assert_eq!(charts[1].1.len(), 3);
        assert_eq!(charts[2].1[0], Bar::new("Alice", 2).with_note("50.0%"));
    }

    #[test]
    fn test_chart_bars_limit_keeps_latest_days() {
        let ledger = ledger();
        let charts = chart_bars(&summarize(&ledger), ledger.len(), Some(1));
        assert_eq!(charts[0].1.len(), 1);
        assert_eq!(charts[1].1, vec![Bar::new("2024-01-03", 2)]);
        assert_eq!(charts[2].1.len(), 1);
    }

    #[test]
    fn test_chart_bars_empty_ledger() {
        let charts = chart_bars(&summarize(&Ledger::new()), 0, None);
        assert!(charts.iter().all(|(_, bars)| bars.is_empty()));
    }
}
