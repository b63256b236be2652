//! Small text helpers shared by tables, receipts and charts.

use chrono::NaiveDate;

/// Fit a chart label into exactly `width` columns: cut with "..." when too
/// long, pad with spaces when short.
pub fn fit_label(label: &str, width: usize) -> String {
    let len = label.chars().count();
    if len <= width {
        return format!("{}{}", label, " ".repeat(width - len));
    }
    if width <= 3 {
        return label.chars().take(width).collect();
    }
    let kept: String = label.chars().take(width - 3).collect();
    format!("{}...", kept)
}

/// Loan dates always display as `YYYY-MM-DD`, matching the stored cells.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human-readable size of an export.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

/// Share of all loans, one decimal place.
pub fn format_percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / whole as f64)
}

/// Flatten a cell value onto one line. Tabs are replaced too, since plain
/// rows are tab-separated.
pub fn single_line(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '\r')
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_label_pads_short_labels() {
        assert_eq!(fit_label("Dune", 6), "Dune  ");
        assert_eq!(fit_label("Dune", 4), "Dune");
    }

    #[test]
    fn test_fit_label_cuts_long_labels() {
        assert_eq!(fit_label("The Count of Monte Cristo", 12), "The Count...");
        assert_eq!(fit_label("Emma", 2), "Em");
    }

    #[test]
    fn test_fit_label_counts_chars_not_bytes() {
        assert_eq!(fit_label("Café", 5), "Café ");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_date(&date), "2024-01-02");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1, 4), "25.0%");
        assert_eq!(format_percent(2, 3), "66.7%");
        assert_eq!(format_percent(0, 0), "0.0%");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("Moby\nDick"), "Moby Dick");
        assert_eq!(single_line("War\tand\r\nPeace"), "War and Peace");
    }
}
