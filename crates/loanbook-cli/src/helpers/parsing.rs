//! Parsing helpers for dates and output format.

use chrono::{Local, NaiveDate};

use loanbook_core::parse_loan_date;

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an optional date flag, defaulting to `fallback` when absent.
pub fn parse_date_or(value: Option<&str>, fallback: NaiveDate) -> anyhow::Result<NaiveDate> {
    match value {
        Some(text) if text.trim().eq_ignore_ascii_case("today") => Ok(today()),
        Some(text) => Ok(parse_loan_date(text)?),
        None => Ok(fallback),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

/// Reject `--format` alongside `--json`.
pub fn ensure_format_compatible(json: bool, format: Option<&str>) -> anyhow::Result<()> {
    let parsed = parse_output_format(format)?;
    if json && parsed.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }
    Ok(())
}
