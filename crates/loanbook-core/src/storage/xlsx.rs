//! Spreadsheet (`.xlsx`) storage backend.
//!
//! Layout: a single sheet with a header row naming the four ledger columns,
//! then one row per loan. Dates are written as spreadsheet date cells.
//! Reading is lenient about column order, extra columns and the way a date
//! was typed in, and strict about required values.

use std::borrow::Cow;
use std::fs;
use std::io::{Cursor, ErrorKind};
use std::path::{Path, PathBuf};

use calamine::{Data, DataType, Reader, Xlsx};
use chrono::NaiveDate;
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, XlsxError};
use tracing::debug;

use crate::error::{LoanbookError, Result};
use crate::fs::replace_file;
use crate::ledger::{parse_loan_date, Ledger, LoanRecord, COLUMNS};
use crate::storage::traits::LedgerStore;

/// Name of the single worksheet written to every file.
pub const SHEET_NAME: &str = "Sheet1";

/// Number format applied to both date columns.
const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Most characters a single spreadsheet cell can hold.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Why a ledger could not be turned into workbook bytes.
#[derive(Debug, thiserror::Error)]
pub(crate) enum EncodeError {
    #[error("Row {row}: \"{column}\" is longer than 32767 characters, the most one cell can hold")]
    CellTooLong { row: usize, column: &'static str },

    #[error("Workbook error: {0}")]
    Workbook(#[from] XlsxError),
}

/// Ledger stored as one `.xlsx` file at a fixed path.
#[derive(Debug, Clone)]
pub struct XlsxStore {
    path: PathBuf,
}

impl XlsxStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the durable file is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl LedgerStore for XlsxStore {
    fn load(&self) -> Result<Ledger> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Ledger file absent, starting empty");
                return Ok(Ledger::new());
            }
            Err(err) => {
                return Err(LoanbookError::StorageRead(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        let ledger = decode_workbook(&bytes).map_err(|err| match err {
            LoanbookError::StorageRead(message) => {
                LoanbookError::StorageRead(format!("{}: {}", self.path.display(), message))
            }
            other => other,
        })?;
        debug!(path = %self.path.display(), rows = ledger.len(), "Loaded ledger");
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let bytes = encode_workbook(ledger).map_err(|err| {
            LoanbookError::StorageWrite(format!(
                "Cannot write {}: {}",
                self.path.display(),
                err
            ))
        })?;
        replace_file(&self.path, &bytes).map_err(|err| {
            LoanbookError::StorageWrite(format!(
                "Failed to write {}: {}",
                self.path.display(),
                err
            ))
        })?;
        debug!(
            path = %self.path.display(),
            rows = ledger.len(),
            bytes = bytes.len(),
            "Saved ledger"
        );
        Ok(())
    }
}

/// Encode a ledger as workbook bytes.
///
/// The document creation time is pinned so identical ledgers produce
/// identical bytes.
pub(crate) fn encode_workbook(ledger: &Ledger) -> std::result::Result<Vec<u8>, EncodeError> {
    let mut workbook = Workbook::new();
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (index, record) in ledger.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (slot, value) in [(0, &record.student_name), (1, &record.book_name)] {
            if value.chars().count() > MAX_CELL_CHARS {
                return Err(EncodeError::CellTooLong {
                    row: index + 2,
                    column: COLUMNS[slot],
                });
            }
        }
        worksheet.write_string(row, 0, &record.student_name)?;
        worksheet.write_string(row, 1, &record.book_name)?;
        worksheet.write_datetime_with_format(row, 2, &record.date_borrowed, &date_format)?;
        worksheet.write_datetime_with_format(row, 3, &record.date_returned, &date_format)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Decode workbook bytes into a ledger.
///
/// # Errors
///
/// Returns `LoanbookError::StorageRead` if the bytes are not a workbook,
/// the first sheet lacks one of the four header columns, or a row has a
/// missing name or an unreadable date.
pub fn decode_workbook(bytes: &[u8]) -> Result<Ledger> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|err| LoanbookError::StorageRead(format!("Not a valid workbook: {}", err)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoanbookError::StorageRead("Workbook has no sheets".to_string()))?
        .map_err(|err| LoanbookError::StorageRead(format!("Unreadable sheet: {}", err)))?;

    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| LoanbookError::StorageRead("Sheet has no header row".to_string()))?;
    let positions = column_positions(header)?;

    let mut records = Vec::new();
    for (offset, row) in rows.enumerate() {
        if is_blank_row(row) {
            continue;
        }
        // 1-based spreadsheet row number, header included
        let row_number = first_row + offset + 2;
        records.push(decode_record(row, &positions, row_number)?);
    }

    Ok(Ledger::from_records(records))
}

/// Locate each ledger column in the header row.
fn column_positions(header: &[Data]) -> Result<[usize; 4]> {
    let mut found: [Option<usize>; 4] = [None; 4];
    for (col, cell) in header.iter().enumerate() {
        let Data::String(name) = cell else {
            continue;
        };
        if let Some(slot) = COLUMNS.iter().position(|column| *column == name.trim()) {
            found[slot].get_or_insert(col);
        }
    }

    let mut positions = [0; 4];
    for (slot, position) in found.iter().enumerate() {
        positions[slot] = position.ok_or_else(|| {
            LoanbookError::StorageRead(format!("Missing column \"{}\"", COLUMNS[slot]))
        })?;
    }
    Ok(positions)
}

fn decode_record(row: &[Data], positions: &[usize; 4], row_number: usize) -> Result<LoanRecord> {
    let text = |slot: usize| {
        row.get(positions[slot]).and_then(cell_text).ok_or_else(|| {
            LoanbookError::StorageRead(format!(
                "Row {}: missing \"{}\"",
                row_number, COLUMNS[slot]
            ))
        })
    };
    let date = |slot: usize| {
        row.get(positions[slot]).and_then(cell_date).ok_or_else(|| {
            LoanbookError::StorageRead(format!(
                "Row {}: \"{}\" is not a date",
                row_number, COLUMNS[slot]
            ))
        })
    };

    Ok(LoanRecord {
        student_name: text(0)?,
        book_name: text(1)?,
        date_borrowed: date(2)?,
        date_returned: date(3)?,
    })
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(value) if value.trim().is_empty() => None,
        Data::String(value) => Some(unescape_cell(value).into_owned()),
        other => other.as_string(),
    }
}

fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(value) => parse_loan_date(&unescape_cell(value)).ok(),
        other => other.as_date(),
    }
}

/// Undo the `_xHHHH_` escapes the writer uses for characters XML cannot
/// carry. A literal `_xHHHH_` in the original text is stored with its
/// underscore escaped as `_x005F_`, so one left-to-right pass restores it.
fn unescape_cell(value: &str) -> Cow<'_, str> {
    if !value.contains("_x") {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("_x") {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match escaped_char(candidate) {
            Some(ch) => {
                out.push(ch);
                rest = &candidate[7..];
            }
            None => {
                out.push('_');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// The character encoded by a leading `_xHHHH_`, if `text` starts with one.
fn escaped_char(text: &str) -> Option<char> {
    if text.as_bytes().get(6) != Some(&b'_') {
        return None;
    }
    let hex = text.get(2..6)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|cell| match cell {
        Data::Empty => true,
        Data::String(value) => value.trim().is_empty(),
        _ => false,
    })
}
