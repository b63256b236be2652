//! Export the ledger as a downloadable workbook.

use serde::Serialize;
use tracing::debug;

use crate::error::{LoanbookError, Result};
use crate::ledger::Ledger;
use crate::storage::xlsx::encode_workbook;

/// Suggested file name for the downloaded workbook.
pub const EXPORT_FILE_NAME: &str = "updated_library_usage.xlsx";

/// MIME type of an Office Open XML spreadsheet.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Export bytes plus what a download needs to name and type them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
    pub mime_type: &'static str,
}

impl ExportArtifact {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serialize the full ledger to workbook bytes without touching storage.
///
/// Same format as the stored file. Identical ledgers yield identical bytes.
///
/// # Errors
///
/// Returns `LoanbookError::Export` if the workbook cannot be encoded, for
/// example when a name is longer than [`MAX_CELL_CHARS`] characters.
///
/// [`MAX_CELL_CHARS`]: crate::storage::MAX_CELL_CHARS
pub fn export(ledger: &Ledger) -> Result<Vec<u8>> {
    let bytes = encode_workbook(ledger).map_err(|err| LoanbookError::Export(err.to_string()))?;
    debug!(rows = ledger.len(), bytes = bytes.len(), "Exported ledger");
    Ok(bytes)
}

/// Like [`export`], bundled with the download file name and MIME type.
pub fn export_artifact(ledger: &Ledger) -> Result<ExportArtifact> {
    Ok(ExportArtifact {
        bytes: export(ledger)?,
        file_name: EXPORT_FILE_NAME,
        mime_type: XLSX_MIME_TYPE,
    })
}
