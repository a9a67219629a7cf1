//! Case-mapping manifest (CSV)
//!
//! One row per processed file, in case order. The file is rewritten from
//! scratch after every processed touchstone file, so an interrupted run
//! leaves the manifest consistent with the files renamed so far.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{RenameError, Result};

/// Header row, always present.
pub const MANIFEST_HEADER: &str = "Case,Touchstone File";

/// Pairing of a case identifier with the original base filename
/// (extension stripped, no case prefix).
#[derive(Debug, Clone, Serialize)]
pub struct CaseRecord {
    pub case_id: String,
    pub touchstone_name: String,
}

/// Render the manifest body: header first, then one row per record.
pub fn render(records: &[CaseRecord]) -> String {
    let mut out = String::from(MANIFEST_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&record.case_id);
        out.push(',');
        out.push_str(&record.touchstone_name);
        out.push('\n');
    }
    out
}

/// Rewrite the manifest file from scratch (full replace, not append).
pub fn write(path: &Path, records: &[CaseRecord]) -> Result<()> {
    fs::write(path, render(records)).map_err(|source| RenameError::Io {
        path: path.to_path_buf(),
        source,
    })
}
