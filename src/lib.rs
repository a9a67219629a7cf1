//! touchstone-case: assign case identifiers to touchstone S-parameter files
//!
//! This crate provides:
//! - Sorted-order case assignment (`C1`, `C2`, ...) over a directory of
//!   touchstone files
//! - In-place rewriting of `! Port[<k>] = <label>` header comments to embed
//!   the case identifier in each port label
//! - Case-prefixed file renaming and a CSV manifest mapping case identifiers
//!   to original filenames
//!
//! Processing is strictly sequential: each file is read, rewritten, renamed,
//! and recorded in the manifest before the next begins. The manifest is
//! rewritten after every file, so an interrupted run leaves it consistent
//! with the files already renamed.

pub mod error;
pub mod manifest;
pub mod renamer;
pub mod touchstone;

pub use error::{RenameError, Result};
pub use manifest::CaseRecord;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Main entry point: process every touchstone file in a directory.
pub fn rename_cases(dir: &Path, config: &RenameConfig) -> Result<RunSummary> {
    renamer::run(dir, config)
}

/// Configuration for a renaming run
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Filename suffix that marks a touchstone candidate (default: `.s40p`)
    pub extension: String,
    /// Manifest filename, created inside the target directory
    pub manifest_name: String,
    /// Also process files that already carry a `C<n>_` prefix. This is the
    /// legacy extension-only filter: re-running stacks another prefix onto
    /// filenames and port labels.
    pub reprocess_prefixed: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            extension: ".s40p".to_string(),
            manifest_name: "case_mapping.csv".to_string(),
            reprocess_prefixed: false,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Number of files rewritten, renamed, and recorded in the manifest
    pub files_processed: usize,
    /// Location of the regenerated manifest
    pub manifest_path: PathBuf,
    /// Candidates skipped for already carrying a case prefix
    pub skipped_prefixed: usize,
}
