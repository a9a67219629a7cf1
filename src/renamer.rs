//! Directory scan and the sequential rename pipeline
//!
//! Files are processed one at a time, fully (read, rewrite, rename,
//! manifest update) before the next begins. Case assignment depends on this
//! strict order, so nothing here is concurrent.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{RenameError, Result};
use crate::manifest::{self, CaseRecord};
use crate::touchstone::rewrite_contents;
use crate::{RenameConfig, RunSummary};

static CASE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^C\d+_").unwrap());

/// Check whether a filename already carries a recognized case prefix.
pub fn has_case_prefix(name: &str) -> bool {
    CASE_PREFIX.is_match(name)
}

/// List candidate filenames in ascending lexicographic order.
///
/// Sorting by filename bytes is the reproducible tie-break: identical
/// directory contents yield identical case assignments on every run and
/// every platform. Returns the candidates plus the count of files skipped
/// for already carrying a case prefix.
fn list_candidates(dir: &Path, config: &RenameConfig) -> Result<(Vec<String>, usize)> {
    let entries = fs::read_dir(dir).map_err(|source| RenameError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    let mut skipped = 0;
    for entry in entries {
        let entry = entry.map_err(|source| RenameError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.path().is_file() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue, // non-UTF-8 name cannot be a touchstone candidate
        };
        if !name.ends_with(&config.extension) {
            continue;
        }
        if !config.reprocess_prefixed && has_case_prefix(&name) {
            warn!(file = %name, "already carries a case prefix, skipping");
            skipped += 1;
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok((names, skipped))
}

/// Run the full renaming pass over a directory.
pub fn run(dir: &Path, config: &RenameConfig) -> Result<RunSummary> {
    let (candidates, skipped_prefixed) = list_candidates(dir, config)?;
    let manifest_path = dir.join(&config.manifest_name);

    let mut records: Vec<CaseRecord> = Vec::with_capacity(candidates.len());
    // Header-only manifest on zero matches.
    manifest::write(&manifest_path, &records)?;

    for (index, filename) in candidates.iter().enumerate() {
        let case_id = format!("C{}", index + 1);
        let path = dir.join(filename);
        debug!(file = %filename, case = %case_id, "processing");

        let raw = fs::read(&path).map_err(|source| RenameError::Io {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8(raw).map_err(|_| RenameError::Encoding {
            path: path.clone(),
        })?;

        let rewritten = rewrite_contents(&text, &case_id, &path)?;
        fs::write(&path, rewritten).map_err(|source| RenameError::Io {
            path: path.clone(),
            source,
        })?;

        let renamed = dir.join(format!("{case_id}_{filename}"));
        if renamed.exists() {
            return Err(RenameError::RenameCollision { path: renamed });
        }
        fs::rename(&path, &renamed).map_err(|source| RenameError::Io {
            path: path.clone(),
            source,
        })?;

        let base = filename
            .strip_suffix(&config.extension)
            .unwrap_or(filename);
        records.push(CaseRecord {
            case_id,
            touchstone_name: base.to_string(),
        });

        // Rewritten after every file, not once at the end: an interrupted
        // run leaves the manifest matching exactly the files renamed so far.
        manifest::write(&manifest_path, &records)?;
    }

    info!(
        files = records.len(),
        manifest = %manifest_path.display(),
        "case renaming complete"
    );

    Ok(RunSummary {
        files_processed: records.len(),
        manifest_path,
        skipped_prefixed,
    })
}
