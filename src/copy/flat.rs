//! Flat, extension-filtered copy pass.
//!
//! Selects the immediate files of a source directory whose names end with
//! one of the allow-listed suffixes and copies them into a flat
//! destination directory. Subdirectories are never entered and never
//! selected.

use crate::copy::utils::{copy_file_bytes, ensure_dir};
use crate::copy::{CopyReport, FileOutcome};
use crate::error::{Error, Result};
use crate::options::StageOptions;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Select the immediate files of `source_dir` matching one of `extensions`.
///
/// Matching is a literal byte-wise suffix comparison on the file name,
/// case-sensitive: `".js"` matches `worker.js` but not `worker.jsx` and
/// not `worker.JS`. Directories are always excluded. Entries come back in
/// filesystem enumeration order, which is deterministic for a fixed
/// directory state but not sorted.
///
/// A missing source directory yields an empty selection; the caller is
/// responsible for surfacing the source-missing condition.
///
/// # Errors
///
/// Returns [`Error::ReadDir`] if the directory exists but cannot be
/// enumerated.
pub fn select(source_dir: &Path, extensions: &[String]) -> Result<Vec<OsString>> {
    if !source_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(source_dir).map_err(|e| Error::ReadDir {
        path: source_dir.to_path_buf(),
        source: e,
    })?;

    let mut selected = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::ReadDir {
            path: source_dir.to_path_buf(),
            source: e,
        })?;

        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }

        let name = entry.file_name();
        if extensions
            .iter()
            .any(|ext| name.as_encoded_bytes().ends_with(ext.as_bytes()))
        {
            selected.push(name);
        }
    }

    Ok(selected)
}

/// Copy the matching immediate files of `source_dir` into `dest_dir`.
///
/// The destination directory (and any missing ancestors) is created up
/// front. Each selected file is then copied independently: a failure on
/// one file is recorded in the report and does not prevent attempting the
/// rest. Same-named destination files are overwritten unconditionally.
///
/// A missing source directory is non-fatal: the pass warns and returns an
/// empty report with [`CopyReport::source_missing`] set.
///
/// # Errors
///
/// Returns [`Error::DestinationCreate`] if the destination directory
/// cannot be created, or [`Error::ReadDir`] if the source cannot be
/// enumerated. Both are fatal for this pass only.
pub fn copy_flat(
    source_dir: &Path,
    dest_dir: &Path,
    extensions: &[String],
    options: &StageOptions,
) -> Result<CopyReport> {
    let start = Instant::now();

    ensure_dir(dest_dir)?;

    if !source_dir.exists() {
        options.warn(&format!(
            "Source directory {} does not exist",
            source_dir.display()
        ));
        return Ok(CopyReport::missing_source(start.elapsed()));
    }

    let filenames = select(source_dir, extensions)?;

    let mut report = CopyReport::default();
    for name in filenames {
        let src = source_dir.join(&name);
        let dst = dest_dir.join(&name);
        let rel = PathBuf::from(&name);

        match copy_file_bytes(&src, &dst) {
            Ok(bytes) => {
                report.files_copied += 1;
                report.bytes_copied += bytes;
                options.log(&format!(
                    "Copied {} to {}",
                    rel.display(),
                    dest_dir.display()
                ));
                report.outcomes.push((rel, FileOutcome::Copied));
            }
            Err(e) => {
                options.warn(&format!("Failed to copy {}: {}", src.display(), e));
                report.outcomes.push((rel, FileOutcome::Failed(e.to_string())));
            }
        }
    }

    options.log(&format!(
        "Copied {} files to {}",
        report.files_copied,
        dest_dir.display()
    ));

    report.duration = start.elapsed();
    Ok(report)
}

// =============================================================================
// Tests
// =============================================================================
