//! Copy pass descriptions.
//!
//! A [`CopySpec`] pins down one reconciliation pass: where to read, where
//! to write, and whether selection is flat and extension-filtered or a
//! full recursive tree. Specs are immutable and constructed once per run.

use crate::copy::{CopyReport, copy_flat, copy_tree};
use crate::error::Result;
use crate::options::StageOptions;
use std::path::{Path, PathBuf};

/// Selection rule for a copy pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CopyMode {
    /// Copy only the immediate files whose names end with one of the given
    /// suffixes; subdirectories are never entered.
    Flat {
        /// Literal, case-sensitive file-name suffixes
        extensions: Vec<String>,
    },
    /// Copy the entire tree, preserving relative paths.
    Recursive,
}

/// One copy pass: source root, destination root, and selection mode.
///
/// # Example
///
/// ```no_run
/// use poststage::{CopySpec, StageOptions};
///
/// let spec = CopySpec::flat(
///     "dist/workers",
///     "out/assets",
///     vec![".js".to_string()],
/// );
/// let report = spec.execute(&StageOptions::default())?;
/// println!("{} files copied", report.files_copied);
/// # Ok::<(), poststage::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopySpec {
    /// Directory to copy from
    pub source_root: PathBuf,
    /// Directory to copy into (created if absent)
    pub dest_root: PathBuf,
    /// How entries are selected
    pub mode: CopyMode,
}

impl CopySpec {
    /// Describe a flat, extension-filtered pass.
    pub fn flat<P, Q>(source_root: P, dest_root: Q, extensions: Vec<String>) -> Self
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Self {
            source_root: source_root.as_ref().to_path_buf(),
            dest_root: dest_root.as_ref().to_path_buf(),
            mode: CopyMode::Flat { extensions },
        }
    }

    /// Describe a full recursive tree pass.
    pub fn recursive<P, Q>(source_root: P, dest_root: Q) -> Self
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Self {
            source_root: source_root.as_ref().to_path_buf(),
            dest_root: dest_root.as_ref().to_path_buf(),
            mode: CopyMode::Recursive,
        }
    }

    /// Execute this pass once, synchronously.
    ///
    /// # Errors
    ///
    /// Returns the pass-fatal errors of the underlying copier:
    /// [`Error::DestinationCreate`](crate::Error::DestinationCreate) and,
    /// for flat mode, [`Error::ReadDir`](crate::Error::ReadDir). A missing
    /// source is not an error; see [`CopyReport::source_missing`].
    pub fn execute(&self, options: &StageOptions) -> Result<CopyReport> {
        match &self.mode {
            CopyMode::Flat { extensions } => {
                copy_flat(&self.source_root, &self.dest_root, extensions, options)
            }
            CopyMode::Recursive => copy_tree(&self.source_root, &self.dest_root, options),
        }
    }
}
