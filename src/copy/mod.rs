//! The copy passes.
//!
//! This module provides the two reconciliation passes of the engine: a
//! flat, extension-filtered copy ([`copy_flat`]) and a full recursive tree
//! copy ([`copy_tree`]), plus the [`CopyReport`] both of them produce.

mod flat;
mod tree;
mod utils;

pub use flat::{copy_flat, select};
pub use tree::copy_tree;

use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one attempted file copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was copied successfully
    Copied,
    /// The copy was attempted but failed; the batch continued
    Failed(String),
}

/// Report of a single copy pass.
///
/// Produced once per pass execution and consumed by the caller for
/// reporting only. The per-file outcomes are ordered by the filesystem
/// enumeration order of the pass.
///
/// # Example
///
/// ```no_run
/// use poststage::{StageOptions, copy_tree};
/// use std::path::Path;
///
/// let options = StageOptions::default();
/// let report = copy_tree(Path::new("dist/static"), Path::new("out/static"), &options)?;
/// println!("Copied {} files ({} bytes)", report.files_copied, report.bytes_copied);
/// # Ok::<(), poststage::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Number of files actually copied (not the number selected)
    pub files_copied: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Whether the pass yielded nothing because the source was absent
    pub source_missing: bool,
    /// Per-file outcome, keyed by path relative to the source root
    pub outcomes: Vec<(PathBuf, FileOutcome)>,
    /// Duration of the pass
    pub duration: Duration,
}

impl CopyReport {
    /// Report for a pass whose source directory did not exist.
    pub(crate) fn missing_source(duration: Duration) -> Self {
        Self {
            source_missing: true,
            duration,
            ..Self::default()
        }
    }

    /// Number of files whose copy was attempted and failed.
    pub fn files_failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, FileOutcome::Failed(_)))
            .count()
    }
}
