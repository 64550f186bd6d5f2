//! Build-lifecycle orchestration.
//!
//! The host build tool drives the engine through a two-phase interface:
//! [`Stage::configure`] receives the resolved project root and build
//! output directory, and [`ConfiguredStage::run_after_build`] runs the two
//! copy passes exactly once after the build output is finalized. Both
//! calls consume their receiver, so a run cannot happen unconfigured or
//! twice.
//!
//! `run_after_build` never returns an error: missing sources are warnings
//! and pass-fatal failures are captured per pass in the [`RunReport`], so
//! the host build is never failed over missing or partially-copied assets.

use crate::copy::CopyReport;
use crate::error::Error;
use crate::options::StageOptions;
use crate::spec::CopySpec;
use std::path::{Path, PathBuf};

/// Result of one copy pass within a run.
#[derive(Debug)]
pub enum PassOutcome {
    /// The pass ran to completion (possibly with per-file failures or a
    /// missing source; inspect the report)
    Completed(CopyReport),
    /// The pass aborted before completing its batch
    Failed(Error),
}

impl PassOutcome {
    /// Number of files the pass copied.
    pub fn files_copied(&self) -> u64 {
        match self {
            Self::Completed(report) => report.files_copied,
            Self::Failed(_) => 0,
        }
    }

    /// The pass report, if the pass completed.
    pub fn report(&self) -> Option<&CopyReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Failed(_) => None,
        }
    }

    /// Whether the pass aborted with a pass-fatal error.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Report of a full staging run: one outcome per pass.
#[derive(Debug)]
pub struct RunReport {
    /// Flat worker-script pass
    pub workers: PassOutcome,
    /// Recursive static-tree pass
    pub statics: PassOutcome,
}

impl RunReport {
    /// Total number of files copied across both passes.
    pub fn files_copied(&self) -> u64 {
        self.workers.files_copied() + self.statics.files_copied()
    }
}

/// Entry point for the host build tool.
///
/// # Example
///
/// ```no_run
/// use poststage::{Stage, StageOptions};
///
/// let report = Stage::new(StageOptions::default())
///     .configure("/path/to/project", "dist")
///     .run_after_build();
/// println!("Staged {} files", report.files_copied());
/// ```
#[derive(Debug, Clone)]
pub struct Stage {
    options: StageOptions,
}

impl Stage {
    /// Create a stage with the given options.
    pub fn new(options: StageOptions) -> Self {
        Self { options }
    }

    /// Supply the resolved project root and build output directory.
    ///
    /// `out_dir` is joined onto `root`; an absolute `out_dir` is used
    /// as-is. The same resolution applies to the source directories in the
    /// options.
    #[must_use]
    pub fn configure<P, Q>(self, root: P, out_dir: Q) -> ConfiguredStage
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        ConfiguredStage {
            options: self.options,
            root: root.as_ref().to_path_buf(),
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }
}

/// A stage that knows its paths and is ready to run.
#[derive(Debug, Clone)]
pub struct ConfiguredStage {
    options: StageOptions,
    root: PathBuf,
    out_dir: PathBuf,
}

impl ConfiguredStage {
    /// The options this stage will run with.
    pub fn options(&self) -> &StageOptions {
        &self.options
    }

    /// Run both copy passes, flat then recursive.
    ///
    /// The tree pass runs unconditionally, even when the flat pass failed.
    /// Consumes the stage so a build triggers at most one run.
    pub fn run_after_build(self) -> RunReport {
        let out_root = self.root.join(&self.out_dir);

        let workers_spec = CopySpec::flat(
            self.root.join(&self.options.source_dir),
            out_root.join(&self.options.assets_subdir),
            self.options.extensions.clone(),
        );
        let statics_spec = CopySpec::recursive(
            self.root.join(&self.options.static_source_dir),
            out_root.join(&self.options.static_target_dir),
        );

        let workers = run_pass(&workers_spec, &self.options);
        let statics = run_pass(&statics_spec, &self.options);

        RunReport { workers, statics }
    }
}

fn run_pass(spec: &CopySpec, options: &StageOptions) -> PassOutcome {
    match spec.execute(options) {
        Ok(report) => PassOutcome::Completed(report),
        Err(e) => {
            options.warn(&format!(
                "Copy pass {} -> {} failed: {}",
                spec.source_root.display(),
                spec.dest_root.display(),
                e
            ));
            PassOutcome::Failed(e)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
