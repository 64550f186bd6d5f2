//! # poststage
//!
//! Post-build staging of worker scripts and static assets into a bundler
//! output directory.
//!
//! After a bundler finishes, some build artifacts still live in a source
//! package's install location rather than under the build output root:
//! worker scripts that must sit next to the emitted assets, and a static
//! file tree the bundler never touches. `poststage` relocates them with
//! two reconciliation passes:
//!
//! - **Flat pass** — copies the immediate files of one directory whose
//!   names match an extension allow-list (default `.js`) into an assets
//!   subdirectory of the output root.
//! - **Tree pass** — recursively copies an entire static directory into
//!   the output root, preserving relative paths.
//!
//! Both passes create missing destination directories, overwrite
//! same-named files unconditionally, and never delete anything
//! pre-existing at the destination. A missing source directory is a
//! warning, not an error, and a failure on one file never aborts the rest
//! of the batch — by design, missing or partially-copied assets are a
//! deployment-time concern, not a reason to fail the build.
//!
//! ## Quick Start
//!
//! The host build tool drives the engine through a two-phase interface:
//!
//! ```no_run
//! use poststage::{Stage, StageOptions};
//!
//! let report = Stage::new(StageOptions::default())
//!     .configure("/path/to/project", "dist")
//!     .run_after_build();
//!
//! println!("Staged {} files", report.files_copied());
//! ```
//!
//! ### Custom Layout
//!
//! ```no_run
//! use poststage::{Stage, StageOptions};
//!
//! let options = StageOptions::default()
//!     .with_source_dir("vendor/editor/dist/workers")
//!     .with_extensions([".js", ".wasm"])
//!     .with_static_source_dir("vendor/editor/dist/static");
//!
//! let report = Stage::new(options)
//!     .configure("/path/to/project", "build")
//!     .run_after_build();
//!
//! if report.workers.is_failed() {
//!     eprintln!("worker staging failed; deployment may be incomplete");
//! }
//! ```
//!
//! ## Single Passes
//!
//! Each pass is also available directly via [`CopySpec`]:
//!
//! ```no_run
//! use poststage::{CopySpec, StageOptions};
//!
//! let spec = CopySpec::recursive("dist/static", "out/static");
//! let report = spec.execute(&StageOptions::default())?;
//! println!("{} files, {} bytes", report.files_copied, report.bytes_copied);
//! # Ok::<(), poststage::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - A destination directory is created before any file is written into it.
//! - Overwrites are atomic: bytes are staged in a temporary file in the
//!   destination directory and renamed over the target, so an interrupted
//!   run never leaves a partially-written file.
//! - Execution is single-threaded and synchronous; a run finishes (or
//!   reports what failed) before control returns to the build step.
//! - [`ConfiguredStage::run_after_build`] consumes the stage, so one build
//!   triggers at most one run.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Fall back to the tracing crate when no handlers are set |
//! | `serde` | Serialize/Deserialize for [`StageOptions`] and [`CopySpec`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod copy;
mod error;
mod options;
mod spec;
mod stage;

pub use copy::{CopyReport, FileOutcome, copy_flat, copy_tree, select};
pub use error::{Error, Result};
pub use options::StageOptions;
pub use spec::{CopyMode, CopySpec};
pub use stage::{ConfiguredStage, PassOutcome, RunReport, Stage};
