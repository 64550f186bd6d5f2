//! Configuration for the staging run.
//!
//! This module provides [`StageOptions`], the recognized options of the
//! copy engine together with their defaults. The host build tool resolves
//! its own configuration into a `StageOptions` value and hands it to
//! [`Stage::new`](crate::Stage::new).
//!
//! # Example
//!
//! ```
//! use poststage::StageOptions;
//!
//! let options = StageOptions::default()
//!     .with_source_dir("vendor/editor/dist/workers")
//!     .with_extensions([".js", ".mjs"]);
//! ```

use std::path::{Path, PathBuf};

/// Options for a staging run.
///
/// Use [`Default::default()`] to get the documented defaults, then
/// customize using the builder methods. Relative paths are resolved
/// against the project root supplied to
/// [`Stage::configure`](crate::Stage::configure); absolute paths are used
/// as-is.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `source_dir` | `dist/workers` | source root for the flat worker pass |
/// | `assets_subdir` | `assets` | destination subdirectory under the output root |
/// | `extensions` | `[".js"]` | suffix allow-list for the flat pass |
/// | `static_source_dir` | `dist/static` | source root for the static tree pass |
/// | `static_target_dir` | `static` | destination subdirectory under the output root |
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StageOptions {
    /// Source directory for the flat worker-script pass
    pub source_dir: PathBuf,

    /// Destination subdirectory (under the build output root) for workers
    pub assets_subdir: PathBuf,

    /// File-name suffixes selected by the flat pass
    ///
    /// Matching is a literal, case-sensitive suffix comparison: `".js"`
    /// matches `worker.js` but not `worker.jsx`.
    pub extensions: Vec<String>,

    /// Source directory for the static-asset tree pass
    pub static_source_dir: PathBuf,

    /// Destination subdirectory (under the build output root) for the
    /// static tree
    pub static_target_dir: PathBuf,

    /// Callback for warnings (optional)
    ///
    /// If not set and the `tracing` feature is enabled, warnings are logged
    /// via tracing. Otherwise, warnings are silently dropped.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warn_handler: Option<fn(&str)>,

    /// Callback for per-file and summary progress messages (optional)
    ///
    /// If not set and the `tracing` feature is enabled, messages are logged
    /// via tracing. Otherwise, messages are silently dropped.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub log_handler: Option<fn(&str)>,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("dist/workers"),
            assets_subdir: PathBuf::from("assets"),
            extensions: vec![String::from(".js")],
            static_source_dir: PathBuf::from("dist/static"),
            static_target_dir: PathBuf::from("static"),
            warn_handler: None,
            log_handler: None,
        }
    }
}

impl StageOptions {
    /// Set the source directory for the flat worker pass
    #[must_use]
    pub fn with_source_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.source_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the destination subdirectory for the flat worker pass
    #[must_use]
    pub fn with_assets_subdir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.assets_subdir = dir.as_ref().to_path_buf();
        self
    }

    /// Replace the suffix allow-list for the flat pass
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the source directory for the static tree pass
    #[must_use]
    pub fn with_static_source_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.static_source_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the destination subdirectory for the static tree pass
    #[must_use]
    pub fn with_static_target_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.static_target_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set a warning handler for non-fatal issues
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    /// Set a handler for per-file and summary progress messages
    #[must_use]
    pub fn with_log_handler(mut self, handler: fn(&str)) -> Self {
        self.log_handler = Some(handler);
        self
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }

    pub(crate) fn log(&self, msg: &str) {
        if let Some(handler) = self.log_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::info!("{}", msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_table() {
        let options = StageOptions::default();
        assert_eq!(options.source_dir, PathBuf::from("dist/workers"));
        assert_eq!(options.assets_subdir, PathBuf::from("assets"));
        assert_eq!(options.extensions, vec![String::from(".js")]);
        assert_eq!(options.static_source_dir, PathBuf::from("dist/static"));
        assert_eq!(options.static_target_dir, PathBuf::from("static"));
        assert!(options.warn_handler.is_none());
        assert!(options.log_handler.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let options = StageOptions::default()
            .with_source_dir("pkg/workers")
            .with_assets_subdir("worker-bundles")
            .with_extensions([".js", ".wasm"])
            .with_static_source_dir("pkg/static")
            .with_static_target_dir("public");

        assert_eq!(options.source_dir, PathBuf::from("pkg/workers"));
        assert_eq!(options.assets_subdir, PathBuf::from("worker-bundles"));
        assert_eq!(options.extensions, vec![".js".to_string(), ".wasm".to_string()]);
        assert_eq!(options.static_source_dir, PathBuf::from("pkg/static"));
        assert_eq!(options.static_target_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_warn_without_handler_is_silent() {
        // No handler, no tracing subscriber: must not panic
        let options = StageOptions::default();
        options.warn("no one is listening");
        options.log("still no one");
    }

    #[test]
    fn test_handlers_receive_messages() {
        use std::sync::Mutex;

        static MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());
        fn handler(msg: &str) {
            MESSAGES.lock().unwrap().push(msg.to_string());
        }

        MESSAGES.lock().unwrap().clear();

        let options = StageOptions::default()
            .with_warn_handler(handler)
            .with_log_handler(handler);
        options.warn("warned");
        options.log("logged");

        let messages = MESSAGES.lock().unwrap();
        assert_eq!(messages.as_slice(), ["warned", "logged"]);
    }
}
