//! Recursive tree copy pass.

use crate::copy::utils::{copy_file_bytes, ensure_dir};
use crate::copy::{CopyReport, FileOutcome};
use crate::error::Result;
use crate::options::StageOptions;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Copy the entire tree under `source_dir` into `dest_dir`.
///
/// Depth-first traversal in filesystem enumeration order. Every
/// subdirectory's destination is created before any file inside it is
/// written; directories and files are otherwise processed as encountered.
/// Files are overwritten unconditionally, and nothing pre-existing at the
/// destination is deleted. Failures on individual files or subdirectories
/// are recorded in the report and do not abort traversal of siblings.
///
/// Recursion is bounded only by the depth of the source tree. A cyclic
/// structure (e.g. a symlink loop through directories) is out of scope:
/// source trees are build artifacts under the caller's control.
///
/// A missing source directory is non-fatal: the pass warns and returns an
/// empty report with [`CopyReport::source_missing`] set.
///
/// # Errors
///
/// Returns [`Error::DestinationCreate`](crate::Error::DestinationCreate)
/// if the destination root cannot be created. Fatal for this pass only.
pub fn copy_tree(source_dir: &Path, dest_dir: &Path, options: &StageOptions) -> Result<CopyReport> {
    let start = Instant::now();

    if !source_dir.exists() {
        options.warn(&format!(
            "Static source directory {} does not exist",
            source_dir.display()
        ));
        return Ok(CopyReport::missing_source(start.elapsed()));
    }

    ensure_dir(dest_dir)?;

    let mut report = CopyReport::default();
    copy_tree_inner(source_dir, dest_dir, Path::new(""), &mut report, options);

    options.log(&format!(
        "Copied {} files from {} to {}",
        report.files_copied,
        source_dir.display(),
        dest_dir.display()
    ));

    report.duration = start.elapsed();
    Ok(report)
}

fn copy_tree_inner(
    src: &Path,
    dst: &Path,
    rel: &Path,
    report: &mut CopyReport,
    options: &StageOptions,
) {
    let entries = match fs::read_dir(src) {
        Ok(entries) => entries,
        Err(e) => {
            options.warn(&format!("Failed to read directory {}: {}", src.display(), e));
            report
                .outcomes
                .push((rel.to_path_buf(), FileOutcome::Failed(e.to_string())));
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                options.warn(&format!(
                    "Failed to read entry in {}: {}",
                    src.display(),
                    e
                ));
                report
                    .outcomes
                    .push((rel.to_path_buf(), FileOutcome::Failed(e.to_string())));
                continue;
            }
        };

        let name = entry.file_name();
        let src_path = entry.path();
        let dst_path = dst.join(&name);
        let rel_path = rel.join(&name);

        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            // The destination subdirectory must exist before anything is
            // written inside it; a creation failure skips this subtree but
            // not its siblings.
            if !dst_path.exists() {
                if let Err(e) = fs::create_dir_all(&dst_path) {
                    options.warn(&format!(
                        "Failed to create directory {}: {}",
                        dst_path.display(),
                        e
                    ));
                    report
                        .outcomes
                        .push((rel_path, FileOutcome::Failed(e.to_string())));
                    continue;
                }
            }
            copy_tree_inner(&src_path, &dst_path, &rel_path, report, options);
        } else {
            match copy_file_bytes(&src_path, &dst_path) {
                Ok(bytes) => {
                    report.files_copied += 1;
                    report.bytes_copied += bytes;
                    options.log(&format!("Copied {} to {}", rel_path.display(), dst.display()));
                    report.outcomes.push((rel_path, FileOutcome::Copied));
                }
                Err(e) => {
                    options.warn(&format!("Failed to copy {}: {}", src_path.display(), e));
                    report
                        .outcomes
                        .push((rel_path, FileOutcome::Failed(e.to_string())));
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    fn build_static_tree(root: &Path) {
        fs::create_dir_all(root.join("images")).unwrap();
        fs::create_dir_all(root.join("css")).unwrap();
        fs::write(root.join("images/logo.png"), b"\x89PNG fake").unwrap();
        fs::write(root.join("css/app.css"), "body { margin: 0 }").unwrap();
    }

    #[test]
    fn test_copy_tree_preserves_structure() {
        let src_dir = tempdir().unwrap();
        let dst_root = tempdir().unwrap();
        let dst = dst_root.path().join("static");

        build_static_tree(src_dir.path());

        let options = StageOptions::default();
        let report = copy_tree(src_dir.path(), &dst, &options).unwrap();

        assert_eq!(report.files_copied, 2);
        assert_eq!(
            fs::read(dst.join("images/logo.png")).unwrap(),
            fs::read(src_dir.path().join("images/logo.png")).unwrap()
        );
        assert_eq!(
            fs::read(dst.join("css/app.css")).unwrap(),
            fs::read(src_dir.path().join("css/app.css")).unwrap()
        );
    }

    #[test]
    fn test_copy_tree_is_idempotent() {
        let src_dir = tempdir().unwrap();
        let dst_root = tempdir().unwrap();
        let dst = dst_root.path().join("static");

        build_static_tree(src_dir.path());

        let options = StageOptions::default();
        let first = copy_tree(src_dir.path(), &dst, &options).unwrap();
        let second = copy_tree(src_dir.path(), &dst, &options).unwrap();

        assert_eq!(first.files_copied, second.files_copied);
        assert_eq!(
            fs::read_to_string(dst.join("css/app.css")).unwrap(),
            "body { margin: 0 }"
        );
    }

    #[test]
    fn test_copy_tree_overwrites_and_keeps_strangers() {
        let src_dir = tempdir().unwrap();
        let dst_root = tempdir().unwrap();
        let dst = dst_root.path().join("static");

        build_static_tree(src_dir.path());
        fs::create_dir_all(dst.join("css")).unwrap();
        fs::write(dst.join("css/app.css"), "stale").unwrap();
        fs::write(dst.join("unrelated.txt"), "left alone").unwrap();

        let options = StageOptions::default();
        copy_tree(src_dir.path(), &dst, &options).unwrap();

        assert_eq!(
            fs::read_to_string(dst.join("css/app.css")).unwrap(),
            "body { margin: 0 }"
        );
        // Pre-existing files outside the copied set are never deleted
        assert_eq!(
            fs::read_to_string(dst.join("unrelated.txt")).unwrap(),
            "left alone"
        );
    }

    #[test]
    fn test_copy_tree_deep_nesting() {
        let src_dir = tempdir().unwrap();
        let dst_root = tempdir().unwrap();

        let mut current = src_dir.path().to_path_buf();
        for _ in 0..12 {
            current = current.join("nested");
            fs::create_dir(&current).unwrap();
            fs::write(current.join("leaf.txt"), "deep").unwrap();
        }

        let options = StageOptions::default();
        let dst = dst_root.path().join("static");
        let report = copy_tree(src_dir.path(), &dst, &options).unwrap();

        assert_eq!(report.files_copied, 12);
        let mut check = dst;
        for _ in 0..12 {
            check = check.join("nested");
            assert!(check.join("leaf.txt").exists());
        }
    }

    #[test]
    fn test_copy_tree_missing_source_is_non_fatal() {
        let root = tempdir().unwrap();

        let options = StageOptions::default();
        let report = copy_tree(
            &root.path().join("no-static"),
            &root.path().join("static"),
            &options,
        )
        .unwrap();

        assert!(report.source_missing);
        assert_eq!(report.files_copied, 0);
        // Source is checked before the destination is created
        assert!(!root.path().join("static").exists());
    }

    #[test]
    fn test_copy_tree_dest_create_failure_is_pass_fatal() {
        let src_dir = tempdir().unwrap();
        let dst_root = tempdir().unwrap();
        fs::write(src_dir.path().join("a.txt"), "a").unwrap();
        fs::write(dst_root.path().join("blocker"), "file").unwrap();

        let options = StageOptions::default();
        let result = copy_tree(
            src_dir.path(),
            &dst_root.path().join("blocker/static"),
            &options,
        );

        assert!(matches!(result, Err(Error::DestinationCreate { .. })));
    }

    #[test]
    fn test_copy_tree_blocked_subdir_does_not_abort_siblings() {
        let src_dir = tempdir().unwrap();
        let dst_root = tempdir().unwrap();
        let dst = dst_root.path().join("static");

        build_static_tree(src_dir.path());
        // A file sits where the images subdirectory must go; copies into it
        // fail but the css sibling still completes.
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("images"), "in the way").unwrap();

        let options = StageOptions::default();
        let report = copy_tree(src_dir.path(), &dst, &options).unwrap();

        assert_eq!(report.files_copied, 1);
        assert!(report.files_failed() >= 1);
        assert!(dst.join("css/app.css").is_file());
    }

    #[test]
    fn test_copy_tree_outcomes_use_relative_paths() {
        let src_dir = tempdir().unwrap();
        let dst_root = tempdir().unwrap();

        build_static_tree(src_dir.path());

        let options = StageOptions::default();
        let report = copy_tree(src_dir.path(), &dst_root.path().join("static"), &options).unwrap();

        let mut paths: Vec<_> = report
            .outcomes
            .iter()
            .map(|(path, _)| path.clone())
            .collect();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                std::path::PathBuf::from("css/app.css"),
                std::path::PathBuf::from("images/logo.png"),
            ]
        );
    }

    #[test]
    fn test_copy_tree_empty_source() {
        let src_dir = tempdir().unwrap();
        let dst_root = tempdir().unwrap();
        let dst = dst_root.path().join("static");

        let options = StageOptions::default();
        let report = copy_tree(src_dir.path(), &dst, &options).unwrap();

        assert_eq!(report.files_copied, 0);
        assert!(!report.source_missing);
        assert!(dst.is_dir());
    }
}
