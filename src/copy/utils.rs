//! Shared helpers for the copy passes.

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

/// Ensure a destination directory exists, creating missing ancestors.
///
/// Creation failure is fatal for the calling pass and surfaces as
/// [`Error::DestinationCreate`]. Directories already created by a partial
/// attempt are left in place; the filesystem does not roll them back.
pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| Error::DestinationCreate {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Copy the full byte content of `src` over `dst`, returning bytes written.
///
/// Uses the temp file + rename pattern: bytes are staged in a temporary
/// file inside the destination directory and then renamed over the target,
/// so an interrupted copy never leaves a partial destination file. Any
/// same-named destination file is replaced, last writer wins.
pub(crate) fn copy_file_bytes(src: &Path, dst: &Path) -> Result<u64> {
    let src_file = File::open(src)?;

    let dst_parent = dst.parent().unwrap_or(Path::new("."));
    let temp_file = tempfile::NamedTempFile::new_in(dst_parent).map_err(|e| Error::TempFile {
        path: dst_parent.to_path_buf(),
        source: e,
    })?;

    let bytes = io::copy(&mut BufReader::new(src_file), &mut temp_file.as_file())?;

    temp_file.persist(dst).map_err(|e| Error::Persist {
        path: dst.to_path_buf(),
        source: e.error,
    })?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a/b/c");

        ensure_dir(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_existing_is_ok() {
        let dir = tempdir().unwrap();
        ensure_dir(dir.path()).unwrap();
    }

    #[test]
    fn test_ensure_dir_blocked_by_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("blocker"), "not a dir").unwrap();

        let result = ensure_dir(&dir.path().join("blocker/child"));

        assert!(matches!(result, Err(Error::DestinationCreate { .. })));
    }

    #[test]
    fn test_copy_file_bytes_basic() {
        let src_dir = tempdir().unwrap();
        let dst_dir = tempdir().unwrap();

        let src = src_dir.path().join("worker.js");
        let dst = dst_dir.path().join("worker.js");
        fs::write(&src, "postMessage('ready')").unwrap();

        let bytes = copy_file_bytes(&src, &dst).unwrap();

        assert_eq!(bytes, 20);
        assert_eq!(fs::read(&src).unwrap(), fs::read(&dst).unwrap());
    }

    #[test]
    fn test_copy_file_bytes_overwrites() {
        let src_dir = tempdir().unwrap();
        let dst_dir = tempdir().unwrap();

        let src = src_dir.path().join("app.css");
        let dst = dst_dir.path().join("app.css");
        fs::write(&src, "body{}").unwrap();
        fs::write(&dst, "stale destination content").unwrap();

        copy_file_bytes(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "body{}");
    }

    #[test]
    fn test_copy_file_bytes_missing_source() {
        let src_dir = tempdir().unwrap();
        let dst_dir = tempdir().unwrap();

        let result = copy_file_bytes(
            &src_dir.path().join("vanished.js"),
            &dst_dir.path().join("vanished.js"),
        );

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
