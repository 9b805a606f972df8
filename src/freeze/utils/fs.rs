//! File system utilities for freezing.
//!
//! Removal helpers here are idempotent: a missing target counts as removed,
//! so back-to-back runs clean up without special cases.

use crate::freeze::error::{Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Removes the directory and its contents if it exists.
///
/// Returns `true` when something was removed.
pub async fn remove_dir_all(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes a single file if it exists.
///
/// Returns `true` when the file was removed.
pub async fn remove_file(path: &Path) -> Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).fs_context("removing file", path),
    }
}

/// Lists regular files in `dir` whose names match `pattern`.
///
/// Only the top level of `dir` is scanned.
pub async fn find_matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir_str = dir.to_str().ok_or_else(|| {
        Error::GenericError(format!("path is not valid UTF-8: {}", dir.display()))
    })?;
    // Metacharacters in the directory itself must match literally
    let full_pattern = Path::new(&glob::Pattern::escape(dir_str))
        .join(pattern)
        .to_string_lossy()
        .into_owned();

    // glob iterates the directory synchronously
    tokio::task::spawn_blocking(move || {
        let mut matches = Vec::new();
        for entry in glob::glob(&full_pattern)? {
            match entry {
                Ok(path) if path.is_file() => matches.push(path),
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Skipping unreadable entry {}: {}", e.path().display(), e);
                }
            }
        }
        matches.sort();
        Ok::<_, Error>(matches)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory scan task panicked: {}", e)))?
}

/// Returns the size in bytes of the regular file at `path`.
pub async fn file_size(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path)
        .await
        .fs_context("reading artifact metadata", path)?;

    if !metadata.is_file() {
        return Err(Error::GenericError(format!(
            "{} is not a regular file",
            path.display()
        )));
    }

    Ok(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn remove_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dist");
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("nested/file"), b"x").unwrap();

        assert!(remove_dir_all(&dir).await.unwrap());
        assert!(!dir.exists());
        assert!(!remove_dir_all(&dir).await.unwrap());
    }

    #[tokio::test]
    async fn remove_file_reports_missing_as_not_removed() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("FileWatcher.spec");
        std::fs::write(&file, b"# spec").unwrap();

        assert!(remove_file(&file).await.unwrap());
        assert!(!remove_file(&file).await.unwrap());
    }

    #[tokio::test]
    async fn find_matching_files_only_returns_top_level_matches() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.spec"), b"").unwrap();
        std::fs::write(temp.path().join("b.spec"), b"").unwrap();
        std::fs::write(temp.path().join("main.py"), b"").unwrap();
        std::fs::create_dir(temp.path().join("dir.spec")).unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("sub/c.spec"), b"").unwrap();

        let found = find_matching_files(temp.path(), "*.spec").await.unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.spec", "b.spec"]);
    }

    #[tokio::test]
    async fn find_matching_files_handles_bracketed_directory() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("watcher [v2]");
        std::fs::create_dir(&project).unwrap();
        std::fs::write(project.join("FileWatcher.spec"), b"").unwrap();

        let found = find_matching_files(&project, "*.spec").await.unwrap();
        assert_eq!(found, vec![project.join("FileWatcher.spec")]);
    }

    #[tokio::test]
    async fn file_size_rejects_directories() {
        let temp = TempDir::new().unwrap();
        assert!(file_size(temp.path()).await.is_err());

        let file = temp.path().join("artifact");
        std::fs::write(&file, vec![0u8; 2048]).unwrap();
        assert_eq!(file_size(&file).await.unwrap(), 2048);
    }
}
