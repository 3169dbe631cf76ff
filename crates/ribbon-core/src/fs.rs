//! Filesystem utilities for atomic writes of export documents.

use std::fs;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Result, RibbonError};

/// Write `data` to `path` atomically: write a sibling temp file, sync it,
/// then rename it over the destination.
///
/// Parent directories are created when missing.
///
/// # Errors
///
/// Returns `RibbonError::Storage` if the temp file cannot be written or the
/// final rename fails.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .map_err(|e| RibbonError::Storage(format!("Create directory failed: {}", e)))?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| RibbonError::Storage(format!("System time error: {}", e)))?
        .as_nanos();
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| RibbonError::Storage("Invalid export filename".to_string()))?;
    let temp_path = parent.join(format!("{}.{}.tmp", filename, nanos));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| RibbonError::Storage(format!("Temp file create failed: {}", e)))?;
    file.write_all(data)
        .map_err(|e| RibbonError::Storage(format!("Temp file write failed: {}", e)))?;
    file.sync_all()
        .map_err(|e| RibbonError::Storage(format!("Temp file sync failed: {}", e)))?;

    rename_with_fallback(&temp_path, path)
        .map_err(|e| RibbonError::Storage(format!("Atomic rename failed: {}", e)))?;

    Ok(())
}

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.json");
        let dest = dir.path().join("dest.json");

        File::create(&dest).unwrap().write_all(b"old").unwrap();
        File::create(&temp).unwrap().write_all(b"new").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_creates_parents_and_leaves_no_temp() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("exports").join("progress.json");

        write_atomic(&dest, b"{\"version\":1}").unwrap();
        write_atomic(&dest, b"{\"version\":1,\"progress\":{}}").unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "{\"version\":1,\"progress\":{}}"
        );
        let leftovers: Vec<_> = fs::read_dir(dest.parent().unwrap())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
