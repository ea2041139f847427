//! Atomic file writes.
//!
//! Saved INI files are written to a temporary sibling (`.{filename}.tmp`),
//! synced, and then renamed over the target, so a crash never leaves a
//! half-written document behind. `std::fs::rename` replaces an existing
//! target on both POSIX and Windows; source and target share a directory,
//! so they are always on the same filesystem.

use crate::error::{IniError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// Missing parent directories are created first.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(IniError::FileError)` - On create, write, sync or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            IniError::FileError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        IniError::FileError(format!(
            "Could not open file for writing: {}: {}",
            path.display(),
            e
        ))
    })
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            IniError::FileError(format!("invalid file path: {}", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        IniError::FileError(format!(
            "Could not open file for writing: {}: {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            IniError::FileError(format!("failed to write '{}': {}", path.display(), e))
        })
}
