//! Destination directory guard

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tokio::fs;

/// Verify the destination is usable before any write happens
///
/// An absent path and an existing empty directory both pass. A directory with
/// at least one entry fails with `DirectoryNotEmpty`, as does an existing
/// non-directory path. Nothing is created or modified here; this is a check,
/// not a lock.
pub async fn ensure_available(path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to stat {}", path.display()));
        }
    };

    if !metadata.is_dir() {
        return Err(ScaffoldError::DirectoryNotEmpty(path.to_path_buf()).into());
    }

    let mut entries = fs::read_dir(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let first = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if first.is_some() {
        return Err(ScaffoldError::DirectoryNotEmpty(path.to_path_buf()).into());
    }

    Ok(())
}
