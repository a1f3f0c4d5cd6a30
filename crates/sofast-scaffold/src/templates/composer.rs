//! Destination tree composition from ordered template layers

use super::tokens::{substitute, TokenTable};
use super::TemplateLayer;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Marker suffix identifying source files that receive token substitution;
/// stripped from the output name
pub const TEMPLATE_SUFFIX: &str = ".tpl";

/// Materialize `layers` into `destination`
///
/// Layers are processed strictly in order, so a later layer's file wins on
/// path collisions. Within a layer, directories are created before any file
/// inside them is written. A missing layer root contributes nothing. Any
/// filesystem error aborts composition immediately; files already written
/// stay on disk.
pub async fn compose(
    layers: &[TemplateLayer],
    destination: &Path,
    tokens: &TokenTable,
) -> Result<()> {
    fs::create_dir_all(destination)
        .await
        .with_context(|| format!("Failed to create {}", destination.display()))?;

    for layer in layers {
        if !layer.root().exists() {
            continue;
        }
        apply_layer(layer, destination, tokens).await?;
    }

    Ok(())
}

async fn apply_layer(layer: &TemplateLayer, destination: &Path, tokens: &TokenTable) -> Result<()> {
    // walkdir yields a directory before its contents, so every parent exists
    // by the time a file inside it is written
    for entry in WalkDir::new(layer.root()).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk {}", layer.root().display()))?;
        let relative = entry
            .path()
            .strip_prefix(layer.root())
            .context("Walked entry outside its layer root")?;
        if relative.as_os_str().is_empty() {
            continue;
        }

        if entry.file_type().is_dir() {
            let dir = destination.join(relative);
            fs::create_dir_all(&dir)
                .await
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        match file_name.strip_suffix(TEMPLATE_SUFFIX) {
            Some(stripped) => {
                let mut target = destination.join(relative);
                target.set_file_name(stripped);
                let content = fs::read_to_string(entry.path())
                    .await
                    .with_context(|| format!("Failed to read {}", entry.path().display()))?;
                fs::write(&target, substitute(&content, tokens))
                    .await
                    .with_context(|| format!("Failed to write {}", target.display()))?;
            }
            None => {
                let target = destination.join(relative);
                fs::copy(entry.path(), &target).await.with_context(|| {
                    format!(
                        "Failed to copy {} to {}",
                        entry.path().display(),
                        target.display()
                    )
                })?;
            }
        }
    }

    Ok(())
}
