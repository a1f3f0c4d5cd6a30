//! Template layers, token substitution, and destination composition
//!
//! This module provides:
//! - The ordered layer model (`common/` overlaid by the framework/language
//!   variant tree)
//! - The closed token table derived from the configuration
//! - Composition of the layers into the destination directory

pub mod composer;
pub mod tokens;

pub use composer::{compose, TEMPLATE_SUFFIX};
pub use tokens::{substitute, token_table, TokenTable};

use crate::config::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the template root directory
pub const TEMPLATE_DIR_ENV: &str = "SOFAST_TEMPLATE_DIR";

/// One source tree contributing files to the output
///
/// Layers are composed in order; a later layer's output at the same relative
/// path fully replaces the earlier layer's, with no content merging.
#[derive(Debug, Clone)]
pub struct TemplateLayer {
    root: PathBuf,
}

impl TemplateLayer {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// The ordered layer list for a configuration: `common/`, then
/// `<framework>/<ts|js>/`
pub fn layers(templates_root: &Path, config: &Config) -> Vec<TemplateLayer> {
    vec![
        TemplateLayer::new(templates_root.join("common")),
        TemplateLayer::new(
            templates_root
                .join(config.framework.as_str())
                .join(config.ext()),
        ),
    ]
}

/// Locate the template root: `SOFAST_TEMPLATE_DIR` if set, else the
/// `templates/` directory shipped next to the running executable
pub fn default_templates_root() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    match exe.parent() {
        Some(dir) => Ok(dir.join("templates")),
        None => Ok(PathBuf::from("templates")),
    }
}
