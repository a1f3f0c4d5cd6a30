//! Sofast Scaffold - Core library for the `create-sofast` CLI
//!
//! This library materializes a new Sofast extension project on disk from a
//! fixed set of file templates, driven by a small validated configuration
//! (package name, language variant, framework, display title, styling).
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure configuration resolution, manifest
//!   building, token substitution, and template composition
//! - **Layer 2: Workflow Orchestration** - `run` wires the steps together:
//!   resolve, guard the destination, write the manifest, compose the layers
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use sofast_scaffold::{config, manifest, templates};
//!
//! let cfg = config::resolve(&overrides, &mut answers)?;
//! let pkg = manifest::build(&cfg);
//! let layers = templates::layers(&templates_root, &cfg);
//! templates::compose(&layers, &destination, &templates::token_table(&cfg)).await?;
//! ```

pub mod config;
pub mod error;
pub mod manifest;
pub mod runtime;
pub mod target;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Config, Framework};
pub use error::ScaffoldError;
pub use manifest::Manifest;
pub use runtime::PackageManager;
pub use templates::{compose, TemplateLayer, TokenTable};

#[cfg(feature = "tui")]
pub use tui::run;
