//! Failure taxonomy for the scaffolding flow

use std::path::PathBuf;
use thiserror::Error;

/// Failures that terminate a scaffolding run
///
/// Every variant exits the process non-zero. `Cancelled` gets its own
/// user-facing message instead of an error report; the others are printed
/// as errors. All of them occur before or instead of filesystem writes.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Package/directory name outside the `(@scope/)?name` grammar
    #[error("Invalid package/directory name: {0}")]
    InvalidName(String),

    /// Framework token outside react/vue/empty
    #[error("Unknown framework '{0}' (expected react, vue or empty)")]
    UnknownFramework(String),

    /// Destination exists and already contains entries
    #[error("Target directory not empty: {}", .0.display())]
    DirectoryNotEmpty(PathBuf),

    /// User aborted an interactive prompt
    #[error("Aborted by user")]
    Cancelled,
}
