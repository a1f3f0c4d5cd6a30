//! Project configuration: the validated user choices driving generation

pub mod resolver;

pub use resolver::{resolve, Answers, Overrides, DEFAULT_NAME};

use crate::error::ScaffoldError;
use std::fmt;

/// UI entry document written into every generated project
pub const UI_ENTRY: &str = "index.html";

/// UI framework variant for the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    Vue,
    Empty,
}

impl Framework {
    /// All variants, in prompt order
    pub const ALL: [Framework; 3] = [Framework::React, Framework::Vue, Framework::Empty];

    /// Lowercase token used in flags, tokens, and template paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Empty => "empty",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Empty => "Empty",
        }
    }

    /// Parse a user-supplied framework token (case-insensitive)
    ///
    /// Anything outside the three variants is a validation failure, never a
    /// silent default.
    pub fn parse(token: &str) -> Result<Framework, ScaffoldError> {
        match token.to_ascii_lowercase().as_str() {
            "react" => Ok(Framework::React),
            "vue" => Ok(Framework::Vue),
            "empty" => Ok(Framework::Empty),
            _ => Err(ScaffoldError::UnknownFramework(token.to_string())),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Validated set of user choices; immutable once resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    pub typescript: bool,
    pub framework: Framework,
    pub title: String,
    pub tailwind: bool,
}

impl Config {
    /// Entry document for the plugin UI, fixed for every project
    pub fn ui_entry(&self) -> &'static str {
        UI_ENTRY
    }

    /// Source-file extension for the selected language variant
    pub fn ext(&self) -> &'static str {
        if self.typescript {
            "ts"
        } else {
            "js"
        }
    }
}

/// Check a package/directory name against the `(@scope/)?name` grammar
///
/// Each segment starts with a lowercase ASCII letter, digit, or `~` and
/// continues with lowercase letters, digits, `-`, `.`, `_`, `~`.
pub fn is_valid_package_name(name: &str) -> bool {
    let bare = match name.strip_prefix('@') {
        Some(scoped) => match scoped.split_once('/') {
            Some((scope, rest)) if is_valid_segment(scope) => rest,
            _ => return false,
        },
        None => name,
    };
    is_valid_segment(bare)
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first.is_ascii_digit() || first == '~' => {
            chars.all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~')
            })
        }
        _ => false,
    }
}

/// Derive a display title from a package name
///
/// Strips an optional `@scope/` prefix, splits on `-`, `_`, `.`, and
/// whitespace runs, and capitalizes each segment's first letter.
pub fn derive_title(name: &str) -> String {
    let bare = match name.strip_prefix('@').and_then(|s| s.split_once('/')) {
        Some((_, rest)) => rest,
        None => name,
    };
    bare.split(|c: char| matches!(c, '-' | '_' | '.') || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
