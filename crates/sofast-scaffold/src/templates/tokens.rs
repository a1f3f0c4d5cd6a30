//! Token table: literal placeholder strings and their replacements
//!
//! Tokens are substituted as exact literal substrings, never interpreted as
//! patterns. Replacement values are emitted without being re-scanned, so a
//! value containing token-like text cannot trigger further substitution.

use crate::config::Config;

/// Closed set of placeholder tokens with their configuration-derived values
#[derive(Debug, Clone)]
pub struct TokenTable {
    entries: Vec<(&'static str, String)>,
}

impl TokenTable {
    /// Token/value pairs in substitution order
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }
}

/// Build the token table for a resolved configuration
pub fn token_table(config: &Config) -> TokenTable {
    let tailwind_import = if config.tailwind {
        "import tailwindcss from '@tailwindcss/vite';"
    } else {
        ""
    };
    let tailwind_trailing = if config.tailwind { ", tailwindcss()" } else { "" };
    let tailwind_solo = if config.tailwind { "tailwindcss()" } else { "" };

    TokenTable {
        entries: vec![
            ("__EXT__", config.ext().to_string()),
            ("__PKG_NAME__", config.name.clone()),
            ("__DISPLAY_NAME__", config.title.clone()),
            ("__UI_ENTRY__", config.ui_entry().to_string()),
            ("__FRAMEWORK__", config.framework.as_str().to_string()),
            ("__TAILWIND_IMPORT__", tailwind_import.to_string()),
            ("__TAILWIND_PLUGIN_TRAILING__", tailwind_trailing.to_string()),
            ("__TAILWIND_PLUGIN_SOLO__", tailwind_solo.to_string()),
        ],
    }
}

/// Replace every token occurrence in `input` with its value
///
/// Single left-to-right pass over the input; emitted replacement text is
/// never re-scanned.
pub fn substitute(input: &str, tokens: &TokenTable) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    'scan: while let Some(ch) = rest.chars().next() {
        // Every token starts with an underscore
        if ch == '_' {
            for (token, value) in tokens.entries() {
                if let Some(tail) = rest.strip_prefix(token) {
                    out.push_str(value);
                    rest = tail;
                    continue 'scan;
                }
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}
