//! Package manifest synthesis
//!
//! `build` is a pure function from `Config` to the `package.json` contents of
//! the generated project. Dependency pins are constants; selection is driven
//! by three independent axes (framework, tailwind, typescript).

use crate::config::{Config, Framework};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Version stamped into every generated package
const PACKAGE_VERSION: &str = "0.0.1";

// Pinned dependency versions for generated projects
const VITE: &str = "^7.1.6";
const REACT: &str = "^19.1.1";
const REACT_DOM: &str = "^19.1.1";
const VITE_PLUGIN_REACT: &str = "^5.0.3";
const VUE: &str = "^3.5.12";
const VITE_PLUGIN_VUE: &str = "^5.1.4";
const TYPESCRIPT: &str = "^5.9.2";
const TYPES_REACT: &str = "^19.1.13";
const TYPES_REACT_DOM: &str = "^19.1.9";
const TAILWINDCSS: &str = "^4.1.10";
const TAILWIND_VITE_PLUGIN: &str = "^4.1.10";

/// A command exposed by the generated plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub name: String,
    pub title: String,
    pub mode: String,
}

/// The generated `package.json` contents
///
/// Written once, before template composition, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub version: String,
    pub private: bool,
    pub scripts: BTreeMap<String, String>,
    pub commands: Vec<Command>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Manifest {
    /// Pretty-printed JSON with a trailing newline, ready to write to disk
    pub fn to_json_string(&self) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(self).context("Failed to serialize package.json")?;
        out.push('\n');
        Ok(out)
    }
}

/// Build the package manifest for a resolved configuration
///
/// Pure and deterministic: no I/O, no randomness, same output for the same
/// configuration.
pub fn build(config: &Config) -> Manifest {
    let mut scripts = BTreeMap::new();
    insert(&mut scripts, "dev", "vite");
    insert(
        &mut scripts,
        "build",
        "vite build && (cp package.json dist/package.json || copy package.json dist\\package.json >NUL)",
    );
    insert(&mut scripts, "preview", "vite preview");

    let mut dependencies = BTreeMap::new();
    let mut dev_dependencies = BTreeMap::new();
    insert(&mut dev_dependencies, "vite", VITE);

    match config.framework {
        Framework::React => {
            insert(&mut dependencies, "react", REACT);
            insert(&mut dependencies, "react-dom", REACT_DOM);
            insert(&mut dev_dependencies, "@vitejs/plugin-react", VITE_PLUGIN_REACT);
            if config.typescript {
                insert(&mut dev_dependencies, "typescript", TYPESCRIPT);
                insert(&mut dev_dependencies, "@types/react", TYPES_REACT);
                insert(&mut dev_dependencies, "@types/react-dom", TYPES_REACT_DOM);
            }
        }
        Framework::Vue => {
            insert(&mut dependencies, "vue", VUE);
            insert(&mut dev_dependencies, "@vitejs/plugin-vue", VITE_PLUGIN_VUE);
            if config.typescript {
                insert(&mut dev_dependencies, "typescript", TYPESCRIPT);
            }
        }
        Framework::Empty => {
            if config.typescript {
                insert(&mut dev_dependencies, "typescript", TYPESCRIPT);
            }
        }
    }

    // Tailwind additions are independent of framework and language
    if config.tailwind {
        insert(&mut dependencies, "tailwindcss", TAILWINDCSS);
        insert(&mut dependencies, "@tailwindcss/vite", TAILWIND_VITE_PLUGIN);
    }

    Manifest {
        name: config.name.clone(),
        module_type: "module".to_string(),
        version: PACKAGE_VERSION.to_string(),
        private: true,
        scripts,
        commands: vec![Command {
            name: "hello".to_string(),
            title: config.title.clone(),
            mode: "view".to_string(),
        }],
        dependencies,
        dev_dependencies,
    }
}

fn insert(map: &mut BTreeMap<String, String>, key: &str, value: &str) {
    map.insert(key.to_string(), value.to_string());
}
