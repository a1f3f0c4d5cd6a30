//! Interactive scaffolding flow built on cliclack

use crate::config::{self, resolver, Config, Framework};
use crate::error::ScaffoldError;
use crate::manifest;
use crate::runtime::PackageManager;
use crate::target;
use crate::templates::{self, token_table};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use tokio::fs;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the installed set
    pub template_dir: Option<PathBuf>,

    /// Target directory / package name
    pub name: Option<String>,

    /// Use the TypeScript variant
    pub typescript: Option<bool>,

    /// Framework token (react, vue or empty)
    pub framework: Option<String>,

    /// Display title for the generated default command
    pub title: Option<String>,

    /// Include Tailwind styling
    pub tailwind: Option<bool>,
}

impl CreateArgs {
    fn overrides(&self) -> resolver::Overrides {
        resolver::Overrides {
            name: self.name.clone(),
            typescript: self.typescript,
            framework: self.framework.clone(),
            title: self.title.clone(),
            tailwind: self.tailwind,
        }
    }
}

/// Map a cliclack prompt result, translating user cancellation
fn prompted<T>(result: io::Result<T>) -> Result<T> {
    result.map_err(|e| {
        if e.kind() == io::ErrorKind::Interrupted {
            ScaffoldError::Cancelled.into()
        } else {
            anyhow::Error::from(e).context("Prompt failed")
        }
    })
}

/// `Answers` provider backed by cliclack prompts
struct ClackAnswers;

impl resolver::Answers for ClackAnswers {
    fn name(&mut self) -> Result<String> {
        prompted(
            cliclack::input("Plugin directory name (e.g. my-plugin)")
                .placeholder(resolver::DEFAULT_NAME)
                .default_input(resolver::DEFAULT_NAME)
                .validate(|value: &String| {
                    if config::is_valid_package_name(value) {
                        Ok(())
                    } else {
                        Err("Invalid package/directory name")
                    }
                })
                .interact(),
        )
    }

    fn use_typescript(&mut self) -> Result<bool> {
        prompted(
            cliclack::confirm("Use TypeScript?")
                .initial_value(true)
                .interact(),
        )
    }

    fn framework(&mut self) -> Result<Framework> {
        let mut select = cliclack::select("Framework");
        for framework in Framework::ALL {
            select = select.item(framework, framework.display_name(), "");
        }
        prompted(select.interact())
    }

    fn title(&mut self, suggested: &str) -> Result<String> {
        prompted(
            cliclack::input("Display title")
                .default_input(suggested)
                .interact(),
        )
    }

    fn use_tailwind(&mut self) -> Result<bool> {
        prompted(
            cliclack::confirm("Use Tailwind?")
                .initial_value(true)
                .interact(),
        )
    }
}

/// Run the scaffolding flow: resolve the configuration, guard the
/// destination, write the manifest, compose the template layers
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("Create Sofast Extension".bold())?;

    // Step 1: Resolve configuration (prompts only for missing fields; no
    // filesystem effects yet, so cancellation here is always safe)
    let config = resolver::resolve(&args.overrides(), &mut ClackAnswers)?;

    // Step 2: Guard the destination, then claim it
    let current_dir = std::env::current_dir().context("Failed to resolve the current directory")?;
    let destination = current_dir.join(&config.name);
    target::ensure_available(&destination).await?;
    fs::create_dir_all(&destination)
        .await
        .with_context(|| format!("Failed to create {}", destination.display()))?;

    // Step 3: Write the manifest, the first artifact
    let manifest_path = destination.join("package.json");
    fs::write(&manifest_path, manifest::build(&config).to_json_string()?)
        .await
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    // Step 4: Compose template layers (common, then variant)
    let templates_root = match &args.template_dir {
        Some(dir) => {
            cliclack::log::info(format!("Using templates from {}", dir.display()))?;
            dir.clone()
        }
        None => templates::default_templates_root()?,
    };

    let spinner = cliclack::spinner();
    spinner.start("Creating project...");
    let layers = templates::layers(&templates_root, &config);
    match templates::compose(&layers, &destination, &token_table(&config)).await {
        Ok(()) => spinner.stop(format!(
            "Scaffolded Sofast extension: {}",
            destination.display()
        )),
        Err(e) => {
            spinner.stop("Failed to create project");
            return Err(e);
        }
    }

    // Step 5: Show next steps
    print_next_steps(&config, PackageManager::detect())?;

    Ok(())
}

fn print_next_steps(config: &Config, package_manager: PackageManager) -> Result<()> {
    println!();
    println!("  Next steps");
    println!();
    println!("  1.  {} {}", "cd".bold(), config.name);
    println!("  2.  {}", package_manager.install_command().bold());
    println!("  3.  {} dev", package_manager.run_command().bold());

    cliclack::outro("Happy coding!")?;

    Ok(())
}
