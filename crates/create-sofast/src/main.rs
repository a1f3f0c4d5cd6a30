//! create-sofast - Scaffold Sofast extension projects using Vite

use clap::Parser;
use colored::Colorize;
use sofast_scaffold::tui::CreateArgs;
use sofast_scaffold::ScaffoldError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-sofast")]
#[command(about = "Scaffold Sofast plugin projects using Vite")]
#[command(version)]
pub struct Args {
    /// Target directory / package name
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Target directory / package name (flag form)
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        conflicts_with = "name"
    )]
    pub name_flag: Option<String>,

    /// Use TypeScript
    #[arg(long = "ts", overrides_with = "no_ts")]
    pub ts: bool,

    /// Use plain JavaScript
    #[arg(long = "no-ts", overrides_with = "ts")]
    pub no_ts: bool,

    /// Framework preference (react, vue or empty)
    #[arg(short, long, value_name = "FRAMEWORK")]
    pub framework: Option<String>,

    /// Display title for the generated default command
    #[arg(short, long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Include Tailwind styling
    #[arg(long = "tailwind", overrides_with = "no_tailwind")]
    pub tailwind: bool,

    /// Skip Tailwind styling
    #[arg(long = "no-tailwind", overrides_with = "tailwind")]
    pub no_tailwind: bool,

    /// Local directory to use for templates instead of the installed set (for development use)
    #[arg(long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            name: args.name_flag.or(args.name),
            typescript: toggle(args.ts, args.no_ts),
            framework: args.framework,
            title: args.title,
            tailwind: toggle(args.tailwind, args.no_tailwind),
        }
    }
}

/// Collapse a --flag / --no-flag pair into a tri-state
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn report(error: &anyhow::Error) {
    if matches!(
        error.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::Cancelled)
    ) {
        eprintln!("\n{} {}", "✖".red(), "Aborted by user".dimmed());
    } else {
        eprintln!("{} {:#}", "Error:".red().bold(), error);
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(1);
    })
    .ok();

    let args = Args::parse();
    let result = sofast_scaffold::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(error) = result {
        report(&error);
        std::process::exit(1);
    }
}
