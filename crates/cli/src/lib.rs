mod check;
mod list;
mod scan;

use capstan_core::context::SearchContext;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "capstan",
    version,
    about = "Discover and inspect capability provider manifests",
    long_about = "Capstan scans an ordered set of location roots (directories or zip archives) \
                  for provider manifests and reports the provider types declared for a \
                  capability. It is the packaging-side companion to the capstan discovery \
                  library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the provider names discovered for a capability
    #[command(
        long_about = "Walks the location roots in order, parses every manifest for the \
                            capability, and prints the deduplicated provider names in discovery order."
    )]
    List {
        /// Fully-qualified capability name
        #[arg(value_name = "CAPABILITY")]
        capability: String,
        /// Location root (directory or .zip archive); repeatable, scanned in order.
        /// Defaults to the CAPSTAN_PATH search path.
        #[arg(long, value_name = "ROOT")]
        path: Vec<PathBuf>,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Validate the provider manifests for a capability
    #[command(
        long_about = "Parses every manifest for the capability and reports the first \
                            syntax or I/O problem found. Exits nonzero on failure."
    )]
    Check {
        /// Fully-qualified capability name
        #[arg(value_name = "CAPABILITY")]
        capability: String,
        /// Location root (directory or .zip archive); repeatable, scanned in order
        #[arg(long, value_name = "ROOT")]
        path: Vec<PathBuf>,
    },
    /// Survey a directory tree for provider manifests
    #[command(
        long_about = "Walks the tree and reports every manifest found beneath a \
                            capstan-providers directory, with the providers each one lists."
    )]
    Scan {
        /// Root of the tree to survey
        #[arg(value_name = "ROOT")]
        root: PathBuf,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = capstan_core::logging::init_logging("cli", false);

    match cli.command {
        Commands::List {
            capability,
            path,
            json,
        } => list::run(&capability, &path, json),
        Commands::Check { capability, path } => check::run(&capability, &path),
        Commands::Scan { root, json } => scan::run(&root, json),
    }
}

/// Build the search context for a command: explicit roots if given,
/// otherwise the ambient CAPSTAN_PATH context.
pub(crate) fn context_for(paths: &[PathBuf]) -> SearchContext {
    if paths.is_empty() {
        SearchContext::ambient()
    } else {
        SearchContext::from_roots(paths.iter().cloned())
    }
}
