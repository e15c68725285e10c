//! Catree CLI - catree command

use anyhow::Result;
use catree_cli::{cmd, config, logging, util};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catree - import slash-delimited category paths into a catalog tree
#[derive(Parser)]
#[command(name = "catree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing .catree/ (default: search upwards from the current directory)
    #[arg(short = 'C', long, global = true)]
    catalog: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and seed a catalog in the current directory
    Init,
    /// Import category paths from a text file
    Import {
        /// Store code whose tree receives the categories
        #[arg(short, long)]
        store: String,
        /// File with one slash-delimited category path per line
        #[arg(short, long)]
        file: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reset all categories and stores to the initial seed
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Show the category tree of a store
    Tree {
        /// Store code
        #[arg(short, long, default_value = "default")]
        store: String,
    },
    /// Show the effective configuration
    Config,
    /// Manage store views
    #[command(subcommand)]
    Store(StoreCommands),
}

#[derive(Subcommand)]
enum StoreCommands {
    /// List all store views
    List,
    /// Register a store view rooted at an existing category
    Add {
        /// Store code
        code: String,
        /// Root category id
        #[arg(long, default_value = "2")]
        root: u64,
    },
    /// Set the name a category shows in one store view
    Rename {
        /// Store code
        code: String,
        /// Category id
        id: u64,
        /// Name for this store
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let _guard = logging::init_logging(cli.verbose, None);
            let target = match cli.catalog {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            cmd::init::run(&target)
        }
        command => run_in_catalog(cli.catalog, cli.verbose, command),
    }
}

/// Commands that operate on an existing catalog
fn run_in_catalog(catalog: Option<PathBuf>, verbose: u8, command: Commands) -> Result<()> {
    let paths = util::locate(catalog.as_deref())?;
    let log_to_file = config::load(&paths.config)
        .map(|c| c.log.file)
        .unwrap_or(true);
    let _guard = logging::init_logging(verbose, log_to_file.then_some(paths.logs.as_path()));
    tracing::debug!(catalog = %paths.root.display(), "Using catalog");

    match command {
        Commands::Init => cmd::init::run(&paths.root),
        Commands::Import { store, file, json } => cmd::import::run(&paths, &store, &file, json),
        Commands::Clear { yes } => cmd::clear::run(&paths, yes),
        Commands::Tree { store } => cmd::tree::run(&paths, &store),
        Commands::Config => cmd::config::run(&paths),
        Commands::Store(store_cmd) => match store_cmd {
            StoreCommands::List => cmd::store::run_list(&paths),
            StoreCommands::Add { code, root } => cmd::store::run_add(&paths, &code, root),
            StoreCommands::Rename { code, id, name } => {
                cmd::store::run_rename(&paths, &code, id, &name)
            }
        },
    }
}
