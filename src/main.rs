mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use repofinder::FinderConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "repofinder")]
#[command(about = "Github Public Repo Finder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the search API
    #[arg(long, global = true, env = "REPOFINDER_API_URL")]
    api_url: Option<String>,
    /// File that keeps results between runs
    #[arg(long, global = true, env = "REPOFINDER_STORE")]
    store: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search repositories by keyword and rank them by watchers
    #[command(short_flag = 's')]
    Search {
        /// Search term (letters, digits and underscores, space separated)
        term: String,
    },
    /// List the stored results
    #[command(short_flag = 'l')]
    List,
    /// Show one stored result in detail
    Show {
        /// Repository id, as printed by `list`
        id: u64,
    },
    /// Remove a result from the stored list
    #[command(short_flag = 'd')]
    Delete {
        /// Repository id, as printed by `list`
        id: u64,
        /// Don't ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Forget the stored results
    Clear,
    /// Print the effective configuration
    Config {
        /// Write a default config file if there is none yet
        #[arg(long)]
        init: bool,
    },
    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "repofinder=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> repofinder::Result<FinderConfig> {
    let mut config = FinderConfig::load()?;
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    if let Some(store) = &cli.store {
        config.store_path = Some(store.clone());
    }
    Ok(config)
}

fn run(cli: Cli) -> repofinder::Result<()> {
    let Some(command) = &cli.command else {
        let _ = Cli::command().print_help();
        println!();
        return Ok(());
    };
    if let Commands::Completions { shell } = command {
        commands::generate_completions(*shell);
        return Ok(());
    }

    let config = load_config(&cli)?;
    match command {
        Commands::Search { term } => commands::search_repos(&config, term),
        Commands::List => commands::list_repos(&config),
        Commands::Show { id } => commands::show_repo(&config, *id),
        Commands::Delete { id, yes } => commands::delete_repo(&config, *id, *yes),
        Commands::Clear => commands::clear_results(&config),
        Commands::Config { init } => commands::show_config(&config, *init),
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
