use super::open_session;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use repofinder::display;
use repofinder::{FinderConfig, Result, StdinPrompt};
use std::io;

pub fn clear_results(config: &FinderConfig) -> Result<()> {
    let mut session = open_session(config, &StdinPrompt)?;
    session.clear_results()?;
    println!("Results cleared.");
    Ok(())
}

pub fn show_config(config: &FinderConfig, init: bool) -> Result<()> {
    let config_path = FinderConfig::config_path()?;
    if init {
        if FinderConfig::init_at(&config_path)? {
            println!("✓ Wrote default config to {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }
    }

    println!("{}", display::rule());
    println!("Config file: {}", config_path.display());
    println!("Store file:  {}", config.resolved_store_path()?.display());
    println!("{}", display::rule());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = crate::Cli::command();
    generate(shell, &mut cmd, "repofinder", &mut io::stdout());
}
