//! conf CLI
//!
//! Reads values out of JSON and YAML configuration files by dotted key.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    let format = cli.format.map(conf_tree::Format::from);

    match cli.command {
        Commands::Get {
            file,
            key,
            r#type,
            default,
        } => {
            let config = commands::load(&file, format)?;
            println!(
                "{}",
                commands::run_get(&config, &key, r#type, default.as_deref())?
            );
        }
        Commands::List { file, key } => {
            let config = commands::load(&file, format)?;
            for line in commands::run_list(&config, key.as_deref())? {
                println!("{line}");
            }
        }
        Commands::Count { file, key } => {
            let config = commands::load(&file, format)?;
            println!("{}", commands::run_count(&config, &key)?);
        }
    }

    Ok(())
}
