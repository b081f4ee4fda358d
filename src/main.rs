//! MealDeck - a terminal browser for TheMealDB
//!
//! Binary entry point: parses the command line, loads settings and starts
//! either the TUI or headless mode.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use mealdeck_app::config::{default_config_path, init_config_file, load_settings};

mod headless;

/// MealDeck - browse TheMealDB recipe categories and meals in the terminal
#[derive(Parser, Debug)]
#[command(name = "mealdeck", version)]
#[command(about = "Browse TheMealDB recipe categories and meals", long_about = None)]
struct Args {
    /// API base URL (overrides `api.base_url` from the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Category whose meals headless mode should list
    #[arg(long, value_name = "NAME", requires = "headless")]
    category: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);

    if args.init_config {
        let created = init_config_file(&config_path)
            .wrap_err_with(|| format!("writing {}", config_path.display()))?;
        if created {
            eprintln!("Wrote default config to {}", config_path.display());
        } else {
            eprintln!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    mealdeck_core::logging::init().wrap_err("initializing logging")?;

    let mut settings = load_settings(&config_path);
    if let Some(base_url) = args.base_url {
        settings.api.base_url = base_url;
    }

    if args.headless {
        headless::run_headless(settings, args.category).await?;
    } else {
        mealdeck_tui::run(settings).await?;
    }

    Ok(())
}
