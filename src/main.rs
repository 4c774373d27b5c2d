use clap::Parser;
use std::path::Path;
use std::sync::{atomic::{AtomicBool, Ordering}, Arc};

mod cli;
mod core;
mod crypto;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::PageContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();

    logging::init(&config)?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let mut ctx = PageContext::new(config);
    if let Some(theme) = args.theme_override {
        ctx.override_theme(theme);
    }

    // One-shot command
    if let Some(command) = args.command {
        let ok = cli::handlers::run_command(&mut ctx, command, args.json, args.copy)
            .await
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("Ctrl+C received, shutting down");
            should_exit.store(true, Ordering::SeqCst);
            println!("\n👋 Goodbye!");
            std::process::exit(0);
        })?;
    }

    // Interactive menu
    log::info!("Starting interactive menu");
    cli::menu::run_cli_menu(&mut ctx, should_exit)
        .await
        .map_err(|e| anyhow::anyhow!("CLI menu error: {}", e))?;

    Ok(())
}
