//! rWorkweek library root.
//! Exposes the CLI parser, the high-level run() function and the
//! week calculation engine (`core`).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (--config override first)
    let cfg_path = utils::path::resolve_config_path(cli.config.as_deref());
    let cfg = Config::load(&cfg_path)?;

    // 3️⃣ colours on/off for the whole run
    utils::colors::set_enabled(cfg.color);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &cfg_path)
}
