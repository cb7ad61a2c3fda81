use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::resolve_config_path;

/// Handle the `init` command: write a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = resolve_config_path(cli.config.as_deref());

    println!("⚙️  Initializing rWorkweek…");
    Config::init_all(&path, cli.test)?;

    if cli.test {
        success(format!("Test mode: config not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
