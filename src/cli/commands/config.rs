use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                warning(format!(
                    "{} does not exist yet, run `rworkweek init` first",
                    path.display()
                ));
                return Ok(());
            }

            let editor_to_use = ConfigLogic::default_editor(editor.as_deref());
            ConfigLogic::edit(path, &editor_to_use)?;
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
        }
    }

    Ok(())
}
