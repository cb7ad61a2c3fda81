//! Path utilities: expand ~ in user supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Config file to use: the `--config` override when given, the platform
/// default otherwise.
pub fn resolve_config_path(custom: Option<&str>) -> PathBuf {
    match custom {
        Some(p) => expand_tilde(p),
        None => crate::config::Config::config_file(),
    }
}
