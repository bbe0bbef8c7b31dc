//! XDG Base Directory paths for proxyrank.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths.

use std::path::{Path, PathBuf};

/// Application directory name under the XDG roots.
pub const APP_NAME: &str = "proxyrank";

/// Name of the per-project configuration directory.
pub const PROJECT_DIR_NAME: &str = ".proxyrank";

/// Config file name inside either configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the project configuration directory.
pub const PROJECT_CONFIG_DIR_ENV: &str = "PROXYRANK_PROJECT_CONFIG_DIR";

/// Get the proxyrank config directory.
///
/// Returns `$XDG_CONFIG_HOME/proxyrank` if set, otherwise `~/.config/proxyrank`.
///
/// # Examples
///
/// ```
/// use proxyrank_paths::config_dir;
///
/// let config = config_dir();
/// assert!(config.ends_with("proxyrank"));
/// ```
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Get the proxyrank data directory.
///
/// Returns `$XDG_DATA_HOME/proxyrank` if set, otherwise `~/.local/share/proxyrank`.
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
}

/// Path of the user-level config file.
pub fn user_config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Path of the project-level config file below `root`.
///
/// `PROXYRANK_PROJECT_CONFIG_DIR` replaces `root/.proxyrank` when set.
pub fn project_config_file(root: &Path) -> PathBuf {
    let dir = match std::env::var(PROJECT_CONFIG_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => root.join(PROJECT_DIR_NAME),
    };
    dir.join(CONFIG_FILE_NAME)
}

fn xdg_dir(var: &str, home_relative: &str) -> PathBuf {
    if let Ok(xdg) = std::env::var(var)
        && !xdg.is_empty()
    {
        PathBuf::from(xdg).join(APP_NAME)
    } else if let Some(home) = dirs::home_dir() {
        home.join(home_relative).join(APP_NAME)
    } else {
        PathBuf::from(home_relative).join(APP_NAME)
    }
}
