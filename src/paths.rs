use std::path::PathBuf;

use directories::ProjectDirs;

/// Returns the root directory for configuration, preferences and logs.
///
/// Resolution order:
/// 1. `TICKETBOARD_ROOT` environment variable (if set)
/// 2. Platform config directory (e.g. `~/.config/ticketboard`)
/// 3. Current working directory + `.ticketboard`
pub fn board_root() -> PathBuf {
    if let Ok(root) = std::env::var("TICKETBOARD_ROOT")
        && !root.is_empty()
    {
        return PathBuf::from(root);
    }

    ProjectDirs::from("", "", "ticketboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".ticketboard"))
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    board_root().join("config.yaml")
}

/// Returns the path to the persisted display preferences.
pub fn preferences_path() -> PathBuf {
    board_root().join("preferences.yaml")
}

/// Returns the path the TUI writes its log to.
pub fn log_path() -> PathBuf {
    board_root().join("ticketboard.log")
}
