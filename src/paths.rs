//! XDG directory helpers for config/data locations.

use std::path::PathBuf;

/// Base directory for persistent data.
///
/// Uses `LR_DATA_DIR` if set, otherwise `$XDG_DATA_HOME/letter-register`
/// or `~/.local/share/letter-register`.
pub(crate) fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LR_DATA_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    std::env::var("XDG_DATA_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".local")
                .join("share")
        })
        .join("letter-register")
}

/// Default register document path (the single JSON state file).
pub(crate) fn register_path() -> PathBuf {
    data_dir().join("register.json")
}

/// Base directory for configuration files.
///
/// Uses `LR_CONFIG_DIR` if set, otherwise
/// `$XDG_CONFIG_HOME/letter-register` or `~/.config/letter-register`.
pub(crate) fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LR_CONFIG_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".config")
        })
        .join("letter-register")
}
