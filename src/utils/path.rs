use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/catalog-admin, regardless of OS)
///
/// `CATALOG_ADMIN_CONFIG_DIR` overrides the location (used by tests).
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CATALOG_ADMIN_CONFIG_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    get_home_dir().join(".config").join("catalog-admin")
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("catalog-admin")
}

/// Expand a path string, handling `~`
///
/// Relative paths are kept relative to the working directory, as a file
/// picker would resolve them.
pub fn expand_path(path_str: &str) -> PathBuf {
    if path_str == "~" {
        get_home_dir()
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else {
        PathBuf::from(path_str)
    }
}

/// Split a file picker value into paths.
///
/// Entries are comma separated; blanks are dropped.
pub fn split_path_list(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(expand_path)
        .collect()
}
