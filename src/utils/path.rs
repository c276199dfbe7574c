use std::path::PathBuf;

const APP_DIR: &str = "researchmate";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Platform config directory for researchmate (e.g. ~/.config/researchmate)
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| get_home_dir().join(".config"))
        .join(APP_DIR)
}

/// Default config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to (e.g. ~/.cache/researchmate)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| get_home_dir().join(".cache"))
        .join(APP_DIR)
}

/// Expand a path string, handling ~ and relative paths
///
/// Relative paths are resolved against the home directory.
pub fn expand_path(path_str: &str) -> PathBuf {
    let home_dir = get_home_dir();

    if path_str.starts_with('/') {
        PathBuf::from(path_str)
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        home_dir.join(rest)
    } else if path_str == "~" {
        home_dir
    } else {
        home_dir.join(path_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path() {
        let home = get_home_dir();
        assert_eq!(expand_path("/etc/fixtures.toml"), PathBuf::from("/etc/fixtures.toml"));
        assert_eq!(expand_path("~/data.toml"), home.join("data.toml"));
        assert_eq!(expand_path("~"), home);
        assert_eq!(expand_path("notes/data.toml"), home.join("notes/data.toml"));
    }

    #[test]
    fn test_app_dirs_are_namespaced() {
        assert!(get_config_dir().ends_with("researchmate"));
        assert!(get_config_path().ends_with("researchmate/config.toml"));
        assert!(get_log_dir().ends_with("researchmate"));
    }
}
