use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    if let Ok(test_home) = std::env::var("TIDEPOOL_TEST_HOME") {
        return PathBuf::from(test_home);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/tidepool, regardless of OS)
///
/// `TIDEPOOL_TEST_CONFIG_DIR` overrides the location so tests can point the
/// whole config layer at a temp dir.
pub fn get_config_dir() -> PathBuf {
    if let Ok(test_dir) = std::env::var("TIDEPOOL_TEST_CONFIG_DIR") {
        return PathBuf::from(test_dir);
    }
    get_home_dir().join(".config").join("tidepool")
}

/// Get the config file path (always ~/.config/tidepool/config.toml, regardless of OS)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the directory for log files.
///
/// `TIDEPOOL_TEST_CACHE_DIR` overrides the location for tests.
pub fn get_cache_dir() -> PathBuf {
    if let Ok(test_dir) = std::env::var("TIDEPOOL_TEST_CACHE_DIR") {
        return PathBuf::from(test_dir);
    }
    dirs::cache_dir()
        .unwrap_or_else(|| get_home_dir().join(".cache"))
        .join("tidepool")
}

/// Get the log file path.
pub fn get_log_path() -> PathBuf {
    get_cache_dir().join("tidepool.log")
}
