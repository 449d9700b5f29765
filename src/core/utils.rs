use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".pocketbook";
const PROFILES_FILE: &str = "profiles.json";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to `~/.pocketbook`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("POCKETBOOK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the single slot holding every profile.
pub fn profiles_file_in(base: &std::path::Path) -> PathBuf {
    base.join(PROFILES_FILE)
}

/// Path to the presentation settings file, kept separate from profile data.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
