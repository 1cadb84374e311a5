use std::path::PathBuf;

const APP_DIR: &str = "nba_ratings";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";

/// Per-user application directory, e.g. `~/.config/nba_ratings` on Linux.
/// Falls back to the current directory when the platform has no config
/// directory.
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn get_config_path() -> String {
    app_dir()
        .join(CONFIG_FILE_NAME)
        .to_string_lossy()
        .into_owned()
}

pub fn get_log_dir_path() -> String {
    app_dir().join(LOG_DIR_NAME).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_app_dir() {
        let config_path = PathBuf::from(get_config_path());
        let log_dir = PathBuf::from(get_log_dir_path());

        assert!(config_path.ends_with("nba_ratings/config.toml"));
        assert!(log_dir.ends_with("nba_ratings/logs"));
        assert_eq!(config_path.parent(), log_dir.parent());
    }
}
