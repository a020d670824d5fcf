use std::path::PathBuf;

/// Per-user configuration directory (~/.agileflow)
pub fn agileflow_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".agileflow")
}

/// Path of the JSON configuration file
pub fn config_json_path() -> PathBuf {
    agileflow_dir().join("config.json")
}
