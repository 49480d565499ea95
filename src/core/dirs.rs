use crate::core::error::{PromptError, Result};
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .ok_or(PromptError::ConfigDirectoryNotFound)?,
        "macos" => dirs::home_dir()
            .ok_or(PromptError::ConfigDirectoryNotFound)?
            .join("Library/Application Support"),
        _ => dirs::config_dir().ok_or(PromptError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("promptline"))
}
