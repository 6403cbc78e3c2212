// File: src/paths.rs
use anyhow::Result;
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Overrides the OS config directory. Used by tests and portable setups.
pub const CONFIG_DIR_ENV: &str = "ICSPROSE_CONFIG_DIR";

pub struct AppPaths;

impl AppPaths {
    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "icsprose", "icsprose")
    }

    /// The config directory, which may not exist. Nothing is created here:
    /// the config file is optional and only ever read.
    pub fn get_config_dir() -> Result<PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir));
        }
        Self::get_proj_dirs()
            .map(|proj| proj.config_dir().to_path_buf())
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn get_config_file_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }
}
