use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub log_dir: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty_path = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };

        Config {
            log_dir: non_empty_path("LOG_DIR"),
            catalog_path: non_empty_path("MCTHELPER_CATALOG"),
        }
    }
}
