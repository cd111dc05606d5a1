use crate::config::LoggingConfig;
use anyhow::anyhow;
use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RECIPE_WIZARD_LOG";

/// The terminal owns stdout, so logs go to a file in the data dir.
pub fn log_path(config: &LoggingConfig) -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "recipe-wizard", "recipe-wizard") {
        proj_dirs.data_dir().join(&config.file)
    } else {
        PathBuf::from(&config.file)
    }
}

pub fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level))
}

pub fn init(config: &LoggingConfig) -> anyhow::Result<PathBuf> {
    let path = log_path(config);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_uses_configured_name() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: "wizard-test.log".to_string(),
        };
        assert!(log_path(&config).ends_with("wizard-test.log"));
    }

    #[test]
    fn env_filter_overrides_the_configured_level() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            file: "wizard-test.log".to_string(),
        };

        std::env::set_var(LOG_ENV, "trace");
        let from_env = filter(&config).to_string().to_lowercase();
        std::env::remove_var(LOG_ENV);
        let from_config = filter(&config).to_string().to_lowercase();

        assert_eq!(from_env, "trace");
        assert_eq!(from_config, "warn");
    }
}
