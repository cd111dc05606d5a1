use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fixes the amount draws so the same selections always give the same recipe.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub notice_seconds: u64,
    pub summary_width: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_seconds: 3,
            summary_width: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "recipe-wizard.log".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// A missing file gives the defaults. A file that can't be read or parsed
    /// also gives the defaults, and the error is handed back for logging.
    pub fn load_or_default(path: &Path) -> (Self, Option<anyhow::Error>) {
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [generator]
            seed = 42

            [ui]
            notice_seconds = 5
            "#,
        )
        .expect("parse config");

        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.ui.notice_seconds, 5);
        assert_eq!(config.ui.summary_width, 30);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn empty_file_is_the_default_config() {
        let config: Config = toml::from_str("").expect("parse empty config");
        assert_eq!(config, Config::default());
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = PathBuf::from("/nonexistent/recipe-wizard/config.toml");
        assert!(Config::load(&path).is_err());

        let (config, error) = Config::load_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(error.is_none());
    }

    #[test]
    fn invalid_file_loads_defaults_and_reports_the_error() {
        let path = std::env::temp_dir().join(format!(
            "recipe-wizard-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[ui]\nnotice_seconds = \"soon\"\n").expect("write config");

        let (config, error) = Config::load_or_default(&path);
        std::fs::remove_file(&path).expect("remove config");

        assert_eq!(config, Config::default());
        assert!(error.is_some());
    }
}
