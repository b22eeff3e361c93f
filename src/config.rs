use serde::Deserialize;
use std::path::Path;

use crate::error::Error;

pub const CONFIG_FILE: &str = "hormone-check.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ignore: IgnoreConfig,
    pub ci: CiConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CiConfig {
    pub fail_below: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the tier's advice paragraph under each result.
    pub advice: bool,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        IgnoreConfig {
            files: vec!["**/*.draft.json".to_string()],
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig { advice: true }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self, Error> {
        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(&config_path).map_err(|source| Error::Io {
            path: config_path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn is_file_ignored(&self, root: &Path, file_path: &Path) -> bool {
        let absolute = file_path.to_string_lossy().replace('\\', "/");
        let relative = file_path
            .strip_prefix(root)
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_else(|_| absolute.clone());
        let relative_with_dot = format!("./{relative}");

        for pattern in &self.ignore.files {
            match glob::Pattern::new(pattern) {
                Ok(glob) => {
                    if glob.matches(&relative)
                        || glob.matches(&relative_with_dot)
                        || glob.matches(&absolute)
                    {
                        return true;
                    }
                }
                Err(e) => tracing::warn!(%pattern, "ignoring invalid glob: {e}"),
            }
        }
        false
    }
}
