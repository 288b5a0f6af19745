use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workspace_dir: String,
    /// Language used by `show --generate` when none is given.
    pub language: String,
    pub leetcode_session: Option<String>,
    pub csrf_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_dir: ".".to_string(),
            language: "golang".to_string(),
            leetcode_session: None,
            csrf_token: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".leetcode-cli"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Reads the user config, falling back to defaults when there is none.
    pub fn load() -> Result<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn is_authenticated(&self) -> bool {
        self.leetcode_session.is_some() && self.csrf_token.is_some()
    }

    pub fn expanded_workspace(&self) -> PathBuf {
        match self.workspace_dir.strip_prefix('~') {
            Some(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest.trim_start_matches('/')),
                None => PathBuf::from(&self.workspace_dir),
            },
            None => PathBuf::from(&self.workspace_dir),
        }
    }
}
