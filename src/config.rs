// Application settings loaded from YAML

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR_NAME: &str = "tasklist";
const CONFIG_FILE_NAME: &str = "tasklist.yml";

/// Validation policy for new tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum task text length in characters, after trimming
    pub max_task_length: usize,
    /// Accept tasks whose trimmed text is empty
    pub allow_empty_tasks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_task_length: 100,
            allow_empty_tasks: false,
        }
    }
}

impl Settings {
    /// Load settings
    ///
    /// An explicit path must exist and parse. Without one, the per-user config
    /// file is read when present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Per-user config file location, e.g. `~/.config/tasklist/tasklist.yml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_task_length == 0 {
            return Err(eyre!("max_task_length must be at least 1"));
        }
        Ok(())
    }
}
