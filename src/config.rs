use crate::catalog;
use crate::error::{BasketError, Result};
use crate::season::{FreshnessWeights, RegionOffsets, SeasonEngine};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".basket.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasketConfig {
    #[serde(default)]
    pub basket: BasketSettings,

    #[serde(default)]
    pub freshness: FreshnessWeights,

    /// Region offset overrides layered on the built-in table
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub regions: HashMap<String, i32>,

    #[serde(default)]
    pub hub: HubSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketSettings {
    /// Where preference snapshots live, relative to the project root
    #[serde(default = "default_state_dir")]
    pub state_dir: String,

    /// Market used until one is selected
    #[serde(default = "default_market")]
    pub default_market: String,
}

fn default_state_dir() -> String {
    ".basket".to_string()
}

fn default_market() -> String {
    catalog::DEFAULT_MARKET_ID.to_string()
}

impl Default for BasketSettings {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            default_market: default_market(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubSettings {
    /// Base for relative project links, relative to the project root
    #[serde(default = "default_site_root")]
    pub site_root: String,
}

fn default_site_root() -> String {
    ".".to_string()
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            site_root: default_site_root(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Optional JSON log file, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl BasketConfig {
    /// Finds `.basket.toml` upward from `start_path` and loads it.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        if !config_path.exists() {
            return Err(BasketError::NotInitialized);
        }
        let content = std::fs::read_to_string(config_path)?;
        let config: BasketConfig = toml::from_str(&content)?;
        crate::validation::validate_state_dir(&config.basket.state_dir)?;
        crate::validation::validate_freshness(&config.freshness)?;

        let project_root = config_path
            .parent()
            .ok_or_else(|| BasketError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(BasketError::NotInitialized);
            }
        }
    }

    pub fn state_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.basket.state_dir)
    }

    pub fn site_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.hub.site_root)
    }

    pub fn log_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.logging.file.as_ref().map(|f| project_root.join(f))
    }

    /// Engine with the built-in region table plus any `[regions]` overrides.
    pub fn season_engine(&self) -> SeasonEngine {
        let offsets = RegionOffsets::new(catalog::region_offsets()).with_overrides(&self.regions);
        SeasonEngine::new(offsets, self.freshness)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
