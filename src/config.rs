use crate::grid::{ExportMode, SortCycle};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page_size: usize,
    pub sort_cycle: SortCycle,
    pub export_dir: Option<PathBuf>,
    pub export_rendered: bool,
    pub toast_seconds: u64,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 10,
            sort_cycle: SortCycle::Toggle,
            export_dir: None,
            export_rendered: false,
            toast_seconds: 4,
            log_filter: "erp_grid=info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("reading {}", config_path.display()))?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).with_context(|| format!("writing {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "saved settings");
        Ok(())
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(content).context("parsing settings")?;
        if !PAGE_SIZES.contains(&config.page_size) {
            tracing::warn!(page_size = config.page_size, "unsupported page size, using default");
            config.page_size = Self::default().page_size;
        }
        Ok(config)
    }

    fn get_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("erp-grid").join("config.json"))
    }

    pub fn export_mode(&self) -> ExportMode {
        if self.export_rendered {
            ExportMode::Rendered
        } else {
            ExportMode::Raw
        }
    }

    /// Configured directory, else the platform download directory, else home.
    pub fn export_directory(&self) -> Result<PathBuf> {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("No directory available for exports"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = Config::from_json(r#"{"toast_seconds": 9}"#).unwrap();
        assert_eq!(config.toast_seconds, 9);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.sort_cycle, SortCycle::Toggle);
        assert_eq!(config.export_mode(), ExportMode::Raw);
    }

    #[test]
    fn test_settings_round_trip() {
        let config = Config {
            page_size: 50,
            sort_cycle: SortCycle::TriState,
            export_dir: Some(PathBuf::from("/tmp/exports")),
            export_rendered: true,
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_unsupported_page_size_is_replaced() {
        let config = Config::from_json(r#"{"page_size": 7}"#).unwrap();
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_configured_export_dir_wins() {
        let config = Config {
            export_dir: Some(PathBuf::from("/tmp/exports")),
            ..Config::default()
        };
        assert_eq!(config.export_directory().unwrap(), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_broken_json_is_an_error() {
        assert!(Config::from_json("{ not json").is_err());
    }
}
