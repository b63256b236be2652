use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use loanbook_core::DEFAULT_LEDGER_FILE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoanbookConfig {
    pub ledger: LedgerSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UiSection {
    #[serde(default)]
    pub ascii: bool,
    #[serde(default)]
    pub no_color: bool,
}

impl LoanbookConfig {
    pub fn new(ledger_path: &Path) -> Self {
        Self {
            ledger: LedgerSection {
                path: ledger_path.to_string_lossy().to_string(),
            },
            ui: UiSection::default(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Ledger file used when neither a flag nor the config names one.
pub fn default_ledger_path() -> PathBuf {
    PathBuf::from(DEFAULT_LEDGER_FILE)
}

pub fn read_config(path: &Path) -> anyhow::Result<LoanbookConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config if it exists; a missing file is not an error.
pub fn read_config_if_present(path: &Path) -> anyhow::Result<Option<LoanbookConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    read_config(path).map(Some)
}

pub fn write_config(path: &Path, config: &LoanbookConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("loanbook"));
        }
    }
    Ok(home_dir()?.join(".config").join("loanbook"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
