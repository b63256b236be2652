//! Application context for the Loanbook CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use loanbook_core::XlsxStore;

use crate::cli::Cli;
use crate::config::{
    default_config_path, default_ledger_path, read_config_if_present, LoanbookConfig,
};
use crate::ui::UiContext;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<LoanbookConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Config file location: `--config` / `LOANBOOK_CONFIG`, else XDG default.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match self.cli.config {
            Some(ref path) => Ok(PathBuf::from(path)),
            None => default_config_path(),
        }
    }

    /// The config file, read once. `None` when no file exists.
    pub fn config(&self) -> anyhow::Result<Option<&LoanbookConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = self.config_path()?;
            let config = read_config_if_present(&path)?;
            debug!(path = %path.display(), found = config.is_some(), "Resolved config");
            Ok::<_, anyhow::Error>(config)
        })?;
        Ok(config.as_ref())
    }

    /// Ledger path precedence: flag/env, then config, then the default file.
    pub fn ledger_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(ref path) = self.cli.ledger {
            return Ok(PathBuf::from(path));
        }
        if let Some(config) = self.config()? {
            return Ok(PathBuf::from(&config.ledger.path));
        }
        Ok(default_ledger_path())
    }

    /// Store bound to the resolved ledger path.
    pub fn store(&self) -> anyhow::Result<XlsxStore> {
        let path = self.ledger_path()?;
        debug!(path = %path.display(), "Using ledger file");
        Ok(XlsxStore::new(path))
    }

    /// UI context honoring CLI flags and `[ui]` config.
    ///
    /// A broken config file never blocks rendering; it is reported when the
    /// ledger path is resolved instead.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let ui = self
            .config()
            .ok()
            .flatten()
            .map(|config| config.ui.clone())
            .unwrap_or_default();
        UiContext::from_env(
            json,
            format,
            self.cli.no_color || ui.no_color,
            self.cli.ascii || ui.ascii,
        )
    }
}
