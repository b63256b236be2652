use std::path::{Path, PathBuf};

use loanbook_core::{Ledger, LedgerStore, XlsxStore};
use tracing::info;

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{default_ledger_path, write_config, LoanbookConfig};
use crate::ui::{badge, header, hint, print, receipt, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let config_path = ctx.config_path()?;

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }

    let target = args
        .path
        .clone()
        .or_else(|| ctx.cli().ledger.clone())
        .map(PathBuf::from)
        .unwrap_or_else(default_ledger_path);
    let ledger_path = absolutize(&target)?;

    let store = XlsxStore::new(ledger_path.clone());
    let created = if store.exists() {
        false
    } else {
        store.save(&Ledger::new())?;
        true
    };

    write_config(&config_path, &LoanbookConfig::new(&ledger_path))?;
    info!(
        config = %config_path.display(),
        ledger = %ledger_path.display(),
        created,
        "Initialized loanbook"
    );

    if !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "init", None));
        let config = config_path.display().to_string();
        let ledger = ledger_path.display().to_string();
        let items = [("Config", config.as_str()), ("Ledger", ledger.as_str())];
        print(&ui_ctx, &receipt(&ui_ctx, "Initialized loanbook", &items));
        if !created {
            print(
                &ui_ctx,
                &badge(&ui_ctx, Badge::Info, "Kept the existing ledger file"),
            );
        }
        print(
            &ui_ctx,
            &hint(&ui_ctx, "Record a loan with `loanbook add`."),
        );
    }
    Ok(())
}

/// Anchor relative ledger paths to the directory `init` ran from.
fn absolutize(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("Failed to resolve current directory: {}", e))?;
    Ok(cwd.join(path))
}
