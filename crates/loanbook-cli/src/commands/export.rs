use std::io::Write;
use std::path::Path;

use loanbook_core::{export_artifact, LedgerStore};
use tracing::info;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::output::export_json;
use crate::ui::{format_bytes, print, receipt};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let ledger = store.load()?;
    let artifact = export_artifact(&ledger)?;

    if args.output == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&artifact.bytes)
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write export to stdout: {}", e))?;
        return Ok(());
    }

    let destination = Path::new(&args.output);
    if destination.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "{} already exists (use --force to overwrite)",
            destination.display()
        ));
    }
    if same_file(destination, store.path()) {
        return Err(anyhow::anyhow!(
            "Refusing to export over the ledger file itself: {}",
            destination.display()
        ));
    }

    std::fs::write(destination, &artifact.bytes)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", destination.display(), e))?;
    info!(path = %destination.display(), bytes = artifact.len(), "Wrote export");

    if args.json {
        let output = serde_json::to_string_pretty(&export_json(&artifact, &args.output))?;
        println!("{}", output);
        return Ok(());
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let path = destination.display().to_string();
        let rows = ledger.len().to_string();
        let size = format_bytes(artifact.len() as u64);
        let items = [
            ("Path", path.as_str()),
            ("Rows", rows.as_str()),
            ("Size", size.as_str()),
            ("Type", artifact.mime_type),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, "Exported ledger", &items));
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
