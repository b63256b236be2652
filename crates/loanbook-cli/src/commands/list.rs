use loanbook_core::{LedgerStore, COLUMNS};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::ensure_format_compatible;
use crate::output::records_json;
use crate::ui::{blank_line, format_date, header_with_context, hint, print, single_line, table};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    ensure_format_compatible(args.json, args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    let store = ctx.store()?;
    let ledger = store.load()?;

    // --limit keeps the most recent rows, still in ledger order
    let offset = args
        .limit
        .map(|limit| ledger.len().saturating_sub(limit))
        .unwrap_or(0);
    let shown = &ledger.records()[offset..];

    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&records_json(offset, shown))?;
        println!("{}", output);
        return Ok(());
    }

    if !ctx.quiet() {
        let context = format!("{} rows", ledger.len());
        let path = store.path().display().to_string();
        print(
            &ui_ctx,
            &header_with_context(&ui_ctx, "list", Some(&context), Some(&path)),
        );
        blank_line(&ui_ctx);
    }

    if ledger.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, &hint(&ui_ctx, "No loans yet. Record one with `loanbook add`."));
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = shown
        .iter()
        .map(|record| {
            vec![
                single_line(&record.student_name),
                single_line(&record.book_name),
                format_date(&record.date_borrowed),
                format_date(&record.date_returned),
            ]
        })
        .collect();
    print(&ui_ctx, &table(&ui_ctx, &COLUMNS, &rows));
    Ok(())
}
