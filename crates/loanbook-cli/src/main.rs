//! Loanbook CLI - track library book loans in a spreadsheet
//!
//! Records loans into an .xlsx ledger, charts borrowing activity and
//! exports the ledger as a downloadable workbook.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod helpers;
mod output;
mod ui;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::app::{exit_code_for, hint_for, AppContext};
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_add, handle_completions, handle_export, handle_init, handle_list, handle_stats,
};
use crate::constants::LOG_ENV;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = AppContext::new(&cli);
    if let Err(err) = run(&ctx) {
        let ui_ctx = ctx.ui_context(false, None);
        print_error(&ui_ctx, &err.to_string(), hint_for(&err));
        std::process::exit(exit_code_for(&err));
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Some(Commands::Init(args)) => handle_init(ctx, args),
        Some(Commands::Add(args)) => handle_add(ctx, args),
        Some(Commands::List(args)) => handle_list(ctx, args),
        Some(Commands::Stats(args)) => handle_stats(ctx, args),
        Some(Commands::Export(args)) => handle_export(ctx, args),
        Some(Commands::Completions { shell }) => handle_completions(*shell),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Logs go to stderr; stdout carries JSON and exported bytes.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
