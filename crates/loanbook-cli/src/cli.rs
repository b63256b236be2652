use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use loanbook_core::{EXPORT_FILE_NAME, VERSION};

/// Loanbook - track library book loans in a spreadsheet
#[derive(Parser)]
#[command(name = "loanbook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger spreadsheet
    #[arg(short, long, global = true, env = "LOANBOOK_PATH")]
    pub ledger: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "LOANBOOK_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where the ledger spreadsheet should live
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Student name
    #[arg(short, long)]
    pub student: Option<String>,

    /// Book name
    #[arg(short, long)]
    pub book: Option<String>,

    /// Date borrowed (YYYY-MM-DD, default today)
    #[arg(long)]
    pub borrowed: Option<String>,

    /// Date returned (YYYY-MM-DD, default today)
    #[arg(long)]
    pub returned: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Show only the most recent N rows
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Maximum bars per chart
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file, or "-" for stdout
    #[arg(short, long, default_value = EXPORT_FILE_NAME)]
    pub output: String,

    /// Overwrite the destination if it exists
    #[arg(long)]
    pub force: bool,

    /// Describe the written file as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and an empty ledger
    Init(InitArgs),

    /// Record a new book loan
    Add(AddArgs),

    /// Show the ledger
    List(ListArgs),

    /// Show borrowing charts
    Stats(StatsArgs),

    /// Write the ledger to a downloadable spreadsheet
    Export(ExportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_parses_all_fields() {
        let cli = Cli::try_parse_from([
            "loanbook",
            "add",
            "--student",
            "Alice",
            "--book",
            "Moby Dick",
            "--borrowed",
            "2024-01-01",
            "--returned",
            "2024-01-10",
            "--no-input",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.student.as_deref(), Some("Alice"));
                assert_eq!(args.book.as_deref(), Some("Moby Dick"));
                assert_eq!(args.borrowed.as_deref(), Some("2024-01-01"));
                assert!(args.no_input);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_export_default_output() {
        let cli = Cli::try_parse_from(["loanbook", "export"]).unwrap();
        match cli.command {
            Some(Commands::Export(args)) => assert_eq!(args.output, "updated_library_usage.xlsx"),
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_global_ledger_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["loanbook", "list", "--ledger", "books.xlsx"]).unwrap();
        assert_eq!(cli.ledger.as_deref(), Some("books.xlsx"));
    }
}
