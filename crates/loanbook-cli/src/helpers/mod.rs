//! Helper functions for the CLI.

mod parsing;

pub use parsing::{ensure_format_compatible, parse_date_or, today};
