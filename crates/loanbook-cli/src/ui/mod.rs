//! UI primitives for the Loanbook CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, styles, bar glyphs
//! - **Render**: Tables, headers, receipts, hints
//! - **Chart**: Horizontal bar charts
//! - **Prompt**: Interactive form input
//! - **Format**: Label fitting, dates, sizes, percentages

pub mod chart;
mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, header_with_context, hint, print, print_error, receipt, section,
    table,
};

pub use chart::{bar_chart, Bar};

pub use format::{format_bytes, format_date, format_percent, single_line};
