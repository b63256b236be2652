//! Interactive prompts for the add-entry form.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use super::context::UiContext;
use super::theme::{styled, styles};

/// Print a step indicator ("1/4  Student name") in pretty mode.
pub fn print_step(ctx: &UiContext, step: usize, total: usize, title: &str) {
    if !ctx.mode.is_pretty() {
        return;
    }
    let progress = format!("{}/{}", step, total);
    println!(
        "{}  {}",
        styled(&progress, styles::dim(), ctx.color),
        styled(title, styles::bold(), ctx.color)
    );
}

/// Ask for a line of text. Empty answers are allowed; the caller validates.
pub fn prompt_text(label: &str) -> anyhow::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))
}

/// Ask for a text value with a prefilled default.
pub fn prompt_with_default(label: &str, default: &str) -> anyhow::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .default(default.to_string())
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))
}
