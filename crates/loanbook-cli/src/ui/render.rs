//! Building blocks for command output.
//!
//! Every function returns the text for the current [`OutputMode`]; only
//! `print`, `blank_line` and `print_error` write anything.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};
use super::OutputMode;

/// Longest path shown in a header before the front is elided.
const MAX_PATH_CHARS: usize = 50;

/// Command banner, e.g. "Loanbook · list (3 rows)" plus the ledger path.
///
/// Plain output is a single "loanbook <command>" line; JSON output has no
/// banner.
pub fn header_with_context(
    ctx: &UiContext,
    command: &str,
    context: Option<&str>,
    path: Option<&str>,
) -> String {
    if ctx.mode != OutputMode::Pretty {
        return match ctx.mode {
            OutputMode::Plain => format!("loanbook {}", command),
            _ => String::new(),
        };
    }

    let mut banner = format!(
        "{} \u{00B7} {}",
        styled("Loanbook", styles::bold(), ctx.color),
        command
    );
    if let Some(context) = context {
        banner.push_str(&format!(" ({})", context));
    }
    if let Some(path) = path {
        banner.push('\n');
        banner.push_str(&kv(ctx, "Path", &elide_path(path)));
    }
    banner
}

pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    header_with_context(ctx, command, context, None)
}

/// Keep the end of a long path so the file name stays visible.
fn elide_path(path: &str) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= MAX_PATH_CHARS {
        return path.to_string();
    }
    let tail: String = chars[chars.len() - (MAX_PATH_CHARS - 3)..].iter().collect();
    format!("...{}", tail)
}

/// Chart heading.
pub fn section(ctx: &UiContext, title: &str) -> String {
    match ctx.mode {
        OutputMode::Pretty => styled(title, styles::bold(), ctx.color),
        _ => format!("# {}", title),
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let mark = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        mark
    } else {
        format!("{} {}", mark, message)
    }
}

/// "Key: value" when pretty, "key=value" (snake_cased key) otherwise.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if !ctx.mode.is_pretty() {
        let key = key.to_lowercase().replace(' ', "_");
        return format!("{}={}", key, value);
    }
    let label = format!("{}:", key);
    format!("{} {}", styled(&label, styles::dim(), ctx.color), value)
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Summary after a write (entry added, ledger exported).
///
/// Pretty output is an OK badge with indented fields; plain output is
/// `status=ok` followed by one `key=value` line per field.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let (first, indent) = if ctx.mode.is_pretty() {
        (badge(ctx, Badge::Ok, title), "  ")
    } else {
        ("status=ok".to_string(), "")
    };

    std::iter::once(first)
        .chain(
            items
                .iter()
                .map(|(key, value)| format!("{}{}", indent, kv(ctx, key, value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ledger rows as a bordered table, or as tab-separated lines without a
/// header when output is plain.
pub fn table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    if ctx.unicode {
        table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX));

    table.set_header(headers.iter().map(|name| {
        let cell = Cell::new(name);
        if ctx.color {
            cell.add_attribute(Attribute::Bold)
        } else {
            cell
        }
    }));
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Write one block to stdout. Skipped in JSON mode and for empty text.
pub fn print(ctx: &UiContext, message: &str) {
    if ctx.mode.is_json() || message.is_empty() {
        return;
    }
    println!("{}", message);
}

/// Spacing between blocks; pretty output only.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = if ctx.mode.is_pretty() {
        vec![badge(ctx, Badge::Err, message)]
    } else {
        vec![format!("error={}", message)]
    };
    if let Some(text) = error_hint {
        lines.push(hint(ctx, text));
    }
    lines.join("\n")
}

/// Errors always go to stderr, whatever the output mode.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
