//! Horizontal bar charts for terminal output.

use super::context::UiContext;
use super::format::{fit_label, single_line};
use super::theme::{styled, styles, BarGlyphs};

const MAX_LABEL_WIDTH: usize = 24;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;

/// One bar: a label, its value and an optional trailing note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
    pub note: Option<String>,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Bar length for `value`, scaled so `max` fills `width`.
///
/// Any non-zero value gets at least one cell.
pub fn scaled_length(value: usize, max: usize, width: usize) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    let length = (value * width + max / 2) / max;
    length.clamp(1, width)
}

/// Render bars, one per line.
///
/// Pretty mode: aligned labels, drawn bars, value and note.
/// Plain mode: "label<TAB>value[<TAB>note]".
/// An empty slice renders as an empty string.
pub fn bar_chart(ctx: &UiContext, bars: &[Bar]) -> String {
    if bars.is_empty() {
        return String::new();
    }

    if !ctx.mode.is_pretty() {
        return bars
            .iter()
            .map(|bar| match &bar.note {
                Some(note) => format!("{}\t{}\t{}", single_line(&bar.label), bar.value, note),
                None => format!("{}\t{}", single_line(&bar.label), bar.value),
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    let glyphs = BarGlyphs::for_unicode(ctx.unicode);
    let label_width = bars
        .iter()
        .map(|bar| single_line(&bar.label).chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);
    let max_value = bars.iter().map(|bar| bar.value).max().unwrap_or(0);
    let value_width = max_value.to_string().len();
    let bar_width = ctx
        .width
        .saturating_sub(label_width + value_width + 16)
        .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);

    bars.iter()
        .map(|bar| {
            let length = scaled_length(bar.value, max_value, bar_width);
            let filled = styled(&glyphs.full.repeat(length), styles::bar(), ctx.color);
            let rest = styled(
                &glyphs.empty.repeat(bar_width - length),
                styles::dim(),
                ctx.color,
            );
            let label = fit_label(&single_line(&bar.label), label_width);
            let mut line = format!(
                "{}  {}{}  {:>width$}",
                label,
                filled,
                rest,
                bar.value,
                width = value_width
            );
            if let Some(note) = &bar.note {
                line.push_str(&format!("  {}", styled(note, styles::dim(), ctx.color)));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
