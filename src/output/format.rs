use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::Histogram;

/// Rendering options shared by every view
#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewOptions<'a> {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) top: usize,
    pub(crate) user: Option<&'a str>,
}

pub(crate) fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// "😀 (3), :) (2)" or the fallback text when nothing was counted
pub(crate) fn format_top(histogram: &Histogram, n: usize, empty: &str) -> String {
    if histogram.is_empty() || n == 0 {
        return empty.to_string();
    }
    histogram
        .top(n)
        .iter()
        .map(|(symbol, count)| format!("{symbol} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Superlative holder or a dash when the title is unset
pub(crate) fn holder_text(holder: Option<&str>) -> String {
    holder.unwrap_or("-").to_string()
}

pub(crate) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(crate) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(crate) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(crate) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Print the footer line with message accounting and timing
pub(crate) fn print_summary_line(
    messages: u64,
    lines: usize,
    skipped: u64,
    elapsed_ms: f64,
    use_color: bool,
) {
    let mut stats_text = format!(
        "{} messages from {} lines",
        format_number(messages),
        format_number(lines as u64)
    );
    if skipped > 0 {
        stats_text.push_str(&format!(
            " ({} skipped for invalid timestamps)",
            format_number(skipped)
        ));
    }

    if use_color {
        println!("\n  {} | \x1b[36m{:.0}ms\x1b[0m\n", stats_text, elapsed_ms);
    } else {
        println!("\n  {} | {:.0}ms\n", stats_text, elapsed_ms);
    }
}
