//! Pipe-table parsing.
//!
//! The dialect is deliberately loose: the divider row is optional and rows
//! keep whatever number of cells they were written with.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Table;

/// Divider rows contain only dashes, colons, pipes and whitespace.
static DIVIDER_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s|:-]+$").unwrap());

/// Check whether a paragraph should be handed to the table sub-renderer.
///
/// Requires at least two lines, and both of the first two lines must start
/// with `|` once trimmed.
pub fn is_table_paragraph(paragraph: &str) -> bool {
    let mut lines = paragraph.split('\n');
    match (lines.next(), lines.next()) {
        (Some(first), Some(second)) => {
            first.trim().starts_with('|') && second.trim().starts_with('|')
        }
        _ => false,
    }
}

/// Split a table row into trimmed cells.
///
/// The first and last fragments (the empty strings outside the leading and
/// trailing pipes) are dropped.
///
/// # Examples
///
/// ```
/// use postcraft_renderer::parse_cells;
///
/// assert_eq!(parse_cells("| a | **b** |"), vec!["a", "**b**"]);
/// assert_eq!(parse_cells("|a|b"), vec!["a"]);
/// ```
pub fn parse_cells(line: &str) -> Vec<String> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() <= 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_owned())
        .collect()
}

/// Check whether a line is a `---|:---:` style divider row.
pub fn is_divider_row(line: &str) -> bool {
    DIVIDER_ROW.is_match(line)
}

/// Parse a table block.
///
/// Returns `None` when the block has fewer than two pipe-prefixed lines.
pub fn parse_table(block: &str) -> Option<Table> {
    let lines: Vec<&str> = block
        .split('\n')
        .map(str::trim)
        .filter(|line| line.starts_with('|'))
        .collect();

    if lines.len() < 2 {
        return None;
    }

    let headers = parse_cells(lines[0]);
    let data_start = if is_divider_row(lines[1]) { 2 } else { 1 };
    let rows = lines[data_start..]
        .iter()
        .map(|line| parse_cells(line))
        .collect();

    Some(Table { headers, rows })
}
