//! Value formatting shared by the reports

use crate::types::Cell;

const ELLIPSIS: &str = "...";

/// Keep the first `width` characters of `text`, marking the cut with `...`
pub fn truncate(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Printable value of a cell
///
/// Formula cells always print their raw formula text. Literal values are
/// cut at `width` characters when a width is given.
pub fn display_value(cell: &Cell, width: Option<usize>) -> String {
    let text = cell.value.to_string();
    match width {
        Some(w) if !cell.is_formula() => truncate(&text, w),
        _ => text,
    }
}
