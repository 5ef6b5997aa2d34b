use crate::model::{Cell, Table};

/// Clean a single cell.
///
/// Steps:
/// 1. Newlines become single spaces
/// 2. Anything outside printable ASCII (0x20..=0x7E) is dropped
/// 3. Leading and trailing whitespace is stripped
///
/// Absent cells pass through untouched.
pub fn clean_cell(cell: Cell) -> Cell {
    cell.map(|text| clean_text(&text))
}

pub fn clean_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .filter(|c| matches!(c, ' '..='~'))
        .collect();
    cleaned.trim().to_string()
}

/// Clean every cell of every row.
pub fn clean_table(table: Table) -> Table {
    Table::new(
        table
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(clean_cell).collect())
            .collect(),
    )
}
