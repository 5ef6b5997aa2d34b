use crate::model::Table;

/// Drop a presumed index column.
///
/// When the first row has exactly `header_count` cells, the first cell of
/// every row is removed, whatever that row's own width. Returns whether the
/// table was trimmed.
pub fn trim_index_column(table: &mut Table, header_count: i64) -> bool {
    let matches = match (table.first_row_len(), usize::try_from(header_count)) {
        (Some(len), Ok(h)) => len == h,
        _ => false,
    };
    if !matches {
        return false;
    }

    for row in &mut table.rows {
        if !row.is_empty() {
            row.remove(0);
        }
    }
    true
}
