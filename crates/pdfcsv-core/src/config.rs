//! Settings for one extraction run.

use crate::error::PdfcsvError;
use crate::model::PageNumber;

/// Knobs for recovering tables from column-aligned page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSettings {
    /// Minimum run of spaces that separates two columns.
    pub min_column_gap: usize,
    /// Minimum number of aligned lines that count as a table.
    pub min_rows: usize,
    /// Blank lines tolerated between two rows of the same table.
    pub max_row_gap: usize,
    /// Fold a line whose first column is blank into the row above it.
    pub merge_continuation_lines: bool,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            min_column_gap: 2,
            min_rows: 2,
            max_row_gap: 1,
            merge_continuation_lines: true,
        }
    }
}

/// Everything the pipeline needs besides the document itself.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Drop the first column of a table whose first row has exactly this many cells.
    pub header_count: i64,
    /// 1-based page numbers, processed in this order.
    pub pages: Vec<PageNumber>,
    /// Field delimiter of the output file.
    pub delimiter: u8,
    pub table: TableSettings,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            header_count: 0,
            pages: Vec::new(),
            delimiter: b',',
            table: TableSettings::default(),
        }
    }
}

impl ExtractOptions {
    pub fn new(header_count: i64, pages: Vec<PageNumber>) -> Self {
        Self {
            header_count,
            pages,
            ..Default::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_table_settings(mut self, table: TableSettings) -> Self {
        self.table = table;
        self
    }
}

/// Parse a delimiter flag. Accepts a single ASCII character or `\t`/`tab`.
pub fn parse_delimiter(raw: &str) -> Result<u8, PdfcsvError> {
    if matches!(raw, "\\t" | "tab") {
        return Ok(b'\t');
    }
    let bytes = raw.as_bytes();
    if bytes.len() == 1 && bytes[0].is_ascii() && bytes[0] != b'\n' && bytes[0] != b'"' {
        Ok(bytes[0])
    } else {
        Err(PdfcsvError::InvalidDelimiter(raw.to_string()))
    }
}
