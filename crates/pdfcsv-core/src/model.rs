use std::fmt;

/// A single table slot. `None` marks an empty slot the extractor found no text for.
pub type Cell = Option<String>;

/// Cells of one table row. Rows in the same table may differ in width.
pub type Row = Vec<Cell>;

/// Rows detected on a single page, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Table { rows }
    }

    /// Build a table from string literals; empty strings stay `Some("")`.
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Table {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| Some(c.to_string())).collect())
                .collect(),
        }
    }

    /// Width of the first row, if any.
    pub fn first_row_len(&self) -> Option<usize> {
        self.rows.first().map(|r| r.len())
    }
}

/// A requested page number as typed by the user.
///
/// Integers too large for `i64` are still valid requests; they can never
/// name a real page, so only their decimal text is kept for notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageNumber {
    Number(i64),
    Oversized(String),
}

impl PageNumber {
    /// The 1-based page, if this names one in `[1, page_count]`.
    pub fn within(&self, page_count: usize) -> Option<usize> {
        match self {
            PageNumber::Number(n) => usize::try_from(*n)
                .ok()
                .filter(|n| (1..=page_count).contains(n)),
            PageNumber::Oversized(_) => None,
        }
    }
}

impl From<i64> for PageNumber {
    fn from(n: i64) -> Self {
        PageNumber::Number(n)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageNumber::Number(n) => write!(f, "{n}"),
            PageNumber::Oversized(digits) => write!(f, "{digits}"),
        }
    }
}

/// What happened to one requested page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Page number outside `[1, page_count]`.
    OutOfRange { page: PageNumber },
    /// Page rendered but no table was detected.
    NoTable { page: PageNumber },
    /// First table kept; `tables_found` counts every table on the page.
    Extracted {
        page: PageNumber,
        tables_found: usize,
        rows: usize,
        trimmed: bool,
    },
}

/// All rows from every processed page, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub rows: Vec<Row>,
    pub pages_processed: usize,
    pub pages_skipped: Vec<PageNumber>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_within_range() {
        assert_eq!(PageNumber::from(1).within(2), Some(1));
        assert_eq!(PageNumber::from(2).within(2), Some(2));
        assert_eq!(PageNumber::from(3).within(2), None);
        assert_eq!(PageNumber::from(0).within(2), None);
        assert_eq!(PageNumber::from(-1).within(2), None);
        assert_eq!(
            PageNumber::Oversized("99999999999999999999".into()).within(usize::MAX),
            None
        );
    }

    #[test]
    fn test_page_display() {
        assert_eq!(PageNumber::from(-4).to_string(), "-4");
        assert_eq!(
            PageNumber::Oversized("-123456789012345678901".into()).to_string(),
            "-123456789012345678901"
        );
    }
}
