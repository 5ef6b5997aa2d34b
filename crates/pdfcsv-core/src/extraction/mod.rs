pub mod pdftotext;
pub mod table;

use crate::error::PdfcsvError;
use crate::model::Table;

/// An open PDF that can report the tables found on each page.
///
/// Dropping the document releases whatever the backend holds on to.
pub trait PdfDocument {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// All tables detected on a 1-based page, in the backend's order.
    fn extract_tables(&self, page_number: usize) -> Result<Vec<Table>, PdfcsvError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
