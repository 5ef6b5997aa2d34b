pub mod config;
pub mod error;
pub mod extraction;
pub mod input;
pub mod model;
pub mod sanitize;
pub mod trim;
pub mod writer;

use config::ExtractOptions;
use error::PdfcsvError;
use extraction::pdftotext::PdftotextDocument;
use extraction::PdfDocument;
use model::{ExtractionResult, PageEvent, PageNumber};
use std::path::Path;

/// Collect the first table of each requested page.
///
/// Pages are visited in the order given, duplicates included. Pages outside
/// `[1, page_count]` and pages without a table contribute no rows; both are
/// reported through `on_event` as they happen. Each kept table is cleaned
/// and then trimmed against `header_count` before its rows are appended.
pub fn extract_rows(
    document: &dyn PdfDocument,
    pages: &[PageNumber],
    header_count: i64,
    mut on_event: impl FnMut(&PageEvent),
) -> Result<ExtractionResult, PdfcsvError> {
    let page_count = document.page_count();
    let mut result = ExtractionResult::default();

    for page in pages {
        let Some(index) = page.within(page_count) else {
            result.pages_skipped.push(page.clone());
            on_event(&PageEvent::OutOfRange { page: page.clone() });
            continue;
        };

        let tables = document.extract_tables(index)?;
        result.pages_processed += 1;
        let tables_found = tables.len();

        // Only the first table on a page is used.
        let Some(first) = tables.into_iter().next() else {
            log::debug!("page {page}: no table detected");
            on_event(&PageEvent::NoTable { page: page.clone() });
            continue;
        };

        let mut table = sanitize::clean_table(first);
        let trimmed = trim::trim_index_column(&mut table, header_count);
        log::debug!(
            "page {page}: {tables_found} table(s), kept first with {} row(s){}",
            table.rows.len(),
            if trimmed { ", first column dropped" } else { "" }
        );

        on_event(&PageEvent::Extracted {
            page: page.clone(),
            tables_found,
            rows: table.rows.len(),
            trimmed,
        });
        result.rows.extend(table.rows);
    }

    Ok(result)
}

/// Extract from an open document and write the rows to `output`.
pub fn extract_to_csv(
    document: &dyn PdfDocument,
    output: &Path,
    options: &ExtractOptions,
    on_event: impl FnMut(&PageEvent),
) -> Result<ExtractionResult, PdfcsvError> {
    log::info!(
        "extracting {} page(s) with the {} backend",
        options.pages.len(),
        document.backend_name()
    );
    let result = extract_rows(document, &options.pages, options.header_count, on_event)?;
    writer::write_csv_file(output, &result.rows, options.delimiter)?;
    Ok(result)
}

/// Main API entry point: open the PDF at `input`, extract, write `output`.
///
/// The document is held for the whole page loop and released when this
/// returns, whether or not extraction succeeded.
pub fn convert_pdf(
    input: &Path,
    output: &Path,
    options: &ExtractOptions,
    on_event: impl FnMut(&PageEvent),
) -> Result<ExtractionResult, PdfcsvError> {
    let document = PdftotextDocument::open(input, options.table.clone())?;
    extract_to_csv(&document, output, options, on_event)
}
