use pdfcsv_core::config::{ExtractOptions, TableSettings};
use pdfcsv_core::error::PdfcsvError;
use pdfcsv_core::input::{parse_header_count, parse_page_list};
use pdfcsv_core::model::PageEvent;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::prompt::Prompter;

const PDF_PROMPT: &str = "Enter the PDF file path: ";
const CSV_PROMPT: &str = "Enter the output CSV file name (add .csv at the end): ";
const HEADERS_PROMPT: &str = "Enter the number of headers to check for column removal: ";
const PAGES_PROMPT: &str = "Enter the page numbers to extract (comma-separated, e.g., 1,2,3): ";

/// Values given on the command line; anything missing is prompted for.
#[derive(Debug)]
pub struct ExtractArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub headers: Option<String>,
    pub pages: Option<String>,
    pub delimiter: u8,
    pub table: TableSettings,
}

impl Default for ExtractArgs {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            headers: None,
            pages: None,
            delimiter: b',',
            table: TableSettings::default(),
        }
    }
}

/// Fully validated inputs for one run.
#[derive(Debug)]
pub struct Inputs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ExtractOptions,
}

/// Gather the four inputs in order, validating each number as soon as it is read.
pub fn collect_inputs<R: BufRead, W: Write>(
    args: ExtractArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<Inputs, PdfcsvError> {
    let input = prompter.value_or_ask(args.input, PDF_PROMPT)?;
    let output = prompter.value_or_ask(args.output, CSV_PROMPT)?;

    let header_count = parse_header_count(&prompter.value_or_ask(args.headers, HEADERS_PROMPT)?)?;
    let pages = parse_page_list(&prompter.value_or_ask(args.pages, PAGES_PROMPT)?)?;

    let options = ExtractOptions::new(header_count, pages)
        .with_delimiter(args.delimiter)
        .with_table_settings(args.table);

    Ok(Inputs {
        input,
        output,
        options,
    })
}

/// Console line for a page event, if the user should see one.
pub fn notice(event: &PageEvent) -> Option<String> {
    match event {
        PageEvent::OutOfRange { page } => Some(format!("Skipping page {page}: Out of range.")),
        PageEvent::NoTable { .. } | PageEvent::Extracted { .. } => None,
    }
}

pub fn saved_notice(output: &Path) -> String {
    format!("Data extracted and saved to {}", output.display())
}

pub fn run(args: ExtractArgs) -> Result<(), PdfcsvError> {
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    let inputs = collect_inputs(args, &mut prompter)?;
    drop(prompter);

    let result = pdfcsv_core::convert_pdf(
        &inputs.input,
        &inputs.output,
        &inputs.options,
        |event| {
            if let Some(line) = notice(event) {
                println!("{line}");
            }
        },
    )?;

    log::info!(
        "{} row(s) from {} page(s), {} page(s) skipped",
        result.rows.len(),
        result.pages_processed,
        result.pages_skipped.len()
    );
    println!("{}", saved_notice(&inputs.output));

    Ok(())
}
