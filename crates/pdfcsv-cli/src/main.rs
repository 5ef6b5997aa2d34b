mod commands;
mod prompt;

use clap::{ArgAction, Parser};
use commands::extract::ExtractArgs;
use pdfcsv_core::config::{parse_delimiter, TableSettings};
use pdfcsv_core::error::PdfcsvError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfcsv",
    version,
    about = "Extract the first table from selected PDF pages into a CSV file",
    long_about = "Extract the first table from selected PDF pages into a CSV file.\n\n\
                  Any of --input, --output, --headers and --pages that is not given \
                  is asked for interactively."
)]
struct Cli {
    /// Path to the PDF file
    #[arg(short, long, value_name = "PDF")]
    input: Option<PathBuf>,

    /// Output CSV file (overwritten if it exists)
    #[arg(short, long, value_name = "CSV")]
    output: Option<PathBuf>,

    /// Drop the first column of a table whose first row has exactly N cells
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    headers: Option<String>,

    /// Pages to extract, comma-separated (e.g. 1,2,3)
    #[arg(short, long, value_name = "LIST", allow_hyphen_values = true)]
    pages: Option<String>,

    /// Output field delimiter: a single character, or "tab"
    #[arg(short, long, default_value = ",", value_parser = delimiter_arg)]
    delimiter: u8,

    /// Minimum number of spaces between two table columns
    #[arg(long, default_value_t = 2, value_name = "SPACES")]
    min_column_gap: usize,

    /// Keep wrapped cell lines as separate rows instead of joining them
    #[arg(long)]
    no_merge: bool,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn delimiter_arg(raw: &str) -> Result<u8, String> {
    parse_delimiter(raw).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let args = ExtractArgs {
        input: cli.input,
        output: cli.output,
        headers: cli.headers,
        pages: cli.pages,
        delimiter: cli.delimiter,
        table: TableSettings {
            min_column_gap: cli.min_column_gap,
            merge_continuation_lines: !cli.no_merge,
            ..TableSettings::default()
        },
    };

    match commands::extract::run(args) {
        Ok(()) => {}
        Err(PdfcsvError::InvalidInput) => {
            println!("{}", PdfcsvError::InvalidInput);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
