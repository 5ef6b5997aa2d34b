#[derive(Debug, thiserror::Error)]
pub enum PdfcsvError {
    #[error("Invalid input. Please enter numbers only.")]
    InvalidInput,

    #[error("failed to read input: {0}")]
    Input(String),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("{0} not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    ToolNotFound(&'static str),

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("could not read page count: {0}")]
    PageCount(String),

    #[error("invalid delimiter '{0}': expected a single ASCII character")]
    InvalidDelimiter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
