use crate::config::TableSettings;
use crate::error::PdfcsvError;
use crate::extraction::{table, PdfDocument};
use crate::model::Table;
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// PDF backend using pdftotext and pdfinfo (from poppler-utils).
///
/// The PDF is snapshotted into a temp file on open so every page is read
/// from the same bytes; the snapshot is removed when the document drops.
pub struct PdftotextDocument {
    file: tempfile::NamedTempFile,
    page_count: usize,
    settings: TableSettings,
}

impl PdftotextDocument {
    /// Open a PDF on disk.
    pub fn open(path: &Path, settings: TableSettings) -> Result<Self, PdfcsvError> {
        let pdf_bytes = std::fs::read(path)?;
        log::debug!("read {} bytes from {}", pdf_bytes.len(), path.display());
        Self::from_bytes(&pdf_bytes, settings)
    }

    pub fn from_bytes(pdf_bytes: &[u8], settings: TableSettings) -> Result<Self, PdfcsvError> {
        let mut file =
            tempfile::NamedTempFile::new().map_err(|e| PdfcsvError::Extraction(e.to_string()))?;
        file.write_all(pdf_bytes)
            .map_err(|e| PdfcsvError::Extraction(e.to_string()))?;
        file.flush()
            .map_err(|e| PdfcsvError::Extraction(e.to_string()))?;

        let info = run_tool("pdfinfo", &[file.path().as_os_str()])?;
        let page_count = parse_page_count(&info).ok_or_else(|| {
            PdfcsvError::PageCount("pdfinfo output has no 'Pages:' line".into())
        })?;
        log::info!("opened PDF with {page_count} page(s)");

        Ok(PdftotextDocument {
            file,
            page_count,
            settings,
        })
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    /// Column-aligned text of one 1-based page.
    pub fn page_text(&self, page_number: usize) -> Result<String, PdfcsvError> {
        let page = page_number.to_string();
        run_tool(
            "pdftotext",
            &[
                OsStr::new("-layout"),
                OsStr::new("-enc"),
                OsStr::new("UTF-8"),
                OsStr::new("-f"),
                OsStr::new(&page),
                OsStr::new("-l"),
                OsStr::new(&page),
                self.file.path().as_os_str(),
                OsStr::new("-"), // output to stdout
            ],
        )
    }
}

impl PdfDocument for PdftotextDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn extract_tables(&self, page_number: usize) -> Result<Vec<Table>, PdfcsvError> {
        let text = self.page_text(page_number)?;
        if text.trim().is_empty() {
            log::warn!("page {page_number} has no extractable text (scanned image?)");
        }
        Ok(table::find_tables(&text, &self.settings))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Run a poppler tool and return its stdout.
fn run_tool(tool: &'static str, args: &[&OsStr]) -> Result<String, PdfcsvError> {
    let output = Command::new(tool).args(args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PdfcsvError::ToolNotFound(tool)
        } else {
            PdfcsvError::Extraction(format!("{tool} failed: {e}"))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(PdfcsvError::ToolFailed { tool, code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Read the `Pages:` line of pdfinfo output.
fn parse_page_count(info: &str) -> Option<usize> {
    info.lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|rest| rest.trim().parse().ok())
}
