use crate::error::PdfcsvError;
use crate::model::Row;
use std::io;
use std::path::Path;

/// Write rows as delimited text: no header line, no index column.
///
/// Every row is padded with empty fields to the widest row, and absent
/// cells are written as empty fields. Fields are quoted only when needed.
pub fn write_rows<W: io::Write>(out: W, rows: &[Row], delimiter: u8) -> Result<(), PdfcsvError> {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(out);

    for row in rows {
        let record = row
            .iter()
            .map(|cell| cell.as_deref().unwrap_or(""))
            .chain(std::iter::repeat("").take(width - row.len()));
        csv_writer.write_record(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write rows to `path`, replacing any existing file.
pub fn write_csv_file(path: &Path, rows: &[Row], delimiter: u8) -> Result<(), PdfcsvError> {
    let file = std::fs::File::create(path)?;
    write_rows(io::BufWriter::new(file), rows, delimiter)?;
    log::debug!("wrote {} row(s) to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[Row], delimiter: u8) -> String {
        let mut buf = Vec::new();
        write_rows(&mut buf, rows, delimiter).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn row(cells: &[Option<&str>]) -> Row {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    #[test]
    fn test_plain_rows() {
        let rows = vec![
            row(&[Some("Name"), Some("Age")]),
            row(&[Some("Ann"), Some("31")]),
        ];
        assert_eq!(render(&rows, b','), "Name,Age\nAnn,31\n");
    }

    #[test]
    fn test_ragged_rows_padded_and_none_empty() {
        let rows = vec![
            row(&[Some("a"), None, Some("c")]),
            row(&[Some("x")]),
            row(&[]),
        ];
        assert_eq!(render(&rows, b','), "a,,c\nx,,\n,,\n");
    }

    #[test]
    fn test_quoting_only_when_needed() {
        let rows = vec![row(&[Some("1,5"), Some("say \"hi\""), Some("plain")])];
        assert_eq!(render(&rows, b','), "\"1,5\",\"say \"\"hi\"\"\",plain\n");
    }

    #[test]
    fn test_custom_delimiter() {
        let rows = vec![row(&[Some("1,5"), Some("b")])];
        assert_eq!(render(&rows, b';'), "1,5;b\n");
    }

    #[test]
    fn test_no_rows_writes_nothing() {
        assert_eq!(render(&[], b','), "");
    }

    #[test]
    fn test_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents that are much longer\n").unwrap();

        write_csv_file(&path, &[row(&[Some("fresh")])], b',').unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }
}
