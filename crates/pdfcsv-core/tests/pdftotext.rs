//! Runs the real poppler backend against a PDF built in memory.
//!
//! Skipped when pdftotext is not installed.

use pdfcsv_core::config::{ExtractOptions, TableSettings};
use pdfcsv_core::extraction::pdftotext::PdftotextDocument;
use pdfcsv_core::extraction::PdfDocument;
use pdfcsv_core::model::{PageEvent, PageNumber};

/// Build a PDF with one page per entry; each page draws its lines in Courier.
fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 4 + i * 2).collect();
    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            page_ids
                .iter()
                .map(|id| format!("{id} 0 R"))
                .collect::<Vec<_>>()
                .join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Courier >>".to_string(),
    ];

    for (i, lines) in pages.iter().enumerate() {
        let mut content = String::from("BT /F1 10 Tf 14 TL 72 720 Td\n");
        for line in lines.iter() {
            content.push_str(&format!("({line}) Tj T*\n"));
        }
        content.push_str("ET");

        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            page_ids[i] + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_start = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for off in offsets {
        xref.push_str(&format!("{off:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_start
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}

fn sample_pdf() -> Vec<u8> {
    build_pdf(&[
        &[
            "Region      Q1      Q2",
            "North       10      12",
            "South        8       9",
        ],
        &["Just a sentence of prose on the second page."],
    ])
}

#[test]
fn reads_page_count_and_tables() {
    if !PdftotextDocument::is_available() {
        eprintln!("pdftotext not installed, skipping");
        return;
    }

    let doc = PdftotextDocument::from_bytes(&sample_pdf(), TableSettings::default()).unwrap();
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.backend_name(), "pdftotext");

    let text = doc.page_text(1).unwrap();
    assert!(text.contains("Region"), "unexpected page text: {text:?}");

    let tables = doc.extract_tables(1).unwrap();
    assert_eq!(tables.len(), 1, "page text was: {text:?}");
    assert_eq!(tables[0].rows.len(), 3);
    assert_eq!(tables[0].rows[0][0].as_deref(), Some("Region"));

    assert!(doc.extract_tables(2).unwrap().is_empty());
}

#[test]
fn converts_file_end_to_end() {
    if !PdftotextDocument::is_available() {
        eprintln!("pdftotext not installed, skipping");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.pdf");
    let output = dir.path().join("report.csv");
    std::fs::write(&input, sample_pdf()).unwrap();

    let options = ExtractOptions::new(3, [2, 1, 7].map(PageNumber::from).to_vec());
    let mut events = Vec::new();
    let result =
        pdfcsv_core::convert_pdf(&input, &output, &options, |e| events.push(e.clone())).unwrap();

    assert_eq!(events[0], PageEvent::NoTable { page: PageNumber::from(2) });
    assert_eq!(events[2], PageEvent::OutOfRange { page: PageNumber::from(7) });
    assert_eq!(result.rows.len(), 3);

    let csv = std::fs::read_to_string(&output).unwrap();
    assert_eq!(csv, "Q1,Q2\n10,12\n8,9\n");
}
