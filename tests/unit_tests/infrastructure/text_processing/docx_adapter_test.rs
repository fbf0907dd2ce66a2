use std::io::{Cursor, Write};
use std::time::{Duration, Instant};

use plainify::application::ports::{FileLoader, FileLoaderError};
use plainify::domain::{ContentType, Document};
use plainify::infrastructure::text_processing::{DocxAdapter, paragraphs_from_document_xml};
use zip::write::SimpleFileOptions;

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Quarterly</w:t></w:r><w:r><w:t xml:space="preserve"> results &amp; outlook</w:t></w:r></w:p>
    <w:p><w:r><w:t>Revenue grew</w:t><w:tab/><w:t>12%</w:t></w:r></w:p>
    <w:p/>
  </w:body>
</w:document>"#;

fn build_docx(document_xml: &str) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("[Content_Types].xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(document_xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn word_document(size: usize) -> Document {
    Document::new("report.docx".to_string(), ContentType::Word, size as u64)
}

#[test]
fn given_document_xml_when_reading_paragraphs_then_joins_runs_and_unescapes() {
    let text = paragraphs_from_document_xml(DOCUMENT_XML).unwrap();

    assert_eq!(text, "Quarterly results & outlook\nRevenue grew\t12%\n\n");
}

#[tokio::test]
async fn given_docx_package_when_extracting_then_returns_sanitized_paragraphs() {
    let data = build_docx(DOCUMENT_XML);

    let result = DocxAdapter::new()
        .extract_text(&data, &word_document(data.len()))
        .await;

    assert_eq!(
        result.unwrap(),
        "Quarterly results & outlook\nRevenue grew 12%"
    );
}

#[tokio::test]
async fn given_zip_without_document_part_when_extracting_then_returns_extraction_failed() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("readme.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"hello").unwrap();
    let data = writer.finish().unwrap().into_inner();

    let result = DocxAdapter::new()
        .extract_text(&data, &word_document(data.len()))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_docx_without_text_when_extracting_then_returns_no_text_found() {
    let data = build_docx(
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p/></w:body></w:document>"#,
    );

    let result = DocxAdapter::new()
        .extract_text(&data, &word_document(data.len()))
        .await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_plain_bytes_when_extracting_then_returns_extraction_failed() {
    let data = b"not a zip archive";

    let result = DocxAdapter::new()
        .extract_text(data, &word_document(data.len()))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

fn compressible_document_xml(text_len: usize) -> String {
    format!(
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:body></w:document>"#,
        "a".repeat(text_len)
    )
}

#[tokio::test]
async fn given_docx_inflating_past_limit_when_extracting_then_rejects_without_reading_it() {
    let data = build_docx(&compressible_document_xml(4 * 1024 * 1024));
    assert!(data.len() < 64 * 1024);

    let result = DocxAdapter::with_max_document_xml_bytes(1024 * 1024)
        .extract_text(&data, &word_document(data.len()))
        .await;

    match result {
        Err(FileLoaderError::ExtractionFailed(message)) => {
            assert!(message.contains("limit"), "unexpected message: {message}");
        }
        other => panic!("expected ExtractionFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn given_docx_within_limit_when_extracting_then_returns_text() {
    let data = build_docx(&compressible_document_xml(2048));

    let result = DocxAdapter::with_max_document_xml_bytes(64 * 1024)
        .extract_text(&data, &word_document(data.len()))
        .await;

    assert_eq!(result.unwrap().len(), 2048);
}

#[tokio::test(flavor = "current_thread")]
async fn given_large_docx_when_extracting_then_other_tasks_keep_running() {
    let data = build_docx(&compressible_document_xml(8 * 1024 * 1024));
    let started = Instant::now();
    let ticker = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        started.elapsed()
    });

    let result = DocxAdapter::with_max_document_xml_bytes(16 * 1024 * 1024)
        .extract_text(&data, &word_document(data.len()))
        .await;
    let extraction_elapsed = started.elapsed();

    assert!(result.is_ok());
    assert!(ticker.await.unwrap() < extraction_elapsed);
}
