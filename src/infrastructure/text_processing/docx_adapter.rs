use std::io::{Cursor, Read};
use std::time::Duration;

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::sanitize_extracted_text;

const DOCUMENT_PART: &str = "word/document.xml";
const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on the inflated size of `word/document.xml`.
pub const DEFAULT_MAX_DOCUMENT_XML_BYTES: u64 = 50 * 1024 * 1024;

/// Reads the main body part of a `.docx` package.
///
/// Inflating and parsing run on the blocking pool. The body part is read
/// through a size cap, so a tiny archive cannot expand into gigabytes.
pub struct DocxAdapter {
    max_document_xml_bytes: u64,
}

impl Default for DocxAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxAdapter {
    pub fn new() -> Self {
        Self::with_max_document_xml_bytes(DEFAULT_MAX_DOCUMENT_XML_BYTES)
    }

    pub fn with_max_document_xml_bytes(max_document_xml_bytes: u64) -> Self {
        Self {
            max_document_xml_bytes,
        }
    }

    fn read_document_xml(data: &[u8], max_bytes: u64) -> Result<String, FileLoaderError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("not a Word document: {e}"))
        })?;

        let part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        if part.size() > max_bytes {
            return Err(too_large(max_bytes));
        }

        // Declared size is untrusted.
        let mut xml = String::new();
        part.take(max_bytes + 1)
            .read_to_string(&mut xml)
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
            })?;

        if xml.len() as u64 > max_bytes {
            return Err(too_large(max_bytes));
        }

        Ok(xml)
    }

    fn extract_blocking(data: &[u8], max_bytes: u64) -> Result<String, FileLoaderError> {
        let xml = Self::read_document_xml(data, max_bytes)?;
        Ok(sanitize_extracted_text(&paragraphs_from_document_xml(&xml)?))
    }
}

fn too_large(max_bytes: u64) -> FileLoaderError {
    FileLoaderError::ExtractionFailed(format!(
        "{DOCUMENT_PART} inflates past the {max_bytes}-byte limit"
    ))
}

/// Collects `w:t` runs, one line per `w:p` paragraph. Tabs and breaks
/// inside a paragraph become whitespace.
pub fn paragraphs_from_document_xml(xml: &str) -> Result<String, FileLoaderError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let run = e.unescape().map_err(|err| {
                    FileLoaderError::ExtractionFailed(format!("invalid XML text: {err}"))
                })?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FileLoaderError::ExtractionFailed(format!(
                    "malformed {DOCUMENT_PART} at {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(text)
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Word {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let max_bytes = self.max_document_xml_bytes;
        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_blocking(&bytes, max_bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("Word extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        tracing::info!(chars = text.len(), "Word text extraction complete");

        Ok(text)
    }
}
