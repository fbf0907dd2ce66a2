use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::{DEFAULT_MAX_DOCUMENT_XML_BYTES, DocxAdapter, PdfAdapter, PlainTextAdapter};

/// Dispatches to one adapter per content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF, Word and plain text.
    pub fn with_default_adapters() -> Self {
        Self::with_document_limit(DEFAULT_MAX_DOCUMENT_XML_BYTES)
    }

    /// Default adapters, with Word bodies capped at `max_document_bytes` once inflated.
    pub fn with_document_limit(max_document_bytes: u64) -> Self {
        let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let docx_adapter: Arc<dyn FileLoader> = Arc::new(DocxAdapter::with_max_document_xml_bytes(
            max_document_bytes,
        ));
        let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);

        Self::new(vec![
            (ContentType::Pdf, pdf_adapter),
            (ContentType::Word, docx_adapter),
            (ContentType::Text, text_adapter),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.content_type.as_mime().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
