use std::sync::Arc;

use plainify::application::ports::{FileLoader, FileLoaderError};
use plainify::domain::{ContentType, Document};
use plainify::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

struct TaggingLoader(&'static str);

#[async_trait::async_trait]
impl FileLoader for TaggingLoader {
    async fn extract_text(&self, _data: &[u8], _doc: &Document) -> Result<String, FileLoaderError> {
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn given_registered_types_when_loading_then_delegates_by_content_type() {
    let pdf: Arc<dyn FileLoader> = Arc::new(TaggingLoader("from pdf"));
    let word: Arc<dyn FileLoader> = Arc::new(TaggingLoader("from word"));
    let loader = CompositeFileLoader::new(vec![
        (ContentType::Pdf, pdf),
        (ContentType::Word, word),
    ]);

    let pdf_doc = Document::new("a.pdf".to_string(), ContentType::Pdf, 1);
    let word_doc = Document::new("a.docx".to_string(), ContentType::Word, 1);

    assert_eq!(loader.extract_text(b"x", &pdf_doc).await.unwrap(), "from pdf");
    assert_eq!(loader.extract_text(b"x", &word_doc).await.unwrap(), "from word");
}

#[tokio::test]
async fn given_text_document_when_loading_with_defaults_then_delegates_to_text_adapter() {
    let loader = CompositeFileLoader::with_default_adapters();

    let text_bytes = b"Hello plain text";
    let document = Document::new(
        "readme.txt".to_string(),
        ContentType::Text,
        text_bytes.len() as u64,
    );

    let result = loader.extract_text(text_bytes, &document).await;

    assert_eq!(result.unwrap(), "Hello plain text");
}

#[tokio::test]
async fn given_unregistered_content_type_when_loading_then_returns_unsupported() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(ContentType::Text, text_adapter)]);

    let data = b"%PDF-1.7";
    let document = Document::new("paper.pdf".to_string(), ContentType::Pdf, data.len() as u64);

    let result = loader.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
