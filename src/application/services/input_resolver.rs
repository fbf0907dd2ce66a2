use std::sync::Arc;

use reqwest::Url;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{
    ContentType, Document, InputSource, ResolvedInput, SimplifyInput, UploadedFile,
};

/// Turns whichever input the caller supplied into a single text payload.
///
/// A file wins over a URL, and a URL wins over raw text. Blank strings and
/// empty uploads count as absent. Only raw text is held to the word limit.
pub struct InputResolver {
    file_loader: Arc<dyn FileLoader>,
    word_limit: usize,
}

impl InputResolver {
    pub fn new(file_loader: Arc<dyn FileLoader>, word_limit: usize) -> Self {
        Self {
            file_loader,
            word_limit,
        }
    }

    pub fn word_limit(&self) -> usize {
        self.word_limit
    }

    pub async fn resolve(&self, input: SimplifyInput) -> Result<ResolvedInput, InputError> {
        let SimplifyInput { file, url, text } = input;

        if let Some(file) = file.filter(|f| !f.data.is_empty()) {
            return self.resolve_file(file).await;
        }

        if let Some(url) = non_blank(url) {
            return resolve_url(&url);
        }

        if let Some(text) = non_blank(text) {
            return self.resolve_text(text);
        }

        Err(InputError::NoValidInput)
    }

    async fn resolve_file(&self, file: UploadedFile) -> Result<ResolvedInput, InputError> {
        let content_type = ContentType::from_mime(&file.declared_mime)
            .ok_or_else(|| InputError::UnsupportedFileType(file.declared_mime.clone()))?;

        let document = Document::new(file.filename, content_type, file.data.len() as u64);

        tracing::debug!(
            filename = %document.filename,
            content_type = content_type.as_mime(),
            bytes = document.size_bytes,
            "Extracting uploaded file"
        );

        let text = self
            .file_loader
            .extract_text(&file.data, &document)
            .await
            .map_err(|e| match e {
                FileLoaderError::UnsupportedContentType(mime) => {
                    InputError::UnsupportedFileType(mime)
                }
                other => InputError::Extraction(other),
            })?;

        if text.trim().is_empty() {
            return Err(InputError::Extraction(FileLoaderError::NoTextFound(
                document.filename,
            )));
        }

        Ok(ResolvedInput {
            source: InputSource::Document(document),
            text,
        })
    }

    fn resolve_text(&self, text: String) -> Result<ResolvedInput, InputError> {
        let words = count_words(&text);
        if words > self.word_limit {
            return Err(InputError::TextTooLong {
                words,
                limit: self.word_limit,
            });
        }

        Ok(ResolvedInput {
            source: InputSource::Text,
            text,
        })
    }
}

fn resolve_url(raw: &str) -> Result<ResolvedInput, InputError> {
    let url = Url::parse(raw).map_err(|e| InputError::InvalidUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(InputError::InvalidUrl(format!(
            "unsupported scheme: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(InputError::InvalidUrl("missing host".to_string()));
    }

    Ok(ResolvedInput {
        source: InputSource::Url,
        text: url.to_string(),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No valid input provided")]
    NoValidInput,
    #[error("Text exceeds the {limit}-word limit ({words} words)")]
    TextTooLong { words: usize, limit: usize },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("Failed to extract text from file: {0}")]
    Extraction(FileLoaderError),
}

impl InputError {
    /// Errors caused by what the caller sent rather than by the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, InputError::Extraction(_))
    }
}
