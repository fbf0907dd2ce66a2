use super::document::Document;

/// A file received in a multipart upload, before its type is checked.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub declared_mime: String,
    pub data: Vec<u8>,
}

/// The three mutually exclusive ways a caller can supply content.
#[derive(Debug, Clone, Default)]
pub struct SimplifyInput {
    pub file: Option<UploadedFile>,
    pub url: Option<String>,
    pub text: Option<String>,
}

impl SimplifyInput {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn from_file(file: UploadedFile) -> Self {
        Self {
            file: Some(file),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Document(Document),
    Url,
    Text,
}

/// Text payload ready to be embedded in a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub source: InputSource,
    pub text: String,
}

impl ResolvedInput {
    pub fn is_url(&self) -> bool {
        matches!(self.source, InputSource::Url)
    }
}
