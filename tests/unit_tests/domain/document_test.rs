use plainify::domain::ContentType;

#[test]
fn given_pdf_mime_when_parsing_then_returns_pdf_content_type() {
    assert_eq!(
        ContentType::from_mime("application/pdf"),
        Some(ContentType::Pdf)
    );
}

#[test]
fn given_docx_mime_when_parsing_then_returns_word_content_type() {
    assert_eq!(
        ContentType::from_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ),
        Some(ContentType::Word)
    );
}

#[test]
fn given_text_mime_with_charset_when_parsing_then_returns_text_content_type() {
    assert_eq!(
        ContentType::from_mime("text/plain; charset=utf-8"),
        Some(ContentType::Text)
    );
}

#[test]
fn given_unknown_mime_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("image/png"), None);
    assert_eq!(ContentType::from_mime("application/msword"), None);
    assert_eq!(ContentType::from_mime(""), None);
}
