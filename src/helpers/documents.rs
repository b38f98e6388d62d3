/// Document formats accepted by the intake endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Csv,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Csv => "csv",
        }
    }
}

/// Detect the document format from the submitted file name, falling back
/// to the multipart content type. File contents are never inspected.
pub fn detect_format(file_name: &str, content_type: Option<&str>) -> Option<DocumentFormat> {
    let extension = file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => return Some(DocumentFormat::Pdf),
        Some("csv") => return Some(DocumentFormat::Csv),
        _ => {}
    }

    match content_type {
        Some("application/pdf") => Some(DocumentFormat::Pdf),
        Some("text/csv") | Some("application/csv") => Some(DocumentFormat::Csv),
        _ => None,
    }
}
