//! Values produced by the generation backend.

/// Generated journal entry, expected to be an HTML body fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeResult {
    pub text: String,
}

impl NarrativeResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The fragment without a surrounding Markdown code fence, if the model added one.
    pub fn body_html(&self) -> &str {
        let trimmed = self.text.trim();
        let Some(rest) = trimmed.strip_prefix("```") else {
            return trimmed;
        };
        let Some(body) = rest.strip_suffix("```") else {
            return trimmed;
        };
        // Drop the info string ("html") on the opening fence line.
        match body.split_once('\n') {
            Some((_, inner)) => inner.trim(),
            None => body.trim(),
        }
    }
}

/// Declared encoding of an inline image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageEncoding {
    Png,
    Jpeg,
    Webp,
    Gif,
    Other(String),
}

impl ImageEncoding {
    pub fn from_mime(mime: &str) -> Self {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => ImageEncoding::Png,
            "image/jpeg" | "image/jpg" => ImageEncoding::Jpeg,
            "image/webp" => ImageEncoding::Webp,
            "image/gif" => ImageEncoding::Gif,
            other => ImageEncoding::Other(other.to_string()),
        }
    }

    pub fn mime_type(&self) -> &str {
        match self {
            ImageEncoding::Png => "image/png",
            ImageEncoding::Jpeg => "image/jpeg",
            ImageEncoding::Webp => "image/webp",
            ImageEncoding::Gif => "image/gif",
            ImageEncoding::Other(mime) => mime,
        }
    }
}

/// Raw image bytes as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub encoding: ImageEncoding,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, encoding: ImageEncoding) -> Self {
        Self { bytes, encoding }
    }
}

/// One part of a multi-modal backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    Text(String),
    Image(ImagePayload),
}
