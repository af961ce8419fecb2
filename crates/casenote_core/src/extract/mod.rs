//! Upload text extraction.
//!
//! # Responsibility
//! - Turn uploaded bytes of a declared type into `(name, content)` pairs for
//!   `CaseStore::ingest_upload`.
//! - Keep format-specific parsing behind the `TextExtractor` seam.
//!
//! # Invariants
//! - Extraction through the registry never fails: unsupported types and
//!   malformed inputs degrade to empty content, which the store skips.
//! - Image uploads yield `IMAGE_PLACEHOLDER` regardless of their bytes.

pub mod docx;
pub mod pdf;
pub mod registry;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use docx::DocxTextExtractor;
pub use pdf::PdfTextExtractor;
pub use registry::ExtractorRegistry;

/// Content recorded for image uploads, which are not analyzed.
pub const IMAGE_PLACEHOLDER: &str = "[Image uploaded — analysis not yet supported.]";

/// Declared upload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Docx,
    Png,
    Jpg,
    Jpeg,
}

impl FileKind {
    pub const ALL: [FileKind; 5] = [
        FileKind::Pdf,
        FileKind::Docx,
        FileKind::Png,
        FileKind::Jpg,
        FileKind::Jpeg,
    ];

    /// Lowercase extension label (`pdf`, `docx`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
        }
    }

    pub fn is_image(self) -> bool {
        matches!(self, Self::Png | Self::Jpg | Self::Jpeg)
    }

    /// Parses a declared type label such as `pdf` or `.JPEG`.
    pub fn from_declared(value: &str) -> Option<Self> {
        let normalized = value.trim().trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(normalized))
    }

    /// Infers the type from a file name extension, ignoring case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        Self::from_declared(extension)
    }
}

impl Display for FileKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Extraction result handed to the case store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedUpload {
    pub name: String,
    /// Empty when nothing could be extracted.
    pub content: String,
}

impl ExtractedUpload {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Extraction error reported by individual extractors and registry setup.
#[derive(Debug)]
pub enum ExtractError {
    /// File type is not one of the supported upload kinds.
    UnsupportedType(String),
    /// Bytes could not be parsed as the declared kind.
    Malformed { kind: FileKind, message: String },
    /// Reading the upload from disk failed.
    Io(std::io::Error),
    /// An extractor for this kind is already registered.
    DuplicateExtractor(FileKind),
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedType(value) => write!(f, "unsupported upload type: `{value}`"),
            Self::Malformed { kind, message } => write!(f, "malformed {kind} upload: {message}"),
            Self::Io(err) => write!(f, "upload read failed: {err}"),
            Self::DuplicateExtractor(kind) => {
                write!(f, "extractor already registered for {kind}")
            }
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Format-specific text extraction.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Returns `IMAGE_PLACEHOLDER` for any image bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImagePlaceholderExtractor;

impl TextExtractor for ImagePlaceholderExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<String, ExtractError> {
        Ok(IMAGE_PLACEHOLDER.to_string())
    }
}
