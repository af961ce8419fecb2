//! In-process extractor registry.

use crate::extract::{
    DocxTextExtractor, ExtractError, ExtractedUpload, FileKind, ImagePlaceholderExtractor,
    PdfTextExtractor, TextExtractor,
};
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Maps each upload kind to the extractor that handles it.
#[derive(Default, Clone)]
pub struct ExtractorRegistry {
    extractors: BTreeMap<FileKind, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with built-in extractors for every `FileKind`.
    pub fn with_defaults() -> Self {
        let image: Arc<dyn TextExtractor> = Arc::new(ImagePlaceholderExtractor);
        let mut extractors: BTreeMap<FileKind, Arc<dyn TextExtractor>> = BTreeMap::new();
        extractors.insert(FileKind::Pdf, Arc::new(PdfTextExtractor));
        extractors.insert(FileKind::Docx, Arc::new(DocxTextExtractor));
        for kind in FileKind::ALL.into_iter().filter(|kind| kind.is_image()) {
            extractors.insert(kind, Arc::clone(&image));
        }
        Self { extractors }
    }

    /// Registers one extractor.
    pub fn register(
        &mut self,
        kind: FileKind,
        extractor: Arc<dyn TextExtractor>,
    ) -> Result<(), ExtractError> {
        if self.extractors.contains_key(&kind) {
            return Err(ExtractError::DuplicateExtractor(kind));
        }
        self.extractors.insert(kind, extractor);
        Ok(())
    }

    /// Registered kinds in stable order.
    pub fn kinds(&self) -> Vec<FileKind> {
        self.extractors.keys().copied().collect()
    }

    /// Extracts text for an upload of a declared kind.
    ///
    /// Never fails: a missing extractor or an extraction error yields empty
    /// content.
    pub fn extract(&self, name: &str, kind: FileKind, bytes: &[u8]) -> ExtractedUpload {
        let Some(extractor) = self.extractors.get(&kind) else {
            warn!("event=file_extract module=extract status=warn kind={kind} reason=no_extractor");
            return ExtractedUpload::new(name, String::new());
        };

        match extractor.extract(bytes) {
            Ok(content) => {
                info!(
                    "event=file_extract module=extract status=ok kind={kind} bytes={} chars={}",
                    bytes.len(),
                    content.chars().count()
                );
                ExtractedUpload::new(name, content)
            }
            Err(err) => {
                warn!(
                    "event=file_extract module=extract status=warn kind={kind} bytes={} error={err}",
                    bytes.len()
                );
                ExtractedUpload::new(name, String::new())
            }
        }
    }

    /// Extracts text using the kind inferred from `name`.
    ///
    /// Unknown extensions yield empty content.
    pub fn extract_by_name(&self, name: &str, bytes: &[u8]) -> ExtractedUpload {
        match FileKind::from_file_name(name) {
            Some(kind) => self.extract(name, kind, bytes),
            None => {
                warn!("event=file_extract module=extract status=warn reason=unsupported_type");
                ExtractedUpload::new(name, String::new())
            }
        }
    }

    /// Reads an upload from disk and extracts it by file name.
    ///
    /// # Errors
    /// - `UnsupportedType` when the path has no usable file name.
    /// - `Io` when the file cannot be read.
    pub fn read_upload(&self, path: impl AsRef<Path>) -> Result<ExtractedUpload, ExtractError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|value| value.to_string_lossy().into_owned())
            .ok_or_else(|| ExtractError::UnsupportedType(path.display().to_string()))?;
        let bytes = std::fs::read(path)?;
        Ok(self.extract_by_name(name.as_str(), &bytes))
    }
}
