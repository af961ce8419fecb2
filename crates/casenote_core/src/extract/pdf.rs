//! PDF text extraction backed by `pdf-extract`.

use crate::extract::{ExtractError, FileKind, TextExtractor};
use pdf_extract::extract_text_from_mem;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Extracts the text of every page, in page order.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        // pdf-extract panics on some malformed documents instead of erroring.
        let outcome = catch_unwind(AssertUnwindSafe(|| extract_text_from_mem(bytes)));
        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(err)) => Err(ExtractError::Malformed {
                kind: FileKind::Pdf,
                message: err.to_string(),
            }),
            Err(_) => Err(ExtractError::Malformed {
                kind: FileKind::Pdf,
                message: "parser aborted on malformed document".to_string(),
            }),
        }
    }
}
