//! DOCX text extraction.
//!
//! Reads `word/document.xml` from the package and emits one line per
//! paragraph, concatenating the paragraph's text runs.

use crate::extract::{ExtractError, FileKind, TextExtractor};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

static PARAGRAPH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>(.*?)</w:p>")
        .expect("valid paragraph regex")
});
static TEXT_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>").expect("valid text run regex"));
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|lt|gt|quot|apos|amp);").expect("valid entity regex")
});

/// Extracts paragraph text from Office Open XML documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxTextExtractor;

impl TextExtractor for DocxTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(malformed)?;
        let mut part = archive.by_name(DOCUMENT_PART).map_err(malformed)?;
        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|err| ExtractError::Malformed {
            kind: FileKind::Docx,
            message: err.to_string(),
        })?;
        Ok(paragraphs_from_document_xml(&xml).join("\n"))
    }
}

/// Splits `document.xml` into paragraph strings; empty paragraphs are kept.
pub fn paragraphs_from_document_xml(xml: &str) -> Vec<String> {
    PARAGRAPH_RE
        .captures_iter(xml)
        .map(|caps| match caps.get(1) {
            Some(body) => TEXT_RUN_RE
                .captures_iter(body.as_str())
                .filter_map(|run| run.get(1))
                .map(|text| decode_xml_entities(text.as_str()))
                .collect::<String>(),
            None => String::new(),
        })
        .collect()
}

// Single pass, so decoded text is never decoded again.
fn decode_xml_entities(value: &str) -> String {
    ENTITY_RE
        .replace_all(value, |caps: &Captures<'_>| {
            let entity = &caps[1];
            let decoded = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "amp" => Some('&'),
                _ => decode_char_reference(entity),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn decode_char_reference(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code_point = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code_point)
}

fn malformed(err: zip::result::ZipError) -> ExtractError {
    ExtractError::Malformed {
        kind: FileKind::Docx,
        message: err.to_string(),
    }
}
