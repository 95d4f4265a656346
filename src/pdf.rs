use std::path::Path;

use anyhow::{Context, Result, anyhow};
use lopdf::{Document, Object};

/// Best-effort PDF title detection: the Info-dictionary `/Title`, then the
/// first text line of page 1. Errors on unreadable documents; the caller
/// decides the fallback.
pub fn detect_title(path: &Path) -> Result<String> {
    let doc = Document::load(path).context("failed to load pdf")?;
    if let Some(title) = info_title(&doc) {
        return Ok(title);
    }
    first_page_line(&doc).ok_or_else(|| anyhow!("no title candidate in pdf"))
}

fn info_title(doc: &Document) -> Option<String> {
    let info = match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    let Object::String(bytes, _) = info.as_dict().ok()?.get(b"Title").ok()? else {
        return None;
    };
    let title = decode_pdf_string(bytes);
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

// PDF text strings are UTF-16BE with a BOM, or a latin-like PDFDocEncoding.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}

fn first_page_line(doc: &Document) -> Option<String> {
    let text = doc.extract_text(&[1]).ok()?;
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
