use lopdf::{Document as LopdfDocument, Object};
use lopdf::content::Content;
use std::collections::BTreeSet;

/// Decodes the operands of every `Tj` on a 1-based page.
pub fn shown_texts(doc: &LopdfDocument, page: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page) else {
        return Vec::new();
    };
    let Ok(bytes) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&bytes) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first()?.as_str().ok())
        .map(decode_win_ansi)
        .collect()
}

/// All text of the document, one shown string per line.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page in 1..=doc.get_pages().len() as u32 {
        for shown in shown_texts(doc, page) {
            text.push_str(&shown);
            text.push('\n');
        }
    }
    text
}

/// Follows a reference to the object it names; other objects resolve to themselves.
fn resolve<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Base font names selected by `Tf` on any page, looked up in that page's
/// `Resources` → `Font` dictionary.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for page_id in doc.get_pages().values() {
        let Ok(page) = doc.get_dictionary(*page_id) else { continue };
        let font_dict = page
            .get(b"Resources")
            .ok()
            .and_then(|r| resolve(doc, r))
            .and_then(|r| r.as_dict().ok())
            .and_then(|r| r.get(b"Font").ok())
            .and_then(|f| resolve(doc, f))
            .and_then(|f| f.as_dict().ok());
        let Some(font_dict) = font_dict else { continue };
        let Ok(content) = doc.get_page_content(*page_id).and_then(|bytes| Content::decode(&bytes)) else {
            continue;
        };
        for op in content.operations.iter().filter(|op| op.operator == "Tf") {
            let base = op
                .operands
                .first()
                .and_then(|key| key.as_name().ok())
                .and_then(|key| font_dict.get(key).ok())
                .and_then(|font| resolve(doc, font))
                .and_then(|font| font.as_dict().ok())
                .and_then(|font| font.get(b"BaseFont").ok())
                .and_then(|base| base.as_name().ok());
            if let Some(base) = base {
                fonts.insert(String::from_utf8_lossy(base).into_owned());
            }
        }
    }
    fonts.into_iter().collect()
}

pub fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80 => '€',
            0x85 => '…',
            0x8C => 'Œ',
            0x91 => '‘',
            0x92 => '’',
            0x93 => '“',
            0x94 => '”',
            0x95 => '•',
            0x96 => '–',
            0x97 => '—',
            0x9C => 'œ',
            _ => char::from(b),
        })
        .collect()
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should have a font matching '{}', found: {:?}",
            $pattern,
            fonts
        );
    };
}
