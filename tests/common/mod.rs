#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use battlesheet::{CreatureRecord, GameSystem, SheetComposer, SheetError};
use lopdf::Document as LopdfDocument;
use serde_json::Value;
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Texts shown on a 1-based page, in drawing order.
    pub fn page_texts(&self, page: u32) -> Vec<String> {
        pdf_assertions::shown_texts(&self.doc, page)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Parses raw JSON creatures for `system`.
pub fn records(system: GameSystem, values: Vec<Value>) -> Vec<CreatureRecord> {
    values
        .into_iter()
        .map(|value| system.parse_record(value).expect("fixture should match its schema"))
        .collect()
}

/// Renders `values` with the default look into an in-memory PDF.
pub fn generate_pdf(system: GameSystem, values: Vec<Value>) -> Result<GeneratedPdf, SheetError> {
    let records = records(system, values);
    let cursor = SheetComposer::default().render_pdf(system, &records, Cursor::new(Vec::new()))?;
    GeneratedPdf::from_bytes(cursor.into_inner()).map_err(|e| SheetError::Io(std::io::Error::other(e.to_string())))
}
