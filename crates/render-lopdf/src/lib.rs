//! PDF backend for battlesheet cards using lopdf.
//!
//! Pages are collected as `lopdf` content operations while the canvas flows,
//! then written in one pass by a small streaming writer that emits objects
//! in id order with sorted dictionary keys, so identical input always gives
//! identical bytes.

mod renderer;
mod writer;

pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;

use battlesheet_render_core::FlowCanvas;
use battlesheet_types::PageGeometry;
use std::io::{Cursor, Seek, Write};

/// A flow canvas that produces a PDF document.
pub type PdfCanvas<W> = FlowCanvas<LopdfRenderer<W>>;

/// Creates a canvas that writes its finished PDF into `writer`.
pub fn pdf_canvas<W: Write + Seek>(writer: W, geometry: PageGeometry) -> PdfCanvas<W> {
    FlowCanvas::new(LopdfRenderer::new(writer), geometry)
}

/// Creates a canvas whose finished PDF is returned as a byte buffer.
pub fn in_memory_canvas(geometry: PageGeometry) -> PdfCanvas<Cursor<Vec<u8>>> {
    pdf_canvas(Cursor::new(Vec::new()), geometry)
}
