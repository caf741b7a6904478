//! Core rendering abstractions for battlesheet cards.
//!
//! This crate provides the drawing surface the section renderers write to:
//! - `Canvas`, the cursor-based cell/line/paragraph protocol
//! - `FlowCanvas`, which implements `Canvas` on top of any `DocumentRenderer`
//!   and owns cursor state, measured wrapping and automatic page breaks
//! - `StyleGuard` for scoped font and color changes
//! - `RecordingRenderer`, an in-memory backend that logs every primitive
//! - Error types and unit conversions shared by backends

mod canvas;
mod error;
mod flow;
mod recording;
mod style;
mod traits;
pub mod utils;

pub use canvas::{Advance, Align, Border, Canvas};
pub use error::RenderError;
pub use flow::FlowCanvas;
pub use recording::{DrawOp, RecordedPage, Recording, RecordingRenderer};
pub use style::{StyleGuard, TextStyle};
pub use traits::{DocumentRenderer, Stroke, TextRun};
