use crate::writer::StreamingPdfWriter;
use battlesheet_layout::{StandardFont, encode_win_ansi};
use battlesheet_render_core::utils::{flip_y, mm_to_pt};
use battlesheet_render_core::{DocumentRenderer, RenderError, Stroke, TextRun};
use battlesheet_types::{Color, PageGeometry};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, dictionary};
use log::debug;
use std::io::{Seek, Write};

/// Content operations for one page, with the graphics state already emitted.
struct PageContent {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
    font: Option<(StandardFont, f32)>,
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f32>,
}

impl PageContent {
    fn new(geometry: &PageGeometry) -> Self {
        Self {
            width: mm_to_pt(geometry.width),
            height: mm_to_pt(geometry.height),
            operations: Vec::new(),
            font: None,
            fill: None,
            stroke: None,
            line_width: None,
        }
    }

    fn set_fill(&mut self, color: Color) {
        if self.fill != Some(color) {
            let [r, g, b] = color.as_unit_rgb();
            self.operations
                .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            self.fill = Some(color);
        }
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        if self.stroke != Some(stroke.color) {
            let [r, g, b] = stroke.color.as_unit_rgb();
            self.operations
                .push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
            self.stroke = Some(stroke.color);
        }
        let width = mm_to_pt(stroke.width);
        if self.line_width != Some(width) {
            self.operations.push(Operation::new("w", vec![width.into()]));
            self.line_width = Some(width);
        }
    }

    fn y(&self, y_mm: f32) -> f32 {
        flip_y(mm_to_pt(y_mm), self.height)
    }
}

/// A PDF backend built on `lopdf`.
///
/// Every page draws with the six standard fonts registered once in a shared
/// resource dictionary, so no font data is embedded.
pub struct LopdfRenderer<W: Write + Seek> {
    writer: W,
    pages: Vec<PageContent>,
}

impl<W: Write + Seek> LopdfRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pages: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_page(&mut self) -> Option<&mut PageContent> {
        self.pages.last_mut()
    }
}

/// Resource name of a standard font in the shared font dictionary.
fn font_resource_name(font: StandardFont) -> String {
    let index = StandardFont::ALL
        .iter()
        .position(|candidate| *candidate == font)
        .unwrap_or(0);
    format!("F{}", index + 1)
}

fn font_dictionary() -> Dictionary {
    let mut font_dict = Dictionary::new();
    for font in StandardFont::ALL {
        let single_font_dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        font_dict.set(font_resource_name(font).into_bytes(), Object::Dictionary(single_font_dict));
    }
    font_dict
}

impl<W: Write + Seek> DocumentRenderer for LopdfRenderer<W> {
    type Output = W;

    fn begin_page(&mut self, geometry: &PageGeometry) {
        self.pages.push(PageContent::new(geometry));
    }

    fn draw_text(&mut self, run: TextRun<'_>) {
        let Some(page) = self.current_page() else {
            return;
        };
        page.set_fill(run.color);
        let x = mm_to_pt(run.x);
        let y = page.y(run.baseline);

        page.operations.push(Operation::new("BT", vec![]));
        let font = StandardFont::for_spec(&run.font);
        if page.font != Some((font, run.font.size)) {
            page.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(font_resource_name(font).into_bytes()), run.font.size.into()],
            ));
            page.font = Some((font, run.font.size));
        }
        page.operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        page.operations.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(run.text), StringFormat::Literal)],
        ));
        page.operations.push(Operation::new("ET", vec![]));
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, stroke: Stroke) {
        let Some(page) = self.current_page() else {
            return;
        };
        page.set_stroke(stroke);
        let bottom = page.y(y + height);
        page.operations.push(Operation::new(
            "re",
            vec![
                mm_to_pt(x).into(),
                bottom.into(),
                mm_to_pt(width).into(),
                mm_to_pt(height).into(),
            ],
        ));
        page.operations.push(Operation::new("S", vec![]));
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), stroke: Stroke) {
        let Some(page) = self.current_page() else {
            return;
        };
        page.set_stroke(stroke);
        let (x1, y1) = (mm_to_pt(from.0), page.y(from.1));
        let (x2, y2) = (mm_to_pt(to.0), page.y(to.1));
        page.operations.push(Operation::new("m", vec![x1.into(), y1.into()]));
        page.operations.push(Operation::new("l", vec![x2.into(), y2.into()]));
        page.operations.push(Operation::new("S", vec![]));
    }

    fn finish(self) -> Result<W, RenderError> {
        let mut writer = StreamingPdfWriter::new(self.writer, "1.7", font_dictionary())?;
        let mut page_ids = Vec::with_capacity(self.pages.len());

        for page in self.pages {
            let content_id = writer.buffer_content_stream(Content {
                operations: page.operations,
            })?;
            let page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => writer.pages_id,
                "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), page.width.into(), page.height.into()],
                "Contents" => content_id,
                "Resources" => writer.resources_id,
            };
            page_ids.push(writer.buffer_object(page_dict.into()));
        }

        debug!("Writing PDF with {} page(s)", page_ids.len());
        writer.set_page_ids(page_ids);
        Ok(writer.finish()?)
    }
}
