/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

pub fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}

/// Convert a top-left-origin Y coordinate to PDF's bottom-left origin.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
