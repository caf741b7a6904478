mod fit;
mod title;
mod util;
mod wrap;

pub use fit::fit_lines;
pub use title::parse_title;
pub use util::{capitalize, first_number, truncate_chars};
pub use wrap::wrap_text;

/// Marker appended to shortened text.
pub const ELLIPSIS: &str = "...";
