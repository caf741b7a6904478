//! Pure text layout helpers used by the card renderers.
//!
//! Nothing in this crate draws: it decides how text is split, shortened and
//! measured so that section renderers and canvas backends agree on it.

pub mod fonts;
pub mod text;

pub use fonts::{StandardFont, encode_win_ansi, text_width, win_ansi_byte};
pub use text::{capitalize, first_number, fit_lines, parse_title, truncate_chars, wrap_text};
