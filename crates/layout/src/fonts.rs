//! Metrics for the PDF standard fonts.
//!
//! Cards are drawn with the base-14 faces, which every PDF reader ships, so
//! no font files are loaded or embedded. Advance widths come from the Adobe
//! AFM files (units per 1000 em) for the printable ASCII range; Latin-1
//! letters reuse the width of their unaccented base letter.

use battlesheet_types::{FontFamily, FontSpec, FontStyle};

/// A base-14 face selected by a logical family and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
    Courier,
    CourierBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 6] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::TimesRoman,
        StandardFont::TimesBold,
        StandardFont::Courier,
        StandardFont::CourierBold,
    ];

    pub fn resolve(family: FontFamily, style: FontStyle) -> Self {
        match (family, style) {
            (FontFamily::Sans, FontStyle::Regular) => StandardFont::Helvetica,
            (FontFamily::Sans, FontStyle::Bold) => StandardFont::HelveticaBold,
            (FontFamily::Serif, FontStyle::Regular) => StandardFont::TimesRoman,
            (FontFamily::Serif, FontStyle::Bold) => StandardFont::TimesBold,
            (FontFamily::Mono, FontStyle::Regular) => StandardFont::Courier,
            (FontFamily::Mono, FontStyle::Bold) => StandardFont::CourierBold,
        }
    }

    pub fn for_spec(spec: &FontSpec) -> Self {
        Self::resolve(spec.family, spec.style)
    }

    pub fn postscript_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// Advance width of `ch` in thousandths of an em.
    pub fn char_width(self, ch: char) -> u16 {
        let table = match self {
            StandardFont::Helvetica => &HELVETICA,
            StandardFont::HelveticaBold => &HELVETICA_BOLD,
            StandardFont::TimesRoman => &TIMES_ROMAN,
            StandardFont::TimesBold => &TIMES_BOLD,
            StandardFont::Courier | StandardFont::CourierBold => return COURIER_WIDTH,
        };
        let ascii = |c: char| table[c as usize - 0x20];

        match ch {
            ' '..='~' => ascii(ch),
            '\u{a0}' => ascii(' '),
            'œ' => ascii('o') + ascii('e'),
            'Œ' => ascii('O') + ascii('E'),
            _ => {
                if let Some(width) = self.punctuation_width(ch) {
                    width
                } else if let Some(base) = base_letter(ch) {
                    ascii(base)
                } else {
                    ascii('o')
                }
            }
        }
    }

    fn punctuation_width(self, ch: char) -> Option<u16> {
        use StandardFont::*;
        let width = match (ch, self) {
            ('—' | '…', _) => 1000,
            ('•', _) => 350,
            ('°', _) => 400,
            ('–' | '€' | '«' | '»', Helvetica | HelveticaBold) => 556,
            ('–' | '€' | '«' | '»', _) => 500,
            ('‘' | '’' | '‚', Helvetica) => 222,
            ('‘' | '’' | '‚', HelveticaBold) => 278,
            ('‘' | '’' | '‚', _) => 333,
            ('“' | '”' | '„', Helvetica) => 333,
            ('“' | '”' | '„', TimesRoman) => 444,
            ('“' | '”' | '„', _) => 500,
            _ => return None,
        };
        Some(width)
    }
}

/// Width of `text` in points when set in `font`.
pub fn text_width(text: &str, font: &FontSpec) -> f32 {
    let face = StandardFont::for_spec(font);
    let units: u32 = text.chars().map(|c| face.char_width(c) as u32).sum();
    units as f32 * font.size / 1000.0
}

/// WinAnsiEncoding code for `ch`, if the encoding has one.
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => {
            let byte = match ch {
                '€' => 0x80,
                '‚' => 0x82,
                'ƒ' => 0x83,
                '„' => 0x84,
                '…' => 0x85,
                '†' => 0x86,
                '‡' => 0x87,
                'ˆ' => 0x88,
                '‰' => 0x89,
                'Š' => 0x8A,
                '‹' => 0x8B,
                'Œ' => 0x8C,
                'Ž' => 0x8E,
                '‘' => 0x91,
                '’' => 0x92,
                '“' => 0x93,
                '”' => 0x94,
                '•' => 0x95,
                '–' => 0x96,
                '—' => 0x97,
                '˜' => 0x98,
                '™' => 0x99,
                'š' => 0x9A,
                '›' => 0x9B,
                'œ' => 0x9C,
                'ž' => 0x9E,
                'Ÿ' => 0x9F,
                _ => return None,
            };
            Some(byte)
        }
    }
}

/// Encodes `text` for a WinAnsi font; unsupported characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(b'?'))
        .collect()
}

fn base_letter(ch: char) -> Option<char> {
    let base = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'Ç' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        _ => return None,
    };
    Some(base)
}

const COURIER_WIDTH: u16 = 600;

// Printable ASCII, 0x20 (space) through 0x7E (tilde).
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];
