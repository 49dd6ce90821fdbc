use crate::truetype::TrueTypeFontId;

/// Unified font reference: either one of the standard PDF fonts or an
/// embedded TrueType font loaded into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontRef {
    Builtin(BuiltinFont),
    TrueType(TrueTypeFontId),
}

impl From<BuiltinFont> for FontRef {
    fn from(font: BuiltinFont) -> Self {
        FontRef::Builtin(font)
    }
}

/// Standard PDF fonts with bundled metrics. These are available in every
/// viewer without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl BuiltinFont {
    /// Resource name used in content streams (e.g. "F1").
    pub fn pdf_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
            BuiltinFont::HelveticaOblique => "F3",
            BuiltinFont::HelveticaBoldOblique => "F4",
            BuiltinFont::Courier => "F5",
            BuiltinFont::CourierBold => "F6",
            BuiltinFont::CourierOblique => "F7",
            BuiltinFont::CourierBoldOblique => "F8",
        }
    }

    /// The PDF `/BaseFont` name.
    pub fn pdf_base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
            BuiltinFont::CourierOblique => "Courier-Oblique",
            BuiltinFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    /// Look up a font by its base name. Returns None for names without
    /// bundled metrics.
    pub fn from_name(name: &str) -> Option<BuiltinFont> {
        match name {
            "Helvetica" => Some(BuiltinFont::Helvetica),
            "Helvetica-Bold" => Some(BuiltinFont::HelveticaBold),
            "Helvetica-Oblique" => Some(BuiltinFont::HelveticaOblique),
            "Helvetica-BoldOblique" => Some(BuiltinFont::HelveticaBoldOblique),
            "Courier" => Some(BuiltinFont::Courier),
            "Courier-Bold" => Some(BuiltinFont::CourierBold),
            "Courier-Oblique" => Some(BuiltinFont::CourierOblique),
            "Courier-BoldOblique" => Some(BuiltinFont::CourierBoldOblique),
            _ => None,
        }
    }

    fn is_courier(&self) -> bool {
        matches!(
            self,
            BuiltinFont::Courier
                | BuiltinFont::CourierBold
                | BuiltinFont::CourierOblique
                | BuiltinFont::CourierBoldOblique
        )
    }

    fn is_bold(&self) -> bool {
        matches!(
            self,
            BuiltinFont::HelveticaBold
                | BuiltinFont::HelveticaBoldOblique
                | BuiltinFont::CourierBold
                | BuiltinFont::CourierBoldOblique
        )
    }
}

/// Helvetica widths for codes 32..=126, 1/1000 em (Adobe AFM).
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica widths for WinAnsi codes 0xA0..=0xFF.
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Helvetica-Bold widths for codes 32..=126.
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Helvetica-Bold widths for WinAnsi codes 0xA0..=0xFF.
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// WinAnsi codes 0x80..=0x9F: (code, unicode, Helvetica width).
/// Shared by both Helvetica weights.
const WIN_ANSI_EXTRA: [(u8, char, u16); 27] = [
    (0x80, '\u{20AC}', 556),
    (0x82, '\u{201A}', 222),
    (0x83, '\u{0192}', 556),
    (0x84, '\u{201E}', 333),
    (0x85, '\u{2026}', 1000),
    (0x86, '\u{2020}', 556),
    (0x87, '\u{2021}', 556),
    (0x88, '\u{02C6}', 333),
    (0x89, '\u{2030}', 1000),
    (0x8A, '\u{0160}', 667),
    (0x8B, '\u{2039}', 333),
    (0x8C, '\u{0152}', 1000),
    (0x8E, '\u{017D}', 611),
    (0x91, '\u{2018}', 222),
    (0x92, '\u{2019}', 222),
    (0x93, '\u{201C}', 333),
    (0x94, '\u{201D}', 333),
    (0x95, '\u{2022}', 350),
    (0x96, '\u{2013}', 556),
    (0x97, '\u{2014}', 1000),
    (0x98, '\u{02DC}', 333),
    (0x99, '\u{2122}', 1000),
    (0x9A, '\u{0161}', 500),
    (0x9B, '\u{203A}', 333),
    (0x9C, '\u{0153}', 944),
    (0x9E, '\u{017E}', 500),
    (0x9F, '\u{0178}', 667),
];

const COURIER_WIDTH: u16 = 600;

/// Map a character to its WinAnsiEncoding byte. Narrow no-break spaces
/// collapse onto the no-break space; anything else outside the encoding
/// becomes `?`.
pub fn win_ansi_code(ch: char) -> u8 {
    let cp = ch as u32;
    match cp {
        0x20..=0x7E | 0xA0..=0xFF => cp as u8,
        0x202F | 0x2007 => 0xA0,
        _ => WIN_ANSI_EXTRA
            .iter()
            .find(|(_, c, _)| *c == ch)
            .map(|(code, _, _)| *code)
            .unwrap_or(b'?'),
    }
}

/// Unicode character for a WinAnsi byte, if the byte is assigned.
pub fn win_ansi_char(code: u8) -> Option<char> {
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as char),
        _ => WIN_ANSI_EXTRA
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|(_, ch, _)| *ch),
    }
}

/// Encode text as WinAnsi bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_code).collect()
}

/// Vertical metrics of a font in 1/1000 em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    pub ascender: f64,
    pub descender: f64,
    /// Gap between lines on top of ascender - descender.
    pub line_gap: f64,
}

impl VerticalMetrics {
    /// Distance between consecutive baselines, in points.
    pub fn line_height(&self, font_size: f64) -> f64 {
        (self.ascender - self.descender + self.line_gap) * font_size / 1000.0
    }

    /// Distance from the top of a line box to its baseline, in points.
    pub fn baseline_offset(&self, font_size: f64) -> f64 {
        self.ascender * font_size / 1000.0
    }

    /// Height of the glyph box without the line gap, in points.
    pub fn content_height(&self, font_size: f64) -> f64 {
        (self.ascender - self.descender) * font_size / 1000.0
    }
}

/// Font metrics for built-in PDF fonts.
pub struct FontMetrics;

impl FontMetrics {
    /// Width of a character in 1/1000 em units.
    pub fn char_width(font: BuiltinFont, ch: char) -> u16 {
        if font.is_courier() {
            return COURIER_WIDTH;
        }
        let (ascii, latin1) = if font.is_bold() {
            (&HELVETICA_BOLD_ASCII, &HELVETICA_BOLD_LATIN1)
        } else {
            (&HELVETICA_ASCII, &HELVETICA_LATIN1)
        };
        match win_ansi_code(ch) {
            code @ 0x20..=0x7E => ascii[(code - 0x20) as usize],
            code @ 0xA0..=0xFF => latin1[(code - 0xA0) as usize],
            code => WIN_ANSI_EXTRA
                .iter()
                .find(|(c, _, _)| *c == code)
                .map(|(_, _, w)| *w)
                .unwrap_or(ascii[(b'?' - 0x20) as usize]),
        }
    }

    /// Width of a text string in points.
    pub fn measure_text(text: &str, font: BuiltinFont, font_size: f64) -> f64 {
        let total: u32 = text
            .chars()
            .map(|ch| Self::char_width(font, ch) as u32)
            .sum();
        total as f64 * font_size / 1000.0
    }

    /// Ascender, descender and line gap from the AFM header
    /// (line gap = bbox height - (ascender - descender)).
    pub fn vertical(font: BuiltinFont) -> VerticalMetrics {
        match font {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => VerticalMetrics {
                ascender: 718.0,
                descender: -207.0,
                line_gap: 231.0,
            },
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => VerticalMetrics {
                ascender: 718.0,
                descender: -207.0,
                line_gap: 265.0,
            },
            _ => VerticalMetrics {
                ascender: 629.0,
                descender: -157.0,
                line_gap: 269.0,
            },
        }
    }
}
