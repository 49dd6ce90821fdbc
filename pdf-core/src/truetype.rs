use std::io;

use crate::error::{PdfError, Result};
use crate::fonts::{win_ansi_char, win_ansi_code, VerticalMetrics};
use crate::objects::{ObjId, PdfObject};
use crate::writer::deflate;

/// Index into the document's TrueType font list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrueTypeFontId(pub usize);

const FIRST_CHAR: u8 = 32;

/// A TrueType font embedded as a simple font with WinAnsiEncoding, so text
/// is written with the same single-byte encoding as the standard fonts.
pub struct TrueTypeFont {
    pub(crate) postscript_name: String,
    font_data: Vec<u8>,
    units_per_em: u16,
    ascent: i16,
    descent: i16,
    line_gap: i16,
    bbox: [i16; 4],
    cap_height: i16,
    italic_angle: f64,
    flags: u32,
    stem_v: i16,
    /// Advance widths for codes 32..=255 in 1/1000 em.
    widths: Vec<u16>,
}

impl TrueTypeFont {
    /// Parse a font from raw `.ttf` bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let face = ttf_parser::Face::parse(&data, 0)
            .map_err(|e| PdfError::Font(format!("failed to parse TTF: {}", e)))?;

        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(PdfError::Font("font reports zero units per em".to_string()));
        }
        let scale = |v: u16| ((v as u32 * 1000) / units_per_em as u32) as u16;
        let missing_width = face
            .glyph_hor_advance(ttf_parser::GlyphId(0))
            .map(scale)
            .unwrap_or(0);
        let widths = (FIRST_CHAR..=255u8)
            .map(|code| {
                win_ansi_char(code)
                    .and_then(|ch| face.glyph_index(ch))
                    .and_then(|gid| face.glyph_hor_advance(gid))
                    .map(scale)
                    .unwrap_or(missing_width)
            })
            .collect();

        let bbox = face.global_bounding_box();
        let postscript_name = face
            .names()
            .into_iter()
            .find(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME && n.is_unicode())
            .and_then(|n| n.to_string())
            .unwrap_or_else(|| "EmbeddedFont".to_string())
            .replace(' ', "");

        let mut flags = 32; // nonsymbolic
        if face.is_monospaced() {
            flags |= 1;
        }
        if face.is_italic() {
            flags |= 64;
        }
        let weight = face.weight().to_number() as f64 / 1000.0;

        let ascent = face.ascender();
        let descent = face.descender();
        let line_gap = face.line_gap();
        let cap_height = face.capital_height().unwrap_or(ascent);
        let italic_angle = face.italic_angle() as f64;

        Ok(TrueTypeFont {
            postscript_name,
            units_per_em,
            ascent,
            descent,
            line_gap,
            bbox: [bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max],
            cap_height,
            italic_angle,
            flags,
            stem_v: (10.0 + 220.0 * weight * weight) as i16,
            widths,
            font_data: data,
        })
    }

    fn to_pdf_units(&self, v: i16) -> f64 {
        v as f64 * 1000.0 / self.units_per_em as f64
    }

    /// Width of a character in 1/1000 em, after WinAnsi mapping.
    pub fn char_width(&self, ch: char) -> u16 {
        let code = win_ansi_code(ch);
        self.widths
            .get(code.saturating_sub(FIRST_CHAR) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Width of a text string in points.
    pub fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        let total: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        total as f64 * font_size / 1000.0
    }

    pub fn vertical(&self) -> VerticalMetrics {
        VerticalMetrics {
            ascender: self.to_pdf_units(self.ascent),
            descender: self.to_pdf_units(self.descent),
            line_gap: self.to_pdf_units(self.line_gap),
        }
    }

    /// Font dictionary, font descriptor and FontFile2 stream, in that order.
    pub(crate) fn pdf_objects(
        &self,
        descriptor_id: ObjId,
        file_id: ObjId,
    ) -> io::Result<[PdfObject; 3]> {
        let widths = self
            .widths
            .iter()
            .map(|w| PdfObject::Integer(*w as i64))
            .collect();
        let font = PdfObject::dict(vec![
            ("Type", PdfObject::name("Font")),
            ("Subtype", PdfObject::name("TrueType")),
            ("BaseFont", PdfObject::name(&self.postscript_name)),
            ("FirstChar", PdfObject::Integer(FIRST_CHAR as i64)),
            ("LastChar", PdfObject::Integer(255)),
            ("Widths", PdfObject::Array(widths)),
            ("FontDescriptor", descriptor_id.into()),
            ("Encoding", PdfObject::name("WinAnsiEncoding")),
        ]);
        let [x0, y0, x1, y1] = self.bbox;
        let descriptor = PdfObject::dict(vec![
            ("Type", PdfObject::name("FontDescriptor")),
            ("FontName", PdfObject::name(&self.postscript_name)),
            ("Flags", PdfObject::Integer(self.flags as i64)),
            (
                "FontBBox",
                PdfObject::rect([
                    self.to_pdf_units(x0).round(),
                    self.to_pdf_units(y0).round(),
                    self.to_pdf_units(x1).round(),
                    self.to_pdf_units(y1).round(),
                ]),
            ),
            ("ItalicAngle", PdfObject::Real(self.italic_angle)),
            ("Ascent", PdfObject::Real(self.to_pdf_units(self.ascent).round())),
            ("Descent", PdfObject::Real(self.to_pdf_units(self.descent).round())),
            ("CapHeight", PdfObject::Real(self.to_pdf_units(self.cap_height).round())),
            ("StemV", PdfObject::Integer(self.stem_v as i64)),
            ("FontFile2", file_id.into()),
        ]);
        let file = PdfObject::stream(
            vec![
                ("Length1", PdfObject::Integer(self.font_data.len() as i64)),
                ("Filter", PdfObject::name("FlateDecode")),
            ],
            deflate(&self.font_data)?,
        );
        Ok([font, descriptor, file])
    }
}
