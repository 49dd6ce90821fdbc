use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{PdfError, Result};
use crate::fonts::{encode_win_ansi, BuiltinFont, FontMetrics, FontRef, VerticalMetrics};
use crate::graphics::Color;
use crate::images::{load_image, ImageId};
use crate::objects::{ObjId, PdfObject};
use crate::text::{align_offset, wrap_lines, TextOptions};
use crate::truetype::{TrueTypeFont, TrueTypeFontId};
use crate::writer::{deflate, escape_pdf_bytes, PdfWriter};

const CATALOG_OBJ: ObjId = ObjId(1, 0);
const PAGES_OBJ: ObjId = ObjId(2, 0);
const FIRST_FREE_OBJ_NUM: u32 = 3;

/// Right margin assumed when text wraps without an explicit width.
pub const DEFAULT_MARGIN: f64 = 72.0;

/// High-level API for building PDF documents.
///
/// Generic over `Write` so it works with files (`BufWriter<File>`),
/// in-memory buffers (`Vec<u8>`), or any other writer.
///
/// All drawing methods take layout coordinates: origin at the top-left
/// corner of the page, y growing downward. They are converted to PDF's
/// bottom-left space when operators are emitted.
///
/// Pages are written incrementally: `end_page()` flushes the page to the
/// writer and frees its content.
pub struct PdfDocument<W: Write> {
    writer: PdfWriter<W>,
    info: Vec<(String, String)>,
    page_obj_ids: Vec<ObjId>,
    current_page: Option<PageBuilder>,
    next_obj_num: u32,
    compress: bool,
    builtin_fonts: BTreeMap<BuiltinFont, ObjId>,
    truetype_fonts: Vec<(TrueTypeFont, ObjId)>,
    images: Vec<LoadedImage>,
    text_state: TextState,
}

struct PageBuilder {
    width: f64,
    height: f64,
    content_ops: Vec<u8>,
    fonts: BTreeSet<FontRef>,
    images: BTreeSet<ImageId>,
}

struct LoadedImage {
    obj_id: ObjId,
    width: u32,
    height: u32,
}

/// Current font, size and fill color used by `text`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextState {
    pub font: FontRef,
    pub font_size: f64,
    pub fill_color: Color,
}

impl Default for TextState {
    fn default() -> Self {
        TextState {
            font: FontRef::Builtin(BuiltinFont::Helvetica),
            font_size: 12.0,
            fill_color: Color::BLACK,
        }
    }
}

impl PdfDocument<BufWriter<File>> {
    /// Create a new PDF document that writes to a file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> PdfDocument<W> {
    /// Create a new PDF document that writes to the given writer.
    /// The header is written immediately.
    pub fn new(writer: W) -> Result<Self> {
        let mut pdf_writer = PdfWriter::new(writer);
        pdf_writer.write_header()?;
        Ok(PdfDocument {
            writer: pdf_writer,
            info: Vec::new(),
            page_obj_ids: Vec::new(),
            current_page: None,
            next_obj_num: FIRST_FREE_OBJ_NUM,
            compress: false,
            builtin_fonts: BTreeMap::new(),
            truetype_fonts: Vec::new(),
            images: Vec::new(),
            text_state: TextState::default(),
        })
    }

    fn alloc_obj(&mut self) -> ObjId {
        let id = ObjId(self.next_obj_num, 0);
        self.next_obj_num += 1;
        id
    }

    fn page_mut(&mut self, op: &'static str) -> Result<&mut PageBuilder> {
        self.current_page.as_mut().ok_or(PdfError::NoOpenPage(op))
    }

    fn push_ops(&mut self, op: &'static str, ops: &[u8]) -> Result<&mut Self> {
        self.page_mut(op)?.content_ops.extend_from_slice(ops);
        Ok(self)
    }

    /// Set a document info entry (e.g. "Creator", "Title").
    pub fn set_info(&mut self, key: &str, value: &str) -> &mut Self {
        self.info.push((key.to_string(), value.to_string()));
        self
    }

    /// Flate-compress page content streams written after this call.
    pub fn set_compression(&mut self, enabled: bool) -> &mut Self {
        self.compress = enabled;
        self
    }

    /// Begin a new page with the given dimensions in points.
    /// An open page is closed first.
    pub fn begin_page(&mut self, width: f64, height: f64) -> Result<&mut Self> {
        if self.current_page.is_some() {
            self.end_page()?;
        }
        self.current_page = Some(PageBuilder {
            width,
            height,
            content_ops: Vec::new(),
            fonts: BTreeSet::new(),
            images: BTreeSet::new(),
        });
        Ok(self)
    }

    /// Pages written so far plus the open one.
    pub fn page_count(&self) -> usize {
        self.page_obj_ids.len() + usize::from(self.current_page.is_some())
    }

    /// Size of the open page.
    pub fn page_size(&self) -> Option<(f64, f64)> {
        self.current_page.as_ref().map(|p| (p.width, p.height))
    }

    // -------------------------------------------------------
    // Text state
    // -------------------------------------------------------

    pub fn text_state(&self) -> TextState {
        self.text_state
    }

    pub fn font(&mut self, font: impl Into<FontRef>) -> &mut Self {
        self.text_state.font = font.into();
        self
    }

    /// Select a font by standard name ("Helvetica-Bold") or by the path of
    /// a `.ttf` file, which is loaded on first use.
    pub fn font_by_name(&mut self, name: &str) -> Result<&mut Self> {
        let font = match BuiltinFont::from_name(name) {
            Some(builtin) => FontRef::Builtin(builtin),
            None if name.to_ascii_lowercase().ends_with(".ttf") => self.load_font_file(name)?,
            None => return Err(PdfError::Font(format!("unknown font: {}", name))),
        };
        Ok(self.font(font))
    }

    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.text_state.font_size = size;
        self
    }

    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        self.text_state.fill_color = color;
        self
    }

    /// Load and embed a TrueType font file.
    pub fn load_font_file<P: AsRef<Path>>(&mut self, path: P) -> Result<FontRef> {
        let data = fs::read(path.as_ref())
            .map_err(|e| PdfError::Font(format!("{}: {}", path.as_ref().display(), e)))?;
        self.load_font_bytes(data)
    }

    /// Embed a TrueType font from raw bytes.
    pub fn load_font_bytes(&mut self, data: Vec<u8>) -> Result<FontRef> {
        let font = TrueTypeFont::from_bytes(data)?;
        let font_id = self.alloc_obj();
        let descriptor_id = self.alloc_obj();
        let file_id = self.alloc_obj();
        let [font_obj, descriptor, file] = font.pdf_objects(descriptor_id, file_id)?;
        self.writer.write_object(file_id, &file)?;
        self.writer.write_object(descriptor_id, &descriptor)?;
        self.writer.write_object(font_id, &font_obj)?;
        debug!(font = %font.postscript_name, "embedded TrueType font");
        self.truetype_fonts.push((font, font_id));
        Ok(FontRef::TrueType(TrueTypeFontId(self.truetype_fonts.len() - 1)))
    }

    fn truetype(&self, id: TrueTypeFontId) -> Result<&TrueTypeFont> {
        self.truetype_fonts
            .get(id.0)
            .map(|(font, _)| font)
            .ok_or_else(|| PdfError::Font(format!("no TrueType font with id {}", id.0)))
    }

    /// Width of `text` in the current font and size.
    pub fn measure_text(&self, text: &str) -> Result<f64> {
        let TextState { font, font_size, .. } = self.text_state;
        Ok(match font {
            FontRef::Builtin(b) => FontMetrics::measure_text(text, b, font_size),
            FontRef::TrueType(id) => self.truetype(id)?.measure_text(text, font_size),
        })
    }

    fn vertical_metrics(&self) -> Result<VerticalMetrics> {
        Ok(match self.text_state.font {
            FontRef::Builtin(b) => FontMetrics::vertical(b),
            FontRef::TrueType(id) => self.truetype(id)?.vertical(),
        })
    }

    /// Baseline-to-baseline distance for the current font and size.
    pub fn line_height(&self) -> Result<f64> {
        Ok(self.vertical_metrics()?.line_height(self.text_state.font_size))
    }

    fn font_resource(&mut self, font: FontRef) -> Result<(String, ObjId)> {
        match font {
            FontRef::Builtin(b) => {
                if let Some(id) = self.builtin_fonts.get(&b) {
                    return Ok((b.pdf_name().to_string(), *id));
                }
                let id = self.alloc_obj();
                let dict = PdfObject::dict(vec![
                    ("Type", PdfObject::name("Font")),
                    ("Subtype", PdfObject::name("Type1")),
                    ("BaseFont", PdfObject::name(b.pdf_base_name())),
                    ("Encoding", PdfObject::name("WinAnsiEncoding")),
                ]);
                self.writer.write_object(id, &dict)?;
                self.builtin_fonts.insert(b, id);
                Ok((b.pdf_name().to_string(), id))
            }
            FontRef::TrueType(tt) => {
                let (_, id) = self
                    .truetype_fonts
                    .get(tt.0)
                    .ok_or_else(|| PdfError::Font(format!("no TrueType font with id {}", tt.0)))?;
                Ok((format!("TT{}", tt.0 + 1), *id))
            }
        }
    }

    // -------------------------------------------------------
    // Text
    // -------------------------------------------------------

    /// Draw text with its first line's top-left corner at (x, y) in the
    /// current font, size and fill color. Lines wrap to the option width
    /// (or the right margin) and are aligned inside it.
    pub fn text(&mut self, text: &str, x: f64, y: f64, options: &TextOptions) -> Result<&mut Self> {
        let (page_width, page_height) = self
            .page_size()
            .ok_or(PdfError::NoOpenPage("text"))?;
        if text.is_empty() {
            return Ok(self);
        }

        let state = self.text_state;
        let metrics = self.vertical_metrics()?;
        let box_width = match (options.width, options.line_break) {
            (Some(w), _) => Some(w),
            (None, true) => Some(page_width - x - DEFAULT_MARGIN),
            (None, false) => None,
        };
        let wrap_width = if options.line_break { box_width } else { None };

        let mut widths = Vec::new();
        let lines = wrap_lines(text, wrap_width, |s| self.measure_text(s).unwrap_or(0.0));
        for line in &lines {
            widths.push(self.measure_text(line)?);
        }

        let (resource, _) = self.font_resource(state.font)?;
        let line_height = metrics.line_height(state.font_size);
        let Color { r, g, b } = state.fill_color;

        let mut ops = Vec::new();
        for (i, (line, line_width)) in lines.iter().zip(&widths).enumerate() {
            let top = y + i as f64 * line_height;
            let line_x = x + align_offset(options.align, box_width, *line_width);
            let baseline = page_height - (top + metrics.baseline_offset(state.font_size));

            ops.extend_from_slice(
                format!(
                    "BT\n/{} {} Tf\n{} {} {} rg\n{} {} Td\n(",
                    resource,
                    format_coord(state.font_size),
                    format_coord(r),
                    format_coord(g),
                    format_coord(b),
                    format_coord(line_x),
                    format_coord(baseline),
                )
                .as_bytes(),
            );
            ops.extend_from_slice(&escape_pdf_bytes(&encode_win_ansi(line)));
            ops.extend_from_slice(b") Tj\nET\n");

            if options.underline && *line_width > 0.0 {
                let stroke = if state.font_size < 10.0 {
                    0.5
                } else {
                    (state.font_size / 10.0).floor()
                };
                let line_y = page_height - (top + metrics.content_height(state.font_size) - stroke);
                ops.extend_from_slice(
                    format!(
                        "q\n{} {} {} RG\n{} w\n{} {} m\n{} {} l\nS\nQ\n",
                        format_coord(r),
                        format_coord(g),
                        format_coord(b),
                        format_coord(stroke),
                        format_coord(line_x),
                        format_coord(line_y),
                        format_coord(line_x + line_width),
                        format_coord(line_y),
                    )
                    .as_bytes(),
                );
            }
        }

        let page = self.page_mut("text")?;
        page.fonts.insert(state.font);
        page.content_ops.extend_from_slice(&ops);
        Ok(self)
    }

    // -------------------------------------------------------
    // Graphics
    // -------------------------------------------------------

    fn to_pdf_y(&self, op: &'static str, y: f64) -> Result<f64> {
        let (_, height) = self.page_size().ok_or(PdfError::NoOpenPage(op))?;
        Ok(height - y)
    }

    pub fn set_stroke_color(&mut self, color: Color) -> Result<&mut Self> {
        let ops = format!(
            "{} {} {} RG\n",
            format_coord(color.r),
            format_coord(color.g),
            format_coord(color.b)
        );
        self.push_ops("set_stroke_color", ops.as_bytes())
    }

    pub fn set_line_width(&mut self, width: f64) -> Result<&mut Self> {
        let ops = format!("{} w\n", format_coord(width));
        self.push_ops("set_line_width", ops.as_bytes())
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        let y = self.to_pdf_y("move_to", y)?;
        let ops = format!("{} {} m\n", format_coord(x), format_coord(y));
        self.push_ops("move_to", ops.as_bytes())
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        let y = self.to_pdf_y("line_to", y)?;
        let ops = format!("{} {} l\n", format_coord(x), format_coord(y));
        self.push_ops("line_to", ops.as_bytes())
    }

    /// Rectangle path with its top-left corner at (x, y).
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<&mut Self> {
        let bottom = self.to_pdf_y("rect", y + height)?;
        let ops = format!(
            "{} {} {} {} re\n",
            format_coord(x),
            format_coord(bottom),
            format_coord(width),
            format_coord(height)
        );
        self.push_ops("rect", ops.as_bytes())
    }

    pub fn stroke(&mut self) -> Result<&mut Self> {
        self.push_ops("stroke", b"S\n")
    }

    pub fn fill(&mut self) -> Result<&mut Self> {
        self.push_ops("fill", b"f\n")
    }

    pub fn save_state(&mut self) -> Result<&mut Self> {
        self.push_ops("save_state", b"q\n")
    }

    pub fn restore_state(&mut self) -> Result<&mut Self> {
        self.push_ops("restore_state", b"Q\n")
    }

    // -------------------------------------------------------
    // Images
    // -------------------------------------------------------

    /// Load an image file (PNG or JPEG) and embed it in the document.
    pub fn load_image_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImageId> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| PdfError::ImageFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_image_bytes(data)
    }

    /// Embed an image from raw file bytes. The XObject is written
    /// immediately and can be placed on any later page.
    pub fn load_image_bytes(&mut self, data: Vec<u8>) -> Result<ImageId> {
        let image = load_image(data)?;
        let mut xobject = image.xobject()?;
        if let Some(smask) = image.smask_xobject()? {
            let smask_id = self.alloc_obj();
            self.writer.write_object(smask_id, &smask)?;
            if let PdfObject::Stream { dict, .. } = &mut xobject {
                dict.push(("SMask".to_string(), smask_id.into()));
            }
        }
        let obj_id = self.alloc_obj();
        self.writer.write_object(obj_id, &xobject)?;
        self.images.push(LoadedImage {
            obj_id,
            width: image.width,
            height: image.height,
        });
        Ok(ImageId(self.images.len() - 1))
    }

    /// Pixel dimensions of a loaded image.
    pub fn image_size(&self, image: ImageId) -> Option<(u32, u32)> {
        self.images.get(image.0).map(|img| (img.width, img.height))
    }

    /// Draw an image with its top-left corner at (x, y), scaled to `width`
    /// points with the aspect ratio kept. Returns the drawn height.
    pub fn place_image(&mut self, image: ImageId, x: f64, y: f64, width: f64) -> Result<f64> {
        let (px_w, px_h) = self
            .image_size(image)
            .ok_or_else(|| PdfError::Image(format!("no image with id {}", image.0)))?;
        let height = width * px_h as f64 / px_w as f64;
        let bottom = self.to_pdf_y("place_image", y + height)?;
        let ops = format!(
            "q\n{} 0 0 {} {} {} cm\n/Im{} Do\nQ\n",
            format_coord(width),
            format_coord(height),
            format_coord(x),
            format_coord(bottom),
            image.0 + 1,
        );
        let page = self.page_mut("place_image")?;
        page.images.insert(image);
        page.content_ops.extend_from_slice(ops.as_bytes());
        Ok(height)
    }

    // -------------------------------------------------------
    // Output
    // -------------------------------------------------------

    /// End the current page and write its objects.
    pub fn end_page(&mut self) -> Result<()> {
        let page = self
            .current_page
            .take()
            .ok_or(PdfError::NoOpenPage("end_page"))?;

        let content_id = self.alloc_obj();
        let page_id = self.alloc_obj();

        let content = if self.compress {
            PdfObject::stream(
                vec![("Filter", PdfObject::name("FlateDecode"))],
                deflate(&page.content_ops)?,
            )
        } else {
            PdfObject::stream(vec![], page.content_ops)
        };
        self.writer.write_object(content_id, &content)?;

        let mut font_entries = Vec::new();
        for font in &page.fonts {
            let (name, id) = self.font_resource(*font)?;
            font_entries.push((name, PdfObject::Reference(id)));
        }
        let mut image_entries = Vec::new();
        for image in &page.images {
            if let Some(loaded) = self.images.get(image.0) {
                image_entries.push((format!("Im{}", image.0 + 1), PdfObject::Reference(loaded.obj_id)));
            }
        }
        let mut resources = Vec::new();
        if !font_entries.is_empty() {
            resources.push(("Font".to_string(), PdfObject::Dictionary(font_entries)));
        }
        if !image_entries.is_empty() {
            resources.push(("XObject".to_string(), PdfObject::Dictionary(image_entries)));
        }

        let page_dict = PdfObject::dict(vec![
            ("Type", PdfObject::name("Page")),
            ("Parent", PAGES_OBJ.into()),
            ("MediaBox", PdfObject::rect([0.0, 0.0, page.width, page.height])),
            ("Contents", content_id.into()),
            ("Resources", PdfObject::Dictionary(resources)),
        ]);
        self.writer.write_object(page_id, &page_dict)?;
        self.page_obj_ids.push(page_id);
        Ok(())
    }

    /// Finish the document: closes any open page, then writes the info
    /// dictionary, page tree, catalog and trailer. Returns the writer.
    pub fn end_document(mut self) -> Result<W> {
        if self.current_page.is_some() {
            self.end_page()?;
        }

        let info_id = if self.info.is_empty() {
            None
        } else {
            let id = self.alloc_obj();
            let entries = self
                .info
                .iter()
                .map(|(k, v)| (k.as_str(), PdfObject::literal_string(v)))
                .collect();
            self.writer.write_object(id, &PdfObject::dict(entries))?;
            Some(id)
        };

        let kids = self.page_obj_ids.iter().map(|id| (*id).into()).collect();
        let pages = PdfObject::dict(vec![
            ("Type", PdfObject::name("Pages")),
            ("Kids", PdfObject::Array(kids)),
            ("Count", PdfObject::Integer(self.page_obj_ids.len() as i64)),
        ]);
        self.writer.write_object(PAGES_OBJ, &pages)?;

        let catalog = PdfObject::dict(vec![
            ("Type", PdfObject::name("Catalog")),
            ("Pages", PAGES_OBJ.into()),
        ]);
        self.writer.write_object(CATALOG_OBJ, &catalog)?;
        self.writer.write_xref_and_trailer(CATALOG_OBJ, info_id)?;

        let mut inner = self.writer.into_inner();
        inner.flush()?;
        Ok(inner)
    }
}

/// Format a coordinate value for PDF content streams.
pub(crate) fn format_coord(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        s.to_string()
    }
}
