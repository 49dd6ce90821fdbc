use std::fs;
use std::path::Path;

use jiff::Timestamp;
use pdf_core::{Color, ImageId, PdfDocument};
use tracing::info;

use crate::error::FormError;
use crate::form_options::FormOptions;
use crate::layout::{ImageSlot, PageTemplate, STANDARD_PAGE};

/// Metadata written to the PDF `/Info` dictionary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub producer: String,
    pub creator: String,
    pub creation_date: Option<Timestamp>,
    pub keywords: String,
}

impl DocumentInfo {
    fn apply<W: std::io::Write>(&self, doc: &mut PdfDocument<W>) {
        let entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Producer", &self.producer),
            ("Creator", &self.creator),
            ("Keywords", &self.keywords),
        ];
        for (key, value) in entries {
            if !value.is_empty() {
                doc.set_info(key, value);
            }
        }
        if let Some(created) = self.creation_date {
            doc.set_info("CreationDate", &pdf_date(created));
        }
    }
}

/// PDF date string in UTC, e.g. `D:20240301083000Z`.
pub fn pdf_date(timestamp: Timestamp) -> String {
    timestamp.strftime("D:%Y%m%d%H%M%SZ").to_string()
}

/// One-page document with the page template's images already placed.
///
/// Saving consumes the form, so a finished document cannot be drawn on
/// or written twice.
pub struct BaseForm {
    doc: PdfDocument<Vec<u8>>,
    page: PageTemplate,
}

impl BaseForm {
    pub fn new(options: &FormOptions, info: &DocumentInfo) -> Result<Self, FormError> {
        Self::with_template(options, info, STANDARD_PAGE)
    }

    pub fn with_template(
        options: &FormOptions,
        info: &DocumentInfo,
        page: PageTemplate,
    ) -> Result<Self, FormError> {
        let mut doc = PdfDocument::new(Vec::new())?;
        info.apply(&mut doc);

        let header = load_asset(&mut doc, &options.header_image_path)?;
        let address = load_asset(&mut doc, &options.address_line_image_path)?;
        let footer = load_asset(&mut doc, &options.footer_image_path)?;

        doc.begin_page(page.width, page.height)?;
        place(&mut doc, header, page.header)?;
        place(&mut doc, address, page.address_window)?;
        place(&mut doc, footer, page.footer)?;

        info!(path = %options.header_image_path.display(), "header image");
        info!(path = %options.footer_image_path.display(), "footer image");
        info!(path = %options.address_line_image_path.display(), "address line image");

        Ok(BaseForm { doc, page })
    }

    /// Header, footer and address-line image paths, in that order.
    pub fn image_paths(options: &FormOptions) -> [&Path; 3] {
        [
            options.header_image_path.as_path(),
            options.footer_image_path.as_path(),
            options.address_line_image_path.as_path(),
        ]
    }

    pub fn page_count(&self) -> usize {
        self.doc.page_count()
    }

    pub fn page_size(&self) -> Option<(f64, f64)> {
        self.doc.page_size()
    }

    /// Flate-compress the page content when the document is finished.
    pub fn set_compression(&mut self, enabled: bool) -> &mut Self {
        self.doc.set_compression(enabled);
        self
    }

    /// Select font, size and fill color for the following text calls.
    ///
    /// `font` is a standard font name such as "Helvetica-Bold" or the
    /// path of a `.ttf` file. `color` is `#RRGGBB`, `#RGB` or a basic
    /// CSS color name.
    pub fn set_font(
        &mut self,
        font: &str,
        size: f64,
        color: &str,
    ) -> Result<&mut PdfDocument<Vec<u8>>, FormError> {
        let color = Color::parse(color).ok_or_else(|| FormError::Color(color.to_string()))?;
        self.set_font_color(font, size, color)
    }

    /// [`set_font`](Self::set_font) with an already parsed color.
    pub fn set_font_color(
        &mut self,
        font: &str,
        size: f64,
        color: Color,
    ) -> Result<&mut PdfDocument<Vec<u8>>, FormError> {
        self.doc.font_by_name(font)?.font_size(size).fill_color(color);
        Ok(&mut self.doc)
    }

    /// Horizontal rule across the text column in the form color.
    pub fn print_line(&mut self, y: f64) -> Result<(), FormError> {
        let PageTemplate {
            start_x,
            end_x,
            form_color,
            ..
        } = self.page;
        self.doc
            .set_stroke_color(form_color)?
            .move_to(start_x, y)?
            .line_to(end_x, y)?
            .stroke()?;
        Ok(())
    }

    /// Direct access to the document for drawing.
    pub fn document(&mut self) -> &mut PdfDocument<Vec<u8>> {
        &mut self.doc
    }

    /// Finish the document and return the PDF bytes.
    pub fn into_bytes(self) -> Result<Vec<u8>, FormError> {
        Ok(self.doc.end_document()?)
    }

    /// Finish the document, write it to `path` and report the outcome to
    /// `callback` exactly once.
    pub fn save_as<P, F>(self, path: P, callback: F)
    where
        P: AsRef<Path>,
        F: FnOnce(Result<(), FormError>),
    {
        let path = path.as_ref();
        let result = self
            .into_bytes()
            .and_then(|bytes| fs::write(path, bytes).map_err(FormError::from));
        if result.is_ok() {
            info!(path = %path.display(), "form saved");
        }
        callback(result);
    }

    /// Finish the document and write it to `path`. Resolves after the file
    /// is written and closed; write errors are returned.
    pub async fn save_as_async<P: AsRef<Path>>(self, path: P) -> Result<(), FormError> {
        let path = path.as_ref();
        let bytes = self.into_bytes()?;
        tokio::fs::write(path, bytes).await?;
        info!(path = %path.display(), "form saved");
        Ok(())
    }
}

fn load_asset(doc: &mut PdfDocument<Vec<u8>>, path: &Path) -> Result<ImageId, FormError> {
    doc.load_image_file(path).map_err(|source| FormError::Asset {
        path: path.to_path_buf(),
        source,
    })
}

fn place(doc: &mut PdfDocument<Vec<u8>>, image: ImageId, slot: ImageSlot) -> Result<(), FormError> {
    doc.place_image(image, slot.x, slot.y, slot.width)?;
    Ok(())
}
