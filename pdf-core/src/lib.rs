//! Minimal PDF writer: pages, standard and TrueType fonts, PNG/JPEG
//! images, strokes and positioned text with wrapping and alignment.

pub mod document;
pub mod error;
pub mod fonts;
pub mod graphics;
pub mod images;
pub mod objects;
pub mod text;
pub mod truetype;
pub mod writer;

pub use document::{PdfDocument, TextState, DEFAULT_MARGIN};
pub use error::PdfError;
pub use fonts::{BuiltinFont, FontMetrics, FontRef};
pub use graphics::Color;
pub use images::ImageId;
pub use text::{TextAlign, TextOptions};
pub use truetype::TrueTypeFontId;
