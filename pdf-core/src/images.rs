use std::io;

use crate::error::{PdfError, Result};
use crate::objects::PdfObject;
use crate::writer::deflate;

/// Handle to an image loaded into a `PdfDocument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceRGB,
    DeviceGray,
}

impl ColorSpace {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ColorSpace::DeviceRGB => "DeviceRGB",
            ColorSpace::DeviceGray => "DeviceGray",
        }
    }
}

/// Parsed image ready for embedding.
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub color_space: ColorSpace,
    /// 8-bit RGB/Gray samples for PNG, the untouched file for JPEG.
    pub data: Vec<u8>,
    /// Separate 8-bit alpha channel, if the source had one.
    pub smask_data: Option<Vec<u8>>,
}

impl ImageData {
    /// Build the image XObject stream. The `/SMask` entry is added by the
    /// caller once the mask object has an id.
    pub(crate) fn xobject(&self) -> io::Result<PdfObject> {
        let mut dict = vec![
            ("Type", PdfObject::name("XObject")),
            ("Subtype", PdfObject::name("Image")),
            ("Width", PdfObject::Integer(self.width as i64)),
            ("Height", PdfObject::Integer(self.height as i64)),
            ("ColorSpace", PdfObject::name(self.color_space.pdf_name())),
            ("BitsPerComponent", PdfObject::Integer(8)),
        ];
        let data = match self.format {
            ImageFormat::Jpeg => {
                dict.push(("Filter", PdfObject::name("DCTDecode")));
                self.data.clone()
            }
            ImageFormat::Png => {
                dict.push(("Filter", PdfObject::name("FlateDecode")));
                deflate(&self.data)?
            }
        };
        Ok(PdfObject::stream(dict, data))
    }

    /// Soft mask stream for the alpha channel.
    pub(crate) fn smask_xobject(&self) -> io::Result<Option<PdfObject>> {
        let Some(alpha) = &self.smask_data else {
            return Ok(None);
        };
        Ok(Some(PdfObject::stream(
            vec![
                ("Type", PdfObject::name("XObject")),
                ("Subtype", PdfObject::name("Image")),
                ("Width", PdfObject::Integer(self.width as i64)),
                ("Height", PdfObject::Integer(self.height as i64)),
                ("ColorSpace", PdfObject::name("DeviceGray")),
                ("BitsPerComponent", PdfObject::Integer(8)),
                ("Filter", PdfObject::name("FlateDecode")),
            ],
            deflate(alpha)?,
        )))
    }
}

/// Detect the image format from its magic bytes.
pub fn detect_format(data: &[u8]) -> Result<ImageFormat> {
    if data.starts_with(&[0xFF, 0xD8]) {
        Ok(ImageFormat::Jpeg)
    } else if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        Ok(ImageFormat::Png)
    } else {
        Err(PdfError::Image(
            "unsupported image format (expected JPEG or PNG)".to_string(),
        ))
    }
}

/// Parse raw file bytes into embeddable image data.
pub fn load_image(data: Vec<u8>) -> Result<ImageData> {
    match detect_format(&data)? {
        ImageFormat::Jpeg => parse_jpeg(data),
        ImageFormat::Png => parse_png(data),
    }
}

/// JPEG data is embedded as-is (DCTDecode); only the frame header is read.
fn parse_jpeg(data: Vec<u8>) -> Result<ImageData> {
    let (width, height, components) = jpeg_dimensions(&data)?;
    let color_space = match components {
        1 => ColorSpace::DeviceGray,
        3 => ColorSpace::DeviceRGB,
        n => {
            return Err(PdfError::Image(format!(
                "unsupported JPEG component count: {}",
                n
            )))
        }
    };
    Ok(ImageData {
        width,
        height,
        format: ImageFormat::Jpeg,
        color_space,
        data,
        smask_data: None,
    })
}

/// Walk the marker segments up to the first SOF0..SOF3 frame header.
fn jpeg_dimensions(data: &[u8]) -> Result<(u32, u32, u8)> {
    let mut i = 2;
    while i + 3 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }
        let marker = data[i + 1];
        match marker {
            0xC0..=0xC3 => {
                if i + 9 >= data.len() {
                    break;
                }
                let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
                let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
                return Ok((width, height, data[i + 9]));
            }
            0xFF | 0x00 => i += 1,
            0xD0..=0xD9 => i += 2,
            _ => {
                let seg_len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
                i += 2 + seg_len;
            }
        }
    }
    Err(PdfError::Image("no SOF marker found in JPEG data".to_string()))
}

/// Decode a PNG to 8-bit samples, splitting off any alpha channel.
fn parse_png(data: Vec<u8>) -> Result<ImageData> {
    let mut decoder = png::Decoder::new(data.as_slice());
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| PdfError::Image(format!("PNG decode error: {}", e)))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| PdfError::Image(format!("PNG frame error: {}", e)))?;
    buf.truncate(info.buffer_size());

    let (color_space, channels, has_alpha) = match info.color_type {
        png::ColorType::Rgb => (ColorSpace::DeviceRGB, 3, false),
        png::ColorType::Rgba => (ColorSpace::DeviceRGB, 4, true),
        png::ColorType::Grayscale => (ColorSpace::DeviceGray, 1, false),
        png::ColorType::GrayscaleAlpha => (ColorSpace::DeviceGray, 2, true),
        other => {
            return Err(PdfError::Image(format!(
                "unsupported PNG color type: {:?}",
                other
            )))
        }
    };

    let (pixels, smask_data) = if has_alpha {
        let color_channels = channels - 1;
        let pixel_count = (info.width * info.height) as usize;
        let mut color = Vec::with_capacity(pixel_count * color_channels);
        let mut alpha = Vec::with_capacity(pixel_count);
        for px in buf.chunks_exact(channels) {
            color.extend_from_slice(&px[..color_channels]);
            alpha.push(px[color_channels]);
        }
        (color, Some(alpha))
    } else {
        (buf, None)
    };

    Ok(ImageData {
        width: info.width,
        height: info.height,
        format: ImageFormat::Png,
        color_space,
        data: pixels,
        smask_data,
    })
}
