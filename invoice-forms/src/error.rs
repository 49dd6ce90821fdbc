use std::path::PathBuf;

use pdf_core::PdfError;
use thiserror::Error;

/// Errors raised while building or saving a form.
#[derive(Debug, Error)]
pub enum FormError {
    /// An image named in the form options could not be embedded.
    #[error("cannot load form asset {}: {source}", path.display())]
    Asset { path: PathBuf, source: PdfError },

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("unsupported color: {0}")]
    Color(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("time zone {name} is not supported: {source}")]
    UnknownTimeZone { name: String, source: jiff::Error },
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("cannot add {days} days to {date}: {source}")]
    DateArithmetic {
        date: jiff::civil::Date,
        days: i64,
        source: jiff::Error,
    },
}
