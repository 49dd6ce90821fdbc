use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or writing a PDF document.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("image error: {0}")]
    Image(String),

    #[error("cannot read image {path}: {source}")]
    ImageFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("font error: {0}")]
    Font(String),

    #[error("{0} called with no open page")]
    NoOpenPage(&'static str),
}

pub type Result<T> = std::result::Result<T, PdfError>;
