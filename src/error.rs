use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The file name does not carry a `.pdf` extension.
    #[error("chartag only works with PDF files: {}", .0.display())]
    NotPdf(PathBuf),
    /// The file does not exist.
    #[error("Not a file: {}", .0.display())]
    NotFound(PathBuf),
    /// A strategy name other than `merge` or `overwrite`.
    #[error("invalid strategy: {0}")]
    InvalidStrategy(String),
    /// The trailer's Info entry does not resolve to a dictionary.
    #[error("document info is not a dictionary")]
    InfoType,
    /// Loading or saving the document failed inside lopdf.
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("{0}")]
    IO(#[from] std::io::Error),
}
