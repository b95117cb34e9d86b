//! Tag song-chart PDFs through the `Keywords` entry of their document info.

pub mod cli;
pub mod enharmonic;
pub mod info;
pub mod keywords;
pub mod metadata;
pub mod printer;
pub mod properties;
pub mod strategy;

mod error;
pub use error::{Error, Result};

pub use info::{InfoStore, PdfDocument};
pub use keywords::{Instrument, Tags};
pub use metadata::{apply_properties, read_properties, write_properties};
pub use printer::print_properties;
pub use properties::{KEYWORDS, Properties};
pub use strategy::Strategy;
