use std::path::Path;

use log::{debug, info};

use crate::info::{InfoStore, PdfDocument};
use crate::properties::Properties;
use crate::strategy::Strategy;
use crate::Result;

/// Reads the info dictionary of the PDF at `path`.
pub fn read_properties<P: AsRef<Path>>(path: P) -> Result<Properties> {
    let path = path.as_ref();
    println!("reading properties for {}", path.display());
    let doc = PdfDocument::load(path)?;
    doc.info()
}

/// Writes `props` into the PDF at `path` and returns the properties read back
/// from the file afterwards.
///
/// The file is only saved when `props` carries keywords.
pub fn write_properties<P: AsRef<Path>>(path: P, props: &Properties, strategy: Strategy) -> Result<Properties> {
    let path = path.as_ref();
    println!("Writing properties to {}: {:?}", path.display(), props);
    let mut doc = PdfDocument::load(path)?;
    if apply_properties(&mut doc, props, strategy)? {
        println!("Saving {}", path.display());
        doc.save()?;
    } else {
        debug!("nothing to write, {} left untouched", path.display());
    }
    let written = read_properties(path)?;
    println!();
    Ok(written)
}

/// Applies the keywords in `props` to `store`. Returns whether the store
/// was modified.
pub fn apply_properties<S: InfoStore>(store: &mut S, props: &Properties, strategy: Strategy) -> Result<bool> {
    let Some(keywords) = props.keywords() else {
        return Ok(false);
    };
    let current = store.info()?;
    let value = strategy.apply(current.keywords(), keywords);
    info!("{} keywords: {:?}", strategy, value);
    store.set_keywords(&value)?;
    Ok(true)
}
