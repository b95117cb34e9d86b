use std::io::{self, Write};
use std::path::Path;

use crate::properties::Properties;

/// Writes a header for `path` followed by one padded line per property.
pub fn print_properties<W: Write>(out: &mut W, path: &Path, props: &Properties) -> io::Result<()> {
    writeln!(out, "Properties for {}", path.display())?;
    for (key, value) in props {
        writeln!(out, "{:<13}: {}", key, value)?;
    }
    Ok(())
}
