//! Access to a document's info dictionary.
//!
//! [`InfoStore`] is the only surface the keyword logic needs from a PDF
//! library; [`PdfDocument`] implements it on top of lopdf.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use lopdf::{Dictionary, Document, Object, ObjectId, decode_text_string, text_string};

use crate::properties::{KEYWORDS, Properties};
use crate::{Error, Result};

pub trait InfoStore {
    /// Every entry of the info dictionary, empty when the document has none.
    fn info(&self) -> Result<Properties>;

    /// Sets the `Keywords` entry, creating the info dictionary if needed.
    fn set_keywords(&mut self, value: &str) -> Result<()>;
}

/// A PDF file loaded into memory.
#[derive(Debug)]
pub struct PdfDocument {
    path: PathBuf,
    doc: Document,
}

enum InfoLocation {
    Inline,
    Indirect(ObjectId),
    Missing,
    Invalid,
}

impl PdfDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<PdfDocument> {
        let path = path.as_ref().to_path_buf();
        let doc = Document::load(&path)?;
        debug!("loaded {} (PDF {})", path.display(), doc.version);
        Ok(PdfDocument { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the document back to the file it was loaded from.
    pub fn save(&mut self) -> Result<()> {
        self.doc.save(&self.path)?;
        Ok(())
    }

    fn info_dict(&self) -> Result<Option<&Dictionary>> {
        let info = match self.doc.trailer.get(b"Info") {
            Ok(info) => info,
            Err(_) => return Ok(None),
        };
        let info = match self.doc.dereference(info) {
            Ok((_, info)) => info,
            Err(err) => {
                warn!("ignoring unresolvable Info entry in {}: {}", self.path.display(), err);
                return Ok(None);
            }
        };
        match info {
            Object::Dictionary(dict) => Ok(Some(dict)),
            Object::Null => Ok(None),
            _ => Err(Error::InfoType),
        }
    }

    fn info_dict_mut(&mut self) -> Result<&mut Dictionary> {
        let location = match self.doc.trailer.get(b"Info") {
            Ok(Object::Dictionary(_)) => InfoLocation::Inline,
            Ok(Object::Reference(id)) => match self.doc.get_object(*id) {
                Ok(Object::Dictionary(_)) => InfoLocation::Indirect(*id),
                Ok(Object::Null) | Err(_) => InfoLocation::Missing,
                Ok(_) => InfoLocation::Invalid,
            },
            Ok(Object::Null) | Err(_) => InfoLocation::Missing,
            Ok(_) => InfoLocation::Invalid,
        };
        match location {
            InfoLocation::Inline => Ok(self.doc.trailer.get_mut(b"Info")?.as_dict_mut()?),
            InfoLocation::Indirect(id) => Ok(self.doc.get_object_mut(id)?.as_dict_mut()?),
            InfoLocation::Invalid => Err(Error::InfoType),
            InfoLocation::Missing => {
                let id = self.doc.add_object(Dictionary::new());
                debug!("created info dictionary {} {} R", id.0, id.1);
                self.doc.trailer.set("Info", Object::Reference(id));
                Ok(self.doc.get_object_mut(id)?.as_dict_mut()?)
            }
        }
    }

    fn value_text(&self, value: &Object) -> String {
        let value = self.doc.dereference(value).map(|(_, object)| object).unwrap_or(value);
        match value {
            Object::String(bytes, _) => decode_text_string(value).unwrap_or_else(|err| {
                warn!("undecodable text string in {}: {}", self.path.display(), err);
                String::from_utf8_lossy(bytes).into_owned()
            }),
            Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
            Object::Integer(value) => value.to_string(),
            Object::Real(value) => value.to_string(),
            Object::Boolean(value) => value.to_string(),
            Object::Null => "null".to_string(),
            other => format!("{:?}", other),
        }
    }
}

impl InfoStore for PdfDocument {
    fn info(&self) -> Result<Properties> {
        let mut props = Properties::new();
        if let Some(dict) = self.info_dict()? {
            for (key, value) in dict.iter() {
                props.set(String::from_utf8_lossy(key), self.value_text(value));
            }
        }
        Ok(props)
    }

    fn set_keywords(&mut self, value: &str) -> Result<()> {
        self.info_dict_mut()?.set(KEYWORDS, text_string(value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory(info: Option<Object>) -> PdfDocument {
        let mut doc = Document::with_version("1.5");
        if let Some(info) = info {
            doc.trailer.set("Info", info);
        }
        PdfDocument {
            path: PathBuf::from("memory.pdf"),
            doc,
        }
    }

    #[test]
    fn info_pointing_at_null_reads_and_writes() {
        let mut pdf = in_memory(None);
        let null_id = pdf.doc.add_object(Object::Null);
        pdf.doc.trailer.set("Info", Object::Reference(null_id));

        assert!(pdf.info().unwrap().is_empty());
        pdf.set_keywords("#chords").unwrap();
        assert_eq!(pdf.info().unwrap().keywords(), Some("#chords"));
    }

    #[test]
    fn inline_null_info_is_replaced() {
        let mut pdf = in_memory(Some(Object::Null));
        assert!(pdf.info().unwrap().is_empty());
        pdf.set_keywords("#tab").unwrap();
        assert_eq!(pdf.info().unwrap().keywords(), Some("#tab"));
    }

    #[test]
    fn dangling_info_reference_is_replaced() {
        let mut pdf = in_memory(Some(Object::Reference((99, 0))));
        assert!(pdf.info().unwrap().is_empty());
        pdf.set_keywords("#jon").unwrap();
        assert_eq!(pdf.info().unwrap().keywords(), Some("#jon"));
    }

    #[test]
    fn non_dictionary_info_fails_both_ways() {
        let mut pdf = in_memory(Some(Object::Integer(7)));
        assert!(matches!(pdf.info(), Err(Error::InfoType)));
        assert!(matches!(pdf.set_keywords("#tab"), Err(Error::InfoType)));
    }

    #[test]
    fn non_ascii_keywords_use_utf16() {
        let mut pdf = in_memory(None);
        pdf.set_keywords("#key=Ré").unwrap();
        assert_eq!(pdf.info().unwrap().keywords(), Some("#key=Ré"));
    }
}
