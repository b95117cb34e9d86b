use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object};
use tempfile::TempDir;

pub enum Info {
    None,
    Inline(Dictionary),
    Indirect(Dictionary),
}

/// Builds an info dictionary of string entries.
#[allow(dead_code)]
pub fn info_dict(entries: &[(&str, &str)]) -> Dictionary {
    let mut dict = Dictionary::new();
    for (key, value) in entries {
        dict.set(*key, Object::string_literal(*value));
    }
    dict
}

/// Saves a one-page PDF with the given info dictionary to `dir/name`.
#[allow(dead_code)]
pub fn create_pdf(dir: &TempDir, name: &str, info: Info) -> lopdf::Result<PathBuf> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut page = Dictionary::new();
    page.set("Type", Object::Name(b"Page".to_vec()));
    page.set("Parent", Object::Reference(pages_id));
    page.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(595),
            Object::Integer(842),
        ]),
    );
    let page_id = doc.add_object(page);

    let mut pages = Dictionary::new();
    pages.set("Type", Object::Name(b"Pages".to_vec()));
    pages.set("Kids", Object::Array(vec![Object::Reference(page_id)]));
    pages.set("Count", Object::Integer(1));
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    match info {
        Info::None => {}
        Info::Inline(dict) => doc.trailer.set("Info", Object::Dictionary(dict)),
        Info::Indirect(dict) => {
            let info_id = doc.add_object(dict);
            doc.trailer.set("Info", Object::Reference(info_id));
        }
    }

    let path = dir.path().join(name);
    doc.save(&path)?;
    Ok(path)
}

/// Raw value of `key` in the saved document's info dictionary.
#[allow(dead_code)]
pub fn raw_info_entry(path: &Path, key: &[u8]) -> lopdf::Result<Object> {
    let doc = Document::load(path)?;
    let (_, info) = doc.dereference(doc.trailer.get(b"Info")?)?;
    Ok(info.as_dict()?.get(key)?.clone())
}
