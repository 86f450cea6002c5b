//! Page counting for written PDFs

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::{Error, Result};

/// Count pages by reading the Count field from the Pages dictionary.
/// More reliable than get_pages() for documents with nested page trees.
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog_ref = doc
        .trailer
        .get(b"Root")
        .map_err(|_| Error::General("No Root in trailer".to_string()))?;

    let catalog_id = match catalog_ref {
        Object::Reference(id) => *id,
        _ => return Err(Error::General("Root is not a reference".to_string())),
    };

    let catalog = doc.get_dictionary(catalog_id)?;

    let pages_ref = catalog
        .get(b"Pages")
        .map_err(|_| Error::General("No Pages in catalog".to_string()))?;

    let pages_id = match pages_ref {
        Object::Reference(id) => *id,
        _ => return Err(Error::General("Pages is not a reference".to_string())),
    };

    let pages_dict = doc.get_dictionary(pages_id)?;

    let count = pages_dict
        .get(b"Count")
        .map_err(|_| Error::General("No Count in Pages".to_string()))?;

    match count {
        Object::Integer(n) => Ok(*n as usize),
        _ => Err(Error::General("Count is not an integer".to_string())),
    }
}

/// Count the number of pages in a PDF file.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let doc = Document::load(path)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyDocument(path.to_path_buf()));
    }

    Ok(page_count)
}
