//! Ordered page-sequence concatenation using lopdf
//!
//! Takes the page sequences of already-rendered chapter documents and
//! concatenates them, in input order, into a fresh output document. Page
//! order in the result exactly matches the order of the input documents.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};
use crate::render::RenderedDocument;

/// Concatenate the page sequences of rendered chapters into one document.
///
/// Object-renumbering scheme follows the lopdf merge example:
/// https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs
///
/// The output is a fresh document; none of the inputs is reused as the
/// output carrier. Inputs are consumed, their objects moved into the result.
pub fn concat_rendered(documents: Vec<RenderedDocument>) -> Result<Document> {
    if documents.is_empty() {
        return Err(Error::General("No rendered documents provided".to_string()));
    }

    // Renumber each document's objects into one shared ID space, collecting
    // page IDs in chapter order.
    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for rendered in documents {
        let mut doc = rendered.doc;
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        // get_pages() keys by page number, so iteration preserves the
        // chapter's internal page order
        let pages = doc.get_pages();
        page_ids.extend(pages.into_iter().map(|(_, id)| id));

        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    merged.objects.extend(objects);

    // new_object_id() hands out max_id + 1; without this the catalog and
    // pages IDs would collide with objects we just moved in
    merged.max_id = max_id - 1;

    let pages_id = merged.new_object_id();

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_ids.len() as i64));
    pages_object.set("Kids", Object::Array(kids));

    let catalog_id = merged.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    merged.objects.insert(catalog_id, Object::Dictionary(catalog));
    merged.objects.insert(pages_id, Object::Dictionary(pages_object));

    merged.trailer.set("Root", Object::Reference(catalog_id));

    // Every page now hangs off the new Pages node
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(ref mut dict)) = merged.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    Ok(merged)
}

/// Compress and write a merged document to disk.
pub fn write_pdf(doc: &mut Document, output_path: &Path) -> Result<()> {
    doc.compress();
    doc.save(output_path)?;
    Ok(())
}
