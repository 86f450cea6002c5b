//! Synthetic PDF fixtures for merge and metadata tests

use lopdf::{Dictionary, Document, Object, Stream};

/// Build an in-memory PDF with one page per marker. Each page's content
/// stream carries its marker as a PDF comment so tests can verify page
/// order after merging.
pub fn document_with_pages(markers: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for marker in markers {
        let content = Stream::new(Dictionary::new(), format!("% {}", marker).into_bytes());
        let content_id = doc.add_object(content);

        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(pages_id));
        page.set("Contents", Object::Reference(content_id));
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
        kids.push(Object::Reference(page_id));
    }

    let mut pages = Dictionary::new();
    pages.set("Type", Object::Name(b"Pages".to_vec()));
    pages.set("Count", Object::Integer(kids.len() as i64));
    pages.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);

    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

/// Read back the marker comment from each page's content stream, in page
/// order.
pub fn page_markers(doc: &Document) -> Vec<String> {
    let mut markers = Vec::new();

    for (_, page_id) in doc.get_pages() {
        let page = doc.get_dictionary(page_id).expect("Page missing");
        let contents_id = match page.get(b"Contents").expect("Page has no Contents") {
            Object::Reference(id) => *id,
            other => panic!("Contents is not a reference: {:?}", other),
        };
        let stream = match doc.get_object(contents_id).expect("Content stream missing") {
            Object::Stream(stream) => stream,
            other => panic!("Contents is not a stream: {:?}", other),
        };
        let text = String::from_utf8_lossy(&stream.content);
        markers.push(text.trim_start_matches("% ").trim().to_string());
    }

    markers
}
