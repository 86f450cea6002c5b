//! The assembly pipeline: discover → enumerate → style → render → merge → write
//!
//! Linear, single-threaded, one pass. The run either produces
//! `output_dir/<book_id>.pdf` or returns an error naming the first failed
//! stage; there are no retries and no partial output.

use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::book::{find_html_files, read_manifest, resolve_book};
use crate::error::{Error, Result};
use crate::page_size::{page_stylesheet, PageSize};
use crate::pdf::merge::{concat_rendered, write_pdf};
use crate::render::{HtmlRenderer, RenderedDocument, WeasyPrint};

/// Configuration for one assembly run.
///
/// All defaults live here rather than in module-level state.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Base output directory holding per-book subdirectories
    pub output_dir: PathBuf,
    /// Book to process; None auto-discovers the first book under the root
    pub book_id: Option<String>,
    /// Requested page size; None uses the intrinsic content size
    pub page_size: Option<PageSize>,
    /// Page margin, any CSS margin expression
    pub margin: String,
    /// Optional explicit chapter manifest; overrides the lexical filename
    /// sort that otherwise defines reading order
    pub manifest: Option<PathBuf>,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            book_id: None,
            page_size: None,
            margin: "0".to_string(),
            manifest: None,
        }
    }
}

/// Result of a successful assembly run
#[derive(Debug, Clone)]
pub struct AssembleSummary {
    /// Book identifier that was processed
    pub book_id: String,
    /// Directory the chapters were read from
    pub book_dir: PathBuf,
    /// Path of the written PDF
    pub pdf_path: PathBuf,
    /// Number of chapter HTML files rendered
    pub chapter_count: usize,
    /// Total pages in the written PDF
    pub page_count: usize,
}

/// Assemble a book with the default WeasyPrint engine.
pub fn assemble(options: &AssembleOptions) -> Result<AssembleSummary> {
    assemble_with(options, &WeasyPrint::default(), |_| {})
}

/// Assemble a book with an explicit rendering engine and progress callback.
///
/// The callback fires once per chapter, before it is rendered.
pub fn assemble_with(
    options: &AssembleOptions,
    renderer: &dyn HtmlRenderer,
    mut progress: impl FnMut(&Path),
) -> Result<AssembleSummary> {
    let book = resolve_book(&options.output_dir, options.book_id.as_deref())?;

    let files = match &options.manifest {
        Some(manifest) => read_manifest(manifest, &book.dir)?,
        None => find_html_files(&book.dir)?,
    };

    // One stylesheet per run, shared by every chapter
    let stylesheet = page_stylesheet(options.page_size.as_ref(), &options.margin);

    let mut rendered: Vec<RenderedDocument> = Vec::with_capacity(files.len());
    for file in &files {
        progress(file);
        rendered.push(renderer.render(file, &book.dir, &stylesheet)?);
    }

    // Unreachable past the NoHtmlFiles check above; kept as a guard so an
    // empty render set can never produce an empty PDF
    if rendered.is_empty() {
        return Err(Error::NoHtmlFiles(book.dir.clone()));
    }

    let chapter_count = rendered.len();
    let mut merged: Document = concat_rendered(rendered)?;
    let page_count = merged.get_pages().len();

    let pdf_path = options.output_dir.join(format!("{}.pdf", book.id));
    write_pdf(&mut merged, &pdf_path)?;

    Ok(AssembleSummary {
        book_id: book.id,
        book_dir: book.dir,
        pdf_path,
        chapter_count,
        page_count,
    })
}
