//! HTML rendering engine seam
//!
//! The layout engine is an external collaborator: it takes one HTML file
//! plus the run's stylesheet and produces a sequence of fixed-size pages.
//! We drive WeasyPrint as a subprocess and parse its PDF output with lopdf,
//! so each chapter becomes an owned page sequence we can merge.

use std::path::{Path, PathBuf};
use std::process::Command;

use lopdf::Document;

use crate::error::{Error, Result};

/// One HTML file laid out into an owned, ordered sequence of pages.
///
/// The page sequence lives in its own parsed document. The final PDF is
/// assembled into a fresh output document, never by repurposing one of
/// these as the output carrier.
#[derive(Debug)]
pub struct RenderedDocument {
    /// The chapter HTML file this was rendered from
    pub source: PathBuf,
    /// Parsed PDF holding this chapter's page sequence
    pub doc: Document,
    /// Number of pages the engine produced for this chapter
    pub page_count: usize,
}

/// An engine that lays out one HTML file into a page sequence.
///
/// `base_dir` is the directory used to resolve relative resource references
/// (images, linked styles) inside the HTML. `stylesheet` is the shared page
/// geometry directive applied uniformly to every chapter in a run.
pub trait HtmlRenderer {
    fn render(&self, html: &Path, base_dir: &Path, stylesheet: &str) -> Result<RenderedDocument>;
}

/// WeasyPrint subprocess engine
#[derive(Debug, Clone)]
pub struct WeasyPrint {
    /// Executable to invoke (default: "weasyprint" on PATH)
    pub executable: PathBuf,
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("weasyprint"),
        }
    }
}

impl WeasyPrint {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl HtmlRenderer for WeasyPrint {
    fn render(&self, html: &Path, base_dir: &Path, stylesheet: &str) -> Result<RenderedDocument> {
        // The engine takes the stylesheet as a file, not inline
        let workdir = tempfile::tempdir()?;
        let css_path = workdir.path().join("page.css");
        std::fs::write(&css_path, stylesheet)?;
        let pdf_path = workdir.path().join("chapter.pdf");

        let output = Command::new(&self.executable)
            .arg(html)
            .arg(&pdf_path)
            .arg("--stylesheet")
            .arg(&css_path)
            .arg("--base-url")
            .arg(base_dir)
            .output()
            .map_err(|e| {
                Error::Render(format!(
                    "Failed to invoke {}: {}",
                    self.executable.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(Error::Render(format!(
                "{} failed on {}: {}",
                self.executable.display(),
                html.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let bytes = std::fs::read(&pdf_path)?;
        let doc = Document::load_mem(&bytes)?;

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(Error::EmptyDocument(html.to_path_buf()));
        }

        Ok(RenderedDocument {
            source: html.to_path_buf(),
            doc,
            page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_executable() {
        let engine = WeasyPrint::default();
        assert_eq!(engine.executable, PathBuf::from("weasyprint"));
    }

    #[test]
    fn test_missing_executable_is_render_error() {
        let engine = WeasyPrint::new("definitely-not-a-real-renderer");
        let result = engine.render(
            Path::new("chapter.html"),
            Path::new("."),
            "@page { size: A4; }",
        );
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
