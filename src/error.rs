//! Error types for the bookbind library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the bookbind library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output root directory is missing entirely
    #[error("Output directory does not exist: {} (run the download step first)", .0.display())]
    MissingOutputRoot(PathBuf),

    /// Explicit book ID given but its directory is absent
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// No book ID given and no book subdirectories exist
    #[error("No book subdirectories found in {}", .0.display())]
    NoBooksFound(PathBuf),

    /// Resolved book directory has no HTML files
    #[error("No HTML files found in {}", .0.display())]
    NoHtmlFiles(PathBuf),

    /// Chapter manifest references a file that does not exist
    #[error("Manifest entry not found in book directory: {0}")]
    InvalidManifest(String),

    /// HTML rendering engine failure
    #[error("Render error: {0}")]
    Render(String),

    /// Rendered document has no pages
    #[error("Rendered PDF has no pages: {}", .0.display())]
    EmptyDocument(PathBuf),

    /// General error
    #[error("{0}")]
    General(String),
}
