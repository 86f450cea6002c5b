//! Bookbind Library
//!
//! Merges a downloaded book's per-chapter HTML files into one paginated PDF.
//! This library provides functionality to:
//! - Discover a book directory under an output root
//! - Enumerate chapters in lexical filename order (or via a manifest)
//! - Resolve page geometry into a shared stylesheet
//! - Render each chapter through an HTML layout engine
//! - Concatenate the rendered page sequences into a single PDF
//!
//! # Example
//!
//! ```no_run
//! use bookbind::assemble::{assemble, AssembleOptions};
//!
//! let options = AssembleOptions {
//!     book_id: Some("rust-book".to_string()),
//!     ..AssembleOptions::default()
//! };
//!
//! let summary = assemble(&options).expect("Failed to assemble book");
//! println!("Wrote {} pages to {}", summary.page_count, summary.pdf_path.display());
//! ```

pub mod assemble;
pub mod book;
pub mod error;
pub mod page_size;
pub mod pdf;
pub mod render;

// Re-export commonly used items
pub use assemble::{assemble, assemble_with, AssembleOptions, AssembleSummary};
pub use error::{Error, Result};
pub use page_size::PageSize;
