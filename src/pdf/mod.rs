//! PDF output module

pub mod merge;
pub mod metadata;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items
pub use merge::{concat_rendered, write_pdf};
pub use metadata::count_pages;
