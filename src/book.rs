//! Book directory discovery and chapter enumeration
//!
//! A book is a directory of per-chapter HTML files named by the upstream
//! download step. Correctness of the final page order depends entirely on
//! lexical filename order matching intended chapter order; callers that
//! cannot guarantee that should supply an explicit manifest instead.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::error::{Error, Result};

/// A resolved book: its identifier and the directory holding its chapters
#[derive(Debug, Clone)]
pub struct Book {
    /// Book identifier (the directory name under the output root)
    pub id: String,
    /// Directory containing the chapter HTML files
    pub dir: PathBuf,
}

/// Resolve the book directory under the output root.
///
/// With an explicit `book_id` the directory must be `output_dir/book_id`.
/// Without one, the first subdirectory in sorted order is taken so repeated
/// runs pick the same book regardless of filesystem iteration order.
pub fn resolve_book(output_dir: &Path, book_id: Option<&str>) -> Result<Book> {
    if !output_dir.exists() {
        return Err(Error::MissingOutputRoot(output_dir.to_path_buf()));
    }

    match book_id {
        Some(id) => {
            let dir = output_dir.join(id);
            if !dir.is_dir() {
                return Err(Error::DirectoryNotFound(dir));
            }
            Ok(Book {
                id: id.to_string(),
                dir,
            })
        }
        None => {
            let mut subdirs: Vec<PathBuf> = fs::read_dir(output_dir)?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .collect();
            subdirs.sort();

            let dir = subdirs
                .into_iter()
                .next()
                .ok_or_else(|| Error::NoBooksFound(output_dir.to_path_buf()))?;

            let id = dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| Error::NoBooksFound(output_dir.to_path_buf()))?;

            Ok(Book { id, dir })
        }
    }
}

/// List the book's HTML files sorted lexicographically by filename.
///
/// Returns `NoHtmlFiles` if the directory contains none.
pub fn find_html_files(book_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = book_dir.join("*.html");
    let pattern = pattern.to_string_lossy();

    let mut files: Vec<PathBuf> = glob(&pattern)
        .map_err(|e| Error::General(format!("Invalid glob pattern {}: {}", pattern, e)))?
        .filter_map(|entry| entry.ok())
        .collect();

    if files.is_empty() {
        return Err(Error::NoHtmlFiles(book_dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

/// Read an explicit chapter manifest: one filename per line, blank lines and
/// `#` comments ignored. Entries are resolved relative to the book directory
/// and must exist.
pub fn read_manifest(manifest: &Path, book_dir: &Path) -> Result<Vec<PathBuf>> {
    let contents = fs::read_to_string(manifest)?;

    let mut files = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let path = book_dir.join(line);
        if !path.is_file() {
            return Err(Error::InvalidManifest(line.to_string()));
        }
        files.push(path);
    }

    if files.is_empty() {
        return Err(Error::NoHtmlFiles(book_dir.to_path_buf()));
    }

    Ok(files)
}
