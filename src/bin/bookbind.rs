//! Bookbind CLI tool
//!
//! Merges a downloaded book's HTML chapters into a single PDF.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use bookbind::assemble::{assemble_with, AssembleOptions};
use bookbind::page_size::parse_page_size;
use bookbind::pdf::count_pages;
use bookbind::render::WeasyPrint;

/// Bookbind - merge a book's HTML chapters into one PDF
#[derive(Parser)]
#[command(name = "bookbind")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Assemble the first book found under ./output
    bookbind assemble

    # Assemble a specific book onto A4 pages with 1cm margins
    bookbind assemble --book rust-book --page-size A4 --margin 1cm

    # Explicit page dimensions in millimeters
    bookbind assemble --book rust-book --page-size 148x210

    # Use an explicit chapter order instead of the filename sort
    bookbind assemble --book rust-book --manifest chapters.txt

    # Show the page count of an assembled PDF
    bookbind info output/rust-book.pdf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a book's HTML chapters into a single PDF
    Assemble {
        /// Base output directory holding per-book subdirectories
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,

        /// Book ID to process (default: first book found)
        #[arg(long)]
        book: Option<String>,

        /// Page size: a preset (A4, A5, Letter, Legal, Tabloid), explicit
        /// millimeters as WIDTHxHEIGHT (e.g. 148x210), or a raw CSS size.
        /// Default: the intrinsic content size (595px 841px)
        #[arg(long)]
        page_size: Option<String>,

        /// Page margin (any CSS margin expression)
        #[arg(long, default_value = "0")]
        margin: String,

        /// Explicit chapter manifest, one filename per line, overriding the
        /// lexical filename order
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// HTML rendering engine executable
        #[arg(long, default_value = "weasyprint")]
        engine: PathBuf,
    },

    /// Show the page count of a PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assemble {
            output_dir,
            book,
            page_size,
            margin,
            manifest,
            engine,
        } => cmd_assemble(output_dir, book, page_size, margin, manifest, engine),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Assemble a book into a single PDF
fn cmd_assemble(
    output_dir: PathBuf,
    book: Option<String>,
    page_size: Option<String>,
    margin: String,
    manifest: Option<PathBuf>,
    engine: PathBuf,
) -> anyhow::Result<()> {
    let options = AssembleOptions {
        output_dir,
        book_id: book,
        page_size: page_size.as_deref().map(parse_page_size),
        margin,
        manifest,
    };

    let renderer = WeasyPrint::new(engine);

    let summary = assemble_with(&options, &renderer, |path| {
        eprintln!(
            "Rendering: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
    })?;

    eprintln!(
        "Assembled {} ({} chapters, {} pages)",
        summary.book_id, summary.chapter_count, summary.page_count
    );
    eprintln!("Output: {}", summary.pdf_path.display());

    Ok(())
}

/// Show the page count of a PDF
fn cmd_info(input: PathBuf) -> anyhow::Result<()> {
    let page_count = count_pages(&input)?;

    println!("File: {}", input.display());
    println!("Pages: {}", page_count);

    Ok(())
}
