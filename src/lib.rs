//! # docx-forge
//!
//! A small DOCX writer that builds the OPC package by hand.
//!
//! ## Features
//!
//! - Paragraphs with optional bold emphasis and a named style
//! - A fixed style catalog (Normal, Heading1, Heading2)
//! - Validated packages: every relationship target and content type is
//!   checked before any bytes are written
//! - Byte-identical output for identical input
//! - Atomic saves: a failed write never leaves a partial file behind
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docx_forge::{write_docx, Paragraph};
//!
//! let paragraphs = vec![
//!     Paragraph::heading("Project design", 1),
//!     Paragraph::new("Hello World!"),
//!     Paragraph::new("Important").bold(),
//! ];
//! write_docx("out/design.docx", &paragraphs)?;
//! # Ok::<(), docx_forge::Error>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod opc;
pub mod writer;
pub mod xml;

pub use config::DocxConfig;
pub use document::{style_ids, Document, PageGeometry, Paragraph, Style, StyleCatalog};
pub use error::{Error, Result};
pub use opc::{Package, PackageBuilder, Part, PartUri};
pub use writer::DocxWriter;

use std::path::Path;

/// Write `paragraphs` to a `.docx` file at `path` using the default
/// configuration. Missing parent directories are created.
pub fn write_docx<P: AsRef<Path>>(path: P, paragraphs: &[Paragraph]) -> Result<()> {
    DocxWriter::default().save(path, paragraphs)
}

/// Build the `.docx` archive for `paragraphs` in memory
pub fn build_docx(paragraphs: &[Paragraph]) -> Result<Vec<u8>> {
    DocxWriter::default().to_bytes(paragraphs)
}
