//! Document model - paragraphs, styles and the main document part

mod paragraph;
mod section;
mod styles;

pub use paragraph::Paragraph;
pub use section::PageGeometry;
pub use styles::{style_ids, Style, StyleCatalog};

use crate::config::DocxConfig;
use crate::error::{Error, Result};
use crate::opc::Package;
use crate::writer::DocxWriter;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::path::Path;

/// Check that every paragraph can be serialized.
///
/// Style references must resolve in `styles` and text must be
/// representable in XML. The first offending paragraph is reported by index.
pub fn validate_paragraphs(paragraphs: &[Paragraph], styles: &StyleCatalog) -> Result<()> {
    for (index, para) in paragraphs.iter().enumerate() {
        if let Some(style) = para.style() {
            if !styles.contains(style) {
                return Err(Error::UnknownStyle {
                    style: style.to_string(),
                    paragraph: index,
                });
            }
        }
        if let Err(ch) = xml::check_text(para.text()) {
            return Err(Error::Encoding {
                paragraph: index,
                codepoint: ch as u32,
            });
        }
    }
    Ok(())
}

/// Assemble `word/document.xml` from paragraphs.
///
/// The body holds each paragraph in order, one trailing empty paragraph, and
/// the section properties. Validation runs before anything is written, and
/// equal inputs always produce identical output.
pub fn assemble_document(paragraphs: &[Paragraph], config: &DocxConfig) -> Result<String> {
    validate_paragraphs(paragraphs, config.styles())?;

    let mut writer = Writer::new(Vec::with_capacity(512 + paragraphs.len() * 96));
    xml::write_declaration(&mut writer)?;

    let mut doc_start = BytesStart::new("w:document");
    for (attr, value) in xml::wordprocessing_namespaces() {
        doc_start.push_attribute((attr, value));
    }
    writer.write_event(Event::Start(doc_start))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;

    for para in paragraphs {
        para.write_to(&mut writer)?;
    }
    // Keeps the last visible paragraph away from the section break
    Paragraph::blank().write_to(&mut writer)?;
    config.page().write_to(&mut writer)?;

    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;

    let xml = xml::into_string(writer.into_inner())?;
    log::debug!(
        "assembled document part: {} paragraphs, {} bytes",
        paragraphs.len(),
        xml.len()
    );
    Ok(xml)
}

/// A document under construction
///
/// ```rust,no_run
/// use docx_forge::Document;
///
/// let mut doc = Document::new();
/// doc.add_heading("Project design", 1)
///     .add_paragraph("Hello World!")
///     .add_blank();
/// doc.save("out/design.docx")?;
/// # Ok::<(), docx_forge::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Document {
    writer: DocxWriter,
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty document with an explicit configuration
    pub fn with_config(config: DocxConfig) -> Self {
        Self {
            writer: DocxWriter::new(config),
            paragraphs: Vec::new(),
        }
    }

    /// Append a finished paragraph
    pub fn push(&mut self, para: Paragraph) -> &mut Self {
        self.paragraphs.push(para);
        self
    }

    /// Add a plain paragraph with text
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Paragraph::new(text))
    }

    /// Add a bold heading at the given level (1 or 2 in the standard catalog)
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> &mut Self {
        self.push(Paragraph::heading(text, level))
    }

    /// Add an empty spacer paragraph
    pub fn add_blank(&mut self) -> &mut Self {
        self.push(Paragraph::blank())
    }

    /// Get all paragraphs
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Get paragraph count
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Build the validated package
    pub fn package(&self) -> Result<Package> {
        self.writer.package(&self.paragraphs)
    }

    /// Save the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.writer.to_bytes(&self.paragraphs)
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.writer.save(path, &self.paragraphs)
    }
}
