//! Turns paragraphs into a complete DOCX package

use crate::config::DocxConfig;
use crate::document::{assemble_document, Paragraph};
use crate::error::Result;
use crate::opc::{rel_types, well_known, Package, PackageBuilder, Part, MAIN_DOCUMENT, STYLES};
use std::path::Path;

/// Builds DOCX packages with a fixed configuration
#[derive(Clone, Debug, Default)]
pub struct DocxWriter {
    config: DocxConfig,
}

impl DocxWriter {
    /// Create a writer
    pub fn new(config: DocxConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &DocxConfig {
        &self.config
    }

    /// Build the five-part package for `paragraphs`.
    ///
    /// Fails before producing any bytes if a paragraph references an unknown
    /// style or holds text XML cannot carry.
    pub fn package(&self, paragraphs: &[Paragraph]) -> Result<Package> {
        let document_xml = assemble_document(paragraphs, &self.config)?;
        let styles_xml = self.config.styles().to_xml()?;

        let mut builder =
            PackageBuilder::new().with_compression_level(self.config.compression_level());

        let mut document = Part::new(well_known::document(), MAIN_DOCUMENT, document_xml.into_bytes());
        document.add_relationship(rel_types::STYLES, "styles.xml");
        builder.add_part(document)?;
        builder.add_part(Part::new(well_known::styles(), STYLES, styles_xml.into_bytes()))?;
        builder.add_relationship(rel_types::OFFICE_DOCUMENT, well_known::document().entry_name());

        builder.build()
    }

    /// Build the package and return the archive bytes
    pub fn to_bytes(&self, paragraphs: &[Paragraph]) -> Result<Vec<u8>> {
        self.package(paragraphs)?.to_bytes()
    }

    /// Build the package and write it to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P, paragraphs: &[Paragraph]) -> Result<()> {
        self.package(paragraphs)?.save(path)
    }
}
