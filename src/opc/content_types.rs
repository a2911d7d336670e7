//! Content Types handling for OPC packages
//!
//! Generates `[Content_Types].xml`

use crate::error::Result;
use crate::opc::PartUri;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Content types definition for an OPC package
///
/// Entries keep insertion order so the generated manifest is stable.
#[derive(Clone, Debug, Default)]
pub struct ContentTypes {
    /// Default extension mappings (extension, content type)
    defaults: Vec<(String, String)>,
    /// Override mappings (part URI, content type)
    overrides: Vec<(PartUri, String)>,
}

impl ContentTypes {
    /// Create a new ContentTypes with the `rels` and `xml` defaults
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.add_default("rels", RELATIONSHIPS);
        ct.add_default("xml", XML);
        ct
    }

    /// Serialize to XML string
    pub fn to_xml(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        xml::into_string(buf)
    }

    /// Write to a writer
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml = Writer::new(writer);
        xml::write_declaration(&mut xml)?;

        let mut types = BytesStart::new("Types");
        types.push_attribute(("xmlns", xml::CT));
        xml.write_event(Event::Start(types))?;

        for (ext, content_type) in &self.defaults {
            let mut default = BytesStart::new("Default");
            default.push_attribute(("Extension", ext.as_str()));
            default.push_attribute(("ContentType", content_type.as_str()));
            xml.write_event(Event::Empty(default))?;
        }

        for (uri, content_type) in &self.overrides {
            let mut override_elem = BytesStart::new("Override");
            override_elem.push_attribute(("PartName", uri.as_str()));
            override_elem.push_attribute(("ContentType", content_type.as_str()));
            xml.write_event(Event::Empty(override_elem))?;
        }

        xml.write_event(Event::End(BytesEnd::new("Types")))?;
        Ok(())
    }

    /// Add a default extension mapping, replacing any existing one
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        let extension = extension.to_lowercase();
        match self.defaults.iter_mut().find(|(ext, _)| *ext == extension) {
            Some(entry) => entry.1 = content_type.to_string(),
            None => self.defaults.push((extension, content_type.to_string())),
        }
    }

    /// Add an override for a specific part, replacing any existing one
    pub fn add_override(&mut self, uri: &PartUri, content_type: &str) {
        match self.overrides.iter_mut().find(|(u, _)| u == uri) {
            Some(entry) => entry.1 = content_type.to_string(),
            None => self.overrides.push((uri.clone(), content_type.to_string())),
        }
    }

    /// Get the content type for a part
    pub fn get(&self, uri: &PartUri) -> Option<&str> {
        if let Some((_, ct)) = self.overrides.iter().find(|(u, _)| u == uri) {
            return Some(ct);
        }

        let ext = uri.extension()?.to_lowercase();
        self.defaults
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, ct)| ct.as_str())
    }

    /// Whether a content type is declared for the part, by override or extension
    pub fn covers(&self, uri: &PartUri) -> bool {
        self.get(uri).is_some()
    }
}

// Well-known content types
pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
pub const XML: &str = "application/xml";
pub const MAIN_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
pub const STYLES: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::well_known;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_manifest_xml() {
        let mut ct = ContentTypes::new();
        ct.add_override(&well_known::document(), MAIN_DOCUMENT);
        ct.add_override(&well_known::styles(), STYLES);

        let expected = concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
            r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
            r#"</Types>"#,
        );
        assert_eq!(ct.to_xml().unwrap(), expected);
    }

    #[test]
    fn test_override_wins_over_default() {
        let mut ct = ContentTypes::new();
        ct.add_override(&well_known::styles(), STYLES);

        assert_eq!(ct.get(&well_known::styles()), Some(STYLES));
        assert_eq!(ct.get(&well_known::document()), Some(XML));
        assert_eq!(ct.get(&well_known::package_rels()), Some(RELATIONSHIPS));
    }

    #[test]
    fn test_get_by_extension_is_case_insensitive() {
        let ct = ContentTypes::new();
        let uri = PartUri::new("/word/Custom.XML").unwrap();
        assert!(ct.covers(&uri));

        let png = PartUri::new("/word/media/image1.png").unwrap();
        assert!(!ct.covers(&png));
    }

    #[test]
    fn test_replacing_entries_keeps_one() {
        let mut ct = ContentTypes::new();
        ct.add_override(&well_known::document(), XML);
        ct.add_override(&well_known::document(), MAIN_DOCUMENT);
        ct.add_default("XML", XML);

        assert_eq!(ct.overrides.len(), 1);
        assert_eq!(ct.defaults.len(), 2);
        assert_eq!(ct.get(&well_known::document()), Some(MAIN_DOCUMENT));
    }
}
