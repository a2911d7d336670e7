//! OPC Package implementation
//!
//! Collects parts into a package, checks that they are wired together
//! correctly, and writes the result as a ZIP container.

use crate::error::{Error, Result};
use crate::opc::{well_known, ContentTypes, Part, PartUri, Relationships};
use std::collections::BTreeMap;
use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

/// Collects the parts of a package before it is serialized.
///
/// Nothing is validated until [`PackageBuilder::build`], which checks every
/// relationship and content type in one place.
#[derive(Debug)]
pub struct PackageBuilder {
    /// All parts in the package
    parts: BTreeMap<PartUri, Part>,
    /// Package-level relationships (/_rels/.rels)
    relationships: Relationships,
    /// Content types ([Content_Types].xml)
    content_types: ContentTypes,
    /// Deflate level, `None` for the library default
    compression_level: Option<i64>,
}

impl PackageBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self {
            parts: BTreeMap::new(),
            relationships: Relationships::new(),
            content_types: ContentTypes::new(),
            compression_level: None,
        }
    }

    /// Set the deflate compression level
    pub fn with_compression_level(mut self, level: Option<i64>) -> Self {
        self.compression_level = level;
        self
    }

    /// Add a part to the package.
    ///
    /// An override is recorded in the content types manifest unless the
    /// part's extension default already yields the same type.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        let uri = part.uri().clone();
        if self.parts.contains_key(&uri) || is_reserved(&uri) {
            return Err(Error::DuplicatePart(uri.to_string()));
        }

        let content_type = part.content_type();
        if !content_type.is_empty() && self.content_types.get(&uri) != Some(content_type) {
            self.content_types.add_override(&uri, content_type);
        }
        self.parts.insert(uri, part);
        Ok(())
    }

    /// Get a part by URI
    pub fn part(&self, uri: &PartUri) -> Option<&Part> {
        self.parts.get(uri)
    }

    /// Get package-level relationships
    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// Get content types
    pub fn content_types(&self) -> &ContentTypes {
        &self.content_types
    }

    /// Add a package-level relationship
    pub fn add_relationship(&mut self, rel_type: &str, target: &str) -> String {
        self.relationships.add(rel_type, target)
    }

    /// Validate the package and serialize every part into archive entries
    pub fn build(self) -> Result<Package> {
        self.validate()?;

        let mut entries = Vec::with_capacity(2 + self.parts.len() * 2);
        entries.push(Entry::new(
            &well_known::content_types(),
            self.content_types.to_xml()?.into_bytes(),
        ));
        if !self.relationships.is_empty() {
            entries.push(Entry::new(
                &well_known::package_rels(),
                self.relationships.to_xml()?.into_bytes(),
            ));
        }

        for (uri, part) in self.parts {
            let rels = part.relationships().filter(|r| !r.is_empty());
            let rels_xml = rels.map(Relationships::to_xml).transpose()?;

            entries.push(Entry::new(&uri, part.into_data()));
            if let Some(xml) = rels_xml {
                entries.push(Entry::new(&uri.relationships_uri(), xml.into_bytes()));
            }
        }

        for entry in &entries {
            log::debug!("package entry {} ({} bytes)", entry.name, entry.data.len());
        }

        Ok(Package {
            entries,
            compression_level: self.compression_level,
        })
    }

    fn validate(&self) -> Result<()> {
        // Package relationships resolve against the package root
        for rel in self.relationships.iter() {
            let target = PartUri::new(&rel.target)?;
            if !self.parts.contains_key(&target) {
                return Err(Error::DanglingRelationship {
                    rels: well_known::package_rels().to_string(),
                    id: rel.id.clone(),
                    target: target.to_string(),
                });
            }
        }

        for (uri, part) in &self.parts {
            if !self.content_types.covers(uri) {
                return Err(Error::MissingContentType(uri.to_string()));
            }

            let rels = match part.relationships() {
                Some(rels) if !rels.is_empty() => rels,
                _ => continue,
            };

            let rels_uri = uri.relationships_uri();
            if self.parts.contains_key(&rels_uri) {
                return Err(Error::DuplicatePart(rels_uri.to_string()));
            }
            if !self.content_types.covers(&rels_uri) {
                return Err(Error::MissingContentType(rels_uri.to_string()));
            }

            for rel in rels.iter() {
                let target = uri.resolve(&rel.target)?;
                if !self.parts.contains_key(&target) {
                    return Err(Error::DanglingRelationship {
                        rels: rels_uri.to_string(),
                        id: rel.id.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }

        if !self.relationships.is_empty()
            && !self.content_types.covers(&well_known::package_rels())
        {
            return Err(Error::MissingContentType(
                well_known::package_rels().to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PackageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Paths that the builder writes itself
fn is_reserved(uri: &PartUri) -> bool {
    *uri == well_known::content_types() || *uri == well_known::package_rels()
}

/// One archive entry
#[derive(Clone, Debug)]
struct Entry {
    name: String,
    data: Vec<u8>,
}

impl Entry {
    fn new(uri: &PartUri, data: Vec<u8>) -> Self {
        Self {
            name: uri.entry_name().to_string(),
            data,
        }
    }
}

/// A fully validated OPC package, ready to be written
#[derive(Clone, Debug)]
pub struct Package {
    entries: Vec<Entry>,
    compression_level: Option<i64>,
}

impl Package {
    /// Names of all archive entries, in write order
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Get an entry's payload by archive name (e.g. `word/document.xml`)
    pub fn entry(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.data.as_slice())
    }

    /// Number of archive entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the package has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Save the package to a file.
    ///
    /// Missing parent directories are created. The archive is written to a
    /// temporary file next to the destination and renamed into place, so a
    /// failed write never leaves a truncated file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        if let Err(err) = self.fill(&mut tmp) {
            let tmp_path = tmp.path().to_path_buf();
            if let Err(cleanup) = tmp.close() {
                log::warn!(
                    "could not remove temporary file {}: {}",
                    tmp_path.display(),
                    cleanup
                );
            }
            return Err(err);
        }
        let file = tmp.persist(path).map_err(|e| Error::Io(e.error))?;

        let size = file.metadata().map(|m| m.len()).unwrap_or(0);
        log::info!(
            "wrote {} ({} bytes, {} entries)",
            path.display(),
            size,
            self.entries.len()
        );
        Ok(())
    }

    /// Write the archive into the temporary file and flush it to disk
    fn fill(&self, tmp: &mut NamedTempFile) -> Result<()> {
        self.write_to(&mut *tmp)?;
        // Temporary files are created 0600; saved documents use the usual mode
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }
        tmp.as_file().sync_all()?;
        Ok(())
    }

    /// Save the package to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(Cursor::new(&mut buf))?;
        Ok(buf)
    }

    /// Write the package to a writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        // Fixed timestamp and permissions keep repeated builds byte-identical
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(self.compression_level)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);

        for entry in &self.entries {
            zip.start_file(entry.name.as_str(), options)?;
            zip.write_all(&entry.data)?;
        }

        zip.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::{rel_types, MAIN_DOCUMENT, STYLES, XML};

    fn document_part() -> Part {
        Part::new(well_known::document(), MAIN_DOCUMENT, b"<w:document/>".to_vec())
    }

    fn styles_part() -> Part {
        Part::new(well_known::styles(), STYLES, b"<w:styles/>".to_vec())
    }

    fn wired_builder() -> PackageBuilder {
        let mut builder = PackageBuilder::new();
        let mut doc = document_part();
        doc.add_relationship(rel_types::STYLES, "styles.xml");
        builder.add_part(doc).unwrap();
        builder.add_part(styles_part()).unwrap();
        builder.add_relationship(rel_types::OFFICE_DOCUMENT, "word/document.xml");
        builder
    }

    #[test]
    fn test_build_entries() {
        let pkg = wired_builder().build().unwrap();
        let names: Vec<_> = pkg.entry_names().collect();
        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "word/document.xml",
                "word/_rels/document.xml.rels",
                "word/styles.xml",
            ]
        );
        assert_eq!(pkg.entry("word/document.xml"), Some(&b"<w:document/>"[..]));
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut builder = PackageBuilder::new();
        builder.add_part(document_part()).unwrap();
        let err = builder.add_part(document_part()).unwrap_err();
        assert!(matches!(err, Error::DuplicatePart(_)));

        let reserved = Part::new(well_known::package_rels(), XML, Vec::new());
        assert!(builder.add_part(reserved).is_err());
    }

    #[test]
    fn test_dangling_package_relationship() {
        let mut builder = PackageBuilder::new();
        builder.add_part(styles_part()).unwrap();
        builder.add_relationship(rel_types::OFFICE_DOCUMENT, "word/document.xml");

        match builder.build().unwrap_err() {
            Error::DanglingRelationship { rels, id, target } => {
                assert_eq!(rels, "/_rels/.rels");
                assert_eq!(id, "rId1");
                assert_eq!(target, "/word/document.xml");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_part_relationship() {
        let mut builder = PackageBuilder::new();
        let mut doc = document_part();
        doc.add_relationship(rel_types::STYLES, "styles.xml");
        builder.add_part(doc).unwrap();
        builder.add_relationship(rel_types::OFFICE_DOCUMENT, "word/document.xml");

        let err = builder.build().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("/word/styles.xml"));
    }

    #[test]
    fn test_missing_content_type() {
        let mut builder = PackageBuilder::new();
        let png = PartUri::new("/word/media/image1.png").unwrap();
        builder.add_part(Part::new(png, "", vec![0x89])).unwrap();

        let err = builder.build().unwrap_err();
        assert!(matches!(err, Error::MissingContentType(ref p) if p == "/word/media/image1.png"));
    }

    #[test]
    fn test_default_content_type_needs_no_override() {
        let mut builder = PackageBuilder::new();
        let custom = PartUri::new("/customXml/item1.xml").unwrap();
        builder.add_part(Part::new(custom.clone(), XML, b"<a/>".to_vec())).unwrap();

        let manifest = builder.content_types().to_xml().unwrap();
        assert!(!manifest.contains("Override"));
        assert_eq!(builder.content_types().get(&custom), Some(XML));
    }

    #[test]
    fn test_to_bytes_is_deterministic() {
        let first = wired_builder().build().unwrap().to_bytes().unwrap();
        let second = wired_builder().build().unwrap().to_bytes().unwrap();
        assert_eq!(&first[0..2], b"PK");
        assert_eq!(first, second);
    }
}
