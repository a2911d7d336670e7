//! Part URI handling for OPC packages

use crate::error::{Error, Result};
use std::fmt;

/// Represents a URI to a part within an OPC package.
///
/// Part URIs are always absolute paths starting with '/'.
/// Example: `/word/document.xml`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartUri {
    path: String,
}

impl PartUri {
    /// Create a new PartUri from a string.
    ///
    /// The path will be normalized (leading '/' ensured, no trailing '/').
    pub fn new(path: &str) -> Result<Self> {
        let path = path.trim();

        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        let normalized = normalized.trim_end_matches('/').to_string();

        if normalized.is_empty() {
            return Err(Error::InvalidPartUri("empty path".into()));
        }
        if normalized.contains("//") {
            return Err(Error::InvalidPartUri(format!(
                "invalid path '{}': contains double slashes",
                path
            )));
        }
        if normalized.contains('\\') {
            return Err(Error::InvalidPartUri(format!(
                "invalid path '{}': backslash separator",
                path
            )));
        }
        if normalized.split('/').any(|s| s == "." || s == "..") {
            return Err(Error::InvalidPartUri(format!(
                "invalid path '{}': relative segment",
                path
            )));
        }

        Ok(Self { path: normalized })
    }

    /// Create PartUri without validation (for internal use)
    pub(crate) fn from_static(path: &'static str) -> Self {
        Self { path: path.into() }
    }

    /// Get the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Name of the ZIP entry holding this part (no leading '/')
    pub fn entry_name(&self) -> &str {
        &self.path[1..]
    }

    /// Get the file name portion
    pub fn file_name(&self) -> Option<&str> {
        self.path.rsplit('/').next()
    }

    /// Get the file extension
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        let (_, ext) = name.rsplit_once('.')?;
        Some(ext).filter(|ext| !ext.is_empty())
    }

    /// Get the parent directory path (empty for parts at the package root)
    fn parent_dir(&self) -> &str {
        match self.path.rfind('/') {
            Some(pos) => &self.path[..pos],
            None => "",
        }
    }

    /// Get the relationships URI for this part.
    ///
    /// For `/word/document.xml`, returns `/word/_rels/document.xml.rels`
    pub fn relationships_uri(&self) -> PartUri {
        let file_name = self.file_name().unwrap_or("");
        PartUri {
            path: format!("{}/_rels/{}.rels", self.parent_dir(), file_name),
        }
    }

    /// Resolve a relationship target relative to this part.
    ///
    /// For `/word/document.xml` and `styles.xml`, returns `/word/styles.xml`
    pub fn resolve(&self, relative: &str) -> Result<PartUri> {
        if relative.starts_with('/') {
            return PartUri::new(relative);
        }

        let mut parts: Vec<&str> = self
            .parent_dir()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        for segment in relative.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    parts.pop();
                }
                s => parts.push(s),
            }
        }

        PartUri::new(&parts.join("/"))
    }
}

impl fmt::Display for PartUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Well-known part URIs
pub mod well_known {
    use super::PartUri;

    pub fn content_types() -> PartUri {
        PartUri::from_static("/[Content_Types].xml")
    }

    pub fn package_rels() -> PartUri {
        PartUri::from_static("/_rels/.rels")
    }

    pub fn document() -> PartUri {
        PartUri::from_static("/word/document.xml")
    }

    pub fn styles() -> PartUri {
        PartUri::from_static("/word/styles.xml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_leading_slash() {
        let uri = PartUri::new("/word/document.xml").unwrap();
        assert_eq!(uri.as_str(), "/word/document.xml");
        assert_eq!(uri.entry_name(), "word/document.xml");
    }

    #[test]
    fn test_new_without_leading_slash() {
        let uri = PartUri::new("word/document.xml").unwrap();
        assert_eq!(uri.as_str(), "/word/document.xml");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(PartUri::new("").is_err());
        assert!(PartUri::new("/").is_err());
        assert!(PartUri::new("word//document.xml").is_err());
        assert!(PartUri::new("word\\document.xml").is_err());
        assert!(PartUri::new("word/../document.xml").is_err());
    }

    #[test]
    fn test_file_name_and_extension() {
        let uri = PartUri::new("/word/document.xml").unwrap();
        assert_eq!(uri.file_name(), Some("document.xml"));
        assert_eq!(uri.extension(), Some("xml"));

        let rels = well_known::package_rels();
        assert_eq!(rels.file_name(), Some(".rels"));
        assert_eq!(rels.extension(), Some("rels"));

        let bare = PartUri::new("/word/README").unwrap();
        assert_eq!(bare.extension(), None);
    }

    #[test]
    fn test_relationships_uri() {
        let uri = PartUri::new("/word/document.xml").unwrap();
        assert_eq!(uri.relationships_uri().as_str(), "/word/_rels/document.xml.rels");
    }

    #[test]
    fn test_resolve_same_dir() {
        let uri = well_known::document();
        let resolved = uri.resolve("styles.xml").unwrap();
        assert_eq!(resolved, well_known::styles());
    }

    #[test]
    fn test_resolve_parent_dir() {
        let uri = well_known::document();
        let resolved = uri.resolve("../customXml/item1.xml").unwrap();
        assert_eq!(resolved.as_str(), "/customXml/item1.xml");
    }

    #[test]
    fn test_well_known_entry_names() {
        assert_eq!(well_known::content_types().entry_name(), "[Content_Types].xml");
        assert_eq!(well_known::package_rels().entry_name(), "_rels/.rels");
    }
}
