//! Error types for docx-forge

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A paragraph references a style id the catalog does not define
    #[error("Paragraph {paragraph} references undefined style '{style}'")]
    UnknownStyle { style: String, paragraph: usize },

    /// Paragraph text contains a character XML 1.0 cannot represent
    #[error("Paragraph {paragraph} contains character U+{codepoint:04X} which cannot be encoded in XML")]
    Encoding { paragraph: usize, codepoint: u32 },

    #[error("Invalid part URI: {0}")]
    InvalidPartUri(String),

    #[error("Duplicate part: {0}")]
    DuplicatePart(String),

    #[error("Relationship {id} in {rels} targets missing part {target}")]
    DanglingRelationship {
        rels: String,
        id: String,
        target: String,
    },

    #[error("No content type declared for part: {0}")]
    MissingContentType(String),
}

impl Error {
    /// The document description itself is inconsistent (bad style reference,
    /// broken package wiring)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownStyle { .. }
                | Error::InvalidPartUri(_)
                | Error::DuplicatePart(_)
                | Error::DanglingRelationship { .. }
                | Error::MissingContentType(_)
        )
    }

    /// Text could not be represented in the output encoding
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding { .. })
    }

    /// Storage failed while writing the archive
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::Zip(_) | Error::Xml(_) | Error::Utf8(_)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
