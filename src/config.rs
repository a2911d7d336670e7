//! Writer configuration

use crate::document::{PageGeometry, StyleCatalog};

/// Immutable settings shared by every document a writer produces.
///
/// Built once and passed by reference; nothing here changes while a
/// document is being assembled.
///
/// # Examples
///
/// ```rust
/// use docx_forge::{DocxConfig, PageGeometry};
///
/// let config = DocxConfig::new()
///     .with_page(PageGeometry::letter())
///     .with_compression_level(Some(9));
/// assert_eq!(config.page().width, 12240);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocxConfig {
    styles: StyleCatalog,
    page: PageGeometry,
    compression_level: Option<i64>,
}

impl Default for DocxConfig {
    fn default() -> Self {
        Self {
            styles: StyleCatalog::standard(),
            page: PageGeometry::a4(),
            compression_level: None,
        }
    }
}

impl DocxConfig {
    /// Standard styles, A4 pages, default deflate level
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry
    #[inline]
    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    /// Set the deflate level (0-9); `None` uses the library default
    #[inline]
    pub fn with_compression_level(mut self, level: Option<i64>) -> Self {
        self.compression_level = level;
        self
    }

    /// Styles paragraphs may reference
    pub fn styles(&self) -> &StyleCatalog {
        &self.styles
    }

    /// Page size and margins
    pub fn page(&self) -> &PageGeometry {
        &self.page
    }

    /// Deflate level
    pub fn compression_level(&self) -> Option<i64> {
        self.compression_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DocxConfig::default();
        assert_eq!(*config.page(), PageGeometry::a4());
        assert_eq!(config.styles(), &StyleCatalog::standard());
        assert_eq!(config.compression_level(), None);
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<DocxConfig>();
    }
}
