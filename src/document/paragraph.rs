//! Paragraph element (w:p)

use crate::document::style_ids;
use crate::error::Result;
use crate::xml::{write_text_element, write_w_val};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// A paragraph holding a single run of text.
///
/// Built once by the caller and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
    emphasis: bool,
    style: Option<String>,
}

impl Paragraph {
    /// Create a new paragraph with text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// An empty spacer paragraph
    pub fn blank() -> Self {
        Self::default()
    }

    /// A bold heading paragraph referencing `Heading{level}`
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::new(text).bold().with_style(style_ids::heading(level))
    }

    /// Render the run in bold
    pub fn bold(self) -> Self {
        self.with_emphasis(true)
    }

    /// Set bold emphasis
    pub fn with_emphasis(mut self, emphasis: bool) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Reference a style from the catalog by id
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Get the text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if bold
    pub fn is_bold(&self) -> bool {
        self.emphasis
    }

    /// Get style ID
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:p")))?;

        if let Some(style) = &self.style {
            writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
            write_w_val(writer, "w:pStyle", style)?;
            writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        }

        writer.write_event(Event::Start(BytesStart::new("w:r")))?;
        if self.emphasis {
            writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
            writer.write_event(Event::Empty(BytesStart::new("w:b")))?;
            writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        }
        write_text_element(writer, &self.text)?;
        writer.write_event(Event::End(BytesEnd::new("w:r")))?;

        writer.write_event(Event::End(BytesEnd::new("w:p")))?;
        Ok(())
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Paragraph::new(text)
    }
}

impl From<String> for Paragraph {
    fn from(text: String) -> Self {
        Paragraph::new(text)
    }
}
