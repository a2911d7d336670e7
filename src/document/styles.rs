//! Style catalog and `word/styles.xml` generation

use crate::error::Result;
use crate::xml::{self, write_w_val};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Style identifiers defined by the standard catalog.
///
/// Paragraphs must reference styles by exactly these ids.
pub mod style_ids {
    pub const NORMAL: &str = "Normal";
    pub const HEADING_1: &str = "Heading1";
    pub const HEADING_2: &str = "Heading2";

    /// Id of the heading style for an outline level starting at 1
    pub fn heading(level: u8) -> String {
        format!("Heading{}", level)
    }
}

/// A paragraph style definition (w:style)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    /// Style identifier (e.g., "Heading1")
    pub id: String,
    /// UI-visible name (e.g., "heading 1")
    pub name: String,
    /// Parent style id
    pub based_on: Option<String>,
    /// Default style for paragraphs with no explicit style
    pub is_default: bool,
    /// UI priority for display ordering
    pub ui_priority: Option<u32>,
    /// Shown in the quick style gallery
    pub quick_format: bool,
    /// Keep with the following paragraph
    pub keep_next: bool,
    /// Space before paragraph in twips
    pub spacing_before: Option<u32>,
    /// Space after paragraph in twips
    pub spacing_after: Option<u32>,
    /// Outline level (0 = top level)
    pub outline_level: Option<u8>,
    /// Bold by default
    pub bold: bool,
    /// Font size in half-points (e.g., 32 = 16pt)
    pub font_size: Option<u32>,
}

impl Style {
    fn paragraph(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            based_on: None,
            is_default: false,
            ui_priority: None,
            quick_format: true,
            keep_next: false,
            spacing_before: None,
            spacing_after: None,
            outline_level: None,
            bold: false,
            font_size: None,
        }
    }

    /// The default paragraph style
    pub fn normal() -> Self {
        Self {
            is_default: true,
            ..Self::paragraph(style_ids::NORMAL, "Normal")
        }
    }

    /// Top-level heading: 16pt bold, outline level 0
    pub fn heading_1() -> Self {
        Self::heading(style_ids::HEADING_1, "heading 1", 32, (240, 120), 0)
    }

    /// Second-level heading: 14pt bold, outline level 1
    pub fn heading_2() -> Self {
        Self::heading(style_ids::HEADING_2, "heading 2", 28, (200, 100), 1)
    }

    fn heading(id: &str, name: &str, size: u32, spacing: (u32, u32), level: u8) -> Self {
        Self {
            based_on: Some(style_ids::NORMAL.to_string()),
            ui_priority: Some(9),
            keep_next: true,
            spacing_before: Some(spacing.0),
            spacing_after: Some(spacing.1),
            outline_level: Some(level),
            bold: true,
            font_size: Some(size),
            ..Self::paragraph(id, name)
        }
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:style");
        start.push_attribute(("w:type", "paragraph"));
        if self.is_default {
            start.push_attribute(("w:default", "1"));
        }
        start.push_attribute(("w:styleId", self.id.as_str()));
        writer.write_event(Event::Start(start))?;

        write_w_val(writer, "w:name", &self.name)?;
        if let Some(based_on) = &self.based_on {
            write_w_val(writer, "w:basedOn", based_on)?;
        }
        if let Some(priority) = self.ui_priority {
            write_w_val(writer, "w:uiPriority", &priority.to_string())?;
        }
        if self.quick_format {
            writer.write_event(Event::Empty(BytesStart::new("w:qFormat")))?;
        }

        self.write_paragraph_properties(writer)?;
        self.write_run_properties(writer)?;

        writer.write_event(Event::End(BytesEnd::new("w:style")))?;
        Ok(())
    }

    fn write_paragraph_properties<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let has_spacing = self.spacing_before.is_some() || self.spacing_after.is_some();
        if !self.keep_next && !has_spacing && self.outline_level.is_none() {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        if self.keep_next {
            writer.write_event(Event::Empty(BytesStart::new("w:keepNext")))?;
        }
        if has_spacing {
            let mut spacing = BytesStart::new("w:spacing");
            if let Some(before) = self.spacing_before {
                spacing.push_attribute(("w:before", before.to_string().as_str()));
            }
            if let Some(after) = self.spacing_after {
                spacing.push_attribute(("w:after", after.to_string().as_str()));
            }
            writer.write_event(Event::Empty(spacing))?;
        }
        if let Some(level) = self.outline_level {
            write_w_val(writer, "w:outlineLvl", &level.to_string())?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        Ok(())
    }

    fn write_run_properties<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if !self.bold && self.font_size.is_none() {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        if self.bold {
            writer.write_event(Event::Empty(BytesStart::new("w:b")))?;
        }
        if let Some(size) = self.font_size {
            write_w_val(writer, "w:sz", &size.to_string())?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        Ok(())
    }
}

/// The fixed set of styles a document may reference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleCatalog {
    styles: Vec<Style>,
}

impl StyleCatalog {
    /// Normal, Heading1 and Heading2
    pub fn standard() -> Self {
        Self {
            styles: vec![Style::normal(), Style::heading_1(), Style::heading_2()],
        }
    }

    /// Look up a style by id
    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// Whether the catalog defines `id`
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All style ids, in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|s| s.id.as_str())
    }

    /// Iterate over the styles
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    /// Generate the complete `word/styles.xml` part
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::with_capacity(2048));
        xml::write_declaration(&mut writer)?;

        let mut root = BytesStart::new("w:styles");
        for (attr, value) in xml::wordprocessing_namespaces() {
            root.push_attribute((attr, value));
        }
        writer.write_event(Event::Start(root))?;
        for style in &self.styles {
            style.write_to(&mut writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:styles")))?;

        xml::into_string(writer.into_inner())
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
