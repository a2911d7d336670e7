//! Page geometry (w:sectPr)

use crate::error::Result;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Page size and margins, all in twips (1/20 pt)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub header: u32,
    pub footer: u32,
    pub gutter: u32,
}

impl PageGeometry {
    /// A4 portrait with one-inch margins
    pub const fn a4() -> Self {
        Self {
            width: 11906,
            height: 16838,
            ..Self::ONE_INCH_MARGINS
        }
    }

    /// US Letter portrait with one-inch margins
    pub const fn letter() -> Self {
        Self {
            width: 12240,
            height: 15840,
            ..Self::ONE_INCH_MARGINS
        }
    }

    const ONE_INCH_MARGINS: Self = Self {
        width: 0,
        height: 0,
        margin_top: 1440,
        margin_right: 1440,
        margin_bottom: 1440,
        margin_left: 1440,
        header: 720,
        footer: 720,
        gutter: 0,
    };

    /// Write the section properties element
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;

        let mut pg_sz = BytesStart::new("w:pgSz");
        pg_sz.push_attribute(("w:w", self.width.to_string().as_str()));
        pg_sz.push_attribute(("w:h", self.height.to_string().as_str()));
        writer.write_event(Event::Empty(pg_sz))?;

        let mut pg_mar = BytesStart::new("w:pgMar");
        for (attr, value) in [
            ("w:top", self.margin_top),
            ("w:right", self.margin_right),
            ("w:bottom", self.margin_bottom),
            ("w:left", self.margin_left),
            ("w:header", self.header),
            ("w:footer", self.footer),
            ("w:gutter", self.gutter),
        ] {
            pg_mar.push_attribute((attr, value.to_string().as_str()));
        }
        writer.write_event(Event::Empty(pg_mar))?;

        writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_section_xml() {
        let mut writer = Writer::new(Vec::new());
        PageGeometry::a4().write_to(&mut writer).unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/>"#,
                r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" "#,
                r#"w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#,
            )
        );
    }
}
