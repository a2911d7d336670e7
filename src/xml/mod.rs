//! XML utilities shared by the part generators

mod escape;
mod namespace;

pub use escape::{check_text, escape_text, needs_space_preserve, write_text_element};
pub use namespace::*;

use crate::error::Result;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Write the standalone UTF-8 declaration every part starts with
pub fn write_declaration<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(())
}

/// Convert a writer buffer into the part's XML text
pub(crate) fn into_string(buf: Vec<u8>) -> Result<String> {
    String::from_utf8(buf).map_err(|e| e.utf8_error().into())
}

/// Write an empty element carrying a single `w:val` attribute
pub fn write_w_val<W: Write>(writer: &mut Writer<W>, name: &str, val: &str) -> Result<()> {
    let mut elem = BytesStart::new(name);
    elem.push_attribute(("w:val", val));
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}
