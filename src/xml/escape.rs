//! Text escaping for WordprocessingML character data

use crate::error::Result;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;

/// Escape text for use as XML character data or an attribute value.
///
/// `&` is handled in the same pass as the other markup characters, so entities
/// produced here are never escaped a second time. CR becomes a character
/// reference because parsers normalize a literal CR to LF.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    let first = match text.find(|c| matches!(c, '&' | '<' | '>' | '"' | '\'' | '\r')) {
        Some(pos) => pos,
        None => return Cow::Borrowed(text),
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Whether a `w:t` holding this text needs `xml:space="preserve"`.
///
/// Readers trim leading/trailing whitespace and may collapse runs of it
/// unless told otherwise.
pub fn needs_space_preserve(text: &str) -> bool {
    text.is_empty()
        || text.starts_with(char::is_whitespace)
        || text.ends_with(char::is_whitespace)
        || text.contains("  ")
        || text.contains(['\t', '\n', '\r'])
}

/// Find the first character XML 1.0 cannot carry.
///
/// Tab, LF and CR are the only permitted C0 controls; U+FFFE and U+FFFF are
/// excluded by the `Char` production.
pub fn check_text(text: &str) -> std::result::Result<(), char> {
    match text.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(c),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{0}'..='\u{1F}' => false,
        '\u{FFFE}' | '\u{FFFF}' => false,
        _ => true,
    }
}

/// Write a `w:t` element.
///
/// Empty text becomes a self-closing `<w:t/>`.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    if text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("w:t")))?;
        return Ok(());
    }

    let mut start = BytesStart::new("w:t");
    if needs_space_preserve(text) {
        start.push_attribute(("xml:space", "preserve"));
    }
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
    writer.write_event(Event::End(BytesEnd::new("w:t")))?;
    Ok(())
}
