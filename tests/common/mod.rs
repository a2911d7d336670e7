//! Helpers for reading generated archives back

#![allow(dead_code)]

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

pub const REQUIRED_ENTRIES: [&str; 5] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "word/_rels/document.xml.rels",
    "word/document.xml",
    "word/styles.xml",
];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Entry names in the archive, sorted
pub fn entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

/// Read one archive entry as UTF-8
pub fn read_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    let mut file = archive.by_name(name).expect("entry present");
    assert_eq!(file.compression(), zip::CompressionMethod::Deflated, "{name}");
    let mut content = String::new();
    file.read_to_string(&mut content).expect("utf-8 entry");
    content
}

/// Parse the whole document, panicking on malformed XML
pub fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Text(t)) => {
                t.unescape().expect("text unescapes");
            }
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
        }
    }
}

fn attr(e: &BytesStart, name: &str) -> Option<String> {
    e.try_get_attribute(name)
        .expect("attribute parses")
        .map(|a| a.unescape_value().expect("attribute unescapes").into_owned())
}

/// Collect `attr` from every empty element named `element`
pub fn empty_element_attrs(xml: &str, element: &str, name: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut values = Vec::new();
    loop {
        match reader.read_event().expect("well-formed") {
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == element.as_bytes() => {
                if let Some(v) = attr(&e, name) {
                    values.push(v);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    values
}

/// Relationship targets of a `.rels` entry
pub fn relationship_targets(xml: &str) -> Vec<String> {
    empty_element_attrs(xml, "Relationship", "Target")
}

/// Unescaped content of every `w:t` element, in order (empty for `<w:t/>`)
pub fn text_runs(document_xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(document_xml);
    let mut runs = Vec::new();
    let mut in_text = false;
    loop {
        match reader.read_event().expect("well-formed") {
            Event::Start(e) if e.name().as_ref() == b"w:t" => {
                in_text = true;
                runs.push(String::new());
            }
            Event::Empty(e) if e.name().as_ref() == b"w:t" => runs.push(String::new()),
            Event::Text(t) if in_text => {
                let text = t.unescape().expect("text unescapes");
                if let Some(last) = runs.last_mut() {
                    last.push_str(&text);
                }
            }
            Event::End(e) if e.name().as_ref() == b"w:t" => in_text = false,
            Event::Eof => break,
            _ => {}
        }
    }
    runs
}

/// Number of `w:p` elements in the document body
pub fn paragraph_count(document_xml: &str) -> usize {
    document_xml.matches("<w:p>").count()
}
