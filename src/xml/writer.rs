//! Serialization of element trees
//!
//! Output is always ISO-8859-1, whatever the source declared. Characters
//! outside that range become numeric character references.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::fgdc::errors::FgdcResult;
use crate::utils::string_utils::encode_latin1;
use crate::xml::tree::{Document, Element, Node};

/// Encoding named in the declaration of every written document
pub const OUTPUT_ENCODING: &str = "ISO-8859-1";

/// Serialize a document to text, declaration included
pub fn to_xml_string(document: &Document) -> FgdcResult<String> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some(OUTPUT_ENCODING), None)))?;
    writer.get_mut().push(b'\n');
    write_element(&mut writer, &document.root)?;

    let bytes = writer.into_inner();
    Ok(String::from_utf8(bytes).map_err(|e| e.utf8_error())?)
}

/// Serialize a document to ISO-8859-1 bytes
pub fn to_latin1_bytes(document: &Document) -> FgdcResult<Vec<u8>> {
    Ok(encode_latin1(&to_xml_string(document)?))
}

/// Write a document to `path` as ISO-8859-1
pub fn write_document(document: &Document, path: &Path) -> FgdcResult<()> {
    fs::write(path, to_latin1_bytes(document)?)?;
    Ok(())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> FgdcResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for node in &element.children {
        match node {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            Node::CData(text) => writer.write_event(Event::CData(BytesCData::new(text.as_str())))?,
            Node::Comment(text) => writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
