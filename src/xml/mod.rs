//! XML parsing, querying and serialization
//!
//! A small owned element tree built on `quick-xml`, sufficient for locating
//! FGDC identifier fields and producing a copy without the user-defined section.

pub mod tree;
pub mod writer;
#[cfg(test)]
mod tests;

pub use tree::{declared_encoding, Document, Element, Node, Stripped};
pub use writer::{to_latin1_bytes, to_xml_string, write_document, OUTPUT_ENCODING};
