//! Tests for the XML element tree

extern crate std;

use crate::fgdc::errors::FgdcError;
use crate::xml::tree::{declared_encoding, Document, Element, Node};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<metadata>
  <idinfo><citation lang="en">Gridded &amp; Population</citation></idinfo>
  <!-- user defined -->
  <smusrdef>
    <smusrtxt><smusrlbl>collection-huid</smusrlbl><smusrval>C1</smusrval></smusrtxt>
    <smusrtxt><smusrlbl>data-set-huid</smusrlbl><smusrval><![CDATA[S1]]></smusrval></smusrtxt>
  </smusrdef>
  <metainfo/>
</metadata>
"#;

#[test]
fn test_parse_keeps_structure() {
    let doc = Document::parse(SAMPLE).unwrap();
    std::assert_eq!(doc.root.name, "metadata");

    let names: Vec<&str> = doc.root.elements().map(|el| el.name.as_str()).collect();
    std::assert_eq!(names, vec!["idinfo", "smusrdef", "metainfo"]);

    let citation = doc.root.child("idinfo").and_then(|el| el.child("citation")).unwrap();
    std::assert_eq!(citation.text(), "Gridded & Population");
    std::assert_eq!(citation.attributes, vec![("lang".to_string(), "en".to_string())]);

    std::assert!(doc.root.children.iter().any(|n| std::matches!(n, Node::Comment(c) if c.trim() == "user defined")));
}

#[test]
fn test_descendants_in_document_order() {
    let doc = Document::parse(SAMPLE).unwrap();
    let fields = doc.root.descendants("smusrtxt");
    std::assert_eq!(fields.len(), 2);

    let values: Vec<String> = fields
        .iter()
        .map(|f| f.child("smusrval").unwrap().text())
        .collect();
    std::assert_eq!(values, vec!["C1".to_string(), "S1".to_string()]);
}

#[test]
fn test_descendants_exclude_self() {
    let doc = Document::parse("<a><b><a/></b></a>").unwrap();
    std::assert_eq!(doc.root.descendants("a").len(), 1);
}

#[test]
fn test_strip_child_leaves_source_untouched() {
    let doc = Document::parse(SAMPLE).unwrap();
    let stripped = doc.strip_child("smusrdef").unwrap();

    std::assert!(stripped.document.root.child("smusrdef").is_none());
    std::assert!(doc.root.child("smusrdef").is_some());
    std::assert_eq!(stripped.removed.name, "smusrdef");
    // The element and one of the two whitespace nodes around it are gone
    std::assert_eq!(stripped.document.root.children.len(), doc.root.children.len() - 2);
}

#[test]
fn test_strip_joins_surrounding_text() {
    let doc = Document::parse("<a>\n  <b/>\n  <x>1</x>\n  <c/>\n</a>").unwrap();
    let stripped = doc.strip_child("x").unwrap();

    std::assert_eq!(stripped.position, 3);
    std::assert_eq!(stripped.joined_text, Some(3));
    std::assert_eq!(
        stripped.document.root.children,
        vec![
            Node::Text("\n  ".to_string()),
            Node::Element(Element::new("b")),
            Node::Text("\n  \n  ".to_string()),
            Node::Element(Element::new("c")),
            Node::Text("\n".to_string()),
        ]
    );
    std::assert_eq!(stripped.restore(), doc);
}

#[test]
fn test_strip_without_surrounding_text() {
    let doc = Document::parse("<a><b/><x/>tail</a>").unwrap();
    let stripped = doc.strip_child("x").unwrap();

    std::assert_eq!(stripped.joined_text, None);
    std::assert_eq!(stripped.document.root.children.len(), 2);
    std::assert_eq!(stripped.restore(), doc);
}

#[test]
fn test_stripped_output_reads_back_equal() {
    let doc = Document::parse(SAMPLE).unwrap();
    let stripped = doc.strip_child("smusrdef").unwrap();

    let written = crate::xml::writer::to_xml_string(&stripped.document).unwrap();
    std::assert_eq!(Document::parse(&written).unwrap(), stripped.document);
}

#[test]
fn test_restore_reproduces_source() {
    let doc = Document::parse(SAMPLE).unwrap();
    let stripped = doc.strip_child("smusrdef").unwrap();
    std::assert_eq!(stripped.restore(), doc);
}

#[test]
fn test_strip_only_looks_at_root_children() {
    let doc = Document::parse("<a><b><smusrdef/></b></a>").unwrap();
    std::assert!(doc.strip_child("smusrdef").is_none());
}

#[test]
fn test_malformed_documents_are_rejected() {
    std::assert!(std::matches!(Document::parse("<a><b></a>"), Err(FgdcError::MalformedXml(_))));
    std::assert!(std::matches!(Document::parse("<a>"), Err(FgdcError::MalformedXml(_))));
    std::assert!(std::matches!(Document::parse(""), Err(FgdcError::MalformedXml(_))));
    std::assert!(std::matches!(Document::parse("<a/><b/>"), Err(FgdcError::MalformedXml(_))));
}

#[test]
fn test_declared_latin1_wins_over_valid_utf8() {
    let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><t>".to_vec();
    bytes.extend_from_slice(&[0xC3, 0xA9]);
    bytes.extend_from_slice(b"</t>");

    std::assert_eq!(declared_encoding(&bytes).as_deref(), Some("ISO-8859-1"));
    let doc = Document::from_bytes(&bytes).unwrap();
    std::assert_eq!(doc.root.text(), "\u{c3}\u{a9}");
}

#[test]
fn test_utf8_declaration_and_fallback() {
    let utf8 = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><t>caf\u{e9}</t>";
    std::assert_eq!(Document::from_bytes(utf8.as_bytes()).unwrap().root.text(), "caf\u{e9}");

    // Not valid UTF-8 despite the declaration
    let mut bytes = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><t>caf".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"</t>");
    std::assert_eq!(Document::from_bytes(&bytes).unwrap().root.text(), "caf\u{e9}");
}

#[test]
fn test_no_declaration_means_no_declared_encoding() {
    std::assert_eq!(declared_encoding(b"<t>x</t>"), None);
    std::assert_eq!(declared_encoding(b"<?xml version=\"1.0\"?><t/>"), None);
}
