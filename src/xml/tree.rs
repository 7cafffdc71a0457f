//! Immutable XML element tree
//!
//! Records are parsed once into a `Document` and never modified in place;
//! derived documents are produced as new values.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::fgdc::errors::{FgdcError, FgdcResult};
use crate::utils::string_utils::decode_text;

/// A node inside an element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Character data, already unescaped
    Text(String),
    CData(String),
    Comment(String),
}

/// An XML element with its attributes and children in document order
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// A parsed XML document
///
/// The source declaration, DOCTYPE, processing instructions and anything
/// outside the root element are not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// Result of removing one child from the root
#[derive(Debug, Clone, PartialEq)]
pub struct Stripped {
    /// Copy of the document without the removed element
    pub document: Document,
    /// The element that was removed
    pub removed: Element,
    /// Index of the removed element among the root's children
    pub position: usize,
    /// Byte length of the text before the removed element, when that text
    /// and the text after it were merged into one node
    pub joined_text: Option<usize>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Element {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    fn from_start(start: &BytesStart) -> FgdcResult<Self> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Child elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// First direct child element with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|el| el.name == name)
    }

    /// All descendant elements with the given name, in document order
    ///
    /// The element itself is not considered.
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for el in self.elements() {
            if el.name == name {
                found.push(el);
            }
            el.collect_descendants(name, found);
        }
    }

    /// Concatenated text and CDATA directly inside this element
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) | Node::CData(t) => text.push_str(t),
                _ => {}
            }
        }
        text
    }

    /// Copy of this element with the first direct child named `name` left out
    ///
    /// Text on both sides of the removed element is joined into a single
    /// node, the way it reads back after serialization.
    fn without_child(&self, name: &str) -> Option<(Element, Element, usize, Option<usize>)> {
        let position = self.children.iter().position(|node| matches!(node, Node::Element(el) if el.name == name))?;
        let removed = match &self.children[position] {
            Node::Element(el) => el.clone(),
            _ => return None,
        };

        let before = position.checked_sub(1).and_then(|i| self.children.get(i));
        let after = self.children.get(position + 1);

        let mut children: Vec<Node> = Vec::with_capacity(self.children.len());
        let joined_text = match (before, after) {
            (Some(Node::Text(head)), Some(Node::Text(tail))) => {
                children.extend(self.children[..position - 1].iter().cloned());
                children.push(Node::Text(format!("{}{}", head, tail)));
                children.extend(self.children[position + 2..].iter().cloned());
                Some(head.len())
            }
            _ => {
                children.extend(self.children[..position].iter().cloned());
                children.extend(self.children[position + 1..].iter().cloned());
                None
            }
        };

        Some((
            Element {
                name: self.name.clone(),
                attributes: self.attributes.clone(),
                children,
            },
            removed,
            position,
            joined_text,
        ))
    }
}

/// Encoding named by the XML declaration at the start of `bytes`, if any
pub fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let encoding = match reader.read_event_into(&mut buf) {
        Ok(Event::Decl(decl)) => decl
            .encoding()
            .and_then(|enc| enc.ok())
            .map(|enc| String::from_utf8_lossy(&enc).into_owned()),
        _ => None,
    };
    encoding
}

impl Document {
    /// Parse a document from raw file content
    ///
    /// The content is decoded with the encoding its declaration names.
    pub fn from_bytes(bytes: &[u8]) -> FgdcResult<Self> {
        let encoding = declared_encoding(bytes);
        Self::parse(&decode_text(bytes, encoding.as_deref()))
    }

    /// Parse a document from text
    pub fn parse(content: &str) -> FgdcResult<Self> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if root.is_some() {
                        return Err(FgdcError::MalformedXml("content after the root element".to_string()));
                    }
                    stack.push(Element::from_start(&e)?);
                }
                Event::Empty(e) => {
                    let element = Element::from_start(&e)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| FgdcError::MalformedXml("unexpected end tag".to_string()))?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::Text(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let text: Cow<str> = e.unescape()?;
                        parent.children.push(Node::Text(text.into_owned()));
                    }
                }
                Event::CData(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = std::str::from_utf8(&e.into_inner())?.to_string();
                        parent.children.push(Node::CData(text));
                    }
                }
                Event::Comment(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = std::str::from_utf8(&e)?.to_string();
                        parent.children.push(Node::Comment(text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(FgdcError::MalformedXml(format!("unclosed element <{}>", stack[stack.len() - 1].name)));
        }

        root.map(|root| Document { root })
            .ok_or_else(|| FgdcError::MalformedXml("document has no root element".to_string()))
    }

    fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) -> FgdcResult<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None if root.is_none() => *root = Some(element),
            None => return Err(FgdcError::MalformedXml("multiple root elements".to_string())),
        }
        Ok(())
    }

    /// Produce a copy of the document without the root's first child named `name`
    ///
    /// Returns `None` when the root has no such child.
    pub fn strip_child(&self, name: &str) -> Option<Stripped> {
        let (root, removed, position, joined_text) = self.root.without_child(name)?;
        Some(Stripped {
            document: Document { root },
            removed,
            position,
            joined_text,
        })
    }
}

impl Stripped {
    /// Rebuild the source document by putting the removed element back in place
    pub fn restore(&self) -> Document {
        let mut root = self.document.root.clone();
        let removed = Node::Element(self.removed.clone());

        let split = match (self.joined_text, self.position.checked_sub(1)) {
            (Some(at), Some(text_index)) => match root.children.get(text_index) {
                Some(Node::Text(text)) if text.is_char_boundary(at) => {
                    Some((text_index, text[..at].to_string(), text[at..].to_string()))
                }
                _ => None,
            },
            _ => None,
        };

        match split {
            Some((text_index, head, tail)) => {
                root.children.splice(
                    text_index..=text_index,
                    [Node::Text(head), removed, Node::Text(tail)],
                );
            }
            None => {
                let position = self.position.min(root.children.len());
                root.children.insert(position, removed);
            }
        }
        Document { root }
    }
}
