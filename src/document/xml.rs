//! XML document tree
//!
//! Parses a whole XML document into a flat arena of element nodes. Each node
//! keeps an index back-reference to its parent, so path expressions can walk
//! up (`..`) as well as down (children, descendants) without reference
//! cycles.
//!
//! Element and attribute names are stored without their namespace prefix;
//! the flux path dialect is namespace-agnostic.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::DocumentError;

/// Index of a node inside an [`XmlDocument`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single element node.
#[derive(Debug, Clone)]
pub struct XmlNode {
    /// Local tag name (namespace prefix stripped).
    pub tag: String,
    /// Trimmed character content of the element itself, if any.
    pub text: Option<String>,
    /// Attribute name to value.
    pub attributes: HashMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<NodeId>,
    /// Owning element, `None` for the root.
    pub parent: Option<NodeId>,
}

impl XmlNode {
    fn new(tag: String, attributes: HashMap<String, String>, parent: Option<NodeId>) -> Self {
        Self {
            tag,
            text: None,
            attributes,
            children: Vec::new(),
            parent,
        }
    }
}

/// An XML document held as an immutable arena of element nodes.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    nodes: Vec<XmlNode>,
    root: NodeId,
}

impl XmlDocument {
    /// Parse a document from its textual content.
    pub fn parse_str(content: &str) -> Result<Self, DocumentError> {
        let (nodes, root) =
            build_arena(content).map_err(|e| DocumentError::MalformedXml(format!("{:#}", e)))?;
        let root = root.ok_or(DocumentError::NoRoot)?;
        Ok(Self { nodes, root })
    }

    /// Read and parse a document from disk.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content)
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &XmlNode {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Trimmed text content of an element, `None` when it carries none.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).text.as_deref()
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attributes.get(name).map(String::as_str)
    }

    /// Every element below `id` in document (pre-)order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }
}

/// Event loop building the arena. Start/Empty push nodes, Text/CData attach
/// content to the innermost open element, End pops it.
fn build_arena(content: &str) -> Result<(Vec<XmlNode>, Option<NodeId>)> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut nodes: Vec<XmlNode> = Vec::new();
    let mut open: Vec<NodeId> = Vec::new();
    let mut root: Option<NodeId> = None;

    loop {
        match reader.read_event().context("XML parsing error")? {
            Event::Start(start) => {
                let id = append_element(&mut nodes, &mut root, open.last().copied(), &start)?;
                open.push(id);
            }
            Event::Empty(start) => {
                append_element(&mut nodes, &mut root, open.last().copied(), &start)?;
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Text(text) => {
                if let Some(&id) = open.last() {
                    let chunk = text.unescape().context("Invalid character data")?;
                    append_text(&mut nodes[id.0], &chunk);
                }
            }
            Event::CData(cdata) => {
                if let Some(&id) = open.last() {
                    let chunk = String::from_utf8_lossy(&cdata);
                    append_text(&mut nodes[id.0], &chunk);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((nodes, root))
}

fn append_element(
    nodes: &mut Vec<XmlNode>,
    root: &mut Option<NodeId>,
    parent: Option<NodeId>,
    start: &BytesStart<'_>,
) -> Result<NodeId> {
    let tag = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut attributes = HashMap::new();
    for attribute in start.attributes() {
        let attribute = attribute.context("Invalid attribute")?;
        let name = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute.unescape_value().context("Invalid attribute value")?;
        attributes.insert(name, value.into_owned());
    }

    let id = NodeId(nodes.len());
    nodes.push(XmlNode::new(tag, attributes, parent));
    match parent {
        Some(parent) => nodes[parent.0].children.push(id),
        None => {
            if root.is_none() {
                *root = Some(id);
            }
        }
    }
    Ok(id)
}

fn append_text(node: &mut XmlNode, chunk: &str) {
    let trimmed = chunk.trim();
    if trimmed.is_empty() {
        return;
    }
    match &mut node.text {
        Some(text) => text.push_str(trimmed),
        None => node.text = Some(trimmed.to_string()),
    }
}
