//! XML path dialect
//!
//! A small ElementTree-flavoured subset. Steps are separated by `/`:
//! - `name` selects child elements with that tag, `*` any child
//! - `.` is the context itself, `..` its parent
//! - an empty step (written `//`) moves the following step onto the
//!   descendant axis, so `.//PRM` selects every descendant tagged `PRM`
//! - a final `@name` step selects an attribute of the frontier elements
//! - a leading `/` anchors the walk at the root element
//!
//! The dialect is total: expressions that parse oddly or match nothing
//! yield an empty result, never an error.

use std::collections::HashSet;

use crate::document::{NodeId, XmlDocument};

use super::{PathError, PathMatch, PathResolver};

/// Resolver over one parsed [`XmlDocument`].
pub struct XmlPathResolver<'a> {
    doc: &'a XmlDocument,
}

impl<'a> XmlPathResolver<'a> {
    pub fn new(doc: &'a XmlDocument) -> Self {
        Self { doc }
    }

    /// Parents of the frontier, deduplicated, document order preserved.
    fn parents(&self, frontier: &[NodeId]) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        frontier
            .iter()
            .filter_map(|&id| self.doc.parent(id))
            .filter(|&id| seen.insert(id))
            .collect()
    }

    /// Children (or descendants) of the frontier whose tag matches `name`.
    fn named(&self, frontier: &[NodeId], name: &str, descendant: bool) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for &id in frontier {
            let candidates = if descendant {
                self.doc.descendants(id)
            } else {
                self.doc.children(id).to_vec()
            };
            for candidate in candidates {
                if (name == "*" || self.doc.node(candidate).tag == name) && seen.insert(candidate) {
                    out.push(candidate);
                }
            }
        }
        out
    }

    fn descendants(&self, frontier: &[NodeId]) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for &id in frontier {
            for candidate in self.doc.descendants(id) {
                if seen.insert(candidate) {
                    out.push(candidate);
                }
            }
        }
        out
    }

    fn element_match(&self, id: NodeId) -> PathMatch<NodeId> {
        PathMatch {
            node: id,
            value: self.doc.text(id).map(str::to_string),
        }
    }
}

impl PathResolver for XmlPathResolver<'_> {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.doc.root()
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with('/')
    }

    fn resolve(
        &self,
        context: &NodeId,
        path: &str,
    ) -> Result<Vec<PathMatch<NodeId>>, PathError> {
        let (mut frontier, steps) = match path.strip_prefix('/') {
            Some(rest) => (vec![self.doc.root()], rest),
            None => (vec![*context], path),
        };

        let mut descendant = false;
        let mut attribute: Option<&str> = None;
        for step in steps.split('/') {
            if attribute.is_some() {
                // nothing is addressable below an attribute
                return Ok(Vec::new());
            }
            match step {
                "" => {
                    descendant = true;
                    continue;
                }
                "." => {}
                ".." => frontier = self.parents(&frontier),
                _ if step.starts_with('@') => {
                    if descendant {
                        frontier = self.descendants(&frontier);
                    }
                    attribute = Some(&step[1..]);
                }
                name => frontier = self.named(&frontier, name, descendant),
            }
            descendant = false;
            if frontier.is_empty() {
                return Ok(Vec::new());
            }
        }

        let matches = match attribute {
            Some(name) => frontier
                .into_iter()
                .filter_map(|id| {
                    self.doc.attribute(id, name).map(|value| PathMatch {
                        node: id,
                        value: Some(value.to_string()),
                    })
                })
                .collect(),
            None => frontier
                .into_iter()
                .map(|id| self.element_match(id))
                .collect(),
        };
        Ok(matches)
    }
}
