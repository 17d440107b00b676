use crate::dom::source::{ElementSource, Presenter};
use crate::foundation::core::{Rect, Vec2};
use crate::foundation::error::{PrllxError, PrllxResult};
use crate::output::transform::Translation;
use anyhow::Context as _;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Index of a node inside a [`MemoryDocument`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// One element of a [`MemoryDocument`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoryNode {
    /// Optional element id, matched by `#id` selectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Layout box in page space (scroll offset zero, no transform).
    pub rect: Rect,
    /// Parent element, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    /// Declared attributes.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Class list.
    #[serde(default)]
    pub classes: BTreeSet<String>,
    /// Currently applied translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Translation>,
}

impl MemoryNode {
    /// A bare node with the given page-space box.
    pub fn new(rect: Rect) -> Self {
        Self {
            id: None,
            rect,
            parent: None,
            attributes: BTreeMap::new(),
            classes: BTreeSet::new(),
            transform: None,
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Declare an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    /// Set the parent element.
    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// In-memory element layer, usable as a [`crate::Document`].
///
/// Client rects follow browser semantics: the page-space box is shifted by the document
/// scroll offset and by every translation applied to the node and its ancestors.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoryDocument {
    nodes: Vec<MemoryNode>,
    #[serde(default)]
    scroll: Vec2,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from a JSON reader and validate its parent links.
    pub fn from_reader<R: std::io::Read>(r: R) -> PrllxResult<Self> {
        let doc: Self = serde_json::from_reader(r)
            .map_err(|e| PrllxError::serde(format!("parse document JSON: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PrllxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open document JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that every parent link points at an earlier node.
    ///
    /// Parents preceding children rules out cycles.
    pub fn validate(&self) -> PrllxResult<()> {
        for (idx, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent
                && parent.0 >= idx
            {
                return Err(PrllxError::validation(format!(
                    "node {idx} has parent {} which does not precede it",
                    parent.0
                )));
            }
        }
        Ok(())
    }

    /// Append a node. Its parent, if any, must already exist.
    pub fn push(&mut self, node: MemoryNode) -> PrllxResult<NodeId> {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = node.parent
            && parent.0 >= id.0
        {
            return Err(PrllxError::validation(format!(
                "parent {} does not exist yet",
                parent.0
            )));
        }
        self.nodes.push(node);
        Ok(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` when the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> Option<&MemoryNode> {
        self.nodes.get(id.0)
    }

    /// Mutably borrow a node, e.g. to move it between resizes.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut MemoryNode> {
        self.nodes.get_mut(id.0)
    }

    /// Look a node up by element id.
    pub fn find(&self, element_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(element_id))
            .map(NodeId)
    }

    /// Document scroll offset.
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Set the document scroll offset.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// Applied transform of a node as CSS, if any.
    pub fn transform_css(&self, id: NodeId) -> Option<String> {
        self.node(id).and_then(|n| n.transform).map(Translation::to_css)
    }

    /// Return `true` when the node carries `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).is_some_and(|n| n.classes.contains(class))
    }

    fn get(&self, id: NodeId) -> PrllxResult<&MemoryNode> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| PrllxError::validation(format!("unknown element {}", id.0)))
    }

    fn client_rect(&self, id: NodeId) -> PrllxResult<Rect> {
        let node = self.get(id)?;
        let mut offset = Vec2::ZERO;
        let mut cursor = Some(id);
        // Bounded walk: `node_mut` can rewire parents after validation.
        for _ in 0..=self.nodes.len() {
            let Some(cur) = cursor else { break };
            let n = self.get(cur)?;
            if let Some(t) = n.transform {
                offset += t.offset();
            }
            cursor = n.parent;
        }
        Ok(node.rect + offset - self.scroll)
    }
}

impl ElementSource for MemoryDocument {
    type Handle = NodeId;

    fn query_all(&self, selector: &str) -> PrllxResult<Vec<NodeId>> {
        let sel = Selector::parse(selector)?;
        Ok(self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| sel.matches(n))
            .map(|(i, _)| NodeId(i))
            .collect())
    }

    fn bounding_rect(&self, element: &NodeId) -> PrllxResult<Rect> {
        self.client_rect(*element)
    }

    fn parent_bounding_rect(&self, element: &NodeId) -> PrllxResult<Option<Rect>> {
        match self.get(*element)?.parent {
            Some(parent) => self.client_rect(parent).map(Some),
            None => Ok(None),
        }
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.node(*element)?.attributes.get(name).cloned()
    }
}

impl Presenter<NodeId> for MemoryDocument {
    fn set_transform(&mut self, element: &NodeId, transform: &Translation) {
        match self.node_mut(*element) {
            Some(n) => n.transform = Some(*transform),
            None => tracing::debug!(element = element.0, "set_transform on unknown element"),
        }
    }

    fn clear_transform(&mut self, element: &NodeId) {
        if let Some(n) = self.node_mut(*element) {
            n.transform = None;
        }
    }

    fn add_class(&mut self, element: &NodeId, class: &str) {
        match self.node_mut(*element) {
            Some(n) => {
                n.classes.insert(class.to_owned());
            }
            None => tracing::debug!(element = element.0, "add_class on unknown element"),
        }
    }

    fn remove_class(&mut self, element: &NodeId, class: &str) {
        if let Some(n) = self.node_mut(*element) {
            n.classes.remove(class);
        }
    }
}

/// The selector subset understood by [`MemoryDocument`].
#[derive(Clone, Debug, PartialEq, Eq)]
enum Selector {
    Any,
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
}

impl Selector {
    fn parse(raw: &str) -> PrllxResult<Self> {
        let s = raw.trim();
        let unsupported = || PrllxError::validation(format!("unsupported selector '{raw}'"));

        if s == "*" {
            return Ok(Self::Any);
        }
        if let Some(id) = s.strip_prefix('#') {
            return ident(id).map(Self::Id).ok_or_else(unsupported);
        }
        if let Some(class) = s.strip_prefix('.') {
            return ident(class).map(Self::Class).ok_or_else(unsupported);
        }
        let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) else {
            return Err(unsupported());
        };
        match inner.split_once('=') {
            None => ident(inner.trim())
                .map(|name| Self::Attr { name, value: None })
                .ok_or_else(unsupported),
            Some((name, value)) => {
                let name = ident(name.trim()).ok_or_else(unsupported)?;
                let value = unquote(value.trim()).ok_or_else(unsupported)?;
                Ok(Self::Attr {
                    name,
                    value: Some(value.to_owned()),
                })
            }
        }
    }

    fn matches(&self, node: &MemoryNode) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => node.id.as_deref() == Some(id.as_str()),
            Self::Class(class) => node.classes.contains(class),
            Self::Attr { name, value } => match (node.attributes.get(name), value) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected,
                (None, _) => false,
            },
        }
    }
}

fn ident(s: &str) -> Option<String> {
    let ok = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    ok.then(|| s.to_owned())
}

fn unquote(s: &str) -> Option<&str> {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q) {
            return inner.strip_suffix(q);
        }
    }
    ident(s).map(|_| s)
}

#[cfg(test)]
#[path = "../../tests/unit/dom/memory.rs"]
mod tests;
