//! In-memory DOM for the host page
//!
//! The host page is parsed once into an arena of nodes. Section renderers
//! only ever touch it through element ids, replacing a container's children
//! wholesale or setting attributes, so the tree never needs more than the
//! operations below.

mod parser;
mod patch;

pub use patch::{Applied, Assignment};

use crate::helpers::{decode_entities, escape_attr, html_escape};

/// Index of a node in the [`Dom`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Root,
    /// `<!DOCTYPE ...>` or another `<!...>` declaration, kept verbatim
    Declaration(String),
    Element {
        tag: String,
        /// `None` marks a bare attribute such as `required`
        attrs: Vec<(String, Option<String>)>,
    },
    /// Raw HTML text (entities are kept encoded)
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    children: Vec<NodeId>,
}

/// A parsed HTML document
#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
}

impl Dom {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        let mut dom = Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                children: Vec::new(),
            }],
        };
        let root = dom.root();
        parser::parse_into(&mut dom, root, html);
        dom
    }

    /// The synthetic root node holding the top-level nodes
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Tag name of an element node
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Element children of a node, in document order
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .filter(|c| self.tag_name(*c).is_some())
            .collect()
    }

    /// All nodes below `id` in document order, excluding `id` itself
    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    /// Find the first element (in document order) carrying `id="..."`
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|n| self.attribute(*n, "id") == Some(element_id))
    }

    /// Elements below `root` with the given tag name
    pub fn elements_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|n| self.tag_name(*n) == Some(tag))
            .collect()
    }

    /// Elements below `root` with any of the given tag names
    pub fn elements_by_tags(&self, root: NodeId, tags: &[&str]) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|n| self.tag_name(*n).is_some_and(|t| tags.contains(&t)))
            .collect()
    }

    /// Elements below `root` whose class list contains `class`
    pub fn elements_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    /// First element below `root` whose class list contains `class`
    pub fn query_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|n| self.has_class(*n, class))
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attribute(id, "class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Attribute value of an element; `Some("")` for bare attributes
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_deref().unwrap_or("")),
            _ => None,
        }
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[id.0].kind {
            match attrs.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = Some(value.to_string()),
                None => attrs.push((name.to_string(), Some(value.to_string()))),
            }
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[id.0].kind {
            attrs.retain(|(k, _)| k != name);
        }
    }

    /// Replace all children with a single text node (like `textContent =`)
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.nodes[id.0].children.clear();
        if !text.is_empty() {
            self.append(id, NodeKind::Text(html_escape(text)));
        }
    }

    /// Replace all children with the parsed `html` (like `innerHTML =`)
    pub fn set_inner_html(&mut self, id: NodeId, html: &str) {
        self.nodes[id.0].children.clear();
        parser::parse_into(self, id, html);
    }

    /// Concatenated, entity-decoded text below `id`
    pub fn text_content(&self, id: NodeId) -> String {
        let raw: String = self
            .descendants(id)
            .into_iter()
            .filter_map(|n| match &self.nodes[n.0].kind {
                NodeKind::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        decode_entities(&raw)
    }

    /// Set `document.title`, creating the `<title>` in `<head>` when missing
    pub fn set_title(&mut self, title: &str) {
        let root = self.root();
        if let Some(el) = self.elements_by_tag(root, "title").first().copied() {
            self.set_text(el, title);
            return;
        }
        match self.elements_by_tag(root, "head").first().copied() {
            Some(head) => {
                let el = self.append(
                    head,
                    NodeKind::Element {
                        tag: "title".to_string(),
                        attrs: Vec::new(),
                    },
                );
                self.set_text(el, title);
            }
            None => tracing::debug!("No <head> to hold the title"),
        }
    }

    pub fn title(&self) -> Option<String> {
        self.elements_by_tag(self.root(), "title")
            .first()
            .map(|el| self.text_content(*el))
    }

    /// The `<meta name="...">` element
    pub fn meta(&self, name: &str) -> Option<NodeId> {
        self.elements_by_tag(self.root(), "meta")
            .into_iter()
            .find(|m| self.attribute(*m, "name") == Some(name))
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in &self.nodes[id.0].children {
            self.write_node(*child, &mut out);
        }
        out
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        self.inner_html(self.root())
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        match &node.kind {
            NodeKind::Root => {
                for child in &node.children {
                    self.write_node(*child, out);
                }
            }
            NodeKind::Declaration(decl) => out.push_str(decl),
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeKind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    if let Some(value) = value {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }
                out.push('>');
                if parser::is_void(tag) {
                    return;
                }
                for child in &node.children {
                    self.write_node(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}
