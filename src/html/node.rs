/// One node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data, escaped on serialization.
    Text(String),
    /// Pre-formed markup written verbatim. Only the notification composer
    /// uses this, for message lines that intentionally carry inline HTML;
    /// callers own the content of these strings.
    Raw(String),
}

/// An element with its attributes (kept in insertion order) and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Shorthand for the ubiquitous inline `style` attribute.
    pub fn style(self, css: impl Into<String>) -> Self {
        self.attr("style", css)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append an escaped text child.
    pub fn text(mut self, s: impl Into<String>) -> Self {
        self.children.push(Node::Text(s.into()));
        self
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

/// Start a new element.
pub fn el(tag: impl Into<String>) -> Element {
    Element::new(tag)
}

/// An escaped text node.
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// A verbatim markup node. See [`Node::Raw`] for the trust contract.
pub fn raw(s: impl Into<String>) -> Node {
    Node::Raw(s.into())
}
