use core_types::NodeId;

/// A node of the control's light DOM (the content projected into its slots).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        id: NodeId,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Node>,
    },
    Text {
        id: NodeId,
        text: String,
    },
    Comment {
        id: NodeId,
        text: String,
    },
}

impl Node {
    pub fn element(id: u32, name: &str) -> Self {
        Node::Element {
            id: NodeId(id),
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(id: u32, text: &str) -> Self {
        Node::Text {
            id: NodeId(id),
            text: text.to_string(),
        }
    }

    /// Builder: add an attribute to an element. No-op for other nodes.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: append a child to an element. No-op for other nodes.
    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn id(&self) -> NodeId {
        match self {
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
            Node::Comment { id, .. } => *id,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_deref().unwrap_or("")),
            _ => None,
        }
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        let Node::Element { attributes, .. } = self else {
            return;
        };
        match attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = Some(value.to_string()),
            None => attributes.push((name.to_string(), Some(value.to_string()))),
        }
    }

    /// Inclusive descendant test: `true` when `target` is this node or lives
    /// anywhere below it.
    pub fn contains(&self, target: NodeId) -> bool {
        if self.id() == target {
            return true;
        }
        match self {
            Node::Element { children, .. } => children.iter().any(|c| c.contains(target)),
            _ => false,
        }
    }
}
