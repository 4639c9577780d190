use serde::{Deserialize, Serialize};

/// Anything the tree renderer can walk: a named, typed node with an
/// optional ordered list of children.
///
/// `children()` returns `None` for node kinds that cannot hold children,
/// which is different from a container that happens to be empty. The
/// renderer treats both the same way.
pub trait LayerNode: Sized {
    fn name(&self) -> &str;
    fn node_type(&self) -> &str;
    fn children(&self) -> Option<&[Self]>;
}

/// A scene-graph node as dumped by the host design tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// A node that cannot hold children (text, vector, ...).
    pub fn leaf(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            node_type: node_type.into(),
            children: None,
        }
    }

    /// A container node (page, frame, group, ...).
    pub fn container(
        name: impl Into<String>,
        node_type: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            node_type: node_type.into(),
            children: Some(children),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Depth-first search for the node carrying `id`, this node included.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children
            .iter()
            .flatten()
            .find_map(|child| child.find_by_id(id))
    }
}

impl LayerNode for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }
}
