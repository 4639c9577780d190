use std::borrow::Cow;

use crate::scene::LayerNode;

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const CONTINUATION: &str = "│   ";
pub const BLANK: &str = "    ";

/// For every ancestor between the root and the current node, whether that
/// ancestor was the last of its siblings. The root has no siblings and so
/// never appears here.
///
/// Values are never mutated: descending produces a new, longer path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorPath {
    last_flags: Vec<bool>,
}

impl AncestorPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(&self, is_last: bool) -> Self {
        let mut last_flags = Vec::with_capacity(self.last_flags.len() + 1);
        last_flags.extend_from_slice(&self.last_flags);
        last_flags.push(is_last);
        Self { last_flags }
    }

    pub fn len(&self) -> usize {
        self.last_flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_flags.is_empty()
    }

    /// One cell per ancestor: blank under a closed branch, a bar otherwise.
    pub fn indent(&self) -> String {
        self.last_flags
            .iter()
            .map(|&is_last| if is_last { BLANK } else { CONTINUATION })
            .collect()
    }
}

pub fn branch_glyph(is_last: bool) -> &'static str {
    if is_last {
        LAST_BRANCH
    } else {
        BRANCH
    }
}

/// The trimmed name, or `<type>` in lowercase when the name is blank.
pub fn display_name<N: LayerNode>(node: &N) -> Cow<'_, str> {
    let name = node.name().trim();
    if name.is_empty() {
        Cow::Owned(format!("<{}>", node.node_type().to_lowercase()))
    } else {
        Cow::Borrowed(name)
    }
}

pub fn type_annotation<N: LayerNode>(node: &N) -> String {
    format!(" ({})", node.node_type())
}
