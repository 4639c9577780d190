use std::fmt;

use crate::scene::LayerNode;

/// How far below the root a render descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthLimit {
    #[default]
    Unlimited,
    /// `Levels(0)` renders the root alone.
    Levels(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("max depth {0} is out of range (expected -1 for unlimited or a level count >= 0)")]
pub struct InvalidDepth(pub i64);

impl DepthLimit {
    /// A node at `depth` gets a line.
    pub fn renders(&self, depth: usize) -> bool {
        match self {
            DepthLimit::Unlimited => true,
            DepthLimit::Levels(max) => depth <= *max,
        }
    }

    /// The children of a node at `depth` get visited.
    pub fn expands(&self, depth: usize) -> bool {
        match self {
            DepthLimit::Unlimited => true,
            DepthLimit::Levels(max) => depth < *max,
        }
    }

    /// The integer used on the wire and in config files, `-1` meaning unlimited.
    pub fn to_wire(&self) -> i64 {
        match self {
            DepthLimit::Unlimited => -1,
            DepthLimit::Levels(max) => *max as i64,
        }
    }
}

impl TryFrom<i64> for DepthLimit {
    type Error = InvalidDepth;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(DepthLimit::Unlimited),
            v if v >= 0 => usize::try_from(v)
                .map(DepthLimit::Levels)
                .map_err(|_| InvalidDepth(value)),
            _ => Err(InvalidDepth(value)),
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthLimit::Unlimited => write!(f, "unlimited"),
            DepthLimit::Levels(max) => write!(f, "{}", max),
        }
    }
}

/// Options for a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub max_depth: DepthLimit,
    pub show_types: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(&self, max_depth: DepthLimit) -> Self {
        Self {
            max_depth,
            show_types: self.show_types,
        }
    }

    pub fn with_types(&self, show_types: bool) -> Self {
        Self {
            max_depth: self.max_depth,
            show_types,
        }
    }
}

/// Renders a layer tree rooted at `self`.
pub trait Render {
    fn render(&self, options: &RenderOptions) -> String;
}

impl<N: LayerNode> Render for N {
    fn render(&self, options: &RenderOptions) -> String {
        crate::renderer::LayerTreeRenderer::new(*options).render(self)
    }
}
