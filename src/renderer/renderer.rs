use tracing::trace;

use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::scene::LayerNode;

/// Draws a layer hierarchy as box-drawing tree art, one line per node.
///
/// ```
/// use layertree::{LayerTreeRenderer, Node, RenderOptions};
///
/// let page = Node::container(
///     "Page",
///     "PAGE",
///     vec![Node::container("", "FRAME", vec![]), Node::leaf("Icon", "VECTOR")],
/// );
/// let tree = LayerTreeRenderer::new(RenderOptions::new()).render(&page);
/// assert_eq!(tree, "Page\n├── <frame>\n└── Icon\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerTreeRenderer {
    options: RenderOptions,
}

impl LayerTreeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render<N: LayerNode>(&self, root: &N) -> String {
        let mut output = String::new();
        self.render_node(root, 0, true, &AncestorPath::new(), &mut output);
        output
    }

    /// The rendered tree split into lines, without terminators.
    pub fn render_lines<N: LayerNode>(&self, root: &N) -> Vec<String> {
        self.render(root).lines().map(str::to_string).collect()
    }

    /// Number of nodes a render of `root` would visit.
    pub fn count_nodes<N: LayerNode>(&self, root: &N) -> usize {
        self.count_from(root, 0)
    }

    fn render_node<N: LayerNode>(
        &self,
        node: &N,
        depth: usize,
        is_last: bool,
        ancestors: &AncestorPath,
        output: &mut String,
    ) {
        if !self.options.max_depth.renders(depth) {
            return;
        }

        output.push_str(&ancestors.indent());
        if depth > 0 {
            output.push_str(branch_glyph(is_last));
        }
        output.push_str(&display_name(node));
        if self.options.show_types {
            output.push_str(&type_annotation(node));
        }
        output.push('\n');

        let Some(children) = node.children() else {
            return;
        };
        if !self.options.max_depth.expands(depth) {
            trace!(depth, name = node.name(), "depth limit reached");
            return;
        }

        // Depth-1 lines hang directly off the root, so the root adds no column.
        let child_path = if depth == 0 {
            ancestors.clone()
        } else {
            ancestors.with(is_last)
        };

        for (index, child) in children.iter().enumerate() {
            let child_is_last = index == children.len() - 1;
            self.render_node(child, depth + 1, child_is_last, &child_path, output);
        }
    }

    fn count_from<N: LayerNode>(&self, node: &N, depth: usize) -> usize {
        if !self.options.max_depth.renders(depth) {
            return 0;
        }
        let below = match node.children() {
            Some(children) if self.options.max_depth.expands(depth) => children
                .iter()
                .map(|child| self.count_from(child, depth + 1))
                .sum(),
            _ => 0,
        };
        1 + below
    }
}
