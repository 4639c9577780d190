//! Plugin side of the panel/plugin exchange.

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::protocol::{self, PluginMessage, ProtocolError, UiMessage};
use crate::renderer::{LayerTreeRenderer, RenderOptions};
use crate::scene::{resolve_root, SceneGraph};

/// What the session does after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(PluginMessage),
    Close,
}

pub struct PluginSession<G: SceneGraph> {
    scene: G,
}

impl<G: SceneGraph> PluginSession<G> {
    pub fn new(scene: G) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &G {
        &self.scene
    }

    /// Renders from the first selected node, or the current page.
    pub fn generate(&self, options: &RenderOptions) -> String {
        let root = resolve_root(&self.scene);
        let renderer = LayerTreeRenderer::new(*options);
        debug!(
            max_depth = %options.max_depth,
            show_types = options.show_types,
            nodes = renderer.count_nodes(root),
            "generating layers tree"
        );
        renderer.render(root)
    }

    pub fn handle(&self, message: UiMessage) -> Outcome {
        match message {
            UiMessage::GenerateLayersTree {
                max_depth,
                show_types,
            } => {
                let tree = match protocol::render_options(max_depth, show_types) {
                    Ok(options) => self.generate(&options),
                    Err(e) => {
                        // The root itself falls outside such a limit.
                        warn!("{}; replying with an empty tree", e);
                        String::new()
                    }
                };
                Outcome::Reply(PluginMessage::LayersTreeResult { tree })
            }
            UiMessage::Cancel => Outcome::Close,
        }
    }

    /// Handles messages from `reader` until cancel or end of input,
    /// writing replies to `writer`. Returns the number of replies sent.
    pub fn serve<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<usize, ProtocolError> {
        let mut replies = 0;

        while let Some(line) = protocol::read_line(reader)? {
            let message: UiMessage = match protocol::decode(&line) {
                Ok(message) => message,
                Err(e) => {
                    warn!("skipping message: {}", e);
                    continue;
                }
            };

            match self.handle(message) {
                Outcome::Reply(reply) => {
                    protocol::write_message(writer, &reply)?;
                    replies += 1;
                }
                Outcome::Close => {
                    info!("cancel received, closing session");
                    return Ok(replies);
                }
            }
        }

        debug!("input closed");
        Ok(replies)
    }
}
