use serde::{Deserialize, Serialize};

use crate::renderer::{DepthLimit, InvalidDepth, RenderOptions};

/// Messages the panel sends to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    #[serde(rename_all = "camelCase")]
    GenerateLayersTree { max_depth: i64, show_types: bool },
    Cancel,
}

/// Messages the plugin sends back to the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    LayersTreeResult { tree: String },
}

impl UiMessage {
    pub fn generate(options: &RenderOptions) -> Self {
        UiMessage::GenerateLayersTree {
            max_depth: options.max_depth.to_wire(),
            show_types: options.show_types,
        }
    }
}

/// Decodes the render options carried by a generate request.
pub fn render_options(max_depth: i64, show_types: bool) -> Result<RenderOptions, InvalidDepth> {
    Ok(RenderOptions {
        max_depth: DepthLimit::try_from(max_depth)?,
        show_types,
    })
}
