use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::scene::types::{LayerNode, Node};

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to read scene dump {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scene dump: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("selected node {0:?} is not on the current page")]
    UnknownSelection(String),
}

/// What the renderer needs from the host: the current page and the
/// current selection, in selection order.
pub trait SceneGraph {
    type Node: LayerNode;

    fn current_page(&self) -> &Self::Node;
    fn selection(&self) -> Vec<&Self::Node>;
}

/// The node a render starts from: the first selected node, or the whole
/// page when nothing is selected.
pub fn resolve_root<G: SceneGraph>(scene: &G) -> &G::Node {
    scene
        .selection()
        .into_iter()
        .next()
        .unwrap_or_else(|| scene.current_page())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScene {
    current_page: Node,
    #[serde(default)]
    selection: Vec<String>,
}

/// A scene graph loaded from a JSON dump of the host document.
#[derive(Debug, Clone)]
pub struct SceneDocument {
    current_page: Node,
    selection: Vec<String>,
}

impl SceneDocument {
    /// Builds a document, checking that every selected id exists on the page.
    pub fn new(current_page: Node, selection: Vec<String>) -> Result<Self, SceneError> {
        if let Some(missing) = selection
            .iter()
            .find(|id| current_page.find_by_id(id).is_none())
        {
            return Err(SceneError::UnknownSelection(missing.clone()));
        }

        Ok(Self {
            current_page,
            selection,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let raw: RawScene = serde_json::from_str(json)?;
        debug!(
            page = %raw.current_page.name,
            selected = raw.selection.len(),
            "loaded scene dump"
        );
        Self::new(raw.current_page, raw.selection)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selection
    }
}

impl SceneGraph for SceneDocument {
    type Node = Node;

    fn current_page(&self) -> &Node {
        &self.current_page
    }

    fn selection(&self) -> Vec<&Node> {
        self.selection
            .iter()
            .filter_map(|id| self.current_page.find_by_id(id))
            .collect()
    }
}
