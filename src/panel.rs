//! Headless panel controller: the option set, the request it sends, and the
//! display state it keeps while a result is pending or shown.

use tracing::debug;

use crate::protocol::{PluginMessage, UiMessage};
use crate::renderer::{DepthLimit, RenderOptions};

pub const EMPTY_STATE_MESSAGE: &str = "No layers to show. Select a layer or open a page with layers.";

/// An entry of the depth dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthChoice {
    pub label: &'static str,
    pub limit: DepthLimit,
}

pub const DEPTH_CHOICES: [DepthChoice; 7] = [
    DepthChoice {
        label: "All levels",
        limit: DepthLimit::Unlimited,
    },
    DepthChoice {
        label: "Top level only",
        limit: DepthLimit::Levels(0),
    },
    DepthChoice {
        label: "Up to 1 level",
        limit: DepthLimit::Levels(1),
    },
    DepthChoice {
        label: "Up to 2 levels",
        limit: DepthLimit::Levels(2),
    },
    DepthChoice {
        label: "Up to 3 levels",
        limit: DepthLimit::Levels(3),
    },
    DepthChoice {
        label: "Up to 4 levels",
        limit: DepthLimit::Levels(4),
    },
    DepthChoice {
        label: "Up to 5 levels",
        limit: DepthLimit::Levels(5),
    },
];

/// Finds the dropdown entry for a limit, if the dropdown offers it.
pub fn depth_choice(limit: DepthLimit) -> Option<&'static DepthChoice> {
    DEPTH_CHOICES.iter().find(|choice| choice.limit == limit)
}

#[derive(Debug, Clone, Default)]
pub struct PanelController {
    options: RenderOptions,
    tree: Option<String>,
    loading: bool,
    copied: bool,
}

impl PanelController {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn select_depth(&mut self, choice: &DepthChoice) {
        self.options = self.options.with_max_depth(choice.limit);
    }

    pub fn set_show_types(&mut self, show_types: bool) {
        self.options = self.options.with_types(show_types);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn tree(&self) -> Option<&str> {
        self.tree.as_deref()
    }

    /// Starts a new request, discarding the previous result.
    pub fn request_generate(&mut self) -> UiMessage {
        self.loading = true;
        self.tree = None;
        self.copied = false;
        debug!(options = ?self.options, "requesting layers tree");
        UiMessage::generate(&self.options)
    }

    pub fn request_cancel(&self) -> UiMessage {
        UiMessage::Cancel
    }

    pub fn receive(&mut self, message: PluginMessage) {
        match message {
            PluginMessage::LayersTreeResult { tree } => {
                debug!(bytes = tree.len(), "received layers tree");
                self.tree = Some(tree);
                self.loading = false;
            }
        }
    }

    /// Text for the clipboard. `None` until a non-empty tree is shown.
    pub fn copy(&mut self) -> Option<&str> {
        match self.tree.as_deref() {
            Some(tree) if !tree.is_empty() => {
                self.copied = true;
                Some(tree)
            }
            _ => None,
        }
    }

    /// What the result area shows: the tree, the empty-state message for an
    /// empty result, or nothing before any result arrived.
    pub fn display(&self) -> &str {
        match self.tree.as_deref() {
            Some("") => EMPTY_STATE_MESSAGE,
            Some(tree) => tree,
            None => "",
        }
    }

    pub fn generate_label(&self) -> &'static str {
        if self.loading {
            "Generating..."
        } else {
            "Generate"
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy to Clipboard"
        }
    }
}
