//! # layertree
//!
//! Renders the layer hierarchy of a design document as an indented text
//! tree:
//!
//! ```text
//! Page 1
//! ├── Header
//! │   ├── Logo
//! │   └── <text>
//! └── Footer
//! ```
//!
//! The [`renderer`] is a pure function over any [`LayerNode`] tree. The
//! [`plugin`] and [`panel`] modules model the two ends of the host message
//! exchange described in [`protocol`].

pub mod config;
pub mod panel;
pub mod plugin;
pub mod protocol;
pub mod renderer;
pub mod scene;

pub use panel::*;
pub use plugin::*;
pub use protocol::*;
pub use renderer::*;
pub use scene::*;
