//! mdrules core library
//!
//! Maps a parsed markdown document tree onto UI element descriptions
//! (text runs, images, containers, lightbox overlays) for a host UI framework.
//!
//! ```
//! use mdrules_core::{NodeRenderer, RenderOptions, StyleTable};
//!
//! let renderer = NodeRenderer::new(
//!     StyleTable::default(),
//!     RenderOptions::new().on_link(|target| println!("open {target}")),
//! );
//! let root = renderer.render_markdown("Hello [world](https://example.com)");
//! assert_eq!(root.text_content(), "Hello world");
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod node;
pub mod options;
pub mod parser;
pub mod renderer;
pub mod state;
pub mod style;

pub use config::Config;
pub use element::{Content, Element, ImageSource, PressHandler};
pub use error::{Error, Result};
pub use node::{Node, NodeType};
pub use options::{RenderConfig, RenderOptions};
pub use renderer::NodeRenderer;
pub use state::RenderState;
pub use style::{ElementStyle, StyleDescriptor, StyleKey, StyleTable};
