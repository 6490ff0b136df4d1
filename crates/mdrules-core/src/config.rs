//! Configuration file loading
//!
//! ```toml
//! [render]
//! enable_light_box = true
//! image_param = "?w=640"
//! bg_image = { blockQuote = "quote-bg.png" }
//!
//! [styles.heading1]
//! fontSize = 28
//! color = "#102030"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::options::{RenderConfig, RenderOptions};
use crate::renderer::NodeRenderer;
use crate::style::{StyleDescriptor, StyleTable};

/// Directory under the home directory holding the config file
const CONFIG_DIR: &str = ".mdrules";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    /// Style overrides, keyed by style name, applied over the built-in table
    pub styles: BTreeMap<String, StyleDescriptor>,
}

impl Config {
    /// `~/.mdrules/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load an explicit config file; a missing file is an error
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), styles = config.styles.len(), "config loaded");
        Ok(config)
    }

    /// Load the default config file, falling back to defaults when absent
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Built-in styles with the configured overrides applied
    pub fn style_table(&self) -> Result<StyleTable> {
        let overrides = StyleTable::from_named(self.styles.clone())?;
        Ok(StyleTable::default().overlay(&overrides))
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        self.render.clone().into_options()
    }

    pub fn renderer(&self) -> Result<NodeRenderer> {
        Ok(NodeRenderer::new(self.style_table()?, self.render_options()?))
    }
}
