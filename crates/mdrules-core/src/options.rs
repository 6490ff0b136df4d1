//! Rendering options
//!
//! Caller-supplied behavior: lightbox wrapping, image URI suffixes,
//! background images and the press callbacks registered on elements.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::element::ImageSource;
use crate::error::Result;
use crate::node::NodeType;

/// Invoked with the link target when a link element is pressed
pub type LinkCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Invoked when a lightbox opens or closes
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Opaque navigation handle passed through to lightbox elements
pub type Navigator = Arc<dyn Any + Send + Sync>;

/// Options recognized by the rendering rules
#[derive(Clone, Default)]
pub struct RenderOptions {
    pub enable_light_box: bool,
    pub navigator: Option<Navigator>,
    pub on_link: Option<LinkCallback>,
    pub on_image_open: Option<Callback>,
    pub on_image_close: Option<Callback>,
    /// Appended verbatim to every image target (e.g. `?w=100`)
    pub image_param: Option<String>,
    /// Background image per node type; only block quotes consume it
    pub bg_image: BTreeMap<NodeType, ImageSource>,
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("enable_light_box", &self.enable_light_box)
            .field("navigator", &self.navigator.is_some())
            .field("on_link", &self.on_link.is_some())
            .field("on_image_open", &self.on_image_open.is_some())
            .field("on_image_close", &self.on_image_close.is_some())
            .field("image_param", &self.image_param)
            .field("bg_image", &self.bg_image)
            .finish()
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_light_box(mut self, enabled: bool) -> Self {
        self.enable_light_box = enabled;
        self
    }

    pub fn navigator(mut self, navigator: Navigator) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn on_link(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_link = Some(Arc::new(callback));
        self
    }

    pub fn on_image_open(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_image_open = Some(Arc::new(callback));
        self
    }

    pub fn on_image_close(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_image_close = Some(Arc::new(callback));
        self
    }

    pub fn image_param(mut self, param: impl Into<String>) -> Self {
        self.image_param = Some(param.into());
        self
    }

    pub fn bg_image(mut self, node_type: NodeType, source: ImageSource) -> Self {
        self.bg_image.insert(node_type, source);
        self
    }

    /// Image target with the configured suffix appended
    pub fn image_uri(&self, target: &str) -> String {
        match &self.image_param {
            Some(param) => format!("{}{}", target, param),
            None => target.to_string(),
        }
    }
}

/// The serializable subset of [`RenderOptions`], as read from config files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub enable_light_box: bool,
    pub image_param: Option<String>,
    /// Node type name (`blockQuote`) -> asset name
    pub bg_image: BTreeMap<String, String>,
}

impl RenderConfig {
    pub fn into_options(self) -> Result<RenderOptions> {
        let mut options = RenderOptions::new().enable_light_box(self.enable_light_box);
        options.image_param = self.image_param;
        for (name, asset) in self.bg_image {
            options = options.bg_image(name.parse::<NodeType>()?, ImageSource::Asset(asset));
        }
        Ok(options)
    }
}
