//! UI element descriptions
//!
//! The output of a render pass: a closed set of UI primitives (text run,
//! image, container view, lightbox overlay) handed to the host UI framework.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::options::{Callback, LinkCallback, Navigator};
use crate::style::ElementStyle;

/// Where an image comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSource {
    /// Remote image, fetched by the host
    Uri(String),
    /// Asset bundled with the host application
    Asset(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeMode {
    Cover,
}

/// Content of a text run
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// Press behavior registered on a pressable text run
#[derive(Clone)]
pub struct PressHandler {
    target: Option<String>,
    callback: Option<LinkCallback>,
}

impl PressHandler {
    /// Calls `callback` with `target` on press; a missing callback makes it a no-op
    pub fn link(target: impl Into<String>, callback: Option<LinkCallback>) -> Self {
        Self {
            target: Some(target.into()),
            callback,
        }
    }

    pub fn noop() -> Self {
        Self {
            target: None,
            callback: None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Dispatch a press, as the host framework would on tap
    pub fn press(&self) {
        if let (Some(target), Some(callback)) = (&self.target, &self.callback) {
            callback(target);
        }
    }
}

impl fmt::Debug for PressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PressHandler")
            .field("target", &self.target)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl Serialize for PressHandler {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.target.serialize(serializer)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextRun {
    pub key: String,
    pub style: ElementStyle,
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<PressHandler>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageElement {
    pub key: String,
    pub style: ElementStyle,
    pub source: ImageSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_mode: Option<ResizeMode>,
}

/// Container laying out its children
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub key: String,
    pub style: ElementStyle,
    pub children: Vec<Element>,
}

/// Zoomable overlay wrapping a single image
#[derive(Clone, Serialize)]
pub struct Lightbox {
    pub key: String,
    pub active_props: ElementStyle,
    #[serde(skip)]
    pub navigator: Option<Navigator>,
    #[serde(skip)]
    pub on_open: Option<Callback>,
    #[serde(skip)]
    pub on_close: Option<Callback>,
    pub child: Box<Element>,
}

impl Lightbox {
    pub fn open(&self) {
        if let Some(on_open) = &self.on_open {
            on_open();
        }
    }

    pub fn close(&self) {
        if let Some(on_close) = &self.on_close {
            on_close();
        }
    }
}

impl fmt::Debug for Lightbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lightbox")
            .field("key", &self.key)
            .field("active_props", &self.active_props)
            .field("navigator", &self.navigator.is_some())
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("child", &self.child)
            .finish()
    }
}

/// One UI element
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Element {
    Text(TextRun),
    Image(ImageElement),
    View(View),
    Lightbox(Lightbox),
}

impl Element {
    pub fn text(key: impl Into<String>, style: ElementStyle, content: Content) -> Self {
        Element::Text(TextRun {
            key: key.into(),
            style,
            content,
            on_press: None,
        })
    }

    pub fn pressable(
        key: impl Into<String>,
        style: ElementStyle,
        content: Content,
        on_press: PressHandler,
    ) -> Self {
        Element::Text(TextRun {
            key: key.into(),
            style,
            content,
            on_press: Some(on_press),
        })
    }

    pub fn view(key: impl Into<String>, style: ElementStyle, children: Vec<Element>) -> Self {
        Element::View(View {
            key: key.into(),
            style,
            children,
        })
    }

    pub fn image(key: impl Into<String>, style: ElementStyle, source: ImageSource) -> Self {
        Element::Image(ImageElement {
            key: key.into(),
            style,
            source,
            resize_mode: None,
        })
    }

    /// Short name of the primitive, as used in outlines
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "Text",
            Element::Image(_) => "Image",
            Element::View(_) => "View",
            Element::Lightbox(_) => "Lightbox",
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Element::Text(t) => &t.key,
            Element::Image(i) => &i.key,
            Element::View(v) => &v.key,
            Element::Lightbox(l) => &l.key,
        }
    }

    /// The element's own style (a lightbox reports its active props)
    pub fn style(&self) -> &ElementStyle {
        match self {
            Element::Text(t) => &t.style,
            Element::Image(i) => &i.style,
            Element::View(v) => &v.style,
            Element::Lightbox(l) => &l.active_props,
        }
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Element::Text(TextRun {
                content: Content::Children(children),
                ..
            }) => children,
            Element::View(v) => &v.children,
            Element::Lightbox(l) => std::slice::from_ref(l.child.as_ref()),
            _ => &[],
        }
    }

    /// Literal text held directly by this element, if any
    pub fn literal(&self) -> Option<&str> {
        match self {
            Element::Text(TextRun {
                content: Content::Text(text),
                ..
            }) => Some(text),
            _ => None,
        }
    }

    /// Concatenated literal text of the whole subtree, in document order
    pub fn text_content(&self) -> String {
        self.walk().filter_map(Element::literal).collect()
    }

    pub fn press_handler(&self) -> Option<&PressHandler> {
        match self {
            Element::Text(t) => t.on_press.as_ref(),
            _ => None,
        }
    }

    pub fn is_pressable(&self) -> bool {
        self.press_handler().is_some()
    }

    /// Pre-order traversal of this element and all descendants
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

pub struct Walk<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children().iter().rev());
        Some(next)
    }
}
