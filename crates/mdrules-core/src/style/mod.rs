//! Style table
//!
//! Maps semantic style names (`heading1`, `blockQuote`, `listItemBullet`, ...)
//! to platform-neutral style descriptors. The renderer only ever reads it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

mod defaults;

/// Semantic style names referenced by the rendering rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    View,
    Text,
    Paragraph,
    ParagraphCenter,
    ParagraphWithImage,
    NoMargin,
    Heading,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Strong,
    Em,
    Del,
    U,
    InlineCode,
    CodeBlock,
    Mailto,
    Autolink,
    Image,
    ImageBox,
    List,
    ListRow,
    ListItem,
    ListItemText,
    ListItemBullet,
    ListItemNumber,
    Table,
    TableHeader,
    TableHeaderCell,
    TableRow,
    TableRowLast,
    TableRowCell,
    BlockQuote,
    BgImage,
    BgImageView,
    Hr,
    Br,
    Newline,
}

impl StyleKey {
    pub const ALL: [StyleKey; 41] = [
        StyleKey::View,
        StyleKey::Text,
        StyleKey::Paragraph,
        StyleKey::ParagraphCenter,
        StyleKey::ParagraphWithImage,
        StyleKey::NoMargin,
        StyleKey::Heading,
        StyleKey::Heading1,
        StyleKey::Heading2,
        StyleKey::Heading3,
        StyleKey::Heading4,
        StyleKey::Heading5,
        StyleKey::Heading6,
        StyleKey::Strong,
        StyleKey::Em,
        StyleKey::Del,
        StyleKey::U,
        StyleKey::InlineCode,
        StyleKey::CodeBlock,
        StyleKey::Mailto,
        StyleKey::Autolink,
        StyleKey::Image,
        StyleKey::ImageBox,
        StyleKey::List,
        StyleKey::ListRow,
        StyleKey::ListItem,
        StyleKey::ListItemText,
        StyleKey::ListItemBullet,
        StyleKey::ListItemNumber,
        StyleKey::Table,
        StyleKey::TableHeader,
        StyleKey::TableHeaderCell,
        StyleKey::TableRow,
        StyleKey::TableRowLast,
        StyleKey::TableRowCell,
        StyleKey::BlockQuote,
        StyleKey::BgImage,
        StyleKey::BgImageView,
        StyleKey::Hr,
        StyleKey::Br,
        StyleKey::Newline,
    ];

    /// Style for `heading{level}`; levels outside 1-6 have none
    pub fn heading(level: u8) -> Option<StyleKey> {
        match level {
            1 => Some(StyleKey::Heading1),
            2 => Some(StyleKey::Heading2),
            3 => Some(StyleKey::Heading3),
            4 => Some(StyleKey::Heading4),
            5 => Some(StyleKey::Heading5),
            6 => Some(StyleKey::Heading6),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::View => "view",
            StyleKey::Text => "text",
            StyleKey::Paragraph => "paragraph",
            StyleKey::ParagraphCenter => "paragraphCenter",
            StyleKey::ParagraphWithImage => "paragraphWithImage",
            StyleKey::NoMargin => "noMargin",
            StyleKey::Heading => "heading",
            StyleKey::Heading1 => "heading1",
            StyleKey::Heading2 => "heading2",
            StyleKey::Heading3 => "heading3",
            StyleKey::Heading4 => "heading4",
            StyleKey::Heading5 => "heading5",
            StyleKey::Heading6 => "heading6",
            StyleKey::Strong => "strong",
            StyleKey::Em => "em",
            StyleKey::Del => "del",
            StyleKey::U => "u",
            StyleKey::InlineCode => "inlineCode",
            StyleKey::CodeBlock => "codeBlock",
            StyleKey::Mailto => "mailto",
            StyleKey::Autolink => "autolink",
            StyleKey::Image => "image",
            StyleKey::ImageBox => "imageBox",
            StyleKey::List => "list",
            StyleKey::ListRow => "listRow",
            StyleKey::ListItem => "listItem",
            StyleKey::ListItemText => "listItemText",
            StyleKey::ListItemBullet => "listItemBullet",
            StyleKey::ListItemNumber => "listItemNumber",
            StyleKey::Table => "table",
            StyleKey::TableHeader => "tableHeader",
            StyleKey::TableHeaderCell => "tableHeaderCell",
            StyleKey::TableRow => "tableRow",
            StyleKey::TableRowLast => "tableRowLast",
            StyleKey::TableRowCell => "tableRowCell",
            StyleKey::BlockQuote => "blockQuote",
            StyleKey::BgImage => "bgImage",
            StyleKey::BgImageView => "bgImageView",
            StyleKey::Hr => "hr",
            StyleKey::Br => "br",
            StyleKey::Newline => "newline",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StyleKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::UnknownStyleKey(s.to_string()))
    }
}

impl Serialize for StyleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    Normal,
    Light,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexDirection {
    Row,
    Column,
}

/// Platform-neutral style record; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl StyleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn bold(self) -> Self {
        self.font_weight(FontWeight::Bold)
    }

    pub fn italic(mut self) -> Self {
        self.font_style = Some(FontStyle::Italic);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn text_decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = Some(decoration);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn margin_vertical(mut self, margin: f32) -> Self {
        self.margin_top = Some(margin);
        self.margin_bottom = Some(margin);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn border(mut self, width: f32, color: impl Into<String>) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color.into());
        self
    }

    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    pub fn flex_wrap(mut self, wrap: bool) -> Self {
        self.flex_wrap = Some(wrap);
        self
    }

    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(&self, other: &StyleDescriptor) -> StyleDescriptor {
        StyleDescriptor {
            color: other.color.clone().or_else(|| self.color.clone()),
            background_color: other
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            font_size: other.font_size.or(self.font_size),
            line_height: other.line_height.or(self.line_height),
            font_weight: other.font_weight.or(self.font_weight),
            font_style: other.font_style.or(self.font_style),
            font_family: other
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            text_decoration: other.text_decoration.or(self.text_decoration),
            text_align: other.text_align.or(self.text_align),
            margin_top: other.margin_top.or(self.margin_top),
            margin_bottom: other.margin_bottom.or(self.margin_bottom),
            padding: other.padding.or(self.padding),
            border_width: other.border_width.or(self.border_width),
            border_color: other
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            flex_direction: other.flex_direction.or(self.flex_direction),
            flex_wrap: other.flex_wrap.or(self.flex_wrap),
            flex: other.flex.or(self.flex),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }
}

/// Read-only mapping from style name to descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    styles: BTreeMap<StyleKey, StyleDescriptor>,
}

impl Default for StyleTable {
    fn default() -> Self {
        defaults::default_table()
    }
}

impl StyleTable {
    /// A table with no styles at all; every lookup is skipped
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: StyleKey, descriptor: StyleDescriptor) -> Self {
        self.styles.insert(key, descriptor);
        self
    }

    pub fn get(&self, key: StyleKey) -> Option<&StyleDescriptor> {
        self.styles.get(&key)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Merge `overrides` into this table, field by field per key
    pub fn overlay(mut self, overrides: &StyleTable) -> Self {
        for (key, descriptor) in &overrides.styles {
            let merged = match self.styles.get(key) {
                Some(base) => base.merge(descriptor),
                None => descriptor.clone(),
            };
            self.styles.insert(*key, merged);
        }
        self
    }

    /// Build a table from style names as they appear in config files
    pub fn from_named(named: BTreeMap<String, StyleDescriptor>) -> Result<Self> {
        let mut styles = BTreeMap::new();
        for (name, descriptor) in named {
            styles.insert(name.parse::<StyleKey>()?, descriptor);
        }
        Ok(Self { styles })
    }

    /// Style names mapped to descriptors, for writing config files
    pub fn to_named(&self) -> BTreeMap<&'static str, StyleDescriptor> {
        self.styles
            .iter()
            .map(|(key, descriptor)| (key.as_str(), descriptor.clone()))
            .collect()
    }
}

/// A resolved style entry attached to an element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleEntry {
    pub key: StyleKey,
    pub descriptor: StyleDescriptor,
}

/// Ordered style list of one element; later entries override earlier ones
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStyle {
    entries: Vec<StyleEntry>,
}

impl ElementStyle {
    /// Look up `keys` in `table`, skipping any the table does not define
    pub fn new(table: &StyleTable, keys: &[StyleKey]) -> Self {
        let entries = keys
            .iter()
            .filter_map(|key| {
                table.get(*key).map(|descriptor| StyleEntry {
                    key: *key,
                    descriptor: descriptor.clone(),
                })
            })
            .collect();
        Self { entries }
    }

    pub fn keys(&self) -> Vec<StyleKey> {
        self.entries.iter().map(|e| e.key).collect()
    }

    pub fn contains(&self, key: StyleKey) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    /// Flatten the list into a single descriptor
    pub fn resolve(&self) -> StyleDescriptor {
        self.entries
            .iter()
            .fold(StyleDescriptor::default(), |acc, e| acc.merge(&e.descriptor))
    }
}

impl Serialize for ElementStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Flattened {
            keys: Vec<StyleKey>,
            resolved: StyleDescriptor,
        }

        Flattened {
            keys: self.keys(),
            resolved: self.resolve(),
        }
        .serialize(serializer)
    }
}
