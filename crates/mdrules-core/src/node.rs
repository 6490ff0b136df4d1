//! Document node types
//!
//! The parsed markdown tree handed to the renderer. Serialized as internally
//! tagged objects (`{"type": "paragraph", "content": [...]}`) so trees from
//! any external parser can be fed in as JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single node of the parsed markdown tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Literal text run
    Text { content: String },
    Paragraph { content: Vec<Node> },
    /// Heading with level (1-6)
    Heading { level: u8, content: Vec<Node> },
    Strong { content: Vec<Node> },
    Em { content: Vec<Node> },
    Del { content: Vec<Node> },
    /// Underline; rendered with the strong style
    U { content: Vec<Node> },
    InlineCode { content: String },
    /// Fenced or indented code block
    CodeBlock {
        #[serde(default)]
        lang: Option<String>,
        content: String,
    },
    Link {
        target: String,
        #[serde(default)]
        title: Option<String>,
        content: Vec<Node>,
    },
    /// `<https://example.com>`
    Autolink { target: String, content: Vec<Node> },
    /// `<someone@example.com>`
    Mailto { target: String, content: Vec<Node> },
    /// Bare URL detected inside text
    Url { target: String, content: Vec<Node> },
    Image {
        target: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        title: Option<String>,
    },
    /// List; each item is its own sequence of nodes
    List { ordered: bool, items: Vec<Vec<Node>> },
    /// Table; header is one row of cells, cells is rows of cells
    Table {
        header: Vec<Vec<Node>>,
        cells: Vec<Vec<Vec<Node>>>,
    },
    BlockQuote { content: Vec<Node> },
    Hr,
    Br,
    Newline,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn paragraph(content: Vec<Node>) -> Self {
        Node::Paragraph { content }
    }

    pub fn strong(content: Vec<Node>) -> Self {
        Node::Strong { content }
    }

    pub fn link(target: impl Into<String>, content: Vec<Node>) -> Self {
        Node::Link {
            target: target.into(),
            title: None,
            content,
        }
    }

    pub fn image(target: impl Into<String>) -> Self {
        Node::Image {
            target: target.into(),
            alt: String::new(),
            title: None,
        }
    }

    /// The type tag of this node
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Text { .. } => NodeType::Text,
            Node::Paragraph { .. } => NodeType::Paragraph,
            Node::Heading { .. } => NodeType::Heading,
            Node::Strong { .. } => NodeType::Strong,
            Node::Em { .. } => NodeType::Em,
            Node::Del { .. } => NodeType::Del,
            Node::U { .. } => NodeType::U,
            Node::InlineCode { .. } => NodeType::InlineCode,
            Node::CodeBlock { .. } => NodeType::CodeBlock,
            Node::Link { .. } => NodeType::Link,
            Node::Autolink { .. } => NodeType::Autolink,
            Node::Mailto { .. } => NodeType::Mailto,
            Node::Url { .. } => NodeType::Url,
            Node::Image { .. } => NodeType::Image,
            Node::List { .. } => NodeType::List,
            Node::Table { .. } => NodeType::Table,
            Node::BlockQuote { .. } => NodeType::BlockQuote,
            Node::Hr => NodeType::Hr,
            Node::Br => NodeType::Br,
            Node::Newline => NodeType::Newline,
        }
    }

    /// Child nodes for container variants, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::Strong { content }
            | Node::Em { content }
            | Node::Del { content }
            | Node::U { content }
            | Node::Link { content, .. }
            | Node::Autolink { content, .. }
            | Node::Mailto { content, .. }
            | Node::Url { content, .. }
            | Node::BlockQuote { content } => content,
            _ => &[],
        }
    }

    /// Decode a document (a JSON array of nodes)
    pub fn from_json(json: &str) -> Result<Vec<Node>> {
        serde_json::from_str(json).map_err(Error::Ast)
    }
}

/// Fieldless mirror of [`Node`] variants, named as the parser names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    Text,
    Paragraph,
    Heading,
    Strong,
    Em,
    Del,
    U,
    InlineCode,
    CodeBlock,
    Link,
    Autolink,
    Mailto,
    Url,
    Image,
    List,
    Table,
    BlockQuote,
    Hr,
    Br,
    Newline,
}

impl NodeType {
    pub const ALL: [NodeType; 20] = [
        NodeType::Text,
        NodeType::Paragraph,
        NodeType::Heading,
        NodeType::Strong,
        NodeType::Em,
        NodeType::Del,
        NodeType::U,
        NodeType::InlineCode,
        NodeType::CodeBlock,
        NodeType::Link,
        NodeType::Autolink,
        NodeType::Mailto,
        NodeType::Url,
        NodeType::Image,
        NodeType::List,
        NodeType::Table,
        NodeType::BlockQuote,
        NodeType::Hr,
        NodeType::Br,
        NodeType::Newline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Text => "text",
            NodeType::Paragraph => "paragraph",
            NodeType::Heading => "heading",
            NodeType::Strong => "strong",
            NodeType::Em => "em",
            NodeType::Del => "del",
            NodeType::U => "u",
            NodeType::InlineCode => "inlineCode",
            NodeType::CodeBlock => "codeBlock",
            NodeType::Link => "link",
            NodeType::Autolink => "autolink",
            NodeType::Mailto => "mailto",
            NodeType::Url => "url",
            NodeType::Image => "image",
            NodeType::List => "list",
            NodeType::Table => "table",
            NodeType::BlockQuote => "blockQuote",
            NodeType::Hr => "hr",
            NodeType::Br => "br",
            NodeType::Newline => "newline",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownNodeType(s.to_string()))
    }
}
