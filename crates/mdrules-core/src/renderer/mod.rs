//! Node renderer: the rule table mapping document nodes to UI elements
//!
//! One rule per node type, dispatched by an exhaustive match. Rules recurse
//! into children through [`NodeRenderer::render_children`], handing down a
//! copy of the render state with whatever flags their children need.

use tracing::{debug, trace};

use crate::element::Element;
use crate::node::Node;
use crate::options::RenderOptions;
use crate::parser;
use crate::state::RenderState;
use crate::style::{ElementStyle, StyleKey, StyleTable};

mod block;
mod inline;

/// Renders document nodes into UI element descriptions
#[derive(Debug, Clone, Default)]
pub struct NodeRenderer {
    styles: StyleTable,
    options: RenderOptions,
}

impl NodeRenderer {
    pub fn new(styles: StyleTable, options: RenderOptions) -> Self {
        Self { styles, options }
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a single node; always yields exactly one element
    pub fn render_node(&self, node: &Node, state: RenderState) -> Element {
        trace!(node = %node.node_type(), key = state.key, "render rule");
        match node {
            Node::Text { content } => self.render_text(content, state),
            Node::Paragraph { content } => self.render_paragraph(content, state),
            Node::Heading { level, content } => self.render_heading(*level, content, state),
            Node::Strong { content } => self.render_formatted(StyleKey::Strong, content, state),
            Node::Em { content } => self.render_formatted(StyleKey::Em, content, state),
            Node::Del { content } => self.render_formatted(StyleKey::Del, content, state),
            // u shares the strong style
            Node::U { content } => self.render_formatted(StyleKey::Strong, content, state),
            Node::InlineCode { content } => self.render_inline_code(content, state),
            Node::CodeBlock { .. } => self.render_code_block(state),
            Node::Link {
                target, content, ..
            } => self.render_link(target, content, state),
            Node::Autolink { target, content } | Node::Url { target, content } => {
                self.render_autolink(target, content, state)
            }
            Node::Mailto { content, .. } => self.render_mailto(content, state),
            Node::Image { target, .. } => self.render_image(target, state),
            Node::List { ordered, items } => self.render_list(*ordered, items, state),
            Node::Table { header, cells } => self.render_table(header, cells, state),
            Node::BlockQuote { content } => self.render_block_quote(content, state),
            Node::Hr => self.render_hr(state),
            Node::Br => self.render_break("\n\n", StyleKey::Br, state),
            Node::Newline => self.render_break("\n", StyleKey::Newline, state),
        }
    }

    /// Render sibling nodes in document order, keyed by position
    pub fn render_children(&self, nodes: &[Node], state: RenderState) -> Vec<Element> {
        nodes
            .iter()
            .enumerate()
            .map(|(i, node)| self.render_node(node, state.with_key(i)))
            .collect()
    }

    /// Render top-level nodes with a fresh render state
    pub fn render(&self, nodes: &[Node]) -> Vec<Element> {
        self.render_children(nodes, RenderState::new())
    }

    /// Render a whole document into a single root container
    pub fn render_document(&self, nodes: &[Node]) -> Element {
        debug!(nodes = nodes.len(), "render pass start");
        let root = Element::view("root", self.style(&[StyleKey::View]), self.render(nodes));
        debug!(elements = root.walk().count(), "render pass done");
        root
    }

    /// Parse markdown with the bundled parser and render it
    pub fn render_markdown(&self, text: &str) -> Element {
        self.render_document(&parser::parse(text))
    }

    fn style(&self, keys: &[StyleKey]) -> ElementStyle {
        ElementStyle::new(&self.styles, keys)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::element::{Content, ImageSource};
    use crate::node::NodeType;

    fn renderer() -> NodeRenderer {
        NodeRenderer::default()
    }

    fn text(s: &str) -> Node {
        Node::text(s)
    }

    /// One sample node per node type
    fn sample(ty: NodeType) -> Node {
        let content = vec![text("x")];
        match ty {
            NodeType::Text => text("x"),
            NodeType::Paragraph => Node::paragraph(content),
            NodeType::Heading => Node::Heading { level: 1, content },
            NodeType::Strong => Node::strong(content),
            NodeType::Em => Node::Em { content },
            NodeType::Del => Node::Del { content },
            NodeType::U => Node::U { content },
            NodeType::InlineCode => Node::InlineCode {
                content: "x".into(),
            },
            NodeType::CodeBlock => Node::CodeBlock {
                lang: None,
                content: "fn main() {}".into(),
            },
            NodeType::Link => Node::link("http://x", content),
            NodeType::Autolink => Node::Autolink {
                target: "http://x".into(),
                content,
            },
            NodeType::Mailto => Node::Mailto {
                target: "mailto:a@b".into(),
                content,
            },
            NodeType::Url => Node::Url {
                target: "http://x".into(),
                content,
            },
            NodeType::Image => Node::image("http://x/img.png"),
            NodeType::List => Node::List {
                ordered: false,
                items: vec![content],
            },
            NodeType::Table => Node::Table {
                header: vec![content.clone()],
                cells: vec![vec![content]],
            },
            NodeType::BlockQuote => Node::BlockQuote { content },
            NodeType::Hr => Node::Hr,
            NodeType::Br => Node::Br,
            NodeType::Newline => Node::Newline,
        }
    }

    #[test]
    fn test_every_node_type_yields_one_element() {
        let r = renderer();
        let nodes: Vec<Node> = NodeType::ALL.into_iter().map(sample).collect();

        let elements = r.render(&nodes);
        assert_eq!(elements.len(), NodeType::ALL.len());
        for (i, element) in elements.iter().enumerate() {
            assert_eq!(element.key(), i.to_string());
        }
    }

    #[test]
    fn test_document_order_preserved() {
        let r = renderer();
        let paragraph = Node::paragraph(vec![text("A"), text("B"), text("C")]);

        let element = r.render_node(&paragraph, RenderState::new());
        let literals: Vec<_> = element
            .children()
            .iter()
            .map(|c| c.literal().unwrap())
            .collect();
        assert_eq!(literals, vec!["A", "B", "C"]);
        let keys: Vec<_> = element.children().iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_link_styling_scoped_to_link_children() {
        let r = renderer();
        let paragraph = Node::paragraph(vec![
            Node::link("http://example.com", vec![text("inside")]),
            text("outside"),
        ]);

        let element = r.render_node(&paragraph, RenderState::new());
        let link = &element.children()[0];
        let inside = &link.children()[0];
        let outside = &element.children()[1];

        assert_eq!(inside.style().keys(), vec![StyleKey::Text, StyleKey::Autolink]);
        assert_eq!(outside.style().keys(), vec![StyleKey::Text]);
    }

    #[test]
    fn test_list_numbering() {
        let r = renderer();
        let items = vec![vec![text("a")], vec![text("b")], vec![text("c")]];

        let ordered = r.render_node(
            &Node::List {
                ordered: true,
                items: items.clone(),
            },
            RenderState::new(),
        );
        let labels: Vec<_> = ordered
            .children()
            .iter()
            .map(|row| row.children()[0].text_content())
            .collect();
        assert_eq!(labels, vec!["1. ", "2. ", "3. "]);

        let unordered = r.render_node(
            &Node::List {
                ordered: false,
                items,
            },
            RenderState::new(),
        );
        for row in unordered.children() {
            let bullet = &row.children()[0];
            assert_eq!(bullet.text_content(), "\u{2022} ");
            assert!(bullet.style().contains(StyleKey::ListItemBullet));
        }
    }

    #[test]
    fn test_table_shape() {
        let r = renderer();
        let table = Node::Table {
            header: vec![vec![text("A")], vec![text("B")]],
            cells: vec![
                vec![vec![text("1")], vec![text("2")]],
                vec![vec![text("3")], vec![text("4")]],
            ],
        };

        let element = r.render_node(&table, RenderState::new());
        let rows = element.children();
        assert_eq!(rows.len(), 3);

        let header = &rows[0];
        assert!(header.style().contains(StyleKey::TableHeader));
        assert_eq!(header.children().len(), 2);
        assert_eq!(header.children()[1].text_content(), "B");

        let (first, last) = (&rows[1], &rows[2]);
        assert_eq!(first.children().len(), 2);
        assert_eq!(last.children().len(), 2);
        assert!(!first.style().contains(StyleKey::TableRowLast));
        assert_eq!(
            last.style().keys(),
            vec![StyleKey::TableRow, StyleKey::TableRowLast]
        );
        assert_eq!(last.children()[0].text_content(), "3");
    }

    #[test]
    fn test_image_param_and_lightbox() {
        let image = Node::image("http://x/img.png");

        let bare = NodeRenderer::new(
            StyleTable::default(),
            RenderOptions::new().image_param("?w=100"),
        )
        .render_node(&image, RenderState::new());
        match &bare {
            Element::Image(img) => assert_eq!(
                img.source,
                ImageSource::Uri("http://x/img.png?w=100".to_string())
            ),
            other => panic!("Expected Image, got {:?}", other),
        }

        let boxed = NodeRenderer::new(
            StyleTable::default(),
            RenderOptions::new()
                .image_param("?w=100")
                .enable_light_box(true),
        )
        .render_node(&image, RenderState::new());
        match &boxed {
            Element::Lightbox(lightbox) => {
                assert!(lightbox.active_props.contains(StyleKey::ImageBox));
                assert!(matches!(
                    lightbox.child.as_ref(),
                    Element::Image(img) if img.source == ImageSource::Uri("http://x/img.png?w=100".to_string())
                ));
            }
            other => panic!("Expected Lightbox, got {:?}", other),
        }
    }

    #[test]
    fn test_link_press_invokes_on_link_once() {
        let links = Arc::new(Mutex::new(Vec::new()));
        let images = Arc::new(AtomicUsize::new(0));
        let (link_sink, open_count, close_count) =
            (Arc::clone(&links), Arc::clone(&images), Arc::clone(&images));
        let options = RenderOptions::new()
            .enable_light_box(true)
            .on_link(move |target| link_sink.lock().unwrap().push(target.to_string()))
            .on_image_open(move || {
                open_count.fetch_add(1, Ordering::SeqCst);
            })
            .on_image_close(move || {
                close_count.fetch_add(1, Ordering::SeqCst);
            });
        let r = NodeRenderer::new(StyleTable::default(), options);

        let link = r.render_node(
            &Node::link("http://example.com", vec![text("here")]),
            RenderState::new(),
        );
        link.press_handler().expect("link is pressable").press();

        assert_eq!(*links.lock().unwrap(), vec!["http://example.com".to_string()]);
        assert_eq!(images.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_bold_only_paragraph_centered() {
        let r = renderer();
        let paragraph = Node::paragraph(vec![Node::strong(vec![text("Bold")])]);

        let top = r.render_node(&paragraph, RenderState::new());
        assert_eq!(top.style().keys(), vec![StyleKey::ParagraphCenter]);

        let nested = r.render_node(&paragraph, RenderState::new().within_list());
        assert_eq!(
            nested.style().keys(),
            vec![StyleKey::ParagraphCenter, StyleKey::NoMargin]
        );
    }

    #[test]
    fn test_paragraph_inside_list_item_gets_no_margin() {
        let r = renderer();
        let list = Node::List {
            ordered: false,
            items: vec![vec![Node::paragraph(vec![text("loose item")])]],
        };

        let element = r.render_node(&list, RenderState::new());
        let paragraph = &element.children()[0].children()[1].children()[0];
        assert_eq!(
            paragraph.style().keys(),
            vec![StyleKey::Paragraph, StyleKey::NoMargin]
        );
    }

    #[test]
    fn test_empty_style_table_skips_styles() {
        let r = NodeRenderer::new(StyleTable::empty(), RenderOptions::new());
        let element = r.render_node(
            &Node::Heading {
                level: 2,
                content: vec![text("t")],
            },
            RenderState::new(),
        );
        assert!(element.style().is_empty());
        assert_eq!(element.text_content(), "t");
    }

    #[test]
    fn test_render_document_wraps_in_root_view() {
        let r = renderer();
        let root = r.render_document(&[Node::Hr, Node::Br]);
        assert_eq!(root.kind(), "View");
        assert_eq!(root.key(), "root");
        assert!(root.style().contains(StyleKey::View));
        assert_eq!(root.children().len(), 2);
    }

    #[test]
    fn test_render_markdown_end_to_end() {
        let r = renderer();
        let root = r.render_markdown("# Title\n\nSome **bold** text.\n");
        let heading = &root.children()[0];
        assert!(heading.style().contains(StyleKey::Heading1));
        assert_eq!(heading.text_content(), "Title");
        assert_eq!(root.children()[1].text_content(), "Some bold text.");
        assert!(matches!(
            &root.children()[1],
            Element::Text(run) if matches!(run.content, Content::Children(_))
        ));
    }
}
