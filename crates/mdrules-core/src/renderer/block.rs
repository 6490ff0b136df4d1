//! Block rules: paragraphs, headings, images, lists, tables and quotes

use tracing::warn;

use super::NodeRenderer;
use crate::element::{Content, Element, ImageElement, ImageSource, Lightbox, ResizeMode};
use crate::node::{Node, NodeType};
use crate::state::RenderState;
use crate::style::StyleKey;

const BULLET: &str = "\u{2022} ";

impl NodeRenderer {
    pub(super) fn render_paragraph(&self, content: &[Node], state: RenderState) -> Element {
        // Lets an image drop onto its own line inside the paragraph
        if content.iter().any(|n| n.node_type() == NodeType::Image) {
            let children = self.render_children(content, state.within_paragraph_with_image());
            return Element::view(
                state.element_key(),
                self.style(&[StyleKey::ParagraphWithImage]),
                children,
            );
        }

        // The parser pads bold-only paragraphs with a stray whitespace text
        // node, hence `< 3` rather than a single child.
        let base = if content.len() < 3 && content.iter().any(|n| n.node_type() == NodeType::Strong)
        {
            StyleKey::ParagraphCenter
        } else {
            StyleKey::Paragraph
        };
        let style = if state.within_list {
            self.style(&[base, StyleKey::NoMargin])
        } else {
            self.style(&[base])
        };

        Element::text(
            state.element_key(),
            style,
            Content::Children(self.render_children(content, state)),
        )
    }

    pub(super) fn render_heading(&self, level: u8, content: &[Node], state: RenderState) -> Element {
        let style = match StyleKey::heading(level) {
            Some(level_style) => self.style(&[StyleKey::Heading, level_style]),
            None => {
                warn!(level, "heading level out of range, level style skipped");
                self.style(&[StyleKey::Heading])
            }
        };
        let children = self.render_children(content, state.within_text().within_heading());
        Element::text(state.element_key(), style, Content::Children(children))
    }

    /// Placeholder only; the code body is not surfaced
    pub(super) fn render_code_block(&self, state: RenderState) -> Element {
        Element::text(
            state.element_key(),
            self.style(&[StyleKey::CodeBlock]),
            Content::None,
        )
    }

    pub(super) fn render_image(&self, target: &str, state: RenderState) -> Element {
        let image = Element::image(
            state.element_key(),
            self.style(&[StyleKey::Image]),
            ImageSource::Uri(self.options.image_uri(target)),
        );
        if !self.options.enable_light_box {
            return image;
        }

        Element::Lightbox(Lightbox {
            key: state.element_key(),
            active_props: self.style(&[StyleKey::ImageBox]),
            navigator: self.options.navigator.clone(),
            on_open: self.options.on_image_open.clone(),
            on_close: self.options.on_image_close.clone(),
            child: Box::new(image),
        })
    }

    pub(super) fn render_list(&self, ordered: bool, items: &[Vec<Node>], state: RenderState) -> Element {
        let rows = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let bullet = if ordered {
                    Element::text(
                        "0",
                        self.style(&[StyleKey::ListItemNumber]),
                        Content::Text(format!("{}. ", i + 1)),
                    )
                } else {
                    Element::text(
                        "0",
                        self.style(&[StyleKey::ListItemBullet]),
                        Content::Text(BULLET.to_string()),
                    )
                };

                let content = self.render_children(item, state.within_list());
                // Block content must not end up nested inside a text run
                let inline = item.first().is_some_and(|first| {
                    matches!(
                        first.node_type(),
                        NodeType::Text | NodeType::Paragraph | NodeType::Strong
                    )
                });
                let body = if inline {
                    Element::text(
                        "1",
                        self.style(&[StyleKey::ListItemText]),
                        Content::Children(content),
                    )
                } else {
                    Element::view("1", self.style(&[StyleKey::ListItem]), content)
                };

                Element::view(i.to_string(), self.style(&[StyleKey::ListRow]), vec![bullet, body])
            })
            .collect();

        Element::view(state.element_key(), self.style(&[StyleKey::List]), rows)
    }

    pub(super) fn render_table(
        &self,
        header: &[Vec<Node>],
        cells: &[Vec<Vec<Node>>],
        state: RenderState,
    ) -> Element {
        let header_cells = header
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                Element::text(
                    i.to_string(),
                    self.style(&[StyleKey::TableHeaderCell]),
                    Content::Children(self.render_children(cell, state)),
                )
            })
            .collect();
        let header_row = Element::view("header", self.style(&[StyleKey::TableHeader]), header_cells);

        let last = cells.len().saturating_sub(1);
        let body_rows = cells.iter().enumerate().map(|(r, row)| {
            let row_cells = row
                .iter()
                .enumerate()
                .map(|(c, cell)| {
                    Element::view(
                        c.to_string(),
                        self.style(&[StyleKey::TableRowCell]),
                        self.render_children(cell, state),
                    )
                })
                .collect();
            let style = if r == last {
                self.style(&[StyleKey::TableRow, StyleKey::TableRowLast])
            } else {
                self.style(&[StyleKey::TableRow])
            };
            Element::view(r.to_string(), style, row_cells)
        });

        let rows = std::iter::once(header_row).chain(body_rows).collect();
        Element::view(state.element_key(), self.style(&[StyleKey::Table]), rows)
    }

    pub(super) fn render_block_quote(&self, content: &[Node], state: RenderState) -> Element {
        let children = self.render_children(content, state.within_quote());
        let Some(source) = self.options.bg_image.get(&NodeType::BlockQuote) else {
            return Element::text(
                state.element_key(),
                self.style(&[StyleKey::BlockQuote]),
                Content::Children(children),
            );
        };

        let background = Element::Image(ImageElement {
            key: "1".to_string(),
            style: self.style(&[StyleKey::BgImage]),
            source: source.clone(),
            resize_mode: Some(ResizeMode::Cover),
        });
        let quote = Element::text(
            "0",
            self.style(&[StyleKey::BlockQuote]),
            Content::Children(children),
        );
        Element::view(
            state.element_key(),
            self.style(&[StyleKey::BgImageView]),
            vec![background, quote],
        )
    }

    pub(super) fn render_hr(&self, state: RenderState) -> Element {
        Element::view(state.element_key(), self.style(&[StyleKey::Hr]), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::options::RenderOptions;
    use crate::style::StyleTable;

    fn with_options(options: RenderOptions) -> NodeRenderer {
        NodeRenderer::new(StyleTable::default(), options)
    }

    #[test]
    fn test_paragraph_with_image_is_a_view() {
        let r = NodeRenderer::default();
        let node = Node::paragraph(vec![Node::text("see "), Node::image("http://x/a.png")]);

        let element = r.render_node(&node, RenderState::new().within_list());
        assert_eq!(element.kind(), "View");
        // no-margin modifier only applies to text paragraphs
        assert_eq!(element.style().keys(), vec![StyleKey::ParagraphWithImage]);
        assert_eq!(element.children()[1].kind(), "Image");
    }

    #[test]
    fn test_long_paragraph_with_bold_is_not_centered() {
        let r = NodeRenderer::default();
        let node = Node::paragraph(vec![
            Node::text("a "),
            Node::strong(vec![Node::text("b")]),
            Node::text(" c"),
        ]);
        let element = r.render_node(&node, RenderState::new());
        assert_eq!(element.style().keys(), vec![StyleKey::Paragraph]);
    }

    #[test]
    fn test_padded_bold_paragraph_is_centered() {
        let r = NodeRenderer::default();
        let node = Node::paragraph(vec![Node::strong(vec![Node::text("b")]), Node::text(" ")]);
        let element = r.render_node(&node, RenderState::new());
        assert_eq!(element.style().keys(), vec![StyleKey::ParagraphCenter]);
    }

    #[test]
    fn test_heading_styles() {
        let r = NodeRenderer::default();
        for level in 1..=6u8 {
            let element = r.render_node(
                &Node::Heading {
                    level,
                    content: vec![Node::text("h")],
                },
                RenderState::new(),
            );
            assert_eq!(
                element.style().keys(),
                vec![StyleKey::Heading, StyleKey::heading(level).unwrap()]
            );
        }

        let odd = r.render_node(
            &Node::Heading {
                level: 9,
                content: vec![Node::text("h")],
            },
            RenderState::new(),
        );
        assert_eq!(odd.style().keys(), vec![StyleKey::Heading]);
    }

    #[test]
    fn test_code_block_is_empty_placeholder() {
        let r = NodeRenderer::default();
        let element = r.render_node(
            &Node::CodeBlock {
                lang: Some("rust".into()),
                content: "fn main() {}".into(),
            },
            RenderState::new(),
        );
        assert!(matches!(&element, Element::Text(run) if matches!(run.content, Content::None)));
        assert!(element.style().contains(StyleKey::CodeBlock));
    }

    #[test]
    fn test_list_item_wrapping() {
        let r = NodeRenderer::default();
        let list = Node::List {
            ordered: false,
            items: vec![
                vec![Node::text("plain")],
                vec![Node::strong(vec![Node::text("bold")])],
                vec![Node::List {
                    ordered: true,
                    items: vec![vec![Node::text("nested")]],
                }],
            ],
        };

        let element = r.render_node(&list, RenderState::new());
        let bodies: Vec<_> = element
            .children()
            .iter()
            .map(|row| {
                assert!(row.style().contains(StyleKey::ListRow));
                &row.children()[1]
            })
            .collect();

        assert_eq!(bodies[0].kind(), "Text");
        assert!(bodies[0].style().contains(StyleKey::ListItemText));
        assert_eq!(bodies[1].kind(), "Text");
        assert_eq!(bodies[2].kind(), "View");
        assert!(bodies[2].style().contains(StyleKey::ListItem));
        assert_eq!(bodies[2].text_content(), "1. nested");
    }

    #[test]
    fn test_list_flag_stays_inside_list() {
        let r = NodeRenderer::default();
        let nodes = vec![
            Node::List {
                ordered: false,
                items: vec![vec![Node::paragraph(vec![Node::text("item")])]],
            },
            Node::paragraph(vec![Node::text("after")]),
        ];

        let elements = r.render(&nodes);
        let in_item = &elements[0].children()[0].children()[1].children()[0];
        assert!(in_item.style().contains(StyleKey::NoMargin));

        let after = &elements[1];
        assert_eq!(after.style().keys(), vec![StyleKey::Paragraph]);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let r = NodeRenderer::default();
        let element = r.render_node(
            &Node::Table {
                header: vec![vec![Node::text("A")]],
                cells: Vec::new(),
            },
            RenderState::new(),
        );
        assert_eq!(element.children().len(), 1);
        assert_eq!(element.children()[0].key(), "header");
    }

    #[test]
    fn test_block_quote_plain() {
        let r = NodeRenderer::default();
        let element = r.render_node(
            &Node::BlockQuote {
                content: vec![Node::text("quoted")],
            },
            RenderState::new(),
        );
        assert_eq!(element.kind(), "Text");
        assert!(element.style().contains(StyleKey::BlockQuote));
        assert_eq!(element.text_content(), "quoted");
    }

    #[test]
    fn test_block_quote_with_background() {
        let r = with_options(RenderOptions::new().bg_image(
            NodeType::BlockQuote,
            ImageSource::Asset("quote-bg.png".into()),
        ));
        let element = r.render_node(
            &Node::BlockQuote {
                content: vec![Node::text("quoted")],
            },
            RenderState::new(),
        );

        assert_eq!(element.kind(), "View");
        assert!(element.style().contains(StyleKey::BgImageView));
        match &element.children()[0] {
            Element::Image(img) => {
                assert_eq!(img.resize_mode, Some(ResizeMode::Cover));
                assert_eq!(img.source, ImageSource::Asset("quote-bg.png".into()));
            }
            other => panic!("Expected Image, got {:?}", other),
        }
        assert!(element.children()[1].style().contains(StyleKey::BlockQuote));
    }

    #[test]
    fn test_lightbox_carries_navigator() {
        let navigator: crate::options::Navigator = Arc::new("nav".to_string());
        let r = with_options(
            RenderOptions::new()
                .enable_light_box(true)
                .navigator(Arc::clone(&navigator)),
        );
        let element = r.render_node(&Node::image("http://x/a.png"), RenderState::new());
        match element {
            Element::Lightbox(lightbox) => {
                let passed = lightbox.navigator.expect("navigator passed through");
                assert_eq!(passed.downcast_ref::<String>().map(String::as_str), Some("nav"));
            }
            other => panic!("Expected Lightbox, got {:?}", other),
        }
    }

    #[test]
    fn test_hr_is_empty_view() {
        let r = NodeRenderer::default();
        let element = r.render_node(&Node::Hr, RenderState::new());
        assert_eq!(element.kind(), "View");
        assert!(element.children().is_empty());
        assert!(element.style().contains(StyleKey::Hr));
    }
}
