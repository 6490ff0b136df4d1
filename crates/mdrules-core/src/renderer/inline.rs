//! Inline rules: text runs, emphasis, links and breaks

use super::NodeRenderer;
use crate::element::{Content, Element, PressHandler};
use crate::node::Node;
use crate::state::RenderState;
use crate::style::StyleKey;

impl NodeRenderer {
    pub(super) fn render_text(&self, content: &str, state: RenderState) -> Element {
        let style = if state.within_link {
            self.style(&[StyleKey::Text, StyleKey::Autolink])
        } else {
            self.style(&[StyleKey::Text])
        };
        Element::text(state.element_key(), style, Content::Text(content.to_string()))
    }

    /// strong, em, del and u: a styled run around the rendered children
    pub(super) fn render_formatted(
        &self,
        style: StyleKey,
        content: &[Node],
        state: RenderState,
    ) -> Element {
        let children = self.render_children(content, state.within_text());
        Element::text(
            state.element_key(),
            self.style(&[style]),
            Content::Children(children),
        )
    }

    pub(super) fn render_inline_code(&self, content: &str, state: RenderState) -> Element {
        Element::text(
            state.element_key(),
            self.style(&[StyleKey::InlineCode]),
            Content::Text(content.to_string()),
        )
    }

    pub(super) fn render_link(&self, target: &str, content: &[Node], state: RenderState) -> Element {
        let children = self.render_children(content, state.within_link());
        Element::pressable(
            state.element_key(),
            self.style(&[StyleKey::Autolink]),
            Content::Children(children),
            PressHandler::link(target, self.options.on_link.clone()),
        )
    }

    /// autolink and url: pressable, but children keep plain text styling
    pub(super) fn render_autolink(
        &self,
        target: &str,
        content: &[Node],
        state: RenderState,
    ) -> Element {
        let children = self.render_children(content, state.within_text());
        Element::pressable(
            state.element_key(),
            self.style(&[StyleKey::Autolink]),
            Content::Children(children),
            PressHandler::link(target, self.options.on_link.clone()),
        )
    }

    pub(super) fn render_mailto(&self, content: &[Node], state: RenderState) -> Element {
        let children = self.render_children(content, state.within_text());
        Element::pressable(
            state.element_key(),
            self.style(&[StyleKey::Mailto]),
            Content::Children(children),
            PressHandler::noop(),
        )
    }

    pub(super) fn render_break(&self, text: &str, style: StyleKey, state: RenderState) -> Element {
        Element::text(
            state.element_key(),
            self.style(&[style]),
            Content::Text(text.to_string()),
        )
    }
}
