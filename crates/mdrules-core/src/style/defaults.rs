use super::{
    FlexDirection, FontWeight, StyleDescriptor as S, StyleKey as K, StyleTable, TextAlign,
    TextDecoration,
};

const TEXT_COLOR: &str = "#222222";
const LINK_COLOR: &str = "#0645ad";
const CODE_BG: &str = "#eeeeee";
const RULE_COLOR: &str = "#cccccc";
const MONOSPACE: &str = "Courier";

/// Built-in style table; defines every key the rules reference
pub(super) fn default_table() -> StyleTable {
    let paragraph = S::new()
        .margin_vertical(10.0)
        .flex_direction(FlexDirection::Row)
        .flex_wrap(true);

    StyleTable::empty()
        .with(K::View, S::new())
        .with(K::Text, S::new().color(TEXT_COLOR))
        .with(K::Paragraph, paragraph.clone())
        .with(K::ParagraphCenter, paragraph.text_align(TextAlign::Center))
        .with(
            K::ParagraphWithImage,
            S::new()
                .margin_vertical(10.0)
                .flex_direction(FlexDirection::Row)
                .flex_wrap(true),
        )
        .with(K::NoMargin, S::new().margin_vertical(0.0))
        // Headings
        .with(K::Heading, S::new().font_weight(FontWeight::Light))
        .with(K::Heading1, S::new().font_size(32.0))
        .with(K::Heading2, S::new().font_size(24.0))
        .with(K::Heading3, S::new().font_size(18.0))
        .with(K::Heading4, S::new().font_size(16.0))
        .with(K::Heading5, S::new().font_size(13.0))
        .with(K::Heading6, S::new().font_size(11.0))
        // Inline formatting
        .with(K::Strong, S::new().bold())
        .with(K::Em, S::new().italic())
        .with(K::Del, S::new().text_decoration(TextDecoration::LineThrough))
        .with(K::U, S::new().text_decoration(TextDecoration::Underline))
        .with(
            K::InlineCode,
            S::new()
                .background_color(CODE_BG)
                .border(1.0, "#dddddd")
                .font_family(MONOSPACE)
                .bold(),
        )
        .with(
            K::CodeBlock,
            S::new()
                .background_color("#dddddd")
                .font_family(MONOSPACE),
        )
        // Links
        .with(
            K::Autolink,
            S::new()
                .color(LINK_COLOR)
                .text_decoration(TextDecoration::Underline),
        )
        .with(K::Mailto, S::new().color(LINK_COLOR))
        // Images
        .with(K::Image, S::new().size(320.0, 240.0))
        .with(K::ImageBox, S::new().flex(1.0))
        .with(K::BgImage, S::new().flex(1.0))
        .with(K::BgImageView, S::new().flex(1.0))
        // Lists
        .with(K::List, S::new())
        .with(K::ListRow, S::new().flex_direction(FlexDirection::Row))
        .with(K::ListItem, S::new().flex(1.0))
        .with(K::ListItemText, S::new().flex(1.0))
        .with(K::ListItemBullet, S::new().font_size(20.0).line_height(20.0))
        .with(K::ListItemNumber, S::new().bold())
        // Tables
        .with(K::Table, S::new().border(1.0, TEXT_COLOR))
        .with(
            K::TableHeader,
            S::new()
                .background_color(TEXT_COLOR)
                .flex_direction(FlexDirection::Row),
        )
        .with(K::TableHeaderCell, S::new().color("#ffffff").bold().padding(5.0))
        .with(
            K::TableRow,
            S::new()
                .border(1.0, TEXT_COLOR)
                .flex_direction(FlexDirection::Row),
        )
        .with(K::TableRowLast, S::new().border(0.0, "transparent"))
        .with(K::TableRowCell, S::new().padding(5.0))
        // Blocks
        .with(
            K::BlockQuote,
            S::new().background_color("#f0f0f0").padding(10.0),
        )
        .with(K::Hr, S::new().background_color(RULE_COLOR).height(1.0))
        .with(K::Br, S::new())
        .with(K::Newline, S::new())
}
