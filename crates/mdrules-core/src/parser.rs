//! Markdown parsing using pulldown-cmark
//!
//! Adapts the pulldown-cmark event stream into [`Node`] trees. Syntax is the
//! parser's business; this module only reshapes its output.

use once_cell::sync::Lazy;
use pulldown_cmark::{
    CodeBlockKind, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream,
};
use regex::Regex;
use tracing::trace;

use crate::node::Node;

/// Regex for detecting bare URLs in text
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<>\[\]()]+").expect("URL pattern compiles"));

/// Characters trimmed from the end of a bare URL match
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"', '*', '_', '~'];

/// Where in the tree the events being read sit
#[derive(Clone, Copy, Default)]
struct Context {
    /// Inside a link; bare URLs are left as text
    in_link: bool,
}

/// Parse markdown text into document nodes
pub fn parse(text: &str) -> Vec<Node> {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;

    let parser = TextMergeStream::new(Parser::new_ext(text, options));
    let events: Vec<_> = parser.collect();

    let (nodes, _) = parse_until_end(&events, 0, Context::default());
    nodes
}

/// Parse sibling nodes up to the end tag closing the current container.
/// Returns the nodes and the index just past that end tag.
fn parse_until_end(events: &[Event<'_>], start: usize, ctx: Context) -> (Vec<Node>, usize) {
    let mut nodes = Vec::new();
    let mut idx = start;

    while idx < events.len() {
        match &events[idx] {
            Event::End(_) => {
                return (nodes, idx + 1);
            }
            Event::Start(tag) => {
                let (parsed, new_idx) = parse_tag(tag, events, idx + 1, ctx);
                nodes.extend(parsed);
                idx = new_idx;
            }
            Event::Text(text) => {
                if ctx.in_link {
                    nodes.push(Node::text(text.to_string()));
                } else {
                    nodes.extend(autolink_text(text));
                }
                idx += 1;
            }
            Event::Code(code) => {
                nodes.push(Node::InlineCode {
                    content: code.to_string(),
                });
                idx += 1;
            }
            Event::InlineHtml(html) => {
                nodes.push(Node::text(html.to_string()));
                idx += 1;
            }
            Event::SoftBreak => {
                nodes.push(Node::Newline);
                idx += 1;
            }
            Event::HardBreak => {
                nodes.push(Node::Br);
                idx += 1;
            }
            Event::Rule => {
                nodes.push(Node::Hr);
                idx += 1;
            }
            other => {
                trace!(event = ?other, "markdown event skipped");
                idx += 1;
            }
        }
    }

    (nodes, idx)
}

/// Parse the container opened by `tag`, whose children start at `start`
fn parse_tag(tag: &Tag<'_>, events: &[Event<'_>], start: usize, ctx: Context) -> (Vec<Node>, usize) {
    match tag {
        Tag::Paragraph => {
            let (content, idx) = parse_until_end(events, start, ctx);
            (vec![Node::Paragraph { content }], idx)
        }
        Tag::Heading { level, .. } => {
            let (content, idx) = parse_until_end(events, start, ctx);
            let level = *level as u8;
            (vec![Node::Heading { level, content }], idx)
        }
        Tag::Strong => {
            let (content, idx) = parse_until_end(events, start, ctx);
            (vec![Node::Strong { content }], idx)
        }
        Tag::Emphasis => {
            let (content, idx) = parse_until_end(events, start, ctx);
            (vec![Node::Em { content }], idx)
        }
        Tag::Strikethrough => {
            let (content, idx) = parse_until_end(events, start, ctx);
            (vec![Node::Del { content }], idx)
        }
        Tag::BlockQuote(_) => {
            let (content, idx) = parse_until_end(events, start, ctx);
            (vec![Node::BlockQuote { content }], idx)
        }
        Tag::CodeBlock(kind) => {
            let lang = match kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                _ => None,
            };
            let (content, idx) = collect_text(events, start);
            (vec![Node::CodeBlock { lang, content }], idx)
        }
        Tag::List(start_num) => {
            let (items, idx) = parse_list_items(events, start, ctx);
            let ordered = start_num.is_some();
            (vec![Node::List { ordered, items }], idx)
        }
        Tag::Table(_) => {
            let (header, cells, idx) = parse_table(events, start, ctx);
            (vec![Node::Table { header, cells }], idx)
        }
        Tag::Link {
            link_type,
            dest_url,
            title,
            ..
        } => {
            let (content, idx) = parse_until_end(events, start, Context { in_link: true });
            let target = dest_url.to_string();
            let node = match link_type {
                LinkType::Autolink => Node::Autolink { target, content },
                LinkType::Email => Node::Mailto {
                    target: mailto_target(&target),
                    content,
                },
                _ => Node::Link {
                    target,
                    title: (!title.is_empty()).then(|| title.to_string()),
                    content,
                },
            };
            (vec![node], idx)
        }
        Tag::Image {
            dest_url, title, ..
        } => {
            let (alt, idx) = collect_text(events, start);
            let node = Node::Image {
                target: dest_url.to_string(),
                alt,
                title: (!title.is_empty()).then(|| title.to_string()),
            };
            (vec![node], idx)
        }
        // Containers without a node of their own keep their children
        _ => parse_until_end(events, start, ctx),
    }
}

fn mailto_target(address: &str) -> String {
    if address.starts_with("mailto:") {
        address.to_string()
    } else {
        format!("mailto:{}", address)
    }
}

/// Concatenate all text up to the matching end tag (code bodies, alt text)
fn collect_text(events: &[Event<'_>], start: usize) -> (String, usize) {
    let mut text = String::new();
    let mut depth = 0usize;
    let mut idx = start;

    while idx < events.len() {
        match &events[idx] {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return (text, idx + 1),
            Event::End(_) => depth -= 1,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
        idx += 1;
    }

    (text, idx)
}

fn parse_list_items(events: &[Event<'_>], start: usize, ctx: Context) -> (Vec<Vec<Node>>, usize) {
    let mut items = Vec::new();
    let mut idx = start;

    while idx < events.len() {
        match &events[idx] {
            Event::End(_) => {
                return (items, idx + 1);
            }
            Event::Start(Tag::Item) => {
                // Tight items hold inline nodes directly, loose ones paragraphs
                let (item, new_idx) = parse_until_end(events, idx + 1, ctx);
                items.push(item);
                idx = new_idx;
            }
            _ => {
                idx += 1;
            }
        }
    }

    (items, idx)
}

type TableParts = (Vec<Vec<Node>>, Vec<Vec<Vec<Node>>>, usize);

fn parse_table(events: &[Event<'_>], start: usize, ctx: Context) -> TableParts {
    let mut header = Vec::new();
    let mut rows = Vec::new();
    let mut idx = start;
    let mut in_head = false;
    let mut current_row: Vec<Vec<Node>> = Vec::new();

    while idx < events.len() {
        match &events[idx] {
            Event::Start(Tag::TableHead) => {
                in_head = true;
                current_row.clear();
                idx += 1;
            }
            Event::Start(Tag::TableRow) => {
                current_row.clear();
                idx += 1;
            }
            Event::Start(Tag::TableCell) => {
                let (cell, new_idx) = parse_until_end(events, idx + 1, ctx);
                current_row.push(cell);
                idx = new_idx;
            }
            Event::End(TagEnd::TableHead) => {
                // Header cells may sit directly in the head, without a row
                if !current_row.is_empty() {
                    header = std::mem::take(&mut current_row);
                }
                in_head = false;
                idx += 1;
            }
            Event::End(TagEnd::TableRow) => {
                if in_head {
                    header = std::mem::take(&mut current_row);
                } else {
                    rows.push(std::mem::take(&mut current_row));
                }
                idx += 1;
            }
            Event::End(TagEnd::Table) => {
                return (header, rows, idx + 1);
            }
            _ => {
                idx += 1;
            }
        }
    }

    (header, rows, idx)
}

/// Convert text containing bare URLs into a mix of text and url nodes
fn autolink_text(text: &str) -> Vec<Node> {
    let mut result = Vec::new();
    let mut last_end = 0;

    for mat in URL_REGEX.find_iter(text) {
        // Add text before the URL
        if mat.start() > last_end {
            result.push(Node::text(&text[last_end..mat.start()]));
        }

        // Sentence punctuation after a URL stays in the surrounding text
        let url = mat.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        result.push(Node::Url {
            target: url.to_string(),
            content: vec![Node::text(url)],
        });

        last_end = mat.start() + url.len();
    }

    // Add any remaining text after the last URL
    if last_end < text.len() {
        result.push(Node::text(&text[last_end..]));
    }

    // If no URLs found, just return the original text
    if result.is_empty() {
        result.push(Node::text(text));
    }

    result
}
