//! Indented text outline of an element tree

use std::fmt::{self, Write};

use mdrules_core::Element;

const INDENT: &str = "  ";

/// One line per element: kind, key, style names, then literal text or press target
pub fn outline(root: &Element) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_element(&mut out, root, 0)?;
    Ok(out)
}

fn write_element(out: &mut String, element: &Element, depth: usize) -> fmt::Result {
    let styles: Vec<_> = element
        .style()
        .keys()
        .iter()
        .map(|k| k.as_str())
        .collect();

    write!(
        out,
        "{}{} [{}]",
        INDENT.repeat(depth),
        element.kind(),
        element.key()
    )?;
    if !styles.is_empty() {
        write!(out, " {}", styles.join(","))?;
    }
    if let Some(text) = element.literal() {
        write!(out, " {:?}", text)?;
    }
    if let Some(handler) = element.press_handler() {
        match handler.target() {
            Some(target) => write!(out, " -> {}", target)?,
            None => out.push_str(" -> (noop)"),
        }
    }
    if let Element::Image(image) = element {
        write!(out, " {:?}", image.source)?;
    }
    out.push('\n');

    for child in element.children() {
        write_element(out, child, depth + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use mdrules_core::NodeRenderer;

    use super::*;

    #[test]
    fn test_outline_lines() {
        let root = NodeRenderer::default().render_markdown("# Hi\n\n[go](http://example.com)\n");
        let text = outline(&root).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "View [root] view");
        assert_eq!(lines[1], "  Text [0] heading,heading1");
        assert_eq!(lines[2], "    Text [0] text \"Hi\"");
        assert_eq!(lines[3], "  Text [1] paragraph");
        assert_eq!(lines[4], "    Text [0] autolink -> http://example.com");
        assert_eq!(lines[5], "      Text [0] text,autolink \"go\"");
    }
}
