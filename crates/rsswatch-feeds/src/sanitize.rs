//! Markup stripping for notification bodies.

use ego_tree::iter::Edge;
use scraper::{Html, Node};

/// Elements whose boundaries start a new line of text.
const BLOCK_ELEMENTS: &[&str] = &[
    "blockquote",
    "br",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "table",
    "tr",
    "ul",
];

/// Elements whose content is dropped along with the tags.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style"];

/// Strip all markup from html, leaving plain text.
///
/// The html is parsed as a fragment and only its text is kept. Entities are
/// decoded by the parser, `script` and `style` content is dropped, and
/// whitespace is collapsed. Block-level elements become line breaks.
/// A `<` that does not open a tag is kept as text.
pub fn strip_markup(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut text = String::with_capacity(html.len());
    let mut hidden_depth: usize = 0;

    for edge in fragment.root_element().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Text(content) if hidden_depth == 0 => {
                    text.push_str(content);
                }
                Node::Element(element) => {
                    if HIDDEN_ELEMENTS.contains(&element.name()) {
                        hidden_depth += 1;
                    } else if BLOCK_ELEMENTS.contains(&element.name()) {
                        text.push('\n');
                    }
                }
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    if HIDDEN_ELEMENTS.contains(&element.name()) {
                        hidden_depth = hidden_depth.saturating_sub(1);
                    } else if BLOCK_ELEMENTS.contains(&element.name()) {
                        text.push('\n');
                    }
                }
            }
        }
    }

    collapse_whitespace(&text)
}

/// Collapse runs of whitespace within lines and drop blank lines.
fn collapse_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<&str>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        assert_eq!(strip_markup("<b>Bold</b> text"), "Bold text");
        assert_eq!(strip_markup("<div><span>Nested</span></div>"), "Nested");
        assert_eq!(
            strip_markup(r#"<a href="https://example.com">link</a>"#),
            "link"
        );
    }

    #[test]
    fn block_elements_break_lines() {
        assert_eq!(
            strip_markup("<p>First</p><p>Second<br/>Third</p>"),
            "First\nSecond\nThird"
        );
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(strip_markup("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(strip_markup("&lt;tag&gt;"), "<tag>");
        assert_eq!(strip_markup("&quot;quoted&quot;"), "\"quoted\"");
        assert_eq!(strip_markup("A&nbsp;B"), "A B");
        assert_eq!(strip_markup("&#65;&#x42;"), "AB");
        assert_eq!(strip_markup("&#x3042;"), "あ");
    }

    #[test]
    fn leaves_unknown_entities() {
        assert_eq!(strip_markup("&bogus; & more"), "&bogus; & more");
        assert_eq!(strip_markup("fish & chips;"), "fish & chips;");
    }

    #[test]
    fn drops_hidden_content_and_comments() {
        assert_eq!(
            strip_markup(
                "Hi<script type=\"text/javascript\">alert(1)</SCRIPT> there"
            ),
            "Hi there"
        );
        assert_eq!(strip_markup("a<style>p { }</style>b"), "ab");
        assert_eq!(strip_markup("a <!-- hidden <b>x</b> --> b"), "a b");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            strip_markup("<p>  Multiple   spaces  </p>\n\t\n<p>\tand\ttabs</p>"),
            "Multiple spaces\nand tabs"
        );
    }

    #[test]
    fn unterminated_tag() {
        assert_eq!(strip_markup("text <b unterminated"), "text");
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn keeps_stray_angle_brackets() {
        assert_eq!(
            strip_markup("Episodes 1 < 2 are out now"),
            "Episodes 1 < 2 are out now"
        );
        assert_eq!(
            strip_markup("Score 3 <5 stars> <b>great</b> show"),
            "Score 3 <5 stars> great show"
        );
        assert_eq!(strip_markup("a < b > c"), "a < b > c");
        assert_eq!(strip_markup("<p>x <= y</p>"), "x <= y");
    }
}
