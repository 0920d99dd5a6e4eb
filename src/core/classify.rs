use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Entry, Node};

/// A name ending in `/` (optionally followed by whitespace) marks a directory.
static TRAILING_SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\s*$").unwrap());

/// A name that is exactly three dots or an ellipsis marks a placeholder.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\.{3}|…)\s*$").unwrap());

/// Classify the (already whitespace-stripped) children of one list item and
/// collect its trailing comment.
///
/// The first child's text splits at the first space into the display name and
/// a comment fragment, e.g. `README.md This is a comment`. Comments are not
/// always confined to that text node: inline markup such as
/// `README.md This is an <em>important</em> comment` produces further sibling
/// nodes, so everything up to the first nested list (or all siblings when
/// there is none) is comment content too.
pub fn classify_entry(children: Vec<Node>) -> Entry {
    let mut children = children.into_iter();
    let mut first = children.next().unwrap_or_else(|| Node::text(""));
    let mut rest: Vec<Node> = children.collect();
    let mut comment: Vec<Node> = Vec::new();

    if let Node::Text(value) = &mut first {
        if let Some((file_name, fragment)) = value.split_once(' ') {
            let file_name = file_name.to_owned();
            if !fragment.trim().is_empty() {
                comment.push(Node::text(fragment));
            }
            *value = file_name;
        }
    }

    let sub_tree_index = rest.iter().position(is_nested_list);
    let boundary = sub_tree_index.unwrap_or(rest.len());
    comment.extend(rest.drain(..boundary));

    let name = first.text_content();
    let is_highlighted = matches!(&first, Node::Element(el) if el.tag == "strong");
    let is_placeholder = PLACEHOLDER.is_match(&name);
    // Placeholders are never directories and never render a comment, even
    // when they would otherwise qualify.
    let is_directory =
        !is_placeholder && (TRAILING_SLASH.is_match(&name) || rest.iter().any(is_nested_list));
    if is_placeholder {
        comment.clear();
    }

    Entry {
        first,
        name,
        is_directory,
        is_placeholder,
        is_highlighted,
        comment,
        rest,
    }
}

pub fn is_nested_list(node: &Node) -> bool {
    matches!(node, Node::Element(el) if el.tag == "ul")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_fragment;
    use crate::models::Element;

    fn li_children(html: &str) -> Vec<Node> {
        let nodes = parse_fragment(html);
        let ul = nodes[0].as_element().unwrap();
        let li = ul.children[0].as_element().unwrap();
        li.children.clone()
    }

    #[test]
    fn splits_name_and_trailing_text_comment() {
        let entry = classify_entry(li_children("<ul><li>README.md This is a comment</li></ul>"));
        assert_eq!(entry.name, "README.md");
        assert_eq!(entry.first, Node::text("README.md"));
        assert_eq!(entry.comment, vec![Node::text("This is a comment")]);
        assert!(!entry.is_directory);
        assert!(!entry.is_placeholder);
    }

    #[test]
    fn comment_spans_inline_markup_siblings() {
        let entry = classify_entry(li_children(
            "<ul><li>README.md This is an <em>important</em> comment</li></ul>",
        ));
        assert_eq!(entry.name, "README.md");
        assert_eq!(entry.comment.len(), 3);
        assert_eq!(entry.comment[0], Node::text("This is an "));
        assert_eq!(entry.comment[1].as_element().unwrap().tag, "em");
        assert_eq!(entry.comment[2], Node::text(" comment"));
        assert!(entry.rest.is_empty());
    }

    #[test]
    fn comment_collection_stops_at_nested_list() {
        let entry = classify_entry(li_children(
            "<ul><li>src important stuff<ul><li>main.rs</li></ul></li></ul>",
        ));
        assert!(entry.is_directory);
        assert_eq!(entry.comment, vec![Node::text("important stuff")]);
        assert_eq!(entry.rest.len(), 1);
        assert!(is_nested_list(&entry.rest[0]));
    }

    #[test]
    fn trailing_slash_marks_a_directory_without_children() {
        let entry = classify_entry(li_children("<ul><li>src/</li></ul>"));
        assert!(entry.is_directory);
        assert!(entry.rest.is_empty());
    }

    #[test]
    fn strong_first_child_is_highlighted() {
        let entry = classify_entry(li_children("<ul><li><strong>README.md</strong></li></ul>"));
        assert!(entry.is_highlighted);
        assert_eq!(entry.name, "README.md");
        // No name-adjacent comment fragment when the first child is markup.
        assert!(entry.comment.is_empty());
    }

    #[test]
    fn three_dots_and_ellipsis_are_placeholders() {
        for text in ["...", "…"] {
            let entry = classify_entry(vec![Node::text(text)]);
            assert!(entry.is_placeholder, "{text:?} should be a placeholder");
            assert!(!entry.is_directory);
        }

        // An ellipsis inside markup keeps its surrounding whitespace in the
        // rendered text and still counts.
        let mut strong = Element::new("strong");
        strong.children.push(Node::text(" … "));
        let entry = classify_entry(vec![Node::Element(strong)]);
        assert!(entry.is_placeholder);
    }

    #[test]
    fn placeholder_never_keeps_a_comment_or_directory_status() {
        let mut nested = Element::new("ul");
        nested.children.push(Node::Element(Element::new("li")));
        let entry = classify_entry(vec![Node::text("... stray text"), Node::Element(nested)]);
        assert!(entry.is_placeholder);
        assert!(!entry.is_directory);
        assert!(entry.comment.is_empty());
    }

    #[test]
    fn empty_list_item_classifies_as_plain_file() {
        let entry = classify_entry(Vec::new());
        assert_eq!(entry.name, "");
        assert!(!entry.is_directory);
        assert!(!entry.is_placeholder);
    }
}
