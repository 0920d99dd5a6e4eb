use std::sync::LazyLock;

use anyhow::{Result, bail};
use regex::Regex;

use crate::core::classify::classify_entry;
use crate::core::rebuild::rebuild_entry;
use crate::icons::IconTables;
use crate::models::{Element, Node};

/// Text nodes containing only newlines are formatting noise and get stripped
/// at every element; comment nodes are never stripped.
static NEWLINE_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\n+$").unwrap());

/// Read-only state shared by one transformation pass.
pub struct TreeContext<'a> {
    pub directory_label: &'a str,
    pub tables: &'a IconTables,
}

/// Validate the shape of a parsed file tree: exactly one top-level `<ul>`
/// containing at least one list item. Pure read; rejects before any
/// rewriting happens.
pub fn validate(roots: &[Node]) -> Result<()> {
    let elements: Vec<&Element> = roots.iter().filter_map(Node::as_element).collect();

    if elements.is_empty() {
        bail!("invalid file tree: no child elements found, expected a single list");
    }
    if elements.len() > 1 {
        let tags = elements
            .iter()
            .map(|element| format!("`<{}>`", element.tag))
            .collect::<Vec<_>>()
            .join(" - ");
        bail!("invalid file tree: expected a single list but found multiple child elements: {tags}");
    }
    let root = elements[0];
    if root.tag != "ul" {
        bail!("invalid file tree: expected a list but found the following element: `<{}>`", root.tag);
    }
    if !has_list_item(root) {
        bail!("invalid file tree: list has no items");
    }
    Ok(())
}

fn has_list_item(element: &Element) -> bool {
    element
        .children
        .iter()
        .filter_map(Node::as_element)
        .any(|child| child.tag == "li" || has_list_item(child))
}

/// Transform a validated tree top-down, classifying every list item and
/// replacing its children with the annotated markup. Pure: each visited
/// element is consumed and a rebuilt one is returned, so the traversal never
/// revisits a node it already replaced.
pub fn transform(roots: Vec<Node>, ctx: &TreeContext) -> Vec<Node> {
    descend(roots, ctx)
}

fn descend(children: Vec<Node>, ctx: &TreeContext) -> Vec<Node> {
    children
        .into_iter()
        .map(|child| match child {
            Node::Element(element) => Node::Element(transform_element(element, ctx)),
            other => other,
        })
        .collect()
}

fn transform_element(mut element: Element, ctx: &TreeContext) -> Element {
    element.children.retain(|child| match child {
        Node::Text(value) => !NEWLINE_ONLY.is_match(value),
        _ => true,
    });

    if element.tag != "li" {
        element.children = descend(std::mem::take(&mut element.children), ctx);
        return element;
    }

    let entry = classify_entry(std::mem::take(&mut element.children));

    let mut class = if entry.is_directory { "directory" } else { "file" }.to_owned();
    if entry.is_placeholder {
        class.push_str(" empty");
    }
    element.set_attr("class", &class);

    let is_directory = entry.is_directory;
    let rebuilt = rebuild_entry(entry, ctx.directory_label, ctx.tables);
    element.children = if is_directory {
        // Continue down into the rebuilt disclosure so nested (and
        // synthesized) entries are classified too.
        descend(rebuilt, ctx)
    } else {
        // Files cannot contain further files or directories; their remaining
        // children are left untouched.
        rebuilt
    };
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{parse_fragment, serialize};

    fn run(html: &str) -> String {
        let tables = IconTables::builtin();
        let ctx = TreeContext {
            directory_label: "Directory",
            tables: &tables,
        };
        let tree = parse_fragment(html);
        validate(&tree).unwrap();
        serialize(&transform(tree, &ctx))
    }

    #[test]
    fn every_item_is_classified_as_file_or_directory() {
        let out = run("<ul>\n<li>README.md</li>\n<li>src/<ul><li>main.rs</li></ul></li>\n</ul>");
        assert!(out.contains("<li class=\"file\"><span class=\"tree-entry\">"));
        assert!(out.contains("<li class=\"directory\"><details open>"));
        // The nested item was classified on the way down.
        assert!(out.contains("main.rs"));
        assert_eq!(out.matches("class=\"file\"").count(), 2);
    }

    #[test]
    fn newline_only_text_nodes_are_stripped() {
        let out = run("<ul>\n<li>a.txt</li>\n</ul>");
        assert!(!out.contains("\n"));
    }

    #[test]
    fn trailing_slash_directory_without_children_renders_open_placeholder() {
        let out = run("<ul><li>src/</li></ul>");
        assert!(out.contains("<li class=\"directory\"><details open>"));
        // The synthesized placeholder item was itself classified.
        assert!(out.contains("<li class=\"file empty\"><span class=\"tree-entry\"><span>…</span></span></li>"));
    }

    #[test]
    fn placeholder_item_has_no_icon_and_empty_class() {
        let out = run("<ul><li>...</li></ul>");
        assert!(out.contains("<li class=\"file empty\">"));
        assert!(!out.contains("svg"));
    }

    #[test]
    fn text_comment_splits_into_its_own_span() {
        let out = run("<ul><li>README.md This is a comment</li></ul>");
        assert!(out.contains("<span>README.md</span>"));
        assert!(out.contains("<span class=\"comment\">This is a comment</span>"));
    }

    // The default file glyph's path data, used to tell fallback icons apart.
    const DEFAULT_GLYPH_PATH: &str = "M13 9V3.5L18.5 9";

    #[test]
    fn known_names_resolve_through_the_icon_cascade() {
        // Exact file name, extension suffix, and multi-dot fallback all pass
        // through distinct cascade steps and end in a non-default glyph.
        for name in ["LICENSE", "README.md", "app.lock.json"] {
            let out = run(&format!("<ul><li>{name}</li></ul>"));
            assert!(out.contains("class=\"tree-icon\""), "{name} should carry an icon");
            assert!(
                !out.contains(DEFAULT_GLYPH_PATH),
                "{name} should not use the default icon"
            );
        }
    }

    #[test]
    fn unmatched_names_fall_back_to_the_default_icon() {
        let out = run("<ul><li>mystery.xyz</li></ul>");
        assert!(out.contains(DEFAULT_GLYPH_PATH));
    }

    #[test]
    fn directory_label_is_announced_before_the_glyph() {
        let out = run("<ul><li>src/</li></ul>");
        let label = out.find("<span class=\"sr-only\">Directory</span>").unwrap();
        let svg = out.find("<svg").unwrap();
        assert!(label < svg);
    }

    #[test]
    fn files_do_not_recurse_into_remaining_children() {
        // A list nested under a file (behind a non-list sibling boundary)
        // would be comment content instead; lists after the boundary make the
        // item a directory. So a file's rest is only ever non-list content,
        // which must be preserved untouched.
        let out = run("<ul><li>notes.txt see <em>docs</em></li></ul>");
        assert!(out.contains("<span class=\"comment\">see <em>docs</em></span>"));
    }

    #[test]
    fn validation_rejects_empty_input() {
        let tree = parse_fragment("\n");
        let err = validate(&tree).unwrap_err().to_string();
        assert!(err.contains("no child elements"));
    }

    #[test]
    fn validation_names_every_extra_top_level_element() {
        let tree = parse_fragment("<p>intro</p><ul><li>a</li></ul>");
        let err = validate(&tree).unwrap_err().to_string();
        assert!(err.contains("`<p>`"));
        assert!(err.contains("`<ul>`"));
    }

    #[test]
    fn validation_rejects_a_non_list_root() {
        let tree = parse_fragment("<ol><li>a</li></ol>");
        let err = validate(&tree).unwrap_err().to_string();
        assert!(err.contains("`<ol>`"));
    }

    #[test]
    fn validation_rejects_a_list_with_no_items() {
        let tree = parse_fragment("<ul></ul>");
        let err = validate(&tree).unwrap_err().to_string();
        assert!(err.contains("no items"));
    }

    #[test]
    fn validation_accepts_deeply_nested_first_item() {
        let tree = parse_fragment("<ul><ul><li>deep</li></ul></ul>");
        assert!(validate(&tree).is_ok());
    }
}
