use crate::html::parse_fragment;
use crate::icons::{DEFAULT_FILE_ICON, FOLDER_ICON, IconTables, glyph};
use crate::models::{Element, Entry, Node};

/// Build the replacement children for a classified list item.
///
/// The tree entry is a `span.tree-entry` holding the icon span (omitted for
/// placeholders), the name span wrapping the original first child, and the
/// comment span when any comment was collected. Directories wrap the entry
/// in a `<summary>` inside an always-open `<details>`; an empty directory
/// gets a synthesized placeholder item so the disclosure has content.
pub fn rebuild_entry(entry: Entry, directory_label: &str, tables: &IconTables) -> Vec<Node> {
    let Entry {
        first,
        name,
        is_directory,
        is_placeholder,
        is_highlighted,
        comment,
        rest,
    } = entry;

    let mut entry_children: Vec<Node> = Vec::new();
    if !is_placeholder {
        let icon = if is_directory {
            directory_icon(directory_label)
        } else {
            file_icon(&name, tables)
        };
        entry_children.push(Node::Element(icon));
    }

    let mut name_span = Element::new("span");
    if is_highlighted {
        name_span.set_attr("class", "highlight");
    }
    name_span.children.push(first);
    entry_children.push(Node::Element(name_span));

    if !comment.is_empty() {
        entry_children.push(Node::text(" "));
        let mut comment_span = Element::new("span");
        comment_span.set_attr("class", "comment");
        comment_span.children = comment;
        entry_children.push(Node::Element(comment_span));
    }

    let mut tree_entry = Element::new("span");
    tree_entry.set_attr("class", "tree-entry");
    tree_entry.children = entry_children;

    if is_directory {
        let mut summary = Element::new("summary");
        summary.children.push(Node::Element(tree_entry));

        let mut details = Element::new("details");
        details.set_attr("open", "");
        details.children.push(Node::Element(summary));
        if rest.is_empty() {
            details.children.push(Node::Element(placeholder_list()));
        } else {
            details.children.extend(rest);
        }
        vec![Node::Element(details)]
    } else {
        let mut rebuilt = vec![Node::Element(tree_entry)];
        rebuilt.extend(rest);
        rebuilt
    }
}

/// Icon span for a directory: an accessibility-only label precedes the glyph
/// so screen readers announce the kind before the name.
fn directory_icon(directory_label: &str) -> Element {
    let mut sr_only = Element::new("span");
    sr_only.set_attr("class", "sr-only");
    sr_only.children.push(Node::text(directory_label));

    let mut icon = Element::new("span");
    icon.children.push(Node::Element(sr_only));
    icon.children
        .push(Node::Element(make_svg_icon(folder_glyph())));
    icon
}

/// Icon span for a file, falling back to the default icon when the name
/// resolves to nothing (or to an identifier with no registered glyph).
fn file_icon(file_name: &str, tables: &IconTables) -> Element {
    let markup = tables
        .icon_name(file_name)
        .and_then(glyph)
        .unwrap_or_else(default_glyph);

    let mut icon = Element::new("span");
    icon.children.push(Node::Element(make_svg_icon(markup)));
    icon
}

fn folder_glyph() -> &'static str {
    glyph(FOLDER_ICON).unwrap_or_default()
}

fn default_glyph() -> &'static str {
    glyph(DEFAULT_FILE_ICON).unwrap_or_default()
}

fn make_svg_icon(markup: &str) -> Element {
    let mut svg = Element::new("svg");
    svg.set_attr("width", "16");
    svg.set_attr("height", "16");
    svg.set_attr("class", "tree-icon");
    svg.set_attr("aria-hidden", "true");
    svg.set_attr("viewBox", "0 0 24 24");
    svg.children = parse_fragment(markup);
    svg
}

fn placeholder_list() -> Element {
    let mut item = Element::new("li");
    item.children.push(Node::text("…"));
    let mut list = Element::new("ul");
    list.children.push(Node::Element(item));
    list
}
