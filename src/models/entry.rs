use super::Node;

/// Classification result for one list-item node: exactly one of file,
/// directory or placeholder, plus the extracted name and trailing comment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// The (possibly rewritten) first child of the list item.
    pub first: Node,
    /// Rendered text of the first child after name extraction.
    pub name: String,
    pub is_directory: bool,
    pub is_placeholder: bool,
    pub is_highlighted: bool,
    /// Collected comment fragments, in source order.
    pub comment: Vec<Node>,
    /// Remaining siblings, starting at the nested list when one exists.
    pub rest: Vec<Node>,
}
