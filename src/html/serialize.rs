use crate::models::Node;

use super::is_void;

/// Serialize nodes back to markup text, the inverse of `parse_fragment`.
/// Text payloads are written verbatim (the parser does not decode character
/// references); only `"` needs escaping inside attribute values.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(value) => out.push_str(value),
        Node::Comment(value) => {
            out.push_str("<!--");
            out.push_str(value);
            out.push_str("-->");
        }
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attrs {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&value.replace('"', "&quot;"));
                    out.push('"');
                }
            }
            out.push('>');
            if is_void(&element.tag) {
                return;
            }
            for child in &element.children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_fragment;
    use crate::models::{Element, Node};

    #[test]
    fn round_trips_a_simple_list() {
        let input = "<ul><li>README.md</li><li>src/</li></ul>";
        assert_eq!(serialize(&parse_fragment(input)), input);
    }

    #[test]
    fn valueless_attributes_serialize_as_bare_names() {
        let mut details = Element::new("details");
        details.set_attr("open", "");
        assert_eq!(serialize(&[Node::Element(details)]), "<details open></details>");
    }

    #[test]
    fn void_elements_get_no_end_tag() {
        let nodes = parse_fragment("<ul><li>a<br>b</li></ul>");
        assert_eq!(serialize(&nodes), "<ul><li>a<br>b</li></ul>");
    }

    #[test]
    fn escapes_quotes_in_attribute_values() {
        let mut span = Element::new("span");
        span.set_attr("title", "say \"hi\"");
        assert_eq!(
            serialize(&[Node::Element(span)]),
            "<span title=\"say &quot;hi&quot;\"></span>"
        );
    }
}
