use memchr::memchr;

use crate::models::{Element, Node};

use super::{is_name_byte, is_void, is_ws};

/// Parse a markup fragment (no implicit document wrapper) into a list of
/// root nodes. Tag and attribute names are ASCII-lowercased. Character
/// references are not decoded; text round-trips verbatim through the
/// serializer. Unclosed elements are closed at end of input.
pub fn parse_fragment(input: &str) -> Vec<Node> {
    let src = input.as_bytes();
    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut i = 0;

    while i < src.len() {
        if src[i] == b'<' {
            if src[i..].starts_with(b"<!--") {
                let (value, next) = match find_comment_end(src, i + 4) {
                    Some(end) => (&input[i + 4..end], end + 3),
                    None => (&input[i + 4..], src.len()),
                };
                append(&mut stack, &mut roots, Node::Comment(value.to_owned()));
                i = next;
                continue;
            }
            if let Some(end) = find_tag_end(src, i) {
                handle_tag(&input[i..=end], &mut stack, &mut roots);
                i = end + 1;
                continue;
            }
            // Unterminated tag; keep the rest as literal text.
            append(&mut stack, &mut roots, Node::text(&input[i..]));
            break;
        }

        let next_lt = memchr(b'<', &src[i..]).map_or(src.len(), |off| i + off);
        append(&mut stack, &mut roots, Node::text(&input[i..next_lt]));
        i = next_lt;
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }
    roots
}

/// Find the index of the `>` closing the tag starting at `i`, quote-aware.
fn find_tag_end(src: &[u8], mut i: usize) -> Option<usize> {
    i += 1;
    let mut quote: u8 = 0;
    while i < src.len() {
        let b = src[i];
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
        } else if b == b'"' || b == b'\'' {
            quote = b;
        } else if b == b'>' {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Find the index of the `-->` terminator, returning the position of its
/// first dash.
fn find_comment_end(src: &[u8], mut i: usize) -> Option<usize> {
    while let Some(off) = memchr(b'-', &src[i..]) {
        let j = i + off;
        if src[j..].starts_with(b"-->") {
            return Some(j);
        }
        i = j + 1;
    }
    None
}

struct Tag {
    name: String,
    attrs: Vec<(String, String)>,
    is_end: bool,
    self_closing: bool,
}

fn handle_tag(raw: &str, stack: &mut Vec<Element>, roots: &mut Vec<Node>) {
    let tag = parse_tag(raw);
    if tag.name.is_empty() {
        return;
    }

    if tag.is_end {
        // Close up to the matching open element; stray end tags are ignored.
        if let Some(pos) = stack.iter().rposition(|el| el.tag == tag.name) {
            while stack.len() > pos {
                close_top(stack, roots);
            }
        }
        return;
    }

    // A sibling `<li>` implies the end of the currently open one.
    if tag.name == "li" && stack.last().is_some_and(|el| el.tag == "li") {
        close_top(stack, roots);
    }

    let mut element = Element::new(tag.name);
    element.attrs = tag.attrs;

    if tag.self_closing || is_void(&element.tag) {
        append(stack, roots, Node::Element(element));
    } else {
        stack.push(element);
    }
}

/// Extract name, attributes and end/self-closing flags from raw `<...>` text.
fn parse_tag(raw: &str) -> Tag {
    let bytes = raw.as_bytes();
    let n = bytes.len();
    let mut i = 1;

    let mut is_end = false;
    if i < n && bytes[i] == b'/' {
        is_end = true;
        i += 1;
    }
    while i < n && is_ws(bytes[i]) {
        i += 1;
    }
    let name_start = i;
    while i < n && is_name_byte(bytes[i]) {
        i += 1;
    }
    let name = raw[name_start..i].to_ascii_lowercase();

    let mut j = n - 1;
    while j > 1 && is_ws(bytes[j - 1]) {
        j -= 1;
    }
    let self_closing = j >= 2 && bytes[j - 1] == b'/';

    let attrs = if is_end { Vec::new() } else { parse_attrs(raw, i) };

    Tag {
        name,
        attrs,
        is_end,
        self_closing,
    }
}

/// Attribute scanner: `name` optionally followed by `= value` where the value
/// may be quoted or unquoted. A valueless attribute gets an empty value.
fn parse_attrs(raw: &str, mut i: usize) -> Vec<(String, String)> {
    let bytes = raw.as_bytes();
    let n = bytes.len();
    let mut attrs = Vec::new();

    while i < n && bytes[i] != b'>' {
        while i < n && (is_ws(bytes[i]) || bytes[i] == b'/') {
            i += 1;
        }
        if i >= n || bytes[i] == b'>' {
            break;
        }
        if !is_name_byte(bytes[i]) {
            i += 1;
            continue;
        }

        let name_start = i;
        while i < n && is_name_byte(bytes[i]) {
            i += 1;
        }
        let name = raw[name_start..i].to_ascii_lowercase();

        while i < n && is_ws(bytes[i]) {
            i += 1;
        }

        let mut value = String::new();
        if i < n && bytes[i] == b'=' {
            i += 1;
            while i < n && is_ws(bytes[i]) {
                i += 1;
            }
            if i < n && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < n && bytes[i] != quote {
                    i += 1;
                }
                value = raw[value_start..i].to_owned();
                if i < n {
                    i += 1;
                }
            } else {
                let value_start = i;
                while i < n && !is_ws(bytes[i]) && bytes[i] != b'>' {
                    i += 1;
                }
                value = raw[value_start..i].to_owned();
            }
        }

        attrs.push((name, value));
    }

    attrs
}

fn append(stack: &mut Vec<Element>, roots: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

fn close_top(stack: &mut Vec<Element>, roots: &mut Vec<Node>) {
    let element = match stack.pop() {
        Some(element) => element,
        None => return,
    };
    append(stack, roots, Node::Element(element));
}
