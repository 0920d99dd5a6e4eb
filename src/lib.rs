pub mod cli;
pub mod core;
pub mod html;
pub mod icons;
pub mod models;

use std::sync::LazyLock;

use anyhow::Result;

use crate::core::walk::{TreeContext, transform, validate};
use crate::icons::IconTables;

static BUILTIN_TABLES: LazyLock<IconTables> = LazyLock::new(IconTables::builtin);

/// Process the markup for a file tree: classify every entry as a file,
/// directory or placeholder, attach icons, split out trailing comments and
/// wrap directories in disclosure widgets. `directory_label` is the localized
/// accessibility label announced before directory names.
///
/// Fails with a validation error when the payload is not a single list with
/// at least one item. The transformation is one-shot: feeding its own output
/// back in is out of contract.
pub fn process_file_tree(html: &str, directory_label: &str) -> Result<String> {
    process_file_tree_with(html, directory_label, &BUILTIN_TABLES)
}

/// Same as [`process_file_tree`] but with caller-supplied icon tables.
pub fn process_file_tree_with(
    html: &str,
    directory_label: &str,
    tables: &IconTables,
) -> Result<String> {
    let tree = html::parse_fragment(html);
    validate(&tree)?;
    let ctx = TreeContext {
        directory_label,
        tables,
    };
    Ok(html::serialize(&transform(tree, &ctx)))
}
