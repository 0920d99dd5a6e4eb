mod data;

pub use data::{DEFAULT_FILE_ICON, FOLDER_ICON, glyph};

use std::collections::HashMap;

/// Static name-to-icon lookup tables, supplied once per invocation.
///
/// Exact file names and dot-prefixed extensions use hashed lookup; partials
/// are kept as an ordered list because resolution is first-match-wins in
/// insertion order. Two overlapping partial keys can both match a name and
/// the earlier one wins; this ambiguity is part of the observable contract.
#[derive(Clone, Debug, Default)]
pub struct IconTables {
    files: HashMap<String, String>,
    extensions: HashMap<String, String>,
    partials: Vec<(String, String)>,
}

impl IconTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Seti UI definitions.
    pub fn builtin() -> Self {
        data::builtin_tables()
    }

    pub fn add_file(&mut self, name: impl Into<String>, icon: impl Into<String>) {
        self.files.insert(name.into(), icon.into());
    }

    /// `extension` must include the leading dot, e.g. `.md`.
    pub fn add_extension(&mut self, extension: impl Into<String>, icon: impl Into<String>) {
        self.extensions.insert(extension.into(), icon.into());
    }

    pub fn add_partial(&mut self, partial: impl Into<String>, icon: impl Into<String>) {
        self.partials.push((partial.into(), icon.into()));
    }

    /// Resolve a file name to an icon identifier: exact name first, then the
    /// extension cascade, then ordered substring partials. `None` means the
    /// caller should fall back to the default file icon.
    pub fn icon_name(&self, file_name: &str) -> Option<&str> {
        if let Some(icon) = self.files.get(file_name) {
            return Some(icon);
        }
        if let Some(icon) = self.extension_icon(file_name) {
            return Some(icon);
        }
        self.partials
            .iter()
            .find(|(partial, _)| file_name.contains(partial.as_str()))
            .map(|(_, icon)| icon.as_str())
    }

    /// Extension lookup tries the longest suffix first: `name.with.dots`
    /// looks for `.with.dots`, then `.dots`.
    fn extension_icon(&self, file_name: &str) -> Option<&str> {
        let first_dot = file_name.find('.')?;
        let mut extension = &file_name[first_dot..];
        loop {
            if let Some(icon) = self.extensions.get(extension) {
                return Some(icon.as_str());
            }
            match extension[1..].find('.') {
                Some(offset) => extension = &extension[offset + 1..],
                None => return None,
            }
        }
    }
}
