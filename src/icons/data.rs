//! Built-in Seti UI icon data: the glyph markup table and the default
//! file-name definitions. Process-wide static configuration; never mutated
//! at runtime.

use super::IconTables;

/// Reserved identifier for the directory icon.
pub const FOLDER_ICON: &str = "seti:folder";
/// Reserved identifier for files with no registered icon.
pub const DEFAULT_FILE_ICON: &str = "seti:default";

/// Look up the vector-graphic markup fragment for an icon identifier.
pub fn glyph(id: &str) -> Option<&'static str> {
    let markup = match id {
        "seti:folder" => {
            r#"<path d="M10 4H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V8c0-1.1-.9-2-2-2h-8l-2-2z"/>"#
        }
        "seti:default" => {
            r#"<path d="M13 9V3.5L18.5 9M6 2c-1.11 0-2 .89-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V8l-6-6H6z"/>"#
        }
        "seti:markdown" => {
            r#"<path d="M2.8 15.4V8.6h2l2 2.5 2-2.5h2v6.8h-2v-3.9l-2 2.5-2-2.5v3.9zm13.4 0-3-3.3h2V8.6h2v3.5h2z"/>"#
        }
        "seti:json" => {
            r#"<path d="M6 5c-1.1 0-2 .9-2 2v2c0 1.1-.9 2-2 2 1.1 0 2 .9 2 2v2c0 1.1.9 2 2 2m12-12c1.1 0 2 .9 2 2v2c0 1.1.9 2 2 2-1.1 0-2 .9-2 2v2c0 1.1-.9 2-2 2"/>"#
        }
        "seti:javascript" => {
            r#"<path d="M3 3h18v18H3V3zm9.7 14.9v-7h-1.9v7c0 1-.4 1.3-1.1 1.3-.7 0-1-.5-1.3-1l-1.6.9c.4 1 1.4 1.8 3 1.8 1.8 0 2.9-.9 2.9-3z"/>"#
        }
        "seti:typescript" => {
            r#"<path d="M3 3h18v18H3V3zm10.7 9.3H7.4v1.7h2.2v6.3h2V14h2.1v-1.7z"/>"#
        }
        "seti:react" => {
            r#"<circle cx="12" cy="12" r="2"/><path d="M12 7.5c5 0 9 2 9 4.5s-4 4.5-9 4.5-9-2-9-4.5 4-4.5 9-4.5z"/>"#
        }
        "seti:rust" => {
            r#"<path d="M12 2l2 3h4l1 4 3 2-3 2-1 4h-4l-2 3-2-3H6l-1-4-3-2 3-2 1-4h4l2-3zm0 6a4 4 0 100 8 4 4 0 000-8z"/>"#
        }
        "seti:css" => {
            r#"<path d="M4 3h16l-1.5 16.5L12 21l-6.5-1.5L4 3zm12.8 5H8l.2 2h8.3l-.5 6-4 1.2-4-1.2-.3-3h2l.2 1.5 2.1.6 2.1-.6.3-2.5H7.6L7 6h10l-.2 2z"/>"#
        }
        "seti:html" => {
            r#"<path d="M4 3h16l-1.5 16.5L12 21l-6.5-1.5L4 3zm4 5l.3 2h7.2l-.3 4-3.2 1-3.2-1-.2-2H6.8l.3 3.5L12 17l4.9-1.5L17.6 6H7.8L8 8z"/>"#
        }
        "seti:yml" => {
            r#"<path d="M4 6l4 6v6h2v-6l4-6h-2.3L9 10.5 6.3 6H4zm11 0v12h6v-2h-4V6h-2z"/>"#
        }
        "seti:image" => {
            r#"<path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zm2 12l3.5-4.5 2.5 3 3.5-4.5 4.5 6H6z"/>"#
        }
        "seti:lock" => {
            r#"<path d="M12 2a5 5 0 00-5 5v3H6c-1.1 0-2 .9-2 2v8c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2v-8c0-1.1-.9-2-2-2h-1V7a5 5 0 00-5-5zm0 2a3 3 0 013 3v3H9V7a3 3 0 013-3z"/>"#
        }
        "seti:license" => {
            r#"<path d="M12 2l3 6 6 .9-4.5 4.3L17.5 19 12 16l-5.5 3 1-5.8L3 8.9 9 8l3-6z"/>"#
        }
        "seti:git" => {
            r#"<path d="M21.6 11.2L12.8 2.4a1.4 1.4 0 00-2 0L8.9 4.3l2.3 2.3a1.7 1.7 0 012.2 2.2l2.2 2.2a1.7 1.7 0 11-1 1l-2-2v5.4a1.7 1.7 0 11-1.4-.1V9.8a1.7 1.7 0 01-.9-2.3L8 5.2l-5.6 5.6a1.4 1.4 0 000 2l8.8 8.8a1.4 1.4 0 002 0l8.4-8.4a1.4 1.4 0 000-2z"/>"#
        }
        "seti:npm" => {
            r#"<path d="M2 8h20v8h-10v2h-4v-2H2V8zm4 2v4h2v-3h1v3h1v-4H6zm6 0v5h2v-1h2V10h-4zm2 1h1v2h-1v-2zm4-1v4h2v-3h1v3h1v-4h-4z"/>"#
        }
        "seti:docker" => {
            r#"<path d="M4 10h2v2H4v-2zm3 0h2v2H7v-2zm3 0h2v2h-2v-2zm-3-3h2v2H7V7zm3 0h2v2h-2V7zm3 3h2v2h-2v-2zm8 1c-.6-.4-1.8-.5-2.7-.3-.1-.9-.6-1.6-1.4-2.2l-.5-.3-.3.5c-.4.7-.6 1.7-.5 2.5-1-.1-1.9-.2-2.6-.2H2c0 2.1.4 4 1.5 5.4C4.7 17.8 6.6 18.5 9 18.5c5.2 0 9.1-2.4 10.9-6.8.7 0 2.2 0 3-1.5l.2-.4-1.1-.8z"/>"#
        }
        "seti:python" => {
            r#"<path d="M11.9 2c-5 0-4.7 2.2-4.7 2.2v2.2h4.8v.7H5.3S2 6.7 2 11.9c0 5.2 2.9 5 2.9 5h1.7v-2.4s-.1-2.9 2.8-2.9h4.8s2.7 0 2.7-2.6V4.6S17.4 2 11.9 2zM9.3 3.5a.9.9 0 110 1.8.9.9 0 010-1.8z"/>"#
        }
        "seti:go" => {
            r#"<path d="M2.7 10.5h5.4l-.3 1H2.4l.3-1zm-1.3 2h5.9l-.3 1H1.1l.3-1zm13.9-4.4c-3 0-5.3 1.9-6 4.6-.7 2.8 1 4.8 4 4.8s5.4-1.9 6.1-4.7c.7-2.8-1.1-4.7-4.1-4.7zm1.9 4.7c-.4 1.7-1.9 2.9-3.6 2.9-1.7 0-2.7-1.2-2.2-2.9.4-1.7 1.9-2.9 3.6-2.9 1.7 0 2.6 1.2 2.2 2.9z"/>"#
        }
        "seti:shell" => {
            r#"<path d="M3 4h18c.6 0 1 .4 1 1v14c0 .6-.4 1-1 1H3c-.6 0-1-.4-1-1V5c0-.6.4-1 1-1zm2 4l4 4-4 4 1.4 1.4L11.8 12 6.4 6.6 5 8zm7 8h7v2h-7v-2z"/>"#
        }
        "seti:config" => {
            r#"<path d="M12 8a4 4 0 100 8 4 4 0 000-8zm9.4 5.4l-2.1.4a7.5 7.5 0 01-.8 1.9l1.2 1.8-2.2 2.2-1.8-1.2c-.6.4-1.2.6-1.9.8l-.4 2.1h-3l-.4-2.1a7.5 7.5 0 01-1.9-.8l-1.8 1.2-2.2-2.2 1.2-1.8a7.5 7.5 0 01-.8-1.9l-2.1-.4v-3l2.1-.4c.2-.7.4-1.3.8-1.9L4.1 6.3l2.2-2.2 1.8 1.2c.6-.4 1.2-.6 1.9-.8l.4-2.1h3l.4 2.1c.7.2 1.3.4 1.9.8l1.8-1.2 2.2 2.2-1.2 1.8c.4.6.6 1.2.8 1.9l2.1.4v3z"/>"#
        }
        "seti:makefile" => {
            r#"<path d="M4 4h16v2H4V4zm0 4h10v2H4V8zm0 4h16v2H4v-2zm0 4h10v2H4v-2z"/>"#
        }
        _ => return None,
    };
    Some(markup)
}

pub(super) fn builtin_tables() -> IconTables {
    let mut tables = IconTables::new();

    let files = [
        ("LICENSE", "seti:license"),
        ("LICENSE-MIT", "seti:license"),
        ("LICENSE-APACHE", "seti:license"),
        ("COPYING", "seti:license"),
        ("Makefile", "seti:makefile"),
        ("Dockerfile", "seti:docker"),
        ("Cargo.toml", "seti:rust"),
        ("Cargo.lock", "seti:rust"),
        ("package.json", "seti:npm"),
        ("package-lock.json", "seti:npm"),
        (".gitignore", "seti:git"),
        (".gitattributes", "seti:git"),
        (".gitmodules", "seti:git"),
    ];
    for (name, icon) in files {
        tables.add_file(name, icon);
    }

    let extensions = [
        (".md", "seti:markdown"),
        (".mdx", "seti:markdown"),
        (".markdown", "seti:markdown"),
        (".json", "seti:json"),
        (".js", "seti:javascript"),
        (".mjs", "seti:javascript"),
        (".cjs", "seti:javascript"),
        (".ts", "seti:typescript"),
        (".mts", "seti:typescript"),
        (".cts", "seti:typescript"),
        (".tsx", "seti:react"),
        (".jsx", "seti:react"),
        (".rs", "seti:rust"),
        (".css", "seti:css"),
        (".scss", "seti:css"),
        (".less", "seti:css"),
        (".html", "seti:html"),
        (".htm", "seti:html"),
        (".yml", "seti:yml"),
        (".yaml", "seti:yml"),
        (".toml", "seti:config"),
        (".ini", "seti:config"),
        (".py", "seti:python"),
        (".go", "seti:go"),
        (".sh", "seti:shell"),
        (".bash", "seti:shell"),
        (".zsh", "seti:shell"),
        (".png", "seti:image"),
        (".jpg", "seti:image"),
        (".jpeg", "seti:image"),
        (".gif", "seti:image"),
        (".svg", "seti:image"),
        (".ico", "seti:image"),
        (".lock", "seti:lock"),
    ];
    for (extension, icon) in extensions {
        tables.add_extension(extension, icon);
    }

    // Partial resolution is first-match-wins in this order.
    let partials = [
        ("docker-compose", "seti:docker"),
        ("docker", "seti:docker"),
        ("README", "seti:markdown"),
        ("tsconfig", "seti:typescript"),
        ("eslint", "seti:config"),
        ("prettier", "seti:config"),
        ("webpack", "seti:config"),
        ("vite", "seti:config"),
    ];
    for (partial, icon) in partials {
        tables.add_partial(partial, icon);
    }

    tables
}
