//! Stylesheets served at `/static/style.css`.

use anyhow::{Context, Result};

/// Default light theme CSS.
pub const THEME_DEFAULT: &str = r#"
body {
    font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    max-width: 760px;
    margin: 0 auto;
    padding: 1.5rem;
    color: #333;
}
a { color: #0066cc; text-decoration: none; }
a:hover { text-decoration: underline; }
header.site { display: flex; justify-content: space-between; align-items: baseline; border-bottom: 1px solid #eee; }
header.site nav a { margin-left: 0.75rem; }
.note { margin: 1.5rem 0; }
.note h2 { margin-bottom: 0.25rem; font-size: 1.2em; }
.note .url { color: #666; font-size: 0.85em; word-break: break-all; }
blockquote {
    border-left: 3px solid #ddd;
    margin-left: 0;
    padding-left: 1rem;
    color: #666;
    font-style: italic;
}
pre { background: #f5f5f5; padding: 1rem; overflow-x: auto; border-radius: 4px; }
code { font-family: 'SF Mono', Monaco, 'Cascadia Code', monospace; font-size: 0.9em; }
.metadata { color: #888; font-size: 0.85em; }
.pagination, .neighbors { display: flex; justify-content: space-between; margin: 2rem 0; }
form label { display: block; margin-top: 0.75rem; font-weight: 600; }
form input[type=text], form input[type=url], form input[type=password], form textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.4rem;
    border: 1px solid #ccc;
    border-radius: 3px;
    font: inherit;
}
form textarea { min-height: 8rem; }
button { margin-top: 1rem; padding: 0.4rem 1rem; }
button.danger { color: #b00; }
footer { border-top: 1px solid #eee; margin-top: 3rem; color: #888; font-size: 0.85em; }
"#;

/// Dark theme CSS.
pub const THEME_DARK: &str = r#"
body {
    font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    max-width: 760px;
    margin: 0 auto;
    padding: 1.5rem;
    background: #1a1a1a;
    color: #e0e0e0;
}
a { color: #6af; text-decoration: none; }
a:hover { text-decoration: underline; }
header.site { display: flex; justify-content: space-between; align-items: baseline; border-bottom: 1px solid #333; }
header.site nav a { margin-left: 0.75rem; }
.note { margin: 1.5rem 0; }
.note h2 { margin-bottom: 0.25rem; font-size: 1.2em; }
.note .url { color: #888; font-size: 0.85em; word-break: break-all; }
blockquote {
    border-left: 3px solid #444;
    margin-left: 0;
    padding-left: 1rem;
    color: #aaa;
    font-style: italic;
}
pre { background: #2a2a2a; padding: 1rem; overflow-x: auto; border-radius: 4px; }
code { font-family: 'SF Mono', Monaco, 'Cascadia Code', monospace; font-size: 0.9em; }
.metadata { color: #888; font-size: 0.85em; }
.pagination, .neighbors { display: flex; justify-content: space-between; margin: 2rem 0; }
form label { display: block; margin-top: 0.75rem; font-weight: 600; }
form input[type=text], form input[type=url], form input[type=password], form textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.4rem;
    border: 1px solid #444;
    border-radius: 3px;
    background: #222;
    color: inherit;
    font: inherit;
}
form textarea { min-height: 8rem; }
button { margin-top: 1rem; padding: 0.4rem 1rem; }
button.danger { color: #f66; }
footer { border-top: 1px solid #333; margin-top: 3rem; color: #888; font-size: 0.85em; }
"#;

/// Resolves the `theme` config value to the stylesheet served at
/// `/static/style.css`.
///
/// `default` and `dark` are built in. A blank or absent value means
/// `default`, and any other value is read as the path of a CSS file.
pub fn load_stylesheet(theme: Option<&str>) -> Result<String> {
    let theme = theme.map(str::trim).filter(|t| !t.is_empty());
    match theme {
        None | Some("default") => Ok(THEME_DEFAULT.to_string()),
        Some("dark") => Ok(THEME_DARK.to_string()),
        Some(path) => std::fs::read_to_string(path).with_context(|| {
            format!("theme '{path}' is not a built-in theme (default, dark) or a readable CSS file")
        }),
    }
}
