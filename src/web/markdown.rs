//! Markdown to HTML conversion for the free-text note field.

use pulldown_cmark::{Event, Options, Parser, html};

/// Converts markdown text to HTML.
///
/// Enables tables, strikethrough and task lists. Raw HTML in the input is
/// emitted as escaped text rather than passed through.
///
/// # Example
///
/// ```
/// use marginalia::web::markdown_to_html;
///
/// let html = markdown_to_html("Some **bold** <script>x</script>");
/// assert!(html.contains("<strong>bold</strong>"));
/// assert!(html.contains("&lt;script&gt;"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
