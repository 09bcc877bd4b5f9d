//! Insights Markdown
//!
//! Renders the backend's AI narrative with pulldown-cmark. Raw HTML in the
//! narrative is shown as text, never injected.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Markdown to HTML with embedded HTML escaped
pub fn render_insights(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        // Soft breaks keep the line structure of plain-text insights.
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}
