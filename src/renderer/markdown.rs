//! Markdown to HTML for markdown-typed fields

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_DEFINITION_LIST
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Opening markup of a code block in the `codehilite` layout
fn code_block_open(kind: &CodeBlockKind) -> String {
    let language: String = match kind {
        CodeBlockKind::Fenced(info) => info
            .split_whitespace()
            .next()
            .unwrap_or("")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#'))
            .collect(),
        CodeBlockKind::Indented => String::new(),
    };
    if language.is_empty() {
        "<div class=\"codehilite\"><pre><code>".to_string()
    } else {
        format!("<div class=\"codehilite\"><pre><code class=\"language-{language}\">")
    }
}

/// Render `source` to HTML; single newlines become `<br />`
pub fn to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, options()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Start(Tag::CodeBlock(kind)) => Event::Html(CowStr::from(code_block_open(&kind))),
        Event::End(TagEnd::CodeBlock) => Event::Html(CowStr::Borrowed("</code></pre></div>\n")),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
