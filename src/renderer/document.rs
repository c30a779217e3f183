//! Document tier: the complete standalone HTML page

use super::config::RenderConfig;
use super::slide::{render_slide_html, render_slide_style};
use crate::model::Presentation;
use crate::template::Bindings;

const PRESENTATION_HTML: &str = include_str!("../../res/presentation.html");
const PRESENTATION_CSS: &str = include_str!("../../res/presentation.css");
const PRESENTATION_JS: &str = include_str!("../../res/presentation.js");
const FOOTER_HTML: &str = include_str!("../../res/presentation_footer.html");

/// Stylesheets behind the catalog's fx classes, one per effect family
const EFFECT_CSS: &[&str] = &[
    include_str!("../../res/effects/rainbow.css"),
    include_str!("../../res/effects/shine.css"),
];

const FONT_URL: &str = "https://fonts.googleapis.com/css?family=";

/// Distinct font families in first-use order
fn fonts(presentation: &Presentation) -> Vec<&str> {
    let mut fonts: Vec<&str> = Vec::new();
    let all = [
        presentation.font_family.as_str(),
        presentation.header_font_family.as_str(),
    ]
    .into_iter()
    .chain(presentation.slides().iter().map(|s| s.font_family.as_str()));
    for font in all {
        if !font.is_empty() && !fonts.contains(&font) {
            fonts.push(font);
        }
    }
    fonts
}

fn font_links(presentation: &Presentation) -> String {
    fonts(presentation)
        .into_iter()
        .map(|font| {
            format!(
                r#"<link rel="stylesheet" href="{}{}">"#,
                FONT_URL,
                font.replace(' ', "+")
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

/// CSS of the themes used by any slide, each once
fn theme_styles(presentation: &Presentation, config: &RenderConfig) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    let mut styles = Vec::new();
    for slide in presentation.slides() {
        let theme = slide.theme.as_str();
        if theme.is_empty() || seen.contains(&theme) {
            continue;
        }
        seen.push(theme);
        match config.themes.get(theme) {
            Some(css) => styles.push(css.to_string()),
            None => log::warn!("theme {} used by slide {} is not available", theme, slide.id()),
        }
    }
    styles
}

/// Footer markup; `${current_page}` is left for the presentation script
pub fn render_footer(presentation: &Presentation) -> String {
    Bindings::new()
        .with("footer", &presentation.footer)
        .with("total_pages_count", presentation.len())
        .apply(FOOTER_HTML)
}

fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The full page: slides in position order, their styles and scripts
pub fn render_document_html(presentation: &Presentation, config: &RenderConfig) -> String {
    let slides = presentation.slides();
    log::debug!("rendering {} with {} slides", presentation.id(), slides.len());

    let fonts = Bindings::new()
        .with("font_family", &presentation.font_family)
        .with("header_font_family", &presentation.header_font_family);
    let slides_style = fonts.apply(
        &slides
            .iter()
            .map(render_slide_style)
            .collect::<Vec<_>>()
            .join("\n"),
    );
    let mut document_style = presentation.style.clone();
    document_style.extend(EFFECT_CSS.iter().map(|css| css.to_string()));
    document_style.extend(theme_styles(presentation, config));
    let style = fonts
        .clone()
        .with("style", document_style.join("\n"))
        .with("slides_style", slides_style)
        .apply(PRESENTATION_CSS);

    let slides_scripts = slides
        .iter()
        .map(|s| s.template.script())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let script = Bindings::new()
        .with("total_pages_count", slides.len())
        .with("scripts", presentation.scripts.join("\n"))
        .with("slides_scripts", slides_scripts)
        .apply(PRESENTATION_JS);

    let slides_html = slides
        .iter()
        .map(render_slide_html)
        .collect::<Vec<_>>()
        .join("\n");

    let links = if config.font_links {
        font_links(presentation)
    } else {
        String::new()
    };

    let html = Bindings::new()
        .with("title", &presentation.title)
        .with("font_links", links)
        .with("style", style)
        .with("slides", slides_html)
        .with("footer", render_footer(presentation))
        .with("script", script)
        .apply(PRESENTATION_HTML);

    if config.strip_blank_lines {
        strip_blank_lines(&html)
    } else {
        html
    }
}
