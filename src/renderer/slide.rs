//! Slide tier: wrapper HTML and per-slide stylesheet

use super::field::{raw_field, render_field};
use crate::catalog::Catalog;
use crate::model::{Slide, TemplateField};
use crate::template::Bindings;

const BASE_SLIDE_HTML: &str = include_str!("../../res/slides/base_slide.html");
const BASE_SLIDE_CSS: &str = include_str!("../../res/slides/base_slide.css");

/// Lowest z-index a slide can get is `Z_INDEX_TOP - position`
const Z_INDEX_TOP: i64 = 500;

/// Stacking order for the slide at `position`; earlier slides sit on top
pub fn z_index(position: usize) -> i64 {
    Z_INDEX_TOP - position as i64
}

fn field_bindings(slide: &Slide, render: fn(&TemplateField) -> String) -> Bindings {
    let mut bindings = Bindings::new();
    for field in slide.template.fields() {
        let mut value = render(field);
        if field.name() == "title" && value.is_empty() {
            value = slide.title.clone();
        }
        bindings.set(field.name(), value);
    }
    bindings
}

/// Classes on the outer `<slide>` element
pub fn class_list(slide: &Slide) -> String {
    let mut classes = vec![slide.template.discriminator()];
    if !slide.theme.is_empty() {
        classes.push(&slide.theme);
    }
    classes.push(if slide.position() == 0 { "current" } else { "hidden" });
    classes.join(" ")
}

/// The slide's `<slide>` element with its template content filled in
pub fn render_slide_html(slide: &Slide) -> String {
    let mut bindings = field_bindings(slide, render_field);
    for field in slide.template.fields() {
        let extra = match &field.fx {
            Some(fx) if fx.classes.is_empty() => {
                format!(" {}", Catalog::effect_classes(&fx.id))
            }
            Some(fx) => format!(" {}", fx.classes),
            None => String::new(),
        };
        bindings.set(format!("{}_extra_class", field.name()), extra);
    }
    let content = bindings.apply(&slide.template.content());

    Bindings::new()
        .with("slide_position", slide.position())
        .with("class_list", class_list(slide))
        .with("header_alignment", &slide.header_alignment)
        .with("slide_content", content)
        .apply(BASE_SLIDE_HTML)
}

/// The slide's CSS: colors, template style, transition and stacking
///
/// `$header_font_family` is left for the document tier.
pub fn render_slide_style(slide: &Slide) -> String {
    let mut bindings = field_bindings(slide, raw_field);
    bindings
        .set("slide_position", slide.position())
        .set("background_color", &slide.background_color)
        .set("background_color_alt", &slide.background_color_alt)
        .set("accent_color", &slide.accent_color)
        .set("title_text_color", slide.template.title_text_color())
        .set("text_color", slide.template.text_color())
        .set("header_alignment", &slide.header_alignment)
        .set("font_family", &slide.font_family);
    let template_css = bindings.apply(&slide.template.style());

    let background_image = match &slide.background_image {
        Some(file) => format!("url(\"{}\")", file.data_uri()),
        None => "none".to_string(),
    };
    bindings
        .set("z_index", z_index(slide.position()))
        .set("background_image", background_image)
        .set("template", template_css)
        .set("transition", slide.transition.render(slide.position()));
    bindings.apply(BASE_SLIDE_CSS)
}
