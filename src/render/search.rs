// src/render/search.rs
// Slide-scoped search form

use crate::slides::SlideRecord;
use crate::view::Element;

pub const DEFAULT_SEARCH_LABEL: &str = "Search cultural places";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str =
    "Try \u{201c}quiet morning in Minneapolis\u{201d} or \u{201c}design in Detroit\u{201d}";
pub const DEFAULT_SEARCH_BUTTON: &str = "Find places to explore";
pub const DEFAULT_SEARCH_NAME: &str = "q";
pub const DEFAULT_SEARCH_METHOD: &str = "get";
pub const DEFAULT_SEARCH_ACTION: &str = "#";

const MAGNIFIER_PATH: &str = "M21 21l-4.35-4.35m1.35-3.65a6 6 0 1 0-12 0 6 6 0 0 0 12 0Z";

/// Input id for the search field of slide `slide_id`
pub fn search_input_id(slide_id: &str) -> String {
    format!("{}-search", slide_id)
}

/// Build the search sub-form; every id is derived from `slide_id`
pub fn render_search_form(record: &SlideRecord, slide_id: &str) -> Element {
    let options = &record.search;
    let input_id = search_input_id(slide_id);

    let label = Element::new("label")
        .class("sr-only")
        .attr("for", &input_id)
        .text(options.label.as_deref().unwrap_or(DEFAULT_SEARCH_LABEL));

    let icon = Element::new("svg")
        .attr("aria-hidden", "true")
        .attr("viewBox", "0 0 24 24")
        .child(
            Element::new("path")
                .attr("d", MAGNIFIER_PATH)
                .attr("fill", "none")
                .attr("stroke", "currentColor")
                .attr("stroke-width", "1.5")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round"),
        );

    let input = Element::new("input")
        .attr("id", &input_id)
        .attr("name", options.name.as_deref().unwrap_or(DEFAULT_SEARCH_NAME))
        .attr("type", "search")
        .attr("autocomplete", "off")
        .attr("inputmode", "search")
        .attr("enterkeyhint", "search")
        .attr(
            "placeholder",
            options.placeholder.as_deref().unwrap_or(DEFAULT_SEARCH_PLACEHOLDER),
        );

    let field = Element::new("div")
        .class("hero-search-field")
        .child(label)
        .child(icon)
        .child(input);

    let submit = Element::new("button")
        .class("hero-search-button")
        .attr("type", "submit")
        .text(options.button_label.as_deref().unwrap_or(DEFAULT_SEARCH_BUTTON));

    let feedback = Element::new("p")
        .class("form-feedback")
        .attr("data-js", "search-feedback")
        .attr("role", "status")
        .attr("aria-live", "polite");

    let form = Element::new("form")
        .class("hero-search-form")
        .attr("data-js", "search-form")
        .attr("method", options.method.as_deref().unwrap_or(DEFAULT_SEARCH_METHOD))
        .attr("action", options.action.as_deref().unwrap_or(DEFAULT_SEARCH_ACTION))
        .child(field)
        .child(submit)
        .child(feedback);

    Element::new("div").class("hero-search").child(form)
}
