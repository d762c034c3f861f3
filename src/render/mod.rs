// src/render/mod.rs
// Renderer: slide records -> panels and navigation dots

mod credit;
mod search;

pub use credit::render_credit;
pub use search::render_search_form;

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::assets::AssetResolver;
use crate::host::{Container, DOT_CLASS, DOTS_CLASS, SLIDE_CLASS};
use crate::slides::SlideRecord;
use crate::view::Element;

/// Default label for the tag chip group
pub const DEFAULT_TAGS_LABEL: &str = "Top cultural themes";

/// Accessible label for the dot group
pub const DOTS_LABEL: &str = "Hero slider navigation";

/// Style variables carrying the call-to-action palette
pub const CTA_BACKGROUND_VAR: &str = "--hero-cta-bg";
pub const CTA_TEXT_VAR: &str = "--hero-cta-text";

/// Style variable carrying the slide image
pub const IMAGE_VAR: &str = "--hero-image";

/// Output of a render pass
#[derive(Debug, Clone)]
pub struct RenderedSlides {
    pub panels: Vec<Element>,
    pub ids: Vec<String>,
    pub active_index: usize,
}

/// Builds the visual tree for a carousel
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    assets: AssetResolver,
}

impl Renderer {
    pub fn new(assets: AssetResolver) -> Self {
        Self { assets }
    }

    /// Render panels for `records` without touching any container
    pub fn render_panels(&self, records: &[SlideRecord]) -> RenderedSlides {
        let ids = assign_ids(records);
        let active_index = initial_active_index(records);
        let panels = records
            .iter()
            .zip(&ids)
            .enumerate()
            .map(|(index, (record, id))| self.render_panel(record, index, id))
            .collect();

        RenderedSlides {
            panels,
            ids,
            active_index,
        }
    }

    /// Rebuild the container's slides from scratch.
    ///
    /// Any previous panels and dot group are discarded. Returns the index of
    /// the slide that should start active.
    pub fn render_into(&self, container: &mut Container, records: &[SlideRecord]) -> usize {
        let rendered = self.render_panels(records);
        container.remove_dots();
        container.replace_slides(rendered.panels);
        debug!(count = records.len(), active = rendered.active_index, "Rendered slides");
        rendered.active_index
    }

    fn render_panel(&self, record: &SlideRecord, index: usize, id: &str) -> Element {
        let label = record
            .aria_label
            .clone()
            .or_else(|| record.title.clone())
            .unwrap_or_else(|| format!("Slide {}", index + 1));

        let mut panel = Element::new("article")
            .class(SLIDE_CLASS)
            .attr("id", id)
            .attr("aria-label", label)
            .attr("aria-hidden", "true")
            .attr("data-text-theme", record.resolved_text_theme().as_str());

        if let Some(image) = &record.image {
            let resolved = self.assets.resolve(image);
            panel.set_style(IMAGE_VAR, format!("url(\"{}\")", resolved));
        }
        if let Some(palette) = record.button_color.palette() {
            panel.set_style(CTA_BACKGROUND_VAR, palette.background);
            panel.set_style(CTA_TEXT_VAR, palette.text);
        }

        panel.append(self.render_content(record, index, id));

        if let Some(credit) = &record.credit {
            panel.append(render_credit(credit));
        }
        panel
    }

    fn render_content(&self, record: &SlideRecord, index: usize, id: &str) -> Element {
        let mut content = Element::new("div").class("hero-slider__content");

        if let Some(eyebrow) = &record.eyebrow {
            content.append(Element::new("span").class("hero-slider__eyebrow").text(eyebrow));
        }

        // One h1 per page: only the first slide gets it
        let heading = if index == 0 { "h1" } else { "h2" };
        content.append(
            Element::new(heading)
                .class("hero-slider__title")
                .text(record.title.clone().unwrap_or_default()),
        );

        if let Some(tagline) = &record.tagline {
            content.append(Element::new("p").class("hero-slider__tagline").text(tagline));
        }

        if !record.tags.is_empty() {
            let label = record.tags_label.as_deref().unwrap_or(DEFAULT_TAGS_LABEL);
            let chips = record.tags.iter().fold(
                Element::new("div").class("hero-tags tags").attr("aria-label", label),
                |group, tag| group.child(Element::new("span").class("tag").text(tag)),
            );
            content.append(chips);
        }

        if let Some(cta) = &record.cta {
            let mut link = Element::new("a")
                .class("hero-slider__cta")
                .attr("href", cta.href.as_deref().unwrap_or("#"));
            if let Some(icon) = &cta.icon {
                link.append(
                    Element::new("img")
                        .class("hero-slider__cta-icon")
                        .attr("src", self.assets.resolve(icon))
                        .attr("alt", "")
                        .attr("aria-hidden", "true"),
                );
            }
            link.append(Element::new("span").class("hero-slider__cta-text").text(&cta.text));
            content.append(link);
        }

        if record.include_search {
            content.append(render_search_form(record, id));
        }

        content
    }
}

/// Build one navigation dot per slide id
pub fn build_dots(ids: &[String]) -> Element {
    let total = ids.len();
    ids.iter().enumerate().fold(
        Element::new("div")
            .class(DOTS_CLASS)
            .attr("role", "tablist")
            .attr("aria-label", DOTS_LABEL),
        |group, (index, id)| {
            group.child(
                Element::new("button")
                    .class(DOT_CLASS)
                    .attr("type", "button")
                    .attr("aria-label", format!("Slide {} of {}", index + 1, total))
                    .attr("aria-controls", id)
                    .attr("aria-pressed", "false"),
            )
        },
    )
}

/// Generated id for the slide at `index`
pub fn generated_id(index: usize) -> String {
    format!("slide-{}", index + 1)
}

/// Give every record a unique id, keeping authored ids where possible
pub fn assign_ids(records: &[SlideRecord]) -> Vec<String> {
    let mut used = HashSet::new();
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut id = record.id.clone().unwrap_or_else(|| generated_id(index));
            if used.contains(&id) {
                warn!(id = %id, index, "Duplicate slide id, generating a replacement");
                id = generated_id(index);
            }
            let base = id.clone();
            let mut suffix = 2;
            while used.contains(&id) {
                id = format!("{}-{}", base, suffix);
                suffix += 1;
            }
            used.insert(id.clone());
            id
        })
        .collect()
}

/// Index of the first record marked active, else 0.
///
/// More than one marker is an authoring mistake; the first wins and the rest
/// are reported.
pub fn initial_active_index(records: &[SlideRecord]) -> usize {
    let marked: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_active)
        .map(|(i, _)| i)
        .collect();

    if marked.len() > 1 {
        warn!(indices = ?marked, "Multiple slides marked isActive, using the first");
    }
    marked.first().copied().unwrap_or(0)
}
