// src/render/credit.rs
// Attribution line under a slide

use crate::slides::{Credit, StructuredCredit};
use crate::view::{Element, Node};

pub const CREDIT_CLASS: &str = "hero-slider__credit";
pub const DEFAULT_CREDIT_PREFIX: &str = "Photo by";
pub const DEFAULT_IMAGE_LABEL: &str = "View image";

const SEPARATOR: &str = " · ";

/// Render either credit shape as a single paragraph
pub fn render_credit(credit: &Credit) -> Element {
    let paragraph = Element::new("p").class(CREDIT_CLASS);
    match credit {
        Credit::Plain(text) => paragraph.text(text),
        Credit::Structured(structured) => render_structured(paragraph, structured),
    }
}

fn render_structured(mut p: Element, credit: &StructuredCredit) -> Element {
    let mut has_lead = false;

    if let Some(name) = &credit.name {
        let prefix = credit.prefix.as_deref().unwrap_or(DEFAULT_CREDIT_PREFIX);
        p.append(Node::Text(format!("{} ", prefix)));
        p.append(link_or_text(name, credit.profile_url.as_deref()));
        has_lead = true;
    }

    if let Some(source) = &credit.source {
        let lead = if has_lead { " on " } else { "" };
        p.append(Node::Text(format!("{}{}", lead, source)));
        has_lead = true;
    }

    if let Some(image_url) = &credit.image_url {
        if has_lead {
            p.append(Node::Text(SEPARATOR.to_string()));
        }
        let label = credit.image_label.as_deref().unwrap_or(DEFAULT_IMAGE_LABEL);
        p.append(link_or_text(label, Some(image_url.as_str())));
        has_lead = true;
    }

    if let Some(text) = &credit.text {
        if has_lead {
            p.append(Node::Text(SEPARATOR.to_string()));
        }
        p.append(Node::Text(text.clone()));
    }

    p
}

fn link_or_text(label: &str, href: Option<&str>) -> Node {
    match href {
        Some(href) => Element::new("a")
            .class("hero-slider__credit-link")
            .attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .text(label)
            .into(),
        None => Node::Text(label.to_string()),
    }
}
