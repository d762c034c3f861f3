// tests/markup.rs
// Mounted markup: panels, dots, themes, accessibility attributes

use hero_carousel::host::{ACTIVE_CLASS, SLIDE_CLASS};
use hero_carousel::slides::{TextTheme, normalize_slides};
use hero_carousel::view::Element;
use hero_carousel::{CarouselConfig, Container, HeroSlider, Page, SlideRecord};
use serde_json::json;

async fn mount(records: Vec<SlideRecord>) -> HeroSlider {
    let page = Page::default();
    let config = CarouselConfig::new()
        .with_slides(records)
        .with_base_url("https://example.test/");
    let mut slider = HeroSlider::new(Container::new(), config, &page);
    assert!(slider.init().await);
    slider
}

fn sample() -> Vec<SlideRecord> {
    normalize_slides(&json!({
        "slides": [
            { "_comment": "Homepage hero" },
            {
                "id": "arts",
                "eyebrow": "Explore",
                "title": "Arts & Culture",
                "tagline": "Galleries near you",
                "image": "img/arts.jpg",
                "imageTone": "dark",
                "tags": ["Music", "Theatre"],
                "cta": { "text": "Browse", "href": "/arts", "icon": "icons/arrow.svg" },
                "buttonColor": "dark",
                "credit": "Photo: City Archive"
            },
            {
                "id": "food",
                "title": "Food",
                "imageTone": "light",
                "buttonColor": "light",
                "includeSearch": true,
                "isActive": true,
                "credit": { "name": "Ana", "profileUrl": "https://photos.test/ana", "source": "Unsplash" }
            },
            {
                "title": "Parks",
                "buttonColor": "purple",
                "ctaText": "Go outside"
            }
        ]
    }))
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn test_happy_path_mount() {
    let slider = mount(sample()).await;
    let container = slider.container();

    assert_eq!(slider.current_index(), 1);
    assert_eq!(container.slide_count(), 3);
    assert_eq!(container.dot_count(), 3);
    assert_eq!(container.theme(), Some(TextTheme::Dark));

    let active: Vec<usize> = container
        .slides()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.has_class(ACTIVE_CLASS))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(active, vec![1]);
    assert_eq!(container.dot(1).unwrap().attribute("aria-pressed"), Some("true"));
    assert_eq!(container.slide(0).unwrap().attribute("aria-hidden"), Some("true"));
}

#[tokio::test]
async fn test_single_primary_heading() {
    let slider = mount(sample()).await;
    let root = slider.container().root();
    assert_eq!(root.find_all(&|e: &Element| e.tag() == "h1").len(), 1);
    assert_eq!(root.find_all(&|e: &Element| e.tag() == "h2").len(), 2);

    let first = slider.container().slide(0).unwrap();
    assert!(first.find(&|e: &Element| e.tag() == "h1").is_some());
}

#[tokio::test]
async fn test_dots_mirror_slides() {
    let slider = mount(sample()).await;
    let container = slider.container();
    let ids: Vec<&str> = container.slides().iter().filter_map(|s| s.id()).collect();
    assert_eq!(ids, vec!["arts", "food", "slide-3"]);

    for (index, dot) in container.dots().iter().enumerate() {
        assert_eq!(
            dot.attribute("aria-label"),
            Some(format!("Slide {} of 3", index + 1).as_str())
        );
        assert_eq!(dot.attribute("aria-controls"), Some(ids[index]));
    }
}

// ============================================================================
// Per-slide presentation
// ============================================================================

#[tokio::test]
async fn test_button_color_palettes() {
    let slider = mount(sample()).await;
    let container = slider.container();

    let dark = container.slide(0).unwrap();
    assert_eq!(dark.style_value("--hero-cta-bg"), Some("#0D474E"));
    assert_eq!(dark.style_value("--hero-cta-text"), Some("#ffffff"));

    let light = container.slide(1).unwrap();
    assert_eq!(light.style_value("--hero-cta-bg"), Some("#ffffff"));
    assert_eq!(light.style_value("--hero-cta-text"), Some("#0D474E"));

    let unknown = container.slide(2).unwrap();
    assert_eq!(unknown.style_value("--hero-cta-bg"), None);
    assert_eq!(unknown.style_value("--hero-cta-text"), None);
}

#[tokio::test]
async fn test_text_theme_follows_image_tone() {
    let slider = mount(sample()).await;
    let themes: Vec<Option<&str>> = slider
        .container()
        .slides()
        .iter()
        .map(|s| s.attribute("data-text-theme"))
        .collect();
    assert_eq!(themes, vec![Some("light"), Some("dark"), Some("light")]);
}

#[tokio::test]
async fn test_assets_resolved_against_base() {
    let slider = mount(sample()).await;
    let arts = slider.container().slide(0).unwrap();
    assert_eq!(
        arts.style_value("--hero-image"),
        Some("url(\"https://example.test/img/arts.jpg\")")
    );

    let icon = arts.find(&|e: &Element| e.tag() == "img").unwrap();
    assert_eq!(icon.attribute("src"), Some("https://example.test/icons/arrow.svg"));

    let cta = arts.find(&|e: &Element| e.tag() == "a").unwrap();
    assert_eq!(cta.attribute("href"), Some("/arts"));
}

#[tokio::test]
async fn test_flat_cta_defaults_href() {
    let slider = mount(sample()).await;
    let parks = slider.container().slide(2).unwrap();
    let cta = parks.find(&|e: &Element| e.has_class("hero-slider__cta")).unwrap();
    assert_eq!(cta.attribute("href"), Some("#"));
    assert_eq!(cta.text_content(), "Go outside");
}

#[tokio::test]
async fn test_search_and_credit_markup() {
    let slider = mount(sample()).await;
    let food = slider.container().slide(1).unwrap();

    let input = food.find(&|e: &Element| e.tag() == "input").unwrap();
    assert_eq!(input.id(), Some("food-search"));

    let credit = food.find(&|e: &Element| e.has_class("hero-slider__credit")).unwrap();
    assert_eq!(credit.text_content(), "Photo by Ana on Unsplash");

    let arts = slider.container().slide(0).unwrap();
    assert!(arts.find(&|e: &Element| e.tag() == "form").is_none());
}

#[tokio::test]
async fn test_html_output() {
    let slider = mount(sample()).await;
    let html = slider.container().to_html();

    assert!(html.starts_with("<section class=\"hero-slider\""));
    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("Arts &amp; Culture"));
    assert!(html.contains("role=\"tablist\""));
    assert!(html.ends_with("</section>"));
}

// ============================================================================
// Pre-existing markup
// ============================================================================

#[tokio::test]
async fn test_existing_markup_skips_loading() {
    let page = Page::default();
    let panels = vec![
        Element::new("article").class(SLIDE_CLASS).attr("data-text-theme", "dark"),
        Element::new("article")
            .class(SLIDE_CLASS)
            .class(ACTIVE_CLASS)
            .attr("data-text-theme", "light"),
    ];
    // Nothing exists at this location; loading it would leave no slides
    let config = CarouselConfig::new().with_data_url("/nonexistent/slides.json");
    let mut slider = HeroSlider::new(Container::with_slides(panels), config, &page);

    assert!(slider.init().await);
    assert_eq!(slider.current_index(), 1);
    assert_eq!(slider.container().dot_count(), 2);
    assert_eq!(slider.container().theme(), Some(TextTheme::Light));
}
