// src/host.rs
// Host container: the element a carousel mounts into
//
// Layout: the root holds a slide sub-container and a dot sub-container as
// direct children. Busy and theme flags live on the root itself.

use crate::config::SOURCE_ATTRIBUTE;
use crate::slides::TextTheme;
use crate::view::{Element, Node};

pub const ROOT_CLASS: &str = "hero-slider";
pub const SLIDES_CLASS: &str = "hero-slider__slides";
pub const SLIDE_CLASS: &str = "hero-slider__slide";
pub const DOTS_CLASS: &str = "hero-slider__dots";
pub const DOT_CLASS: &str = "hero-slider__dot";
pub const ACTIVE_CLASS: &str = "is-active";

pub const BUSY_ATTRIBUTE: &str = "aria-busy";
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// The carousel's mount point and everything rendered beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    root: Element,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// An empty container, as found on a page before any slides load
    pub fn new() -> Self {
        Self {
            root: Element::new("section")
                .class(ROOT_CLASS)
                .attr("aria-roledescription", "carousel"),
        }
    }

    /// Adopt existing markup as the container root
    pub fn from_element(root: Element) -> Self {
        Self { root }
    }

    /// A container whose slides were authored directly in markup
    pub fn with_slides(panels: Vec<Element>) -> Self {
        let mut container = Self::new();
        container.replace_slides(panels);
        container
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.root.set_attribute(SOURCE_ATTRIBUTE, source);
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_element(self) -> Element {
        self.root
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    /// Data location declared on the container, if any
    pub fn source_attribute(&self) -> Option<&str> {
        self.root.attribute(SOURCE_ATTRIBUTE)
    }

    // ------------------------------------------------------------------------
    // Root flags
    // ------------------------------------------------------------------------

    pub fn set_busy(&mut self, busy: bool) {
        if busy {
            self.root.set_attribute(BUSY_ATTRIBUTE, "true");
        } else {
            self.root.remove_attribute(BUSY_ATTRIBUTE);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.root.attribute(BUSY_ATTRIBUTE) == Some("true")
    }

    pub fn set_theme(&mut self, theme: Option<TextTheme>) {
        match theme {
            Some(theme) => self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str()),
            None => self.root.remove_attribute(THEME_ATTRIBUTE),
        }
    }

    pub fn theme(&self) -> Option<TextTheme> {
        self.root.attribute(THEME_ATTRIBUTE).and_then(TextTheme::parse)
    }

    // ------------------------------------------------------------------------
    // Slides
    // ------------------------------------------------------------------------

    pub fn slides_container(&self) -> Option<&Element> {
        self.root.element_children().find(|e| e.has_class(SLIDES_CLASS))
    }

    fn slides_container_mut(&mut self) -> Option<&mut Element> {
        self.root
            .element_children_mut()
            .find(|e| e.has_class(SLIDES_CLASS))
    }

    /// Replace all panels, creating the slide sub-container if needed
    pub fn replace_slides(&mut self, panels: Vec<Element>) {
        if self.slides_container().is_none() {
            self.root.append(Element::new("div").class(SLIDES_CLASS));
        }
        if let Some(slides) = self.slides_container_mut() {
            slides.clear_children();
            for panel in panels {
                slides.append(panel);
            }
        }
    }

    pub fn slides(&self) -> Vec<&Element> {
        self.slides_container()
            .map(|c| c.element_children().filter(|e| e.has_class(SLIDE_CLASS)).collect())
            .unwrap_or_default()
    }

    pub fn slide_count(&self) -> usize {
        self.slides().len()
    }

    pub fn slide(&self, index: usize) -> Option<&Element> {
        self.slides().into_iter().nth(index)
    }

    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.slides_container_mut()?
            .element_children_mut()
            .filter(|e| e.has_class(SLIDE_CLASS))
            .nth(index)
    }

    // ------------------------------------------------------------------------
    // Dots
    // ------------------------------------------------------------------------

    pub fn dots_container(&self) -> Option<&Element> {
        self.root.element_children().find(|e| e.has_class(DOTS_CLASS))
    }

    fn dots_container_mut(&mut self) -> Option<&mut Element> {
        self.root.element_children_mut().find(|e| e.has_class(DOTS_CLASS))
    }

    pub fn remove_dots(&mut self) {
        self.root.retain_children(|node| !is_dots_container(node));
    }

    /// Mount a freshly built dot group, replacing any existing one
    pub fn mount_dots(&mut self, dots: Element) {
        self.remove_dots();
        self.root.append(dots);
    }

    pub fn dots(&self) -> Vec<&Element> {
        self.dots_container()
            .map(|c| c.element_children().filter(|e| e.has_class(DOT_CLASS)).collect())
            .unwrap_or_default()
    }

    pub fn dot_count(&self) -> usize {
        self.dots().len()
    }

    pub fn dot(&self, index: usize) -> Option<&Element> {
        self.dots().into_iter().nth(index)
    }

    pub fn dot_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.dots_container_mut()?
            .element_children_mut()
            .filter(|e| e.has_class(DOT_CLASS))
            .nth(index)
    }
}

fn is_dots_container(node: &Node) -> bool {
    node.as_element().is_some_and(|e| e.has_class(DOTS_CLASS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(id: &str) -> Element {
        Element::new("article").class(SLIDE_CLASS).attr("id", id)
    }

    #[test]
    fn test_new_container_is_empty() {
        let container = Container::new();
        assert!(container.root().has_class(ROOT_CLASS));
        assert_eq!(container.slide_count(), 0);
        assert_eq!(container.dot_count(), 0);
        assert!(container.slides_container().is_none());
    }

    #[test]
    fn test_replace_slides_reuses_sub_container() {
        let mut container = Container::with_slides(vec![panel("a"), panel("b")]);
        assert_eq!(container.slide_count(), 2);

        container.replace_slides(vec![panel("c")]);
        assert_eq!(container.slide_count(), 1);
        assert_eq!(container.slide(0).and_then(Element::id), Some("c"));
        let sub_containers = container
            .root()
            .element_children()
            .filter(|e| e.has_class(SLIDES_CLASS))
            .count();
        assert_eq!(sub_containers, 1);
    }

    #[test]
    fn test_mount_dots_replaces_existing_group() {
        let mut container = Container::new();
        let dots = |n: usize| {
            (0..n).fold(Element::new("div").class(DOTS_CLASS), |group, _| {
                group.child(Element::new("button").class(DOT_CLASS))
            })
        };
        container.mount_dots(dots(3));
        container.mount_dots(dots(2));
        assert_eq!(container.dot_count(), 2);

        container.remove_dots();
        assert!(container.dots_container().is_none());
    }

    #[test]
    fn test_busy_and_theme_flags() {
        let mut container = Container::new();
        container.set_busy(true);
        assert!(container.is_busy());
        container.set_busy(false);
        assert_eq!(container.root().attribute(BUSY_ATTRIBUTE), None);

        container.set_theme(Some(TextTheme::Dark));
        assert_eq!(container.theme(), Some(TextTheme::Dark));
        container.set_theme(None);
        assert_eq!(container.root().attribute(THEME_ATTRIBUTE), None);
    }

    #[test]
    fn test_slide_mut_addresses_by_index() {
        let mut container = Container::with_slides(vec![panel("a"), panel("b")]);
        if let Some(slide) = container.slide_mut(1) {
            slide.add_class(ACTIVE_CLASS);
        }
        assert!(container.slide(1).unwrap().has_class(ACTIVE_CLASS));
        assert!(container.slide_mut(2).is_none());
    }

    #[test]
    fn test_source_attribute() {
        let container = Container::new().with_source("custom/slides.json");
        assert_eq!(container.source_attribute(), Some("custom/slides.json"));
    }
}
