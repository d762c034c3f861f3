// src/carousel/state.rs
// Carousel state machine: active slide, advance timer, pause logic
//
// Invariants:
// - exactly one slide/dot pair carries the active state
// - at most one advance deadline exists; arming always clears first

use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use super::events::Input;
use crate::host::{ACTIVE_CLASS, Container};
use crate::page::Visibility;
use crate::slides::TextTheme;

/// Attribute on each panel naming its resolved text theme
pub const PANEL_THEME_ATTRIBUTE: &str = "data-text-theme";

/// The two delays that govern cycling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub auto_advance: Duration,
    pub manual_pause: Duration,
}

/// A single pending advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTimer {
    pub delay: Duration,
    pub deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    current_index: usize,
    slide_count: usize,
    timer: Option<AdvanceTimer>,
    document_visible: bool,
    timing: Timing,
}

impl CarouselState {
    pub fn new(timing: Timing, visibility: Visibility) -> Self {
        Self {
            current_index: 0,
            slide_count: 0,
            timer: None,
            document_visible: visibility.is_visible(),
            timing,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn timer(&self) -> Option<AdvanceTimer> {
        self.timer
    }

    pub fn is_timer_pending(&self) -> bool {
        self.timer.is_some()
    }

    pub fn document_visible(&self) -> bool {
        self.document_visible
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn set_document_visible(&mut self, visibility: Visibility) {
        self.document_visible = visibility.is_visible();
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Mark `initial_index` active and everything else inactive
    pub fn initialize(&mut self, container: &mut Container, initial_index: usize) {
        self.slide_count = container.slide_count();
        self.current_index = if initial_index < self.slide_count {
            initial_index
        } else {
            0
        };

        for index in 0..self.slide_count {
            apply_pair(container, index, index == self.current_index);
        }
        refresh_theme(container, self.current_index);
        debug!(index = self.current_index, count = self.slide_count, "Carousel initialized");
    }

    /// Move the active state to `index`. Returns false for a no-op.
    pub fn set_active(&mut self, container: &mut Container, index: usize) -> bool {
        if index == self.current_index || index >= self.slide_count {
            return false;
        }

        apply_pair(container, self.current_index, false);
        let previous = self.current_index;
        self.current_index = index;
        apply_pair(container, self.current_index, true);
        refresh_theme(container, self.current_index);

        debug!(from = previous, to = index, "Active slide changed");
        true
    }

    /// Replace any pending advance with one `delay` from now.
    ///
    /// While the document is hidden nothing is armed.
    pub fn schedule_advance(&mut self, delay: Duration) {
        self.clear_timer();
        if !self.document_visible {
            return;
        }
        self.timer = Some(AdvanceTimer {
            delay,
            deadline: Instant::now() + delay,
        });
        debug!(delay_ms = delay.as_millis() as u64, "Advance timer armed");
    }

    pub fn clear_timer(&mut self) {
        if self.timer.take().is_some() {
            debug!("Advance timer cleared");
        }
    }

    /// The pending timer fired: step forward and keep cycling
    pub fn advance(&mut self, container: &mut Container) {
        self.timer = None;
        if self.slide_count > 0 {
            let next = (self.current_index + 1) % self.slide_count;
            self.set_active(container, next);
        }
        self.schedule_advance(self.timing.auto_advance);
    }

    /// Fire the timer if its deadline has passed. Returns true if it fired.
    pub fn fire_if_due(&mut self, container: &mut Container, now: Instant) -> bool {
        match self.timer {
            Some(timer) if timer.deadline <= now => {
                self.advance(container);
                true
            }
            _ => false,
        }
    }

    /// React to a decoded interaction
    pub fn handle(&mut self, container: &mut Container, input: Input) {
        match input {
            Input::ActivateDot(index) => {
                self.set_active(container, index);
                self.schedule_advance(self.timing.manual_pause);
            }
            Input::Engage => self.clear_timer(),
            Input::Disengage => {
                if self.timer.is_none() {
                    self.schedule_advance(self.timing.auto_advance);
                }
            }
            Input::Visibility(visibility) => {
                self.set_document_visible(visibility);
                if visibility.is_visible() {
                    self.schedule_advance(self.timing.auto_advance);
                } else {
                    self.clear_timer();
                }
            }
        }
    }
}

fn apply_pair(container: &mut Container, index: usize, active: bool) {
    if let Some(slide) = container.slide_mut(index) {
        slide.toggle_class(ACTIVE_CLASS, active);
        slide.set_attribute("aria-hidden", (!active).to_string());
    }
    if let Some(dot) = container.dot_mut(index) {
        dot.toggle_class(ACTIVE_CLASS, active);
        dot.set_attribute("aria-pressed", active.to_string());
    }
}

fn refresh_theme(container: &mut Container, index: usize) {
    let theme = container
        .slide(index)
        .and_then(|slide| slide.attribute(PANEL_THEME_ATTRIBUTE))
        .and_then(TextTheme::parse)
        .unwrap_or_default();
    container.set_theme(Some(theme));
}
