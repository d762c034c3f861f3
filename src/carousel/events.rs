// src/carousel/events.rs
// Interaction events and their decoded state-machine inputs

use tokio::sync::mpsc;

use crate::page::Visibility;

/// Raw interaction reported by a platform adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEvent {
    DotClicked(usize),
    /// Key pressed while a dot has focus, e.g. "Enter" or " "
    DotKeyDown { index: usize, key: String },
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
}

/// What the state machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// The user picked a slide explicitly
    ActivateDot(usize),
    /// Pointer or focus entered the carousel
    Engage,
    /// Pointer or focus left the carousel
    Disengage,
    Visibility(Visibility),
}

impl CarouselEvent {
    /// Decode into an input; keys other than Enter/Space are ignored
    pub fn decode(&self) -> Option<Input> {
        match self {
            CarouselEvent::DotClicked(index) => Some(Input::ActivateDot(*index)),
            CarouselEvent::DotKeyDown { index, key } => {
                is_activation_key(key).then_some(Input::ActivateDot(*index))
            }
            CarouselEvent::PointerEnter | CarouselEvent::FocusIn => Some(Input::Engage),
            CarouselEvent::PointerLeave | CarouselEvent::FocusOut => Some(Input::Disengage),
        }
    }
}

pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Space" | "Spacebar")
}

/// Sending half handed to adapters
pub type EventSender = mpsc::UnboundedSender<CarouselEvent>;
