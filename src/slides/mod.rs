// src/slides/mod.rs
// Slide content model and normalizer

pub mod normalize;
pub mod record;

pub use normalize::{normalize_payload, normalize_slides};
pub use record::{
    ButtonColor, ButtonPalette, CallToAction, Credit, ImageTone, SearchOptions, SlideRecord,
    StructuredCredit, TextTheme,
};
