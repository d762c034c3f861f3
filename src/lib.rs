// src/lib.rs
// Hero carousel - data-driven rotating slide showcase

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod assets;
pub mod carousel;
pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod page;
pub mod render;
pub mod slides;
pub mod source;
pub mod view;

pub use carousel::{CarouselEvent, HeroSlider, SliderHandle, SliderStatus};
pub use config::CarouselConfig;
pub use error::{CarouselError, Result};
pub use host::Container;
pub use page::{Page, Visibility};
pub use slides::{SlideRecord, normalize_slides};
