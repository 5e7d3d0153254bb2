//! Hero image carousel: an auto-advancing slideshow with previous/next
//! controls, indicator dots and hover pause.
//!
//! The controller ([`controller::SlideshowController`]) is independent of
//! any window system; [`engine::HeroEngine`] hosts it in a raylib window.

pub mod config;
pub mod constants;
pub mod controller;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod slide;
pub mod stage;
pub mod state;
pub mod texture_loader;
pub mod timer;

pub use controller::SlideshowController;
pub use error::{CarouselError, Result};
