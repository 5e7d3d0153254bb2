//! The element collections a controller renders into.

use crate::slide::{Indicator, Slide};
use crate::state::SlideshowState;

// Indicators may be fewer than slides
#[derive(Debug, Clone, Default)]
pub struct Stage {
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,
}

impl Stage {
    pub fn new(slides: Vec<Slide>, indicators: Vec<Indicator>) -> Self {
        Self { slides, indicators }
    }

    pub fn from_slides(slides: Vec<Slide>) -> Self {
        let indicators = vec![Indicator::default(); slides.len()];
        Self::new(slides, indicators)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.iter().find(|slide| slide.active)
    }

    /// The only place active flags change.
    pub fn render(&mut self, state: &SlideshowState) {
        for slide in self.slides.iter_mut() {
            slide.active = false;
        }
        for indicator in self.indicators.iter_mut() {
            indicator.active = false;
        }

        if state.is_empty() {
            return;
        }

        let index = state.current_index();
        if let Some(slide) = self.slides.get_mut(index) {
            slide.active = true;
            slide.apply_background();
        }
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.active = true;
        }
    }
}
