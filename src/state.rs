use crate::error::{CarouselError, Result};

/// Position of the carousel: which slide is current out of how many.
///
/// Transitions are pure index arithmetic. An empty carousel (`len == 0`)
/// stays at index 0 and every transition is a no-op.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SlideshowState {
    current_index: usize,
    len: usize,
}

impl SlideshowState {
    pub fn new(len: usize) -> Self {
        Self { current_index: 0, len }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index following the current one, wrapping from last to first.
    pub fn next_index(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.current_index + 1) % self.len
    }

    /// Index preceding the current one, wrapping from first to last.
    pub fn previous_index(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.current_index + self.len - 1) % self.len
    }

    /// Makes `index` current. Out-of-range indices leave the state untouched.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(CarouselError::SlideOutOfRange { index, len: self.len });
        }
        self.current_index = index;
        Ok(())
    }
}
