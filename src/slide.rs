use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Slide {
    background: Option<PathBuf>,
    background_style: Option<PathBuf>,

    caption: Option<String>,

    pub active: bool,
}

impl Slide {
    pub fn new(background: Option<PathBuf>, caption: Option<String>) -> Self {
        Self {
            background,
            background_style: None,
            caption,
            active: false,
        }
    }

    pub fn with_background(path: impl Into<PathBuf>) -> Self {
        Self::new(Some(path.into()), None)
    }

    pub fn background(&self) -> Option<&Path> {
        self.background.as_deref()
    }

    pub fn background_style(&self) -> Option<&Path> {
        self.background_style.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    // No reference: keep the style already applied
    pub fn apply_background(&mut self) {
        if let Some(background) = &self.background {
            self.background_style = Some(background.clone());
        }
    }

    pub fn forget_background(&mut self) {
        self.background = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicator {
    pub active: bool,
}
