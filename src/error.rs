//! Error types for the carousel library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring, loading or driving a carousel
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("Slide {index} out of range for a carousel of {len} slides")]
    SlideOutOfRange { index: usize, len: usize },

    #[error("No image files found in directory: {0}")]
    NoSlides(PathBuf),

    #[error("Invalid manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Failed to load image {path}: {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
