//! Carousel configuration.
//!
//! Slides come either from a TOML manifest or from the images of a
//! directory. Command-line flags override manifest values, which override
//! the built-in defaults.
//!
//! ```toml
//! interval_ms = 5000
//! shuffle = false
//!
//! [[slides]]
//! background = "hero/01.jpg"
//! caption = "Build with confidence"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::constants::AUTO_ADVANCE_INTERVAL;
use crate::error::{CarouselError, Result};
use crate::slide::Slide;
use crate::texture_loader::load_sorted_image_paths;

/// One `[[slides]]` entry of the manifest
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlideEntry {
    #[serde(default)]
    pub background: Option<PathBuf>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Contents of a `carousel.toml` manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub interval_ms: Option<u64>,
    #[serde(default)]
    pub shuffle: Option<bool>,
    #[serde(default)]
    pub slides: Vec<SlideEntry>,
}

impl Manifest {
    /// Parses a manifest, resolving relative backgrounds against `base_dir`.
    pub fn parse(text: &str, base_dir: &Path, origin: &Path) -> Result<Self> {
        let mut manifest: Manifest =
            toml::from_str(text).map_err(|source| CarouselError::Manifest {
                path: origin.to_path_buf(),
                source,
            })?;

        for entry in manifest.slides.iter_mut() {
            if let Some(background) = entry.background.as_mut() {
                if background.is_relative() {
                    *background = base_dir.join(&*background);
                }
            }
        }
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&text, base_dir, path)
    }
}

/// Where slides are discovered
#[derive(Debug, Clone, PartialEq)]
pub enum SlideSource {
    Manifest(PathBuf),
    Directory(PathBuf),
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub interval_ms: Option<u64>,
    pub shuffle: bool,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub interval: Duration,
    pub shuffle: bool,
    pub slides: Vec<SlideEntry>,
}

impl Settings {
    /// Reads the slide source and merges it with `overrides`.
    pub fn resolve(source: &SlideSource, overrides: &Overrides) -> Result<Self> {
        let manifest = match source {
            SlideSource::Manifest(path) => Manifest::load(path)?,
            SlideSource::Directory(dir) => Manifest {
                slides: load_sorted_image_paths(dir)?
                    .into_iter()
                    .map(|path| SlideEntry {
                        background: Some(path),
                        caption: None,
                    })
                    .collect(),
                ..Manifest::default()
            },
        };
        Self::merge(manifest, overrides)
    }

    pub fn merge(manifest: Manifest, overrides: &Overrides) -> Result<Self> {
        let interval = match overrides.interval_ms.or(manifest.interval_ms) {
            Some(0) => {
                return Err(CarouselError::InvalidSetting(
                    "interval_ms must be greater than zero".to_string(),
                ));
            }
            Some(ms) => Duration::from_millis(ms),
            None => AUTO_ADVANCE_INTERVAL,
        };

        Ok(Self {
            interval,
            shuffle: overrides.shuffle || manifest.shuffle.unwrap_or(false),
            slides: manifest.slides,
        })
    }

    /// Builds the slide elements, in final order.
    pub fn build_slides(&self) -> Vec<Slide> {
        let mut entries = self.slides.clone();
        if self.shuffle {
            entries.shuffle(&mut rand::rng());
        }
        entries
            .into_iter()
            .map(|entry| Slide::new(entry.background, entry.caption))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_resolves_relative_backgrounds() {
        let text = r#"
            interval_ms = 3000

            [[slides]]
            background = "hero/a.jpg"
            caption = "First"

            [[slides]]
            background = "/abs/b.jpg"

            [[slides]]
            caption = "Text only"
        "#;
        let manifest =
            Manifest::parse(text, Path::new("/site"), Path::new("/site/carousel.toml")).unwrap();

        assert_eq!(manifest.interval_ms, Some(3000));
        assert_eq!(manifest.slides.len(), 3);
        assert_eq!(
            manifest.slides[0].background.as_deref(),
            Some(Path::new("/site/hero/a.jpg"))
        );
        assert_eq!(manifest.slides[0].caption.as_deref(), Some("First"));
        assert_eq!(
            manifest.slides[1].background.as_deref(),
            Some(Path::new("/abs/b.jpg"))
        );
        assert_eq!(manifest.slides[2].background, None);
    }

    #[test]
    fn parse_reports_invalid_toml() {
        let err = Manifest::parse("slides = 3", Path::new("."), Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, CarouselError::Manifest { .. }));
    }

    #[test]
    fn merge_prefers_overrides_then_manifest_then_default() {
        let manifest = Manifest {
            interval_ms: Some(3000),
            ..Manifest::default()
        };
        let settings = Settings::merge(manifest.clone(), &Overrides::default()).unwrap();
        assert_eq!(settings.interval, Duration::from_millis(3000));

        let overrides = Overrides {
            interval_ms: Some(1500),
            shuffle: true,
        };
        let settings = Settings::merge(manifest, &overrides).unwrap();
        assert_eq!(settings.interval, Duration::from_millis(1500));
        assert!(settings.shuffle);

        let settings = Settings::merge(Manifest::default(), &Overrides::default()).unwrap();
        assert_eq!(settings.interval, AUTO_ADVANCE_INTERVAL);
        assert!(!settings.shuffle);
    }

    #[test]
    fn merge_rejects_zero_interval() {
        let overrides = Overrides {
            interval_ms: Some(0),
            shuffle: false,
        };
        let err = Settings::merge(Manifest::default(), &overrides).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidSetting(_)));
    }

    #[test]
    fn resolve_loads_manifest_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("carousel.toml");
        fs::write(
            &path,
            "shuffle = false\n[[slides]]\nbackground = \"one.png\"\n",
        )
        .expect("failed to write manifest");

        let settings =
            Settings::resolve(&SlideSource::Manifest(path), &Overrides::default()).unwrap();
        assert_eq!(settings.slides.len(), 1);
        assert_eq!(
            settings.slides[0].background.as_deref(),
            Some(dir.path().join("one.png").as_path())
        );
    }

    #[test]
    fn resolve_scans_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        for name in ["b.jpg", "a.png", "notes.txt"] {
            fs::write(dir.path().join(name), b"fake image data").expect("failed to write file");
        }

        let settings = Settings::resolve(
            &SlideSource::Directory(dir.path().to_path_buf()),
            &Overrides::default(),
        )
        .unwrap();

        let names: Vec<_> = settings
            .slides
            .iter()
            .filter_map(|s| s.background.as_ref()?.file_name()?.to_str())
            .collect();
        assert_eq!(names, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn build_slides_keeps_order_without_shuffle() {
        let settings = Settings {
            interval: AUTO_ADVANCE_INTERVAL,
            shuffle: false,
            slides: (0..5)
                .map(|i| SlideEntry {
                    background: Some(PathBuf::from(format!("{i}.jpg"))),
                    caption: None,
                })
                .collect(),
        };

        let slides = settings.build_slides();
        let order: Vec<_> = slides
            .iter()
            .filter_map(|s| s.background()?.to_str())
            .collect();
        assert_eq!(order, vec!["0.jpg", "1.jpg", "2.jpg", "3.jpg", "4.jpg"]);
    }

    #[test]
    fn build_slides_shuffle_keeps_every_slide() {
        let settings = Settings {
            interval: AUTO_ADVANCE_INTERVAL,
            shuffle: true,
            slides: (0..6)
                .map(|i| SlideEntry {
                    background: None,
                    caption: Some(format!("slide {i}")),
                })
                .collect(),
        };

        let mut captions: Vec<_> = settings
            .build_slides()
            .iter()
            .filter_map(|s| s.caption().map(str::to_string))
            .collect();
        captions.sort();
        assert_eq!(captions.len(), 6);
        assert_eq!(captions[0], "slide 0");
        assert_eq!(captions[5], "slide 5");
    }
}
