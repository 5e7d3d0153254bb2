use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::{CarouselError, Result};

const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_supported_image(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(CarouselError::NoSlides(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY) {
            Some(field) => match &field.value {
                Value::Short(values) => values.first().copied().unwrap_or(1),
                _ => 1,
            },
            None => 1,
        },
        Err(e) => {
            debug!("No usable EXIF data: {}", e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)?;
    let extension = extension_of(image_path);

    // Only JPEG carries orientation reliably
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| CarouselError::Image {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; flipped variants are shown as stored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        1 => {}
        other => warn!(
            "Unsupported EXIF orientation {} for {:?}, showing as stored",
            other, image_path
        ),
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| CarouselError::Image {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn scan_keeps_supported_images_sorted_by_name() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "c.GIF");
        touch(dir.path(), "a.jpeg");
        touch(dir.path(), "b.png");
        touch(dir.path(), "readme.md");
        fs::create_dir(dir.path().join("d.jpg")).expect("failed to create subdir");

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(names, vec!["a.jpeg", "b.png", "c.GIF"]);
    }

    #[test]
    fn scan_of_directory_without_images_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "notes.txt");

        let err = load_sorted_image_paths(dir.path()).unwrap_err();
        assert!(matches!(err, CarouselError::NoSlides(_)));
    }

    #[test]
    fn scan_of_missing_directory_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_sorted_image_paths(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, CarouselError::Io(_)));
    }

    #[test]
    fn orientation_defaults_to_upright() {
        assert_eq!(exif_orientation(b"not a jpeg"), 1);
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("HERO.JPG")));
        assert!(!is_supported_image(Path::new("hero.webp")));
        assert!(!is_supported_image(Path::new("hero")));
    }
}
