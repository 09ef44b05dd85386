//! Test fixtures: temporary input/output directories and generated images.

use std::path::{Path, PathBuf};

use epd_convert::models::AppConfig;
use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Small panel used by most tests so frames stay readable
pub const WIDTH: u32 = 10;
pub const HEIGHT: u32 = 6;

/// Configuration for the small test panel
pub fn test_config() -> AppConfig {
    AppConfig {
        width: WIDTH,
        height: HEIGHT,
        ..Default::default()
    }
}

/// An input and an output directory that are removed on drop
pub struct TestWorkspace {
    input: TempDir,
    output: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            input: tempfile::tempdir().expect("Failed to create input dir"),
            output: tempfile::tempdir().expect("Failed to create output dir"),
        }
    }

    pub fn input_dir(&self) -> &Path {
        self.input.path()
    }

    pub fn output_dir(&self) -> &Path {
        self.output.path()
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.output.path().join(name)
    }

    /// Save `image` into the input directory; the format follows the extension
    pub fn add_image(&self, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.input.path().join(name);
        image.save(&path).expect("Failed to write fixture image");
        path
    }

    /// Write raw bytes into the input directory
    pub fn add_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.input.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }
}

/// Single-color image
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Diagonal gradient touching every channel, so dithering has work to do
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        let b = ((x + y) * 127 / (width + height).max(1)) as u8;
        Rgb([r, g, b])
    })
}
