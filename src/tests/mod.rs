//! Unit and integration tests for iconforge.
//!
//! ## Test Modules
//!
//! - **app_tests**: Exit codes and log file setup
//! - **config_tests**: Configuration layering and validation
//! - **error_tests**: Error messages and source chains
//! - **source_tests**: Source validation, decoding and alpha normalisation
//! - **render_tests**: Resize, mask, compositing and PNG output
//! - **descriptor_tests**: Adaptive-icon XML emission
//! - **generator_tests**: Full runs against temporary output trees
//!
//! Individual test modules can be run with:
//! ```bash
//! cargo test render_tests
//! ```


use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// Opaque RGB test pattern without an alpha channel.
pub(crate) fn gradient_rgb(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 128])
    }))
}

/// RGBA pattern whose left half is fully transparent.
pub(crate) fn half_transparent_rgba(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 { Rgba([255, 0, 0, 0]) } else { Rgba([0, 0, 255, 255]) }
    }))
}

pub(crate) fn write_png_fixture(dir: &Path, name: &str, image: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    image.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}
