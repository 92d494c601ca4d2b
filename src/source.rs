use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{ColorType, DynamicImage, ImageReader, Rgba32FImage};
use tracing::info;

use crate::error::{GenError, GenResult};
use crate::render;

/// The decoded source image, normalised to a colour type with an alpha channel.
///
/// Every size is rendered from this one instance; it is never re-read from disk.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    /// Colour type as stored in the file.
    pub decoded_color: ColorType,
    image: DynamicImage,
    // resampling input, shared by all sizes
    premultiplied: Rgba32FImage,
}

impl SourceImage {
    /// Wraps an already decoded image, adding an opaque alpha channel if it has none.
    pub fn from_dynamic(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        let decoded_color = image.color();
        let image = if decoded_color.has_alpha() {
            image
        } else {
            DynamicImage::ImageRgba8(image.to_rgba8())
        };
        let premultiplied = render::premultiplied(&image);
        Self { path: path.into(), decoded_color, image, premultiplied }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn premultiplied(&self) -> &Rgba32FImage {
        &self.premultiplied
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour type after normalisation; always has alpha.
    pub fn color(&self) -> ColorType {
        self.image.color()
    }
}

/// Reads and decodes the source image.
///
/// Fails with [`GenError::MissingSource`] before any decode attempt if the path is
/// not a readable file, and with [`GenError::Decode`] if the bytes are not an image.
/// The format is sniffed from the content, not the extension.
pub fn load_source(path: &Path) -> GenResult<SourceImage> {
    if !path.is_file() {
        return Err(GenError::MissingSource { path: path.to_path_buf(), source: None });
    }
    let bytes = fs::read(path)
        .map_err(|e| GenError::MissingSource { path: path.to_path_buf(), source: Some(e) })?;

    let decoded = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| GenError::Decode { path: path.to_path_buf(), source: image::ImageError::IoError(e) })?
        .decode()
        .map_err(|e| GenError::Decode { path: path.to_path_buf(), source: e })?;

    let source = SourceImage::from_dynamic(path, decoded);
    info!(
        "Source {}: {}x{}, {:?} -> {:?}",
        source.path.display(),
        source.width(),
        source.height(),
        source.decoded_color,
        source.color()
    );
    Ok(source)
}
