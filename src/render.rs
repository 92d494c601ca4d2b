use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::{self, FilterType},
    DynamicImage, GrayImage, Luma, Rgba, Rgba32FImage, RgbaImage,
};
use tracing::{info, warn};

use crate::error::SaveError;
use crate::metrics::RunMetrics;
use crate::source::SourceImage;
use crate::types::SizeEntry;

/// What happened to the round icon of one size.
#[derive(Debug)]
pub enum RoundStatus {
    Written,
    Failed(SaveError),
    /// Not attempted because the plain icon of the same size failed.
    Skipped,
}

#[derive(Debug)]
pub struct SizeOutcome {
    pub entry: SizeEntry,
    pub plain_path: PathBuf,
    pub round_path: PathBuf,
    pub plain: Result<(), SaveError>,
    pub round: RoundStatus,
}

impl SizeOutcome {
    pub fn plain_ok(&self) -> bool {
        self.plain.is_ok()
    }

    pub fn round_ok(&self) -> bool {
        matches!(self.round, RoundStatus::Written)
    }
}

/// Scales `source` to exactly `edge × edge` (aspect ratio is not kept) with Lanczos3.
///
/// Filtering runs on premultiplied `f32` pixels so colour under fully transparent
/// areas does not leak into the result.
pub fn resize_square(source: &DynamicImage, edge: u32) -> RgbaImage {
    resize_premultiplied(&premultiplied(source), edge)
}

/// Like [`resize_square`], starting from an already premultiplied buffer.
pub fn resize_premultiplied(premul: &Rgba32FImage, edge: u32) -> RgbaImage {
    let resized = imageops::resize(premul, edge, edge, FilterType::Lanczos3);
    unpremultiplied_rgba8(&resized)
}

/// Converts to `f32` RGBA with colour channels multiplied by alpha.
pub fn premultiplied(source: &DynamicImage) -> Rgba32FImage {
    let mut buf = source.to_rgba32f();
    for px in buf.pixels_mut() {
        let a = px[3];
        px[0] *= a;
        px[1] *= a;
        px[2] *= a;
    }
    buf
}

fn unpremultiplied_rgba8(buf: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(buf.width(), buf.height(), |x, y| {
        let px = buf.get_pixel(x, y);
        let a = px[3].clamp(0.0, 1.0);
        let straight = |c: f32| if a > 0.0 { c / a } else { 0.0 };
        Rgba([
            unit_to_u8(straight(px[0])),
            unit_to_u8(straight(px[1])),
            unit_to_u8(straight(px[2])),
            unit_to_u8(a),
        ])
    })
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Builds the inscribed-circle mask for an `edge × edge` square.
///
/// Centre and radius are both `(edge - 1) / 2`; a pixel is opaque (255) when its
/// distance from the centre is `<=` the radius, otherwise 0. The test is done on
/// doubled coordinates so it stays in integers:
/// `(2x - (edge-1))² + (2y - (edge-1))² <= (edge-1)²`.
/// `edge == 1` yields a single opaque pixel, `edge == 0` an empty mask.
pub fn circular_mask(edge: u32) -> GrayImage {
    let d = i64::from(edge.saturating_sub(1));
    let r2 = d * d;
    GrayImage::from_fn(edge, edge, |x, y| {
        let dx = 2 * i64::from(x) - d;
        let dy = 2 * i64::from(y) - d;
        if dx * dx + dy * dy <= r2 { Luma([255]) } else { Luma([0]) }
    })
}

/// Pastes `rendered` onto a transparent canvas the size of `mask` and replaces the
/// alpha channel with the mask. RGB comes from `rendered`, alpha is the mask value.
pub fn apply_circular_mask(rendered: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    let mut canvas = RgbaImage::new(mask.width(), mask.height());
    imageops::replace(&mut canvas, rendered, 0, 0);
    for (px, m) in canvas.pixels_mut().zip(mask.pixels()) {
        px[3] = m[0];
    }
    canvas
}

/// Writes `image` as PNG, creating missing parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), SaveError> {
    write_png(image, path).map_err(|source| SaveError { path: path.to_path_buf(), source })
}

fn write_png(image: &RgbaImage, path: &Path) -> image::ImageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    // entspricht optimize=True: maximale Kompression, adaptive Filter
    let encoder = PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilterType::Adaptive);
    image.write_with_encoder(encoder)?;
    writer.flush()?;
    Ok(())
}

/// Renders and saves the plain and round icon for one size.
///
/// A failed plain save skips the round icon of the same size; nothing here
/// affects other sizes.
pub fn render_size(source: &SourceImage, entry: SizeEntry, output_root: &Path) -> SizeOutcome {
    let plain_path = entry.plain_path(output_root);
    let round_path = entry.round_path(output_root);

    let rendered = resize_premultiplied(source.premultiplied(), entry.edge);
    let plain = save_png(&rendered, &plain_path);
    let round = match &plain {
        Ok(()) => {
            info!("✓ {}: {}x{} -> {}", entry.label, entry.edge, entry.edge, plain_path.display());
            let mask = circular_mask(entry.edge);
            let masked = apply_circular_mask(&rendered, &mask);
            match save_png(&masked, &round_path) {
                Ok(()) => {
                    info!("  └─ {} (round)", round_path.display());
                    RoundStatus::Written
                }
                Err(e) => {
                    warn!("  └─ round icon failed for {}: {}", entry.label, e);
                    RoundStatus::Failed(e)
                }
            }
        }
        Err(e) => {
            warn!("✗ {}: {}", entry.label, e);
            RoundStatus::Skipped
        }
    };

    SizeOutcome { entry, plain_path, round_path, plain, round }
}

/// Renders every entry in order and records the results in `metrics`.
pub fn render_all(
    source: &SourceImage,
    entries: &[SizeEntry],
    output_root: &Path,
    metrics: &mut RunMetrics,
) -> Vec<SizeOutcome> {
    let mut outcomes = Vec::with_capacity(entries.len());
    for entry in entries {
        let outcome = render_size(source, *entry, output_root);
        if outcome.plain_ok() {
            metrics.inc_plain_written();
        } else {
            metrics.inc_plain_failed();
        }
        match outcome.round {
            RoundStatus::Written => metrics.inc_round_written(),
            RoundStatus::Failed(_) => metrics.inc_round_failed(),
            RoundStatus::Skipped => metrics.inc_round_skipped(),
        }
        outcomes.push(outcome);
    }
    outcomes
}
