//! Samples an image's outer border and reports its dominant color.

use image::{DynamicImage, Rgb, RgbImage};
use log::{debug, info};
use palette::Srgb;
use std::path::Path;

use crate::border::{ColorTally, border_pixels};
use crate::error::AnalyzeError;

/// Dominant border color of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderColorStats {
    pub color: Srgb<u8>,
    /// Number of border samples matching `color`.
    pub occurrences: usize,
    /// Length of the border sequence, `2 * width + 2 * height`.
    pub total: usize,
}

impl BorderColorStats {
    /// `#rrggbb`, lowercase.
    pub fn hex(&self) -> String {
        color_hex(self.color)
    }
}

/// One entry of the full border ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedColor {
    pub color: Srgb<u8>,
    pub occurrences: usize,
}

/// Tallied border of a decoded image.
///
/// Construction fails for images without border pixels, so a sample always has
/// a dominant color.
#[derive(Debug, Clone)]
pub struct BorderSample {
    ranked: Vec<RankedColor>,
    total: usize,
}

impl BorderSample {
    pub fn from_rgb(image: &RgbImage) -> Result<Self, AnalyzeError> {
        let (width, height) = image.dimensions();
        let pixels = border_pixels(image);
        let total = pixels.len();
        let tally: ColorTally = pixels.into_iter().collect();
        if tally.is_empty() {
            return Err(AnalyzeError::EmptyImage { width, height });
        }
        debug!(
            "sampled {total} border pixels from {width}x{height}, {} distinct colors",
            tally.distinct()
        );

        let ranked = tally
            .ranked()
            .into_iter()
            .map(|(px, occurrences)| RankedColor {
                color: to_srgb(px),
                occurrences,
            })
            .collect();
        Ok(Self { ranked, total })
    }

    pub fn dominant(&self) -> BorderColorStats {
        let first = self.ranked[0];
        BorderColorStats {
            color: first.color,
            occurrences: first.occurrences,
            total: self.total,
        }
    }

    /// The `n` most frequent colors, most frequent first.
    pub fn top(&self, n: usize) -> &[RankedColor] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

/// Decodes the image at `path` and tallies its border.
pub fn sample(path: &Path) -> Result<BorderSample, AnalyzeError> {
    let img = image::open(path).map_err(|source| AnalyzeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());
    let sample = BorderSample::from_rgb(&img.to_rgb8())?;

    let stats = sample.dominant();
    info!(
        "{}: dominant border color {} ({}/{})",
        path.display(),
        stats.hex(),
        stats.occurrences,
        stats.total
    );
    Ok(sample)
}

/// Reports the most frequent border color of the image at `path`.
pub fn analyze(path: &Path) -> Result<BorderColorStats, AnalyzeError> {
    Ok(sample(path)?.dominant())
}

/// Same as [`analyze`] for an image already in memory. Alpha is discarded.
pub fn analyze_image(image: &DynamicImage) -> Result<BorderColorStats, AnalyzeError> {
    analyze_rgb(&image.to_rgb8())
}

pub fn analyze_rgb(image: &RgbImage) -> Result<BorderColorStats, AnalyzeError> {
    Ok(BorderSample::from_rgb(image)?.dominant())
}

pub fn color_hex(color: Srgb<u8>) -> String {
    format!("#{color:x}")
}

fn to_srgb(px: Rgb<u8>) -> Srgb<u8> {
    let [r, g, b] = px.0;
    Srgb::new(r, g, b)
}
