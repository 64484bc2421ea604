use image::{Rgb, RgbImage};
use std::path::Path;

/// Colors used by [`generate_bordered_image`].
#[derive(Debug, Clone, Copy)]
pub struct FramePalette {
    pub frame: Rgb<u8>,
    pub fill: Rgb<u8>,
    pub circle: Rgb<u8>,
}

impl Default for FramePalette {
    fn default() -> Self {
        Self {
            frame: Rgb([255, 165, 0]),
            fill: Rgb([255, 255, 255]),
            circle: Rgb([255, 0, 0]),
        }
    }
}

/// Builds a framed test image.
///
/// - `fill` background
/// - `frame` band of `border` pixels around the edges
/// - `circle` disc centered in the image, as wide as the image, clipped by the frame
///
/// With `border >= 1` every outer pixel is the frame color.
pub fn generate_bordered_image(width: u32, height: u32, border: u32, palette: FramePalette) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, palette.fill);

    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let radius = width as f32 / 2.0;

    for x in 0..width {
        for y in 0..height {
            let in_frame = x < border || x + border >= width || y < border || y + border >= height;
            if in_frame {
                img.put_pixel(x, y, palette.frame);
                continue;
            }
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, palette.circle);
            }
        }
    }

    img
}

/// Writes [`generate_bordered_image`] to `path`; the format follows the extension.
pub fn generate_test_image(
    path: &Path,
    width: u32,
    height: u32,
    border: u32,
    palette: FramePalette,
) -> Result<(), String> {
    generate_bordered_image(width, height, border, palette)
        .save(path)
        .map_err(|e| format!("Failed to save image: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_covers_outer_ring() {
        let palette = FramePalette::default();
        let img = generate_bordered_image(20, 30, 2, palette);
        assert_eq!(*img.get_pixel(0, 0), palette.frame);
        assert_eq!(*img.get_pixel(19, 29), palette.frame);
        assert_eq!(*img.get_pixel(1, 15), palette.frame);
        assert_eq!(*img.get_pixel(10, 15), palette.circle);
        assert_eq!(*img.get_pixel(2, 2), palette.fill);
    }

    #[test]
    fn zero_border_leaves_edges_unframed() {
        let palette = FramePalette::default();
        let img = generate_bordered_image(10, 40, 0, palette);
        assert_eq!(*img.get_pixel(0, 0), palette.fill);
    }
}
