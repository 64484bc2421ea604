//! Border traversal and color frequency counting.

use image::{Rgb, RgbImage};
use std::collections::HashMap;

/// Collects the pixels on the outer edge of `image`.
///
/// The top and bottom rows are walked first (for each x, the top pixel then the
/// bottom pixel), followed by the left and right columns (for each y, the left
/// pixel then the right pixel). Corners are visited by both passes, so the
/// returned sequence always holds `2 * width + 2 * height` entries. A 1-pixel
/// tall or wide image contributes the same pixel twice per pass.
pub fn border_pixels(image: &RgbImage) -> Vec<Rgb<u8>> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(2 * width as usize + 2 * height as usize);
    for x in 0..width {
        out.push(*image.get_pixel(x, 0));
        out.push(*image.get_pixel(x, height - 1));
    }
    for y in 0..height {
        out.push(*image.get_pixel(0, y));
        out.push(*image.get_pixel(width - 1, y));
    }
    out
}

/// Occurrence counts per color, remembering the order colors were first seen.
#[derive(Debug, Clone, Default)]
pub struct ColorTally {
    entries: Vec<(Rgb<u8>, usize)>,
    index: HashMap<Rgb<u8>, usize>,
}

impl ColorTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, color: Rgb<u8>) {
        match self.index.get(&color) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push((color, 1));
            }
        }
    }

    /// Number of samples added so far.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| *n).sum()
    }

    /// Number of distinct colors.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, color: Rgb<u8>) -> usize {
        self.index.get(&color).map_or(0, |&slot| self.entries[slot].1)
    }

    /// The most frequent color. Ties go to the color seen first.
    pub fn most_common(&self) -> Option<(Rgb<u8>, usize)> {
        let mut best: Option<(Rgb<u8>, usize)> = None;
        for &(color, n) in &self.entries {
            if best.is_none_or(|(_, b)| n > b) {
                best = Some((color, n));
            }
        }
        best
    }

    /// All colors by count, descending. Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(Rgb<u8>, usize)> {
        let mut out = self.entries.clone();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

impl FromIterator<Rgb<u8>> for ColorTally {
    fn from_iter<I: IntoIterator<Item = Rgb<u8>>>(iter: I) -> Self {
        let mut tally = ColorTally::new();
        for color in iter {
            tally.add(color);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);

    #[test]
    fn single_pixel_is_sampled_four_times() {
        let img = RgbImage::from_pixel(1, 1, RED);
        assert_eq!(border_pixels(&img), vec![RED; 4]);
    }

    #[test]
    fn traversal_order_is_rows_then_columns() {
        // 2x2 with a distinct color in every corner.
        let mut img = RgbImage::new(2, 2);
        let tl = Rgb([1, 0, 0]);
        let tr = Rgb([2, 0, 0]);
        let bl = Rgb([3, 0, 0]);
        let br = Rgb([4, 0, 0]);
        img.put_pixel(0, 0, tl);
        img.put_pixel(1, 0, tr);
        img.put_pixel(0, 1, bl);
        img.put_pixel(1, 1, br);

        assert_eq!(border_pixels(&img), vec![tl, bl, tr, br, tl, tr, bl, br]);
    }

    #[test]
    fn interior_pixels_are_skipped() {
        let mut img = RgbImage::from_pixel(5, 4, BLUE);
        for x in 1..4 {
            for y in 1..3 {
                img.put_pixel(x, y, RED);
            }
        }
        let border = border_pixels(&img);
        assert_eq!(border.len(), 2 * 5 + 2 * 4);
        assert!(border.iter().all(|&p| p == BLUE));
    }

    #[test]
    fn empty_image_has_no_border() {
        assert!(border_pixels(&RgbImage::new(0, 3)).is_empty());
        assert!(border_pixels(&RgbImage::new(3, 0)).is_empty());
    }

    #[test]
    fn tally_counts_and_totals() {
        let tally: ColorTally = [RED, BLUE, RED, GREEN, RED].into_iter().collect();
        assert_eq!(tally.total(), 5);
        assert_eq!(tally.distinct(), 3);
        assert_eq!(tally.count(RED), 3);
        assert_eq!(tally.count(Rgb([9, 9, 9])), 0);
        assert_eq!(tally.most_common(), Some((RED, 3)));
    }

    #[test]
    fn ties_resolve_to_first_seen() {
        let tally: ColorTally = [BLUE, RED, RED, BLUE].into_iter().collect();
        assert_eq!(tally.most_common(), Some((BLUE, 2)));

        let tally: ColorTally = [RED, BLUE, BLUE, RED].into_iter().collect();
        assert_eq!(tally.most_common(), Some((RED, 2)));
    }

    #[test]
    fn ranked_is_stable_for_equal_counts() {
        let tally: ColorTally = [GREEN, BLUE, RED, RED, BLUE].into_iter().collect();
        assert_eq!(tally.ranked(), vec![(BLUE, 2), (RED, 2), (GREEN, 1)]);
    }

    #[test]
    fn empty_tally_has_no_winner() {
        let tally = ColorTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.most_common(), None);
        assert!(tally.ranked().is_empty());
    }
}
