//! Rectangular sub-images and region statistics.

use crate::image::Image;

impl Image {
    /// Copies the rectangle with top-left corner `(row, col)`.
    ///
    /// The rectangle is clamped so it never extends past the bottom-right
    /// corner of the image. A corner outside the image or a zero
    /// `height`/`width` yields the empty image.
    pub fn crop(&self, row: usize, col: usize, height: usize, width: usize) -> Image {
        let Some((height, width)) = self.clamp_rect(row, col, height, width) else {
            return Image::new();
        };
        self.view()
            .roi(row, col, height, width)
            .map(Image::from_view)
            .unwrap_or_default()
    }

    /// Arithmetic mean of the rectangle at `(row, col)`, clamped as in
    /// [`Image::crop`].
    ///
    /// A rectangle that clamps to nothing has no mean and yields `NaN`.
    pub fn mean(&self, row: usize, col: usize, height: usize, width: usize) -> f64 {
        let region = self.crop(row, col, height, width);
        let sum: u64 = region.as_slice().iter().map(|&v| u64::from(v)).sum();
        sum as f64 / region.size() as f64
    }

    fn clamp_rect(
        &self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> Option<(usize, usize)> {
        if row >= self.rows || col >= self.cols || height == 0 || width == 0 {
            return None;
        }
        Some((height.min(self.rows - row), width.min(self.cols - col)))
    }
}
