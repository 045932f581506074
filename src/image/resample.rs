//! Resampling: 2x bilinear upscale and integer-factor block-mean downscale.
//!
//! `zoom_2x` keeps the source samples on the even coordinates of the output
//! grid and fills the odd ones with rounded means of their neighbours, so a
//! `rows x cols` image becomes `(2*rows - 1) x (2*cols - 1)`.
//!
//! `subsample` replaces each `factor x factor` block with its rounded mean.
//! Blocks on the bottom and right edges may be smaller than the factor.

use crate::image::Image;
use crate::trace::{trace_event, trace_span};
use crate::util::math::{mean2, mean4, round_to_u8};

impl Image {
    /// Upscales by two with bilinear interpolation between source samples.
    ///
    /// The empty image maps to the empty image.
    pub fn zoom_2x(&self) -> Image {
        if self.is_empty() {
            return Image::new();
        }
        let _span = trace_span!("zoom_2x", rows = self.rows, cols = self.cols).entered();

        let dst_rows = 2 * self.rows - 1;
        let dst_cols = 2 * self.cols - 1;
        let mut data = Vec::with_capacity(dst_rows * dst_cols);

        for i in 0..dst_rows {
            let top = self.row(i / 2);
            // Odd output rows sit between source rows i/2 and i/2 + 1.
            let bottom = if i % 2 == 1 { Some(self.row(i / 2 + 1)) } else { None };
            for j in 0..dst_cols {
                let c = j / 2;
                let value = match (bottom, j % 2 == 1) {
                    (None, false) => top[c],
                    (None, true) => mean2(top[c], top[c + 1]),
                    (Some(bottom), false) => mean2(top[c], bottom[c]),
                    (Some(bottom), true) => mean4(top[c], top[c + 1], bottom[c], bottom[c + 1]),
                };
                data.push(value);
            }
        }

        trace_event!("zoom_2x_done", rows = dst_rows, cols = dst_cols);
        Image {
            data,
            rows: dst_rows,
            cols: dst_cols,
        }
    }

    /// Downscales by an integer factor, averaging each block.
    ///
    /// `factor` is clamped to the number of rows. The output is
    /// `round(rows / factor) x round(cols / factor)`; when the column count
    /// rounds to zero the result is the empty image.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is zero.
    pub fn subsample(&self, factor: usize) -> Image {
        assert!(factor > 0, "subsample factor must be at least 1");
        if self.is_empty() {
            return Image::new();
        }
        let factor = factor.min(self.rows);
        let _span = trace_span!("subsample", rows = self.rows, cols = self.cols, factor).entered();

        let dst_rows = round_ratio(self.rows, factor);
        let dst_cols = round_ratio(self.cols, factor);
        let mut out = Image::filled(dst_rows, dst_cols, 0);
        for i in 0..out.rows {
            for j in 0..out.cols {
                let mean = self.mean(i * factor, j * factor, factor, factor);
                out.set_pixel(i, j, round_to_u8(mean));
            }
        }

        trace_event!("subsample_done", rows = out.rows, cols = out.cols);
        out
    }
}

fn round_ratio(extent: usize, factor: usize) -> usize {
    (extent as f64 / factor as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::round_ratio;
    use crate::image::Image;

    #[test]
    fn round_ratio_rounds_instead_of_truncating() {
        assert_eq!(round_ratio(5, 2), 3);
        assert_eq!(round_ratio(7, 4), 2);
        assert_eq!(round_ratio(5, 4), 1);
        assert_eq!(round_ratio(2, 5), 0);
    }

    #[test]
    fn zoom_2x_interpolates_two_by_two() {
        let img = Image::from_vec(vec![0, 10, 20, 31], 2, 2).unwrap();
        let out = img.zoom_2x();
        assert_eq!((out.rows(), out.cols()), (3, 3));
        // 15.25 rounds down, 20.5 and 25.5 round up.
        assert_eq!(out.as_slice(), &[0, 5, 10, 10, 15, 21, 20, 26, 31]);
    }

    #[test]
    fn zoom_2x_of_single_pixel_is_identity() {
        let img = Image::filled(1, 1, 77);
        assert_eq!(img.zoom_2x(), img);
    }

    #[test]
    fn subsample_uses_partial_edge_blocks() {
        // 3x3 with factor 2: blocks are 2x2, 2x1, 1x2 and 1x1.
        let img = Image::from_vec(vec![0, 2, 9, 4, 6, 9, 1, 3, 8], 3, 3).unwrap();
        let out = img.subsample(2);
        assert_eq!((out.rows(), out.cols()), (2, 2));
        assert_eq!(out.as_slice(), &[3, 9, 2, 8]);
    }

    #[test]
    fn subsample_clamps_factor_to_rows() {
        let img = Image::filled(2, 4, 50);
        let out = img.subsample(10);
        assert_eq!((out.rows(), out.cols()), (1, 2));
        assert_eq!(out.as_slice(), &[50, 50]);
    }

    #[test]
    fn subsample_with_vanishing_columns_is_empty() {
        let img = Image::filled(10, 2, 5);
        assert!(img.subsample(5).is_empty());
    }
}
