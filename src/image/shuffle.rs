//! Deterministic row permutation.
//!
//! Row `i` moves to `(i * SHUFFLE_STRIDE) mod rows`. The stride is prime, so
//! the mapping is a bijection unless the row count is a multiple of it; in
//! that case the next odd stride coprime with the row count is used.

use crate::image::Image;
use crate::trace::trace_span;
use crate::util::math::gcd;

/// Multiplier of the row permutation.
pub const SHUFFLE_STRIDE: usize = 9973;

/// Destination of row `row` when an image with `rows` rows is shuffled.
///
/// # Panics
///
/// Panics if `row >= rows`.
pub fn shuffled_row_position(row: usize, rows: usize) -> usize {
    assert!(row < rows, "row {row} out of range 0..{rows}");
    position(row, rows, coprime_stride(rows))
}

#[inline]
fn position(row: usize, rows: usize, stride: usize) -> usize {
    ((row as u128 * stride as u128) % rows as u128) as usize
}

fn coprime_stride(rows: usize) -> usize {
    let mut stride = SHUFFLE_STRIDE;
    while gcd(stride, rows) != 1 {
        stride += 2;
    }
    stride
}

impl Image {
    /// Permutes whole rows in place; row contents move intact.
    pub fn shuffle_rows(&mut self) {
        if self.rows < 2 {
            return;
        }
        let _span = trace_span!("shuffle_rows", rows = self.rows).entered();

        let cols = self.cols;
        let stride = coprime_stride(self.rows);
        let mut shuffled = vec![0u8; self.data.len()];
        for (row, pixels) in self.data.chunks_exact(cols).enumerate() {
            let dst = position(row, self.rows, stride) * cols;
            shuffled[dst..dst + cols].copy_from_slice(pixels);
        }
        self.data = shuffled;
    }
}
