//! In-place tonal operations: inversion and piecewise-linear contrast.

use crate::image::Image;
use crate::util::math::round_to_u8;

/// Piecewise-linear remap through `(in1, out1)` and `(in2, out2)`.
///
/// The curve runs from `(0, 0)` to `(in1, out1)`, then to `(in2, out2)`, then
/// to `(255, 255)`. Segments with a zero-width input range get slope zero at
/// the outer ends. The middle segment is undefined for `in1 == in2` and no
/// ordering of the thresholds is enforced; out-of-range results saturate and
/// NaN becomes 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContrastMap {
    /// Lower input threshold.
    pub in1: u8,
    /// Upper input threshold.
    pub in2: u8,
    /// Output value at `in1`.
    pub out1: u8,
    /// Output value at `in2`.
    pub out2: u8,
}

impl ContrastMap {
    /// Creates a map from input thresholds `in1`, `in2` to outputs `out1`, `out2`.
    pub fn new(in1: u8, in2: u8, out1: u8, out2: u8) -> Self {
        Self {
            in1,
            in2,
            out1,
            out2,
        }
    }

    /// The identity remap.
    pub fn identity() -> Self {
        Self::new(0, 255, 0, 255)
    }

    /// Maps a single sample.
    pub fn apply(&self, value: u8) -> u8 {
        let p = f64::from(value);
        let in1 = f64::from(self.in1);
        let in2 = f64::from(self.in2);
        let out1 = f64::from(self.out1);
        let out2 = f64::from(self.out2);

        if value < self.in1 {
            if self.in1 == 0 {
                return 0;
            }
            round_to_u8(out1 / in1 * p)
        } else if value <= self.in2 {
            round_to_u8(out1 + (out2 - out1) / (in2 - in1) * (p - in1))
        } else {
            let slope = if self.in2 == u8::MAX {
                0.0
            } else {
                (255.0 - out2) / (255.0 - in2)
            };
            round_to_u8(out2 + slope * (p - in2))
        }
    }

    /// Tabulates [`ContrastMap::apply`] for every sample value.
    pub fn lut(&self) -> [u8; 256] {
        let mut table = [0u8; 256];
        for (value, entry) in (0..=u8::MAX).zip(table.iter_mut()) {
            *entry = self.apply(value);
        }
        table
    }
}

impl Default for ContrastMap {
    fn default() -> Self {
        Self::identity()
    }
}

impl Image {
    /// Replaces every pixel `p` with `255 - p`.
    pub fn invert(&mut self) {
        for value in &mut self.data {
            *value = u8::MAX - *value;
        }
    }

    /// Remaps every pixel through the contrast curve defined by the input
    /// thresholds `in1 <= in2` and the outputs `out1`, `out2`.
    ///
    /// Parameters are not validated; see [`ContrastMap`] for the behavior of
    /// degenerate thresholds.
    pub fn adjust_contrast(&mut self, in1: u8, in2: u8, out1: u8, out2: u8) {
        self.apply_contrast(&ContrastMap::new(in1, in2, out1, out2));
    }

    /// Remaps every pixel through `map`.
    pub fn apply_contrast(&mut self, map: &ContrastMap) {
        let table = map.lut();
        for value in &mut self.data {
            *value = table[usize::from(*value)];
        }
    }
}
