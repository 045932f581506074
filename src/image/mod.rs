//! Grayscale images: the owned [`Image`] grid and the borrowed [`ImageView`].
//!
//! Pixels are stored row-major in a single contiguous buffer, so pixel `k`
//! of the flattened form is `(k / cols, k % cols)`. `ImageView` adds an
//! explicit stride: it counts elements between the starts of consecutive
//! rows, and ROI slices are zero-copy views that keep the parent's stride.
//!
//! Transforms live in submodules as further `impl Image` blocks: in-place
//! tone operations take `&mut self`, geometric ones return a new `Image`.

use crate::util::{GrayImgError, GrayImgResult};

pub mod geometry;
#[cfg(feature = "image-io")]
pub mod io;
pub mod resample;
pub mod shuffle;
pub mod tone;

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == cols`.
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> GrayImgResult<Self> {
        Self::new(data, rows, cols, cols)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], rows: usize, cols: usize, stride: usize) -> GrayImgResult<Self> {
        let needed = required_len(rows, cols, stride)?;
        if data.len() < needed {
            return Err(GrayImgError::BufferSizeMismatch {
                expected: needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            stride,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Elements between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the element at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let idx = row.checked_mul(self.stride)?.checked_add(col)?;
        self.data.get(idx)
    }

    /// Returns row `row` as a slice of length `cols`.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.rows {
            return None;
        }
        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.cols)?;
        self.data.get(start..end)
    }

    /// Iterates over the rows of the view, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (0..self.rows).filter_map(move |row| self.row(row))
    }

    /// Returns a zero-copy ROI with top-left corner `(row, col)`.
    ///
    /// Unlike [`Image::crop`], the rectangle must lie fully inside the view.
    pub fn roi(
        &self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> GrayImgResult<ImageView<'a, T>> {
        if height == 0 || width == 0 {
            return Err(GrayImgError::InvalidDimensions {
                rows: height,
                cols: width,
            });
        }

        let out_of_bounds = GrayImgError::RoiOutOfBounds {
            row,
            col,
            height,
            width,
            img_rows: self.rows,
            img_cols: self.cols,
        };
        let end_row = row.checked_add(height).ok_or_else(|| out_of_bounds.clone())?;
        let end_col = col.checked_add(width).ok_or_else(|| out_of_bounds.clone())?;
        if row >= self.rows || col >= self.cols || end_row > self.rows || end_col > self.cols {
            return Err(out_of_bounds);
        }

        let start = row * self.stride + col;
        ImageView::new(&self.data[start..], height, width, self.stride)
    }
}

fn required_len(rows: usize, cols: usize, stride: usize) -> GrayImgResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(GrayImgError::InvalidDimensions { rows, cols });
    }
    if stride < cols {
        return Err(GrayImgError::InvalidStride { cols, stride });
    }
    (rows - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(cols))
        .ok_or(GrayImgError::InvalidDimensions { rows, cols })
}

/// Owned 8-bit grayscale image.
///
/// Either both dimensions are zero and the buffer is empty, or the buffer
/// holds exactly `rows * cols` initialized samples. Cloning deep-copies the
/// pixels; no two images share storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Image {
    /// Creates the empty image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `rows x cols` image with every pixel set to `fill`.
    ///
    /// A zero in either dimension yields the empty image.
    pub fn filled(rows: usize, cols: usize, fill: u8) -> Self {
        if rows == 0 || cols == 0 {
            return Self::new();
        }
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Wraps a row-major buffer of `rows * cols` samples.
    ///
    /// Zero dimensions are accepted only together with an empty buffer.
    pub fn from_vec(data: Vec<u8>, rows: usize, cols: usize) -> GrayImgResult<Self> {
        if rows == 0 || cols == 0 {
            if data.is_empty() {
                return Ok(Self::new());
            }
            return Err(GrayImgError::InvalidDimensions { rows, cols });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(GrayImgError::InvalidDimensions { rows, cols })?;
        if data.len() != expected {
            return Err(GrayImgError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Copies a view into a new contiguous image.
    pub fn from_view(view: ImageView<'_, u8>) -> Self {
        let mut data = Vec::with_capacity(view.rows() * view.cols());
        for row in view.iter_rows() {
            data.extend_from_slice(row);
        }
        Self {
            data,
            rows: view.rows(),
            cols: view.cols(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of pixels, `rows * cols`.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for the 0x0 image.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major pixel buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_, u8> {
        ImageView {
            data: &self.data,
            rows: self.rows,
            cols: self.cols,
            stride: self.cols,
        }
    }

    /// Returns row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[u8] {
        assert!(row < self.rows, "row {row} out of range 0..{}", self.rows);
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the pixel at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[self.index(row, col)])
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the image.
    #[inline]
    pub fn get_pixel(&self, row: usize, col: usize) -> u8 {
        self.data[self.checked_index(row, col)]
    }

    /// Sets the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the image.
    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, value: u8) {
        let idx = self.checked_index(row, col);
        self.data[idx] = value;
    }

    /// Returns pixel `k` of the row-major flattening.
    ///
    /// # Panics
    ///
    /// Panics if `k >= self.size()`.
    #[inline]
    pub fn get_pixel_at(&self, k: usize) -> u8 {
        self.data[k]
    }

    /// Sets pixel `k` of the row-major flattening.
    ///
    /// # Panics
    ///
    /// Panics if `k >= self.size()`.
    #[inline]
    pub fn set_pixel_at(&mut self, k: usize, value: u8) {
        self.data[k] = value;
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    // Row-major indexing alone would let an out-of-range column wrap into
    // the next row.
    #[inline]
    fn checked_index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "pixel ({row}, {col}) out of range for {}x{} image",
            self.rows,
            self.cols
        );
        self.index(row, col)
    }
}
