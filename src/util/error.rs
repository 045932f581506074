//! Error types for grayimg.

use thiserror::Error;

/// Result alias for grayimg operations.
pub type GrayImgResult<T> = std::result::Result<T, GrayImgError>;

/// Errors reported by image construction and PGM persistence.
///
/// Arithmetic preconditions (contrast thresholds, empty mean regions) are not
/// reported here; they are documented caller contracts on the operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GrayImgError {
    /// The file exists but does not carry a PGM header.
    #[error("{path} is not a PGM image")]
    NotPgm { path: String },
    /// Reading or decoding the file failed.
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },
    /// Encoding or writing the file failed.
    #[error("failed to write {path}: {reason}")]
    Write { path: String, reason: String },
    /// A raw buffer does not hold exactly `rows * cols` samples.
    #[error("buffer holds {got} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// Dimensions are zero or overflow the address space.
    #[error("invalid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// The stride is shorter than a row.
    #[error("stride {stride} is smaller than row length {cols}")]
    InvalidStride { cols: usize, stride: usize },
    /// A region of interest does not fit inside the image.
    #[error(
        "roi at ({row}, {col}) of size {height}x{width} exceeds image {img_rows}x{img_cols}"
    )]
    RoiOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        img_rows: usize,
        img_cols: usize,
    },
}
