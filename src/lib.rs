//! grayimg is a small library for 8-bit grayscale raster images.
//!
//! The [`Image`] type owns a row-major pixel grid and provides PGM
//! load/save (with the default `image-io` feature), cropping, a 2x bilinear
//! upscale, block-mean downscaling, tonal inversion, piecewise-linear
//! contrast adjustment and a deterministic row shuffle.
//!
//! ```
//! use grayimg::Image;
//!
//! let data: Vec<u8> = (0u8..16).collect();
//! let img = Image::from_vec(data, 4, 4).unwrap();
//! let sub = img.crop(1, 1, 2, 2);
//! assert_eq!(sub.as_slice(), &[5, 6, 9, 10]);
//! ```

pub mod image;
mod trace;
pub mod util;

pub use crate::image::shuffle::{shuffled_row_position, SHUFFLE_STRIDE};
pub use crate::image::tone::ContrastMap;
pub use crate::image::{Image, ImageView};
pub use util::{GrayImgError, GrayImgResult};
