//! PGM persistence through the `image` crate's PNM codec.
//!
//! Available when the `image-io` feature is enabled. Files are recognized by
//! their `P2`/`P5` magic; only 8-bit samples are accepted. Images are always
//! written as binary (`P5`) graymaps.

use crate::image::Image;
use crate::trace::{trace_event, trace_span};
use crate::util::{GrayImgError, GrayImgResult};
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat};
use std::fs;
use std::path::Path;

const PGM_MAGIC: [&[u8]; 2] = [b"P2", b"P5"];

impl Image {
    /// Loads a PGM file into a new image.
    pub fn open<P: AsRef<Path>>(path: P) -> GrayImgResult<Self> {
        read_pgm(path.as_ref())
    }

    /// Replaces the contents of `self` with the PGM file at `path`.
    ///
    /// On failure `self` is left empty.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> GrayImgResult<()> {
        *self = Image::new();
        *self = read_pgm(path.as_ref())?;
        Ok(())
    }

    /// Writes the image to `path` as a binary PGM.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GrayImgResult<()> {
        let path = path.as_ref();
        let _span = trace_span!("save_pgm", path = ?path).entered();
        let write_err = |reason: String| GrayImgError::Write {
            path: path.display().to_string(),
            reason,
        };

        let invalid = GrayImgError::InvalidDimensions {
            rows: self.rows,
            cols: self.cols,
        };
        let width = u32::try_from(self.cols).map_err(|_| invalid.clone())?;
        let height = u32::try_from(self.rows).map_err(|_| invalid)?;

        let mut encoded = Vec::new();
        PnmEncoder::new(&mut encoded)
            .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
            .write_image(&self.data, width, height, ExtendedColorType::L8)
            .map_err(|err| write_err(err.to_string()))?;
        fs::write(path, &encoded).map_err(|err| write_err(err.to_string()))?;

        trace_event!("pgm_saved", rows = self.rows, cols = self.cols, bytes = encoded.len());
        Ok(())
    }
}

fn is_pgm(bytes: &[u8]) -> bool {
    PGM_MAGIC.iter().any(|magic| bytes.starts_with(magic))
}

fn read_pgm(path: &Path) -> GrayImgResult<Image> {
    let display = path.display().to_string();
    let _span = trace_span!("load_pgm", path = ?path).entered();
    let read_err = |reason: String| GrayImgError::Read {
        path: display.clone(),
        reason,
    };

    let bytes = fs::read(path).map_err(|err| read_err(err.to_string()))?;
    if !is_pgm(&bytes) {
        return Err(GrayImgError::NotPgm {
            path: display.clone(),
        });
    }

    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Pnm)
        .map_err(|err| read_err(err.to_string()))?;
    let DynamicImage::ImageLuma8(gray) = decoded else {
        return Err(read_err("expected 8-bit samples".to_string()));
    };

    let rows = gray.height() as usize;
    let cols = gray.width() as usize;
    let img = Image::from_vec(gray.into_raw(), rows, cols)?;
    trace_event!("pgm_loaded", rows = img.rows, cols = img.cols);
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::is_pgm;

    #[test]
    fn magic_detection_accepts_graymaps_only() {
        assert!(is_pgm(b"P5\n2 2\n255\n"));
        assert!(is_pgm(b"P2\n1 1\n255\n0\n"));
        assert!(!is_pgm(b"P6\n1 1\n255\n"));
        assert!(!is_pgm(b"\x89PNG"));
        assert!(!is_pgm(b"P"));
    }
}
