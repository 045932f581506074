#![cfg(feature = "image-io")]

use grayimg::{GrayImgError, Image};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;

fn random_image(rows: usize, cols: usize, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..rows * cols).map(|_| rng.random_range(0..=255)).collect();
    Image::from_vec(data, rows, cols).unwrap()
}

#[test]
fn save_then_load_reproduces_pixels() {
    let dir = tempfile::tempdir().unwrap();
    for (rows, cols) in [(1, 1), (3, 17), (64, 48)] {
        let img = random_image(rows, cols, (rows * cols) as u64);
        let path = dir.path().join(format!("img_{rows}x{cols}.pgm"));
        img.save(&path).unwrap();

        let loaded = Image::open(&path).unwrap();
        assert_eq!(loaded.rows(), rows);
        assert_eq!(loaded.cols(), cols);
        assert_eq!(loaded, img);
    }
}

#[test]
fn saved_file_is_binary_graymap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.pgm");
    let img = Image::from_vec((0u8..6).collect(), 2, 3).unwrap();
    img.save(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P5"));
    assert!(bytes.ends_with(&[0, 1, 2, 3, 4, 5]));
}

#[test]
fn load_replaces_existing_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.pgm");
    let small = Image::filled(2, 2, 7);
    small.save(&path).unwrap();

    let mut img = Image::filled(10, 10, 1);
    img.load(&path).unwrap();
    assert_eq!(img, small);
}

#[test]
fn load_reads_ascii_graymap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ascii.pgm");
    fs::write(&path, b"P2\n3 2\n255\n0 10 20\n30 40 255\n").unwrap();

    let img = Image::open(&path).unwrap();
    assert_eq!((img.rows(), img.cols()), (2, 3));
    assert_eq!(img.as_slice(), &[0, 10, 20, 30, 40, 255]);
}

#[test]
fn load_rejects_non_pgm_and_leaves_image_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color.ppm");
    fs::write(&path, b"P6\n1 1\n255\n\x01\x02\x03").unwrap();

    let mut img = Image::filled(4, 4, 9);
    let err = img.load(&path).err().unwrap();
    assert!(matches!(err, GrayImgError::NotPgm { .. }));
    assert!(img.is_empty());
}

#[test]
fn load_of_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut img = Image::filled(2, 2, 3);
    let err = img.load(dir.path().join("missing.pgm")).err().unwrap();
    assert!(matches!(err, GrayImgError::Read { .. }));
    assert!(img.is_empty());
}

#[test]
fn load_of_truncated_pgm_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.pgm");
    fs::write(&path, b"P5\n4 4\n255\n\x00\x01").unwrap();

    let err = Image::open(&path).err().unwrap();
    assert!(matches!(err, GrayImgError::Read { .. }));
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.pgm");
    let err = Image::filled(2, 2, 0).save(&path).err().unwrap();
    assert!(matches!(err, GrayImgError::Write { .. }));
}
