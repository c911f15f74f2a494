use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn write_test_image(dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_fn(16, 16, |x, y| {
        image::Rgb([(x * 16) as u8, (y * 16) as u8, 128])
    });
    img.save_with_format(&path, format).unwrap();
    path
}

pub fn write_test_jpg(dir: &Path, name: &str) -> PathBuf {
    write_test_image(dir, name, ImageFormat::Jpeg)
}

pub fn write_test_png(dir: &Path, name: &str) -> PathBuf {
    write_test_image(dir, name, ImageFormat::Png)
}

pub fn encode_test_jpg() -> Vec<u8> {
    let img = RgbImage::from_fn(16, 16, |x, y| {
        image::Rgb([(x * 16) as u8, (y * 16) as u8, 128])
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .unwrap();
    bytes
}
