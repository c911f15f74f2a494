use crate::constants::{
    IMAGE_EXTENSIONS, LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, MAX_QUALITY, MIN_DIR,
    ZOPFLI_ITERATIONS,
};
use crate::error::{Result, SqueezeError};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use oxipng::{Deflaters, InFile, Options, OutFile};
use std::fs::{self, File};
use std::io::BufWriter;
use std::num::NonZeroU8;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy)]
pub struct QualitySettings {
    pub jpg_quality: u8,
    pub png_quality: u8,
}

impl QualitySettings {
    pub fn new(jpg_quality: u8, png_quality: u8) -> Result<Self> {
        for quality in [jpg_quality, png_quality] {
            if quality > MAX_QUALITY {
                return Err(SqueezeError::InvalidQuality(quality));
            }
        }
        Ok(Self {
            jpg_quality,
            png_quality,
        })
    }
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists the image files directly under `dir`. The scan is non-recursive:
/// subdirectories, including a leftover `min/`, are not descended into.
pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    // Depth 0 is `dir` itself, which may legitimately be a dotted name.
    let walker = WalkDir::new(dir).max_depth(1).into_iter();
    for entry in walker
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(path) {
            image_files.push(path.to_path_buf());
        }
    }

    image_files.sort();
    Ok(image_files)
}

/// Compresses every image directly under `dir` into `dir/min/`, preserving
/// filenames. Originals are only read, never written or removed. Returns the
/// number of files compressed.
pub fn compress_directory(dir: &Path, quality: &QualitySettings) -> Result<usize> {
    if !dir.is_dir() {
        return Err(SqueezeError::DirectoryNotFound(dir.to_path_buf()));
    }

    let output_dir = dir.join(MIN_DIR);
    fs::create_dir_all(&output_dir)
        .map_err(|_| SqueezeError::DirectoryCreationFailed(output_dir.clone()))?;

    let image_files = collect_image_files(dir)?;
    for input_path in &image_files {
        let file_name = match input_path.file_name() {
            Some(name) => name,
            None => continue,
        };
        compress_file(input_path, &output_dir.join(file_name), quality)?;
    }

    Ok(image_files.len())
}

fn compress_file(input: &Path, output: &Path, quality: &QualitySettings) -> Result<()> {
    let img = ImageReader::open(input)?.decode()?;

    let extension = input
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => save_jpeg(&img, output, quality.jpg_quality),
        "png" => save_optimized_png(&img, output, quality.png_quality),
        _ => Ok(()),
    }
}

fn save_jpeg(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    let file = File::create(output)?;
    // The JPEG encoder floor is 1.
    let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality.max(1));
    img.write_with_encoder(encoder)?;
    Ok(())
}

/// Writes the image as PNG and runs it through oxipng, picking the deflater
/// from the quality setting: >=90 Zopfli, >=70 high libdeflater, otherwise
/// standard libdeflater.
fn save_optimized_png(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    let temp_path = output.with_extension("temp.png");
    img.save_with_format(&temp_path, image::ImageFormat::Png)?;

    struct TempFileGuard(PathBuf);
    impl Drop for TempFileGuard {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }
    let _guard = TempFileGuard(temp_path.clone());

    let mut options = Options::from_preset(4);
    options.force = true;
    options.deflate = if quality >= 90 {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap(),
        }
    } else if quality >= 70 {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };

    let input = InFile::Path(temp_path.clone());
    let out = OutFile::Path {
        path: Some(output.to_path_buf()),
        preserve_attrs: false,
    };
    oxipng::optimize(&input, &out, &options)
        .map_err(|e| SqueezeError::PngOptimization(e.to_string()))?;

    Ok(())
}
