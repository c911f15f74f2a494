pub const DEFAULT_JPG_QUALITY: u8 = 35;
pub const DEFAULT_PNG_QUALITY: u8 = 65;
pub const MAX_QUALITY: u8 = 100;

/// Subfolder that receives compressed copies.
pub const MIN_DIR: &str = "min";
pub const MIN_SUFFIX: &str = "-min";

/// Extensions the compressor and the crawl fetch filter admit,
/// compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Upper bound on simultaneous image downloads.
pub const MAX_CONCURRENT_DOWNLOADS: usize = 8;

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;
