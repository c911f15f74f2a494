pub mod compress;
pub mod constants;
pub mod crawl;
pub mod download;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod prompt;
pub mod rename;

pub use compress::{collect_image_files, compress_directory, is_image_file, QualitySettings};
pub use crawl::{crawl_site, extract_links, is_image_url, is_same_origin};
pub use download::{download_all, plan_downloads, ImageTask};
pub use error::{Result, SqueezeError};
pub use pipeline::{derive_folder_name, is_url, run};
pub use prompt::{collect_config, collect_config_from, RunConfig};
pub use rename::{minified_name, relocate_compressed};
