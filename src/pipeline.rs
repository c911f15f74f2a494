use crate::compress::{compress_directory, QualitySettings};
use crate::crawl::crawl_site;
use crate::download::{download_all, plan_downloads};
use crate::error::{Result, SqueezeError};
use crate::info;
use crate::prompt::RunConfig;
use crate::rename::relocate_compressed;
use reqwest::{Client, Url};
use std::fs;
use std::path::{Path, PathBuf};

/// Targets containing "http" anywhere are treated as URLs, everything else
/// as a local directory path.
pub fn is_url(target: &str) -> bool {
    target.contains("http")
}

/// Turns a URL into a folder name: the scheme prefix goes, then every slash
/// and dot. `https://www.example.com/photos` becomes `wwwexamplecomphotos`.
pub fn derive_folder_name(target: &str) -> String {
    target
        .replace("https://", "")
        .replace("http://", "")
        .chars()
        .filter(|c| *c != '/' && *c != '.')
        .collect()
}

/// Dispatches to the local or remote pipeline. Errors from either bubble up
/// to the caller, which is the run's single error barrier.
pub async fn run(config: &RunConfig) -> Result<()> {
    let quality = QualitySettings::new(config.jpg_quality, config.png_quality)?;

    if is_url(&config.target) {
        run_remote(config, &quality).await
    } else {
        run_local(config, &quality)
    }
}

fn run_local(config: &RunConfig, quality: &QualitySettings) -> Result<()> {
    let dir = Path::new(&config.target);
    compress_directory(dir, quality)?;
    relocate_compressed(dir, config.should_move)?;
    Ok(())
}

async fn run_remote(config: &RunConfig, quality: &QualitySettings) -> Result<()> {
    let seed = Url::parse(&config.target)
        .map_err(|_| SqueezeError::InvalidUrl(config.target.clone()))?;

    let folder = PathBuf::from(derive_folder_name(&config.target));
    if !folder.exists() {
        fs::create_dir_all(&folder)
            .map_err(|_| SqueezeError::DirectoryCreationFailed(folder.clone()))?;
    }

    let client = Client::new();

    info!("Starting to crawl the site.");
    let images = crawl_site(&client, &seed).await?;
    info!("Found {} images, starting download.", images.len());

    let tasks = plan_downloads(&images, &folder);
    let downloaded = download_all(&client, tasks).await;
    info!("{} images downloaded.", downloaded);

    compress_directory(&folder, quality)?;
    relocate_compressed(&folder, config.should_move)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com"));
        assert!(is_url("http://example.com/photos"));
        assert!(!is_url("./photos"));
        assert!(!is_url("/home/user/images"));
    }

    #[test]
    fn test_derive_folder_name() {
        assert_eq!(
            derive_folder_name("https://www.example.com/photos"),
            "wwwexamplecomphotos"
        );
        assert_eq!(derive_folder_name("http://example.com"), "examplecom");
        assert_eq!(
            derive_folder_name("https://example.com/a/b/c.d"),
            "examplecomabcd"
        );
    }

    #[test]
    fn test_derive_folder_name_has_no_path_characters() {
        let name = derive_folder_name("https://example.com/deeply/nested/path.html");
        assert!(!name.contains('/'));
        assert!(!name.contains('.'));
    }
}
