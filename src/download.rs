use crate::constants::MAX_CONCURRENT_DOWNLOADS;
use crate::error::Result;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use reqwest::{Client, Url};
use std::path::{Path, PathBuf};

/// One discovered remote image, alive only for the download phase.
#[derive(Debug, Clone)]
pub struct ImageTask {
    pub source_url: Url,
    pub destination: PathBuf,
}

/// Maps discovered image URLs onto local destinations inside `dest_dir`. The
/// filename is the last path segment of the URL; URLs without one (a bare
/// host, a trailing slash) are dropped.
pub fn plan_downloads(images: &[Url], dest_dir: &Path) -> Vec<ImageTask> {
    images
        .iter()
        .filter_map(|url| {
            let name = url
                .path_segments()?
                .filter(|segment| !segment.is_empty())
                .next_back()?;
            Some(ImageTask {
                source_url: url.clone(),
                destination: dest_dir.join(name),
            })
        })
        .collect()
}

/// Downloads the batch with a bounded fan-out. Individual failures are
/// logged and skipped; the rest of the batch proceeds. Returns the number of
/// files written.
pub async fn download_all(client: &Client, tasks: Vec<ImageTask>) -> usize {
    let progress = ProgressBar::new(tasks.len() as u64);
    progress.set_style(ProgressStyle::default_bar());
    if crate::logger::is_quiet() {
        progress.set_draw_target(ProgressDrawTarget::hidden());
    }

    let downloaded = futures::stream::iter(tasks)
        .map(|task| {
            let progress = progress.clone();
            async move {
                let result = fetch_one(client, &task).await;
                progress.inc(1);
                match result {
                    Ok(()) => true,
                    Err(e) => {
                        crate::error!("Failed to download {}: {}", task.source_url, e);
                        false
                    }
                }
            }
        })
        .buffer_unordered(MAX_CONCURRENT_DOWNLOADS)
        .filter(|ok| futures::future::ready(*ok))
        .count()
        .await;

    progress.finish_and_clear();
    downloaded
}

async fn fetch_one(client: &Client, task: &ImageTask) -> Result<()> {
    let response = client
        .get(task.source_url.clone())
        .send()
        .await?
        .error_for_status()?;
    let bytes = response.bytes().await?;
    tokio::fs::write(&task.destination, &bytes).await?;
    Ok(())
}
