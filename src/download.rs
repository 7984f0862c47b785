//! Download collaborator: cache directory handling and image saving.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::error::Result;

/// Create the cache directory if it does not exist.
pub fn ensure_cache_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Remove every cached wallpaper and recreate the directory.
pub fn clear_cache(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Download `url` into `dir` and return the absolute path of the
/// saved file. Files are named after the local wall-clock time.
pub async fn fetch_image(
    client: &reqwest::Client,
    url: &str,
    dir: &Path,
) -> Result<PathBuf> {
    info!(url = %url, "downloading wallpaper");
    let bytes = client.get(url).send().await?.bytes().await?;
    let file_name = format!("{}.jpg", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let path = dir.join(file_name);
    tokio::fs::write(&path, &bytes).await?;
    let path = std::env::current_dir()?.join(path);
    info!(path = %path.display(), "cached wallpaper");
    Ok(path)
}
