use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

use crate::candidates::extract_image_urls;
use crate::config::{special_entries, UpdaterConfig, SPECIALS_COUNT};
use crate::fetch::{fetch_page, Fetch};
use crate::publish::{download_all, write_manifest};

/// Why a run stopped before publishing. None of these leave the manifest changed.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Scraping failed: could not fetch {url}")]
    PageUnavailable { url: String },

    #[error("Not enough images found to update ({found} of {needed})")]
    NotEnoughImages { found: usize, needed: usize },

    #[error("Failed to download all images ({succeeded} of {expected})")]
    IncompleteDownload { succeeded: usize, expected: usize },

    #[error("Failed to write manifest {}: {reason}", path.display())]
    ManifestWrite { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    pub images: Vec<PathBuf>,
    pub manifest: PathBuf,
}

/// Fetch, extract, download, then publish the manifest only if every download succeeded.
pub fn run<F: Fetch + ?Sized>(
    fetcher: &F,
    config: &UpdaterConfig,
) -> Result<UpdateReport, UpdateError> {
    let html = fetch_page(fetcher, config).ok_or_else(|| UpdateError::PageUnavailable {
        url: config.page_url.clone(),
    })?;

    let images = extract_image_urls(&html);
    if images.len() < SPECIALS_COUNT {
        return Err(UpdateError::NotEnoughImages {
            found: images.len(),
            needed: SPECIALS_COUNT,
        });
    }

    let succeeded = download_all(fetcher, &images, config);
    if succeeded != SPECIALS_COUNT {
        return Err(UpdateError::IncompleteDownload {
            succeeded,
            expected: SPECIALS_COUNT,
        });
    }

    write_manifest(&config.manifest_path, &special_entries()).map_err(|e| {
        UpdateError::ManifestWrite {
            path: config.manifest_path.clone(),
            reason: format!("{:#}", e),
        }
    })?;

    Ok(UpdateReport {
        images: (0..SPECIALS_COUNT).map(|i| config.image_path(i)).collect(),
        manifest: config.manifest_path.clone(),
    })
}

/// Run once and log the outcome. Failures end the run without touching the manifest.
pub fn update_specials<F: Fetch + ?Sized>(
    fetcher: &F,
    config: &UpdaterConfig,
) -> Option<UpdateReport> {
    match run(fetcher, config) {
        Ok(report) => {
            info!("Successfully updated weekly specials.");
            Some(report)
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
