use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use specials_updater::{update_specials, HttpFetcher, UpdaterConfig};

/// Refresh the weekly specials images and manifest from the store's page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page to scrape for special images
    #[arg(long)]
    page_url: Option<String>,

    /// Directory the special images are written to
    #[arg(long)]
    image_dir: Option<PathBuf>,

    /// Manifest file read by the site
    #[arg(long)]
    manifest: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> UpdaterConfig {
        let defaults = UpdaterConfig::default();
        UpdaterConfig {
            page_url: self.page_url.unwrap_or(defaults.page_url),
            image_dir: self.image_dir.unwrap_or(defaults.image_dir),
            manifest_path: self.manifest.unwrap_or(defaults.manifest_path),
            ..defaults
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();
    let fetcher = HttpFetcher::new()?;

    // A failed run is logged and leaves the published specials as they were
    update_specials(&fetcher, &config);

    Ok(())
}
