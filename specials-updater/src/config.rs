use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const PAGE_URL: &str = "https://www.facebook.com/hypermeatklerksdorp/";
pub const IMAGE_DIR: &str = "public/images";
pub const MANIFEST_PATH: &str = "public/data/specials.json";

/// Public URL prefix the site serves `IMAGE_DIR` from
pub const IMAGE_URL_PREFIX: &str = "/images";

pub const PAGE_TIMEOUT: Duration = Duration::from_secs(30);
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(20);

// Standard headers to mimic a browser
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Number of specials shown on the site
pub const SPECIALS_COUNT: usize = 3;

/// One card in the specials manifest
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpecialEntry {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

/// Static copy for each card, in display order
const SPECIALS_COPY: [(&str, &str); SPECIALS_COUNT] = [
    ("Weekly Special", "Limited Offer"),
    ("Fresh Cut", "Butcher's Choice"),
    ("Deal of the Week", "Don't Miss Out"),
];

/// Everything the updater needs for one run. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    pub page_url: String,
    pub image_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub page_timeout: Duration,
    pub image_timeout: Duration,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        UpdaterConfig {
            page_url: PAGE_URL.to_string(),
            image_dir: PathBuf::from(IMAGE_DIR),
            manifest_path: PathBuf::from(MANIFEST_PATH),
            page_timeout: PAGE_TIMEOUT,
            image_timeout: IMAGE_TIMEOUT,
        }
    }
}

impl UpdaterConfig {
    /// Local file for the special at `index` (zero based)
    pub fn image_path(&self, index: usize) -> PathBuf {
        self.image_dir.join(image_file_name(index))
    }
}

pub fn image_file_name(index: usize) -> String {
    format!("special{}.jpg", index + 1)
}

/// The manifest content. Titles are static copy and images always point at
/// the fixed local files, whichever source URL produced them.
pub fn special_entries() -> Vec<SpecialEntry> {
    SPECIALS_COPY
        .iter()
        .enumerate()
        .map(|(i, (title, subtitle))| SpecialEntry {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image: format!("{}/{}", IMAGE_URL_PREFIX, image_file_name(i)),
        })
        .collect()
}
