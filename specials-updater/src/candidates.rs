use std::collections::HashSet;
use std::sync::OnceLock;

use log::info;
use regex::Regex;

use crate::config::SPECIALS_COUNT;

// Thumbnail and avatar sizes the content host bakes into its URLs
const THUMBNAIL_MARKERS: [&str; 2] = ["p50x50", "s50x50"];

/// An image URL found in the page text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub valid: bool,
}

impl Candidate {
    fn new(url: String) -> Self {
        let valid = !is_thumbnail(&url);
        Candidate { url, valid }
    }
}

fn candidate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // scheme slashes may be JSON escaped (`https:\/\/`) inside script blobs
    PATTERN.get_or_init(|| {
        Regex::new(r#"https:(?:\\?/){2}scontent[^\s"']+\.jpg[^\s"']*"#)
            .expect("candidate pattern is valid")
    })
}

pub fn normalize_url(raw: &str) -> String {
    raw.replace("\\/", "/").replace("&amp;", "&")
}

pub fn is_thumbnail(url: &str) -> bool {
    THUMBNAIL_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Every distinct image URL in the page text, in order of first appearance.
pub fn scan_candidates(html: &str) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidate_pattern()
        .find_iter(html)
        .map(|m| normalize_url(m.as_str()))
        .filter(|url| seen.insert(url.clone()))
        .map(Candidate::new)
        .collect()
}

/// URLs that pass the thumbnail filter, truncated to the number of specials.
pub fn extract_image_urls(html: &str) -> Vec<String> {
    info!("Extracting images...");
    let valid_images: Vec<String> = scan_candidates(html)
        .into_iter()
        .filter(|candidate| candidate.valid)
        .map(|candidate| candidate.url)
        .collect();

    info!("Found {} potential images.", valid_images.len());
    valid_images.into_iter().take(SPECIALS_COUNT).collect()
}
