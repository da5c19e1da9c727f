pub mod candidates;
pub mod config;
pub mod fetch;
pub mod publish;
pub mod updater;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::candidates::{extract_image_urls, is_thumbnail, scan_candidates, Candidate};
pub use crate::config::{special_entries, SpecialEntry, UpdaterConfig, SPECIALS_COUNT};
pub use crate::fetch::{fetch_page, Fetch, HttpFetcher};
pub use crate::publish::{download_image, write_manifest};
pub use crate::updater::{run, update_specials, UpdateError, UpdateReport};
