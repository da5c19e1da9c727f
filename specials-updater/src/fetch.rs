use std::time::Duration;

use anyhow::{Context, Result};
use log::{error, info};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::{UpdaterConfig, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

/// Single-attempt blocking GETs. Non-2xx responses are errors.
pub trait Fetch {
    fn fetch_text(&self, url: &str, timeout: Duration) -> Result<String>;
    fn fetch_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(HttpFetcher { client })
    }

    fn get(&self, url: &str, timeout: Duration) -> Result<reqwest::blocking::Response> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .context("Failed to send request")?;
        response
            .error_for_status()
            .with_context(|| format!("Bad response status from {}", url))
    }
}

impl Fetch for HttpFetcher {
    fn fetch_text(&self, url: &str, timeout: Duration) -> Result<String> {
        self.get(url, timeout)?
            .text()
            .context("Failed to get response text")
    }

    fn fetch_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        let bytes = self
            .get(url, timeout)?
            .bytes()
            .context("Failed to get response body")?;
        Ok(bytes.to_vec())
    }
}

/// Fetch the specials page. Any failure is logged and reported as `None`.
pub fn fetch_page<F: Fetch + ?Sized>(fetcher: &F, config: &UpdaterConfig) -> Option<String> {
    info!("Fetching {}...", config.page_url);
    match fetcher.fetch_text(&config.page_url, config.page_timeout) {
        Ok(html) => Some(html),
        Err(e) => {
            error!("Error fetching page: {:#}", e);
            None
        }
    }
}
