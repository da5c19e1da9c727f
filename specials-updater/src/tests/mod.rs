use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;

use crate::fetch::Fetch;

pub mod fixtures;

/// In-memory stand-in for the HTTP client. Unknown URLs fail like a 404.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_file(mut self, url: &str, bytes: &[u8]) -> Self {
        self.files.insert(url.to_string(), bytes.to_vec());
        self
    }

    /// Every URL requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for FakeFetcher {
    fn fetch_text(&self, url: &str, _timeout: Duration) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 Not Found: {}", url))
    }

    fn fetch_bytes(&self, url: &str, _timeout: Duration) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 Not Found: {}", url))
    }
}
