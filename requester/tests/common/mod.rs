#![allow(dead_code)]

use requester::{Error, Fetcher, Result};
use std::sync::{Arc, Mutex};

pub const KEY: &str = "key";
pub const BASE: &str = "https://osu.ppy.sh/api";

/// Answers every request with the same body and remembers the urls
#[derive(Clone)]
pub struct MockFetcher {
    body: std::result::Result<String, String>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Ok(body.into()),
            urls: Arc::default(),
        }
    }

    /// Fails every request like a broken connection would
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            body: Err(message.into()),
            urls: Arc::default(),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    /// The only url requested so far
    pub fn url(&self) -> String {
        let urls = self.urls();
        assert_eq!(urls.len(), 1, "expected exactly one request, got {:?}", urls);
        urls[0].to_owned()
    }
}

#[async_trait::async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.urls.lock().unwrap().push(url.to_owned());

        match &self.body {
            Ok(body) => Ok(body.to_owned()),
            Err(message) => Err(Error::Transport(message.to_owned().into())),
        }
    }
}
