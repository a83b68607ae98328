//! In-memory [`Fetcher`] used by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::app::{BroadsheetError, Result};
use crate::fetcher::Fetcher;

struct Canned {
    body: Vec<u8>,
    delay: Option<Duration>,
}

/// Serves canned bodies by exact URL. Unknown URLs answer 404.
#[derive(Default)]
pub struct StaticFetcher {
    routes: HashMap<String, Canned>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: impl Into<String>) -> Self {
        self.routes.insert(
            url.to_string(),
            Canned {
                body: body.into().into_bytes(),
                delay: None,
            },
        );
        self
    }

    pub fn with_delay(mut self, url: &str, body: impl Into<String>, delay: Duration) -> Self {
        self.routes.insert(
            url.to_string(),
            Canned {
                body: body.into().into_bytes(),
                delay: Some(delay),
            },
        );
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());

        let Some(canned) = self.routes.get(url) else {
            return Err(BroadsheetError::UnexpectedStatus {
                status: 404,
                url: url.to_string(),
            });
        };

        if let Some(delay) = canned.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(canned.body.clone())
    }
}
