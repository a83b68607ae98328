use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::app::edition::{EditionBoard, PassToken};
use crate::app::error::Result;
use crate::config::Config;
use crate::domain::FeedSelector;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::SharedFetcher;
use crate::normalizer::{FeedNormalizer, NormalizerOptions};

pub struct AppContext {
    pub config: Config,
    pub normalizer: FeedNormalizer,
    pub board: EditionBoard,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: SharedFetcher = Arc::new(HttpFetcher::new(&config.http)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: SharedFetcher) -> Self {
        let normalizer = FeedNormalizer::new(fetcher, NormalizerOptions::from(&config));

        Self {
            config,
            normalizer,
            board: EditionBoard::new(),
        }
    }

    /// Normalize `selector` and offer the result to the board under `token`.
    /// Returns whether the result was applied.
    pub async fn run_pass(&self, token: PassToken, selector: FeedSelector) -> bool {
        let stories = self.normalizer.normalize_feed(&selector).await;
        self.board.publish(token, selector, stories).await
    }

    /// Begin a pass right away and run it in the background. Any pass begun
    /// earlier becomes stale immediately.
    pub fn spawn_pass(self: &Arc<Self>, selector: FeedSelector) -> JoinHandle<bool> {
        let token = self.board.begin();
        let ctx = Arc::clone(self);
        tokio::spawn(async move { ctx.run_pass(token, selector).await })
    }
}
