//! "Latest selector wins" bookkeeping for normalization passes.
//!
//! Every pass takes a [`PassToken`] from [`EditionBoard::begin`] before it
//! starts fetching. When it finishes it offers its stories with
//! [`EditionBoard::publish`], which only accepts them if no newer pass has
//! begun since. A slow pass for an old selector can therefore never replace
//! the page the reader asked for last.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::domain::{FeedSelector, Story};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassToken(u64);

#[derive(Debug, Clone)]
pub struct Edition {
    pub token: PassToken,
    pub selector: FeedSelector,
    pub stories: Vec<Story>,
}

#[derive(Default)]
pub struct EditionBoard {
    latest: AtomicU64,
    current: RwLock<Option<Edition>>,
}

impl EditionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass, making every earlier token stale.
    pub fn begin(&self) -> PassToken {
        PassToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, token: PassToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Apply a finished pass. Returns `false` and discards the stories when a
    /// newer pass has begun or already published.
    pub async fn publish(&self, token: PassToken, selector: FeedSelector, stories: Vec<Story>) -> bool {
        let mut current = self.current.write().await;

        let superseded = current.as_ref().is_some_and(|edition| edition.token > token);
        if superseded || !self.is_latest(token) {
            tracing::debug!("Discarding stale pass for {}", selector);
            return false;
        }

        *current = Some(Edition {
            token,
            selector,
            stories,
        });
        true
    }

    pub async fn current(&self) -> Option<Edition> {
        self.current.read().await.clone()
    }

    /// True while the most recently begun pass has not published yet.
    pub async fn is_loading(&self) -> bool {
        let latest = self.latest.load(Ordering::SeqCst);
        match self.current.read().await.as_ref() {
            Some(edition) => edition.token.0 != latest,
            None => latest != 0,
        }
    }
}
