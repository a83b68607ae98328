pub mod http_fetcher;

#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::app::Result;

#[async_trait]
pub trait Fetcher {
    /// Fetch the body at `url`. Non-2xx responses are errors.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub type SharedFetcher = std::sync::Arc<dyn Fetcher + Send + Sync>;

/// Fetch `url` and deserialize its JSON body.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &(dyn Fetcher + Send + Sync),
    url: &str,
) -> Result<T> {
    let body = fetcher.fetch(url).await?;
    Ok(serde_json::from_slice(&body)?)
}
