use futures::stream::{self, StreamExt};
use url::Url;

use crate::domain::selector::HACKER_NEWS_LABEL;
use crate::domain::Story;
use crate::fetcher::{fetch_json, Fetcher};
use crate::normalizer::raw::HnItem;
use crate::normalizer::sanitize::sanitize;
use crate::normalizer::NormalizerOptions;

const HN_WEB_URL: &str = "https://news.ycombinator.com";

pub async fn normalize_top_stories(
    fetcher: &(dyn Fetcher + Send + Sync),
    options: &NormalizerOptions,
) -> Vec<Story> {
    let url = format!("{}/topstories.json", options.hn_base_url);

    let ids: Vec<u64> = match fetch_json(fetcher, &url).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("Failed to fetch Hacker News top stories: {}", e);
            return Vec::new();
        }
    };

    let stories: Vec<Option<Story>> = stream::iter(ids.into_iter().take(options.ranked_limit))
        .map(|id| fetch_story(fetcher, options, id))
        .buffered(options.workers.max(1))
        .collect()
        .await;

    stories.into_iter().flatten().collect()
}

async fn fetch_story(
    fetcher: &(dyn Fetcher + Send + Sync),
    options: &NormalizerOptions,
    id: u64,
) -> Option<Story> {
    let url = format!("{}/item/{}.json", options.hn_base_url, id);

    // The item endpoint answers `null` for ids it no longer knows.
    let item = match fetch_json::<Option<HnItem>>(fetcher, &url).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            tracing::debug!("Hacker News item {} is gone", id);
            return None;
        }
        Err(e) => {
            tracing::warn!("Failed to fetch Hacker News item {}: {}", id, e);
            return None;
        }
    };

    story_from_item(id, item)
}

fn story_from_item(id: u64, item: HnItem) -> Option<Story> {
    if item.deleted || item.dead {
        return None;
    }
    let title = item.title.unwrap_or_default();

    // Text posts have no external url; link them to their discussion page.
    let href = item
        .url
        .filter(|url| Url::parse(url).is_ok())
        .unwrap_or_else(|| format!("{}/item?id={}", HN_WEB_URL, id));

    let author = item.by.unwrap_or_default();
    let author_href = (!author.is_empty()).then(|| format!("{}/user?id={}", HN_WEB_URL, author));

    Some(Story {
        title: sanitize(&title),
        author,
        author_href,
        created: item.time,
        href,
        image_href: None,
        source: HACKER_NEWS_LABEL.to_string(),
        text: String::new(),
    })
}
