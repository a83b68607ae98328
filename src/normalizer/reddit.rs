use futures::stream::{self, StreamExt};
use url::Url;

use crate::domain::{RankMode, Story};
use crate::fetcher::{fetch_json, Fetcher};
use crate::normalizer::comments::fetch_fallback_text;
use crate::normalizer::image::resolve_image;
use crate::normalizer::raw::{Listing, RedditPost};
use crate::normalizer::sanitize::sanitize;
use crate::normalizer::NormalizerOptions;

/// Public site links; the API host is configurable but story links are not.
const REDDIT_WEB_URL: &str = "https://www.reddit.com";

pub fn listing_url(api_base: &str, subreddit: &str, rank_mode: RankMode, limit: usize) -> String {
    match rank_mode {
        RankMode::Hot => format!("{}/r/{}/hot?limit={}", api_base, subreddit, limit),
        RankMode::TopAllTime => format!("{}/r/{}/top?t=all&limit={}", api_base, subreddit, limit),
    }
}

pub async fn normalize_subreddit(
    fetcher: &(dyn Fetcher + Send + Sync),
    options: &NormalizerOptions,
    subreddit: &str,
    rank_mode: RankMode,
) -> Vec<Story> {
    let url = listing_url(
        &options.reddit_base_url,
        subreddit,
        rank_mode,
        options.listing_limit,
    );

    let listing: Listing = match fetch_json(fetcher, &url).await {
        Ok(listing) => listing,
        Err(e) => {
            tracing::error!("Failed to fetch /r/{}: {}", subreddit, e);
            return Vec::new();
        }
    };

    let posts: Vec<RedditPost> = listing
        .into_items::<RedditPost>()
        .into_iter()
        .filter(|post| !post.is_promoted())
        .collect();

    tracing::debug!("Enriching {} posts from /r/{}", posts.len(), subreddit);

    let stories: Vec<Option<Story>> = stream::iter(posts)
        .map(|post| enrich_post(fetcher, options, post))
        .buffered(options.workers.max(1))
        .collect()
        .await;

    stories.into_iter().flatten().collect()
}

async fn enrich_post(
    fetcher: &(dyn Fetcher + Send + Sync),
    options: &NormalizerOptions,
    post: RedditPost,
) -> Option<Story> {
    let permalink = post.permalink.clone().unwrap_or_default();
    if permalink.is_empty() {
        tracing::warn!("Dropping post without permalink: {:?}", post.title);
        return None;
    }
    let href = format!("{}{}", REDDIT_WEB_URL, permalink);
    if let Err(e) = Url::parse(&href) {
        tracing::warn!("Dropping post with unusable permalink {:?}: {}", permalink, e);
        return None;
    }

    let image_href = resolve_image(&post, options.min_image_width);
    let title = sanitize(post.title.as_deref().unwrap_or_default());

    let selftext = post.selftext.unwrap_or_default();
    let text = if selftext.is_empty() {
        fetch_fallback_text(
            fetcher,
            &options.reddit_base_url,
            &permalink,
            options.comment_limit,
        )
        .await
    } else {
        selftext
    };

    let author = post.author.unwrap_or_default();
    let author_href =
        (!author.is_empty()).then(|| format!("{}/user/{}", REDDIT_WEB_URL, author));
    let source = post
        .subreddit
        .map(|name| format!("/r/{}", name))
        .unwrap_or_default();

    Some(Story {
        title,
        author,
        author_href,
        created: post.created_utc.map(|t| t as i64),
        href,
        image_href,
        source,
        text: sanitize(&text),
    })
}
