use crate::fetcher::{fetch_json, Fetcher};
use crate::normalizer::raw::{Listing, RedditComment};

/// Body of the first organic top-level comment under `permalink`.
///
/// Used in place of missing self-text. Any failure yields an empty string.
pub async fn fetch_fallback_text(
    fetcher: &(dyn Fetcher + Send + Sync),
    api_base: &str,
    permalink: &str,
    limit: usize,
) -> String {
    let url = format!("{}{}?limit={}", api_base, permalink, limit);

    match fetch_json::<Vec<Listing>>(fetcher, &url).await {
        Ok(listings) => first_organic_comment(listings).unwrap_or_default(),
        Err(e) => {
            tracing::warn!("No fallback text for {}: {}", permalink, e);
            String::new()
        }
    }
}

/// A discussion response is `[post listing, comment listing]`.
fn first_organic_comment(listings: Vec<Listing>) -> Option<String> {
    listings
        .into_iter()
        .nth(1)?
        .into_items::<RedditComment>()
        .into_iter()
        .filter(|comment| !comment.is_promoted())
        .find_map(|comment| comment.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::StaticFetcher;

    const BASE: &str = "https://api.reddit.test";
    const PERMALINK: &str = "/r/rust/comments/abc/title/";

    fn url() -> String {
        format!("{}{}?limit=35", BASE, PERMALINK)
    }

    fn fallback(fetcher: &StaticFetcher) -> String {
        tokio_test::block_on(fetch_fallback_text(fetcher, BASE, PERMALINK, 35))
    }

    #[test]
    fn test_skips_stickied_and_pinned_comments() {
        let fetcher = StaticFetcher::new().with(
            &url(),
            r#"[
                {"data": {"children": [{"kind": "t3", "data": {"title": "post"}}]}},
                {"data": {"children": [
                    {"kind": "t1", "data": {"body": "mod note", "stickied": true}},
                    {"kind": "t1", "data": {"body": "pinned", "pinned": true}},
                    {"kind": "t1", "data": {"body": "first organic"}},
                    {"kind": "t1", "data": {"body": "second organic"}}
                ]}}
            ]"#,
        );
        assert_eq!(fallback(&fetcher), "first organic");
    }

    #[test]
    fn test_skips_entries_without_body() {
        let fetcher = StaticFetcher::new().with(
            &url(),
            r#"[
                {"data": {"children": []}},
                {"data": {"children": [
                    {"kind": "more", "data": {"count": 12, "children": ["x"]}},
                    {"kind": "t1", "data": {"body": "real"}}
                ]}}
            ]"#,
        );
        assert_eq!(fallback(&fetcher), "real");
    }

    #[test]
    fn test_no_comments_is_empty() {
        let fetcher = StaticFetcher::new().with(
            &url(),
            r#"[{"data": {"children": []}}, {"data": {"children": []}}]"#,
        );
        assert_eq!(fallback(&fetcher), "");
    }

    #[test]
    fn test_only_stickied_is_empty() {
        let fetcher = StaticFetcher::new().with(
            &url(),
            r#"[{"data": {"children": []}},
                {"data": {"children": [{"kind": "t1", "data": {"body": "rules", "stickied": true}}]}}]"#,
        );
        assert_eq!(fallback(&fetcher), "");
    }

    #[test]
    fn test_short_response_is_empty() {
        let fetcher = StaticFetcher::new().with(&url(), "[]");
        assert_eq!(fallback(&fetcher), "");
    }

    #[test]
    fn test_transport_failure_is_empty() {
        let fetcher = StaticFetcher::new();
        assert_eq!(fallback(&fetcher), "");
    }

    #[test]
    fn test_malformed_body_is_empty() {
        let fetcher = StaticFetcher::new().with(&url(), "<html>rate limited</html>");
        assert_eq!(fallback(&fetcher), "");
    }
}
