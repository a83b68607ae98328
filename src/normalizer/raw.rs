//! Upstream payload shapes. Everything is optional so a sparse or oddly
//! shaped item degrades instead of failing the whole listing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Field decoder that falls back to the default when the value has the wrong
/// shape (`null` flags, numeric titles and the like).
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decode a nested shape kept as raw JSON, logging and yielding `None` when it
/// doesn't fit.
pub fn decode_nested<T: DeserializeOwned>(raw: &Value, what: &str) -> Option<T> {
    match serde_json::from_value(raw.clone()) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::debug!("Ignoring malformed {}: {}", what, e);
            None
        }
    }
}

/// A Reddit listing (`{"kind": "Listing", "data": {"children": [...]}}`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListingData {
    pub children: Vec<Thing>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Thing {
    pub kind: String,
    pub data: Value,
}

impl Listing {
    /// Decode every child's `data` as `T`, skipping children that don't fit.
    pub fn into_items<T: DeserializeOwned>(self) -> Vec<T> {
        self.data
            .children
            .into_iter()
            .filter_map(|thing| match serde_json::from_value(thing.data) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("Skipping malformed {} entry: {}", thing.kind, e);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RedditPost {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created_utc: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub permalink: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub subreddit: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub selftext: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub pinned: bool,
    #[serde(deserialize_with = "lenient")]
    pub stickied: bool,
    /// Raw [`Preview`], decoded by the image resolver.
    pub preview: Option<Value>,
    /// Gallery media keyed by media id, in document order.
    #[serde(deserialize_with = "lenient")]
    pub media_metadata: Option<Map<String, Value>>,
    #[serde(deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
}

impl RedditPost {
    /// Pinned and stickied posts are moderator-promoted, not organic.
    pub fn is_promoted(&self) -> bool {
        self.pinned || self.stickied
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Preview {
    pub images: Vec<PreviewImage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreviewImage {
    pub resolutions: Vec<ImageSource>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageSource {
    #[serde(deserialize_with = "lenient")]
    pub url: String,
}

/// One entry of a gallery's `media_metadata` map.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MediaMetadata {
    pub status: Option<String>,
    /// Encoding type, e.g. `Image` or `RedditVideo`
    pub e: Option<String>,
    /// Size variants
    pub p: Vec<MediaVariant>,
}

impl MediaMetadata {
    pub fn is_unavailable(&self) -> bool {
        self.status.as_deref() == Some("failed") || self.e.as_deref() == Some("RedditVideo")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MediaVariant {
    /// Width in pixels
    #[serde(deserialize_with = "lenient")]
    pub x: u32,
    #[serde(deserialize_with = "lenient")]
    pub u: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RedditComment {
    #[serde(deserialize_with = "lenient")]
    pub body: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub pinned: bool,
    #[serde(deserialize_with = "lenient")]
    pub stickied: bool,
}

impl RedditComment {
    pub fn is_promoted(&self) -> bool {
        self.pinned || self.stickied
    }
}

/// A Hacker News item from `/v0/item/<id>.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HnItem {
    #[serde(deserialize_with = "lenient")]
    pub id: u64,
    #[serde(deserialize_with = "lenient")]
    pub by: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub time: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub deleted: bool,
    #[serde(deserialize_with = "lenient")]
    pub dead: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_skips_children_that_are_not_objects() {
        let listing: Listing = serde_json::from_str(
            r#"{"data": {"children": [
                {"kind": "t3", "data": {"title": "ok"}},
                {"kind": "t3", "data": "oops"},
                {"kind": "t3", "data": {"title": "also ok", "selftext": null}}
            ]}}"#,
        )
        .unwrap();

        let posts: Vec<RedditPost> = listing.into_items();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title.as_deref(), Some("ok"));
        assert_eq!(posts[1].selftext, None);
    }

    #[test]
    fn test_bad_field_values_fall_back_to_defaults() {
        let post: RedditPost = serde_json::from_str(
            r#"{"title": 42, "pinned": null, "stickied": "yes", "created_utc": "soon",
                "selftext": "kept", "media_metadata": [], "preview": {"images": 7}}"#,
        )
        .unwrap();

        assert_eq!(post.title, None);
        assert!(!post.is_promoted());
        assert_eq!(post.created_utc, None);
        assert_eq!(post.selftext.as_deref(), Some("kept"));
        assert!(post.media_metadata.is_none());
        assert!(post.preview.is_some());
    }

    #[test]
    fn test_hn_item_with_null_flags() {
        let item: HnItem =
            serde_json::from_str(r#"{"id": 5, "title": "t", "dead": null, "time": null}"#).unwrap();
        assert_eq!(item.id, 5);
        assert!(!item.dead);
        assert_eq!(item.time, None);
    }

    #[test]
    fn test_media_metadata_keeps_document_order() {
        let post: RedditPost = serde_json::from_str(
            r#"{"media_metadata": {"zzz": {}, "aaa": {}, "mmm": {}}}"#,
        )
        .unwrap();
        let keys: Vec<_> = post.media_metadata.unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zzz", "aaa", "mmm"]);
    }

    #[test]
    fn test_unavailable_media() {
        let failed = MediaMetadata {
            status: Some("failed".into()),
            ..Default::default()
        };
        let video = MediaMetadata {
            e: Some("RedditVideo".into()),
            ..Default::default()
        };
        let image = MediaMetadata {
            status: Some("valid".into()),
            e: Some("Image".into()),
            ..Default::default()
        };
        assert!(failed.is_unavailable());
        assert!(video.is_unavailable());
        assert!(!image.is_unavailable());
    }
}
