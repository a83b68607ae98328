//! Picks one representative image for a Reddit post.
//!
//! Reddit describes a post's images in several mutually exclusive and
//! loosely documented shapes. Each shape gets its own policy; the policies are
//! tried in order and the first one that yields a URL wins. A missing or
//! malformed shape simply yields nothing.

use url::Url;

use crate::normalizer::raw::{decode_nested, MediaMetadata, Preview, RedditPost};
use crate::normalizer::sanitize::sanitize;

pub const MIN_IMAGE_WIDTH: u32 = 500;

/// Preview renditions are ordered smallest first; index 3 is a mid-to-large
/// rendition (~640px).
const PREVIEW_RESOLUTION_INDEX: usize = 3;

type ImagePolicy = fn(&RedditPost, u32) -> Option<String>;

const POLICIES: &[(&str, ImagePolicy)] = &[
    ("preview", from_preview),
    ("gallery", from_gallery),
    ("thumbnail", from_thumbnail),
];

pub fn resolve_image(post: &RedditPost, min_width: u32) -> Option<String> {
    POLICIES.iter().find_map(|(name, policy)| {
        let url = policy(post, min_width)?;
        tracing::trace!("Image resolved from {}: {}", name, url);
        Some(url)
    })
}

fn from_preview(post: &RedditPost, _min_width: u32) -> Option<String> {
    let preview: Preview = decode_nested(post.preview.as_ref()?, "preview")?;
    let resolutions = &preview.images.first()?.resolutions;
    let last = resolutions.len().checked_sub(1)?;
    let chosen = &resolutions[PREVIEW_RESOLUTION_INDEX.min(last)];
    (!chosen.url.is_empty()).then(|| sanitize(&chosen.url))
}

/// The first usable gallery entry wins, even if a later one is larger.
fn from_gallery(post: &RedditPost, min_width: u32) -> Option<String> {
    post.media_metadata
        .as_ref()?
        .iter()
        .find_map(|(media_id, raw)| {
            let entry: MediaMetadata = decode_nested(raw, &format!("gallery entry {}", media_id))?;
            if entry.is_unavailable() {
                return None;
            }
            pick_variant(&entry, min_width)
        })
}

/// First variant at least `min_width` wide, otherwise the widest one.
fn pick_variant(entry: &MediaMetadata, min_width: u32) -> Option<String> {
    let variants = entry
        .p
        .iter()
        .filter_map(|variant| variant.u.as_deref().map(|u| (variant.x, u)));

    let (_, url) = variants
        .clone()
        .find(|(width, _)| *width >= min_width)
        .or_else(|| variants.max_by_key(|(width, _)| *width))?;

    Some(strip_escaped_ampersands(url))
}

/// Gallery URLs arrive with `&` escaped as `&amp;`; only the `amp;` tail needs
/// to go.
fn strip_escaped_ampersands(url: &str) -> String {
    url.replace("amp;", "")
}

/// Low-quality last resort. Reddit uses tokens like `self` or `default` when
/// there is no real thumbnail.
fn from_thumbnail(post: &RedditPost, _min_width: u32) -> Option<String> {
    let thumbnail = post.thumbnail.as_deref()?;
    let parsed = Url::parse(thumbnail).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| thumbnail.to_string())
}
