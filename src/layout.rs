//! Front-page layout: fixed display regions over an ordered story list.

use std::ops::Range;

use crate::domain::Story;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    CenterSpread,
    LeftSidebar,
    SidebarSpread,
    Bottom,
    Mini,
    Mini2,
    Mini3,
}

impl Region {
    pub fn title(self) -> &'static str {
        match self {
            Region::CenterSpread => "Top Stories",
            Region::LeftSidebar => "In Brief",
            Region::SidebarSpread => "Opinion",
            Region::Bottom => "Elsewhere",
            Region::Mini | Region::Mini2 | Region::Mini3 => "Also Today",
        }
    }

    /// Index of the region's first story within the full story list.
    pub fn offset(self) -> usize {
        REGIONS
            .iter()
            .find(|(region, _)| *region == self)
            .map(|(_, range)| range.start)
            .unwrap_or(0)
    }
}

/// Region boundaries, in page order. Consecutive and non-overlapping.
pub const REGIONS: [(Region, Range<usize>); 7] = [
    (Region::CenterSpread, 0..2),
    (Region::LeftSidebar, 2..6),
    (Region::SidebarSpread, 6..9),
    (Region::Bottom, 9..12),
    (Region::Mini, 12..16),
    (Region::Mini2, 16..21),
    (Region::Mini3, 21..25),
];

/// Stories that fit on one front page; the rest are dropped.
pub const FRONT_PAGE_CAPACITY: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontPage<'a> {
    regions: [(Region, &'a [Story]); 7],
}

impl<'a> FrontPage<'a> {
    pub fn get(&self, region: Region) -> &'a [Story] {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, stories)| *stories)
            .unwrap_or_default()
    }

    pub fn regions(&self) -> impl Iterator<Item = (Region, &'a [Story])> + '_ {
        self.regions.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.iter().all(|(_, stories)| stories.is_empty())
    }
}

/// Slice `stories` into the fixed regions. Short input leaves later regions
/// short or empty.
pub fn bucketize(stories: &[Story]) -> FrontPage<'_> {
    let slice = |range: Range<usize>| {
        let len = stories.len();
        &stories[range.start.min(len)..range.end.min(len)]
    };

    FrontPage {
        regions: REGIONS.map(|(region, range)| (region, slice(range))),
    }
}

pub const EXCERPT_WORDS: usize = 100;

/// Largest "Continued on Page A<n>" number.
const MAX_PAGE: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub text: String,
    pub truncated: bool,
}

/// First `max_words` space-separated words of `text`, with ` ...` appended
/// when anything was cut.
pub fn excerpt(text: &str, max_words: usize) -> Excerpt {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() <= max_words {
        return Excerpt {
            text: text.to_string(),
            truncated: false,
        };
    }

    Excerpt {
        text: format!("{} ...", words[..max_words].join(" ")),
        truncated: true,
    }
}

/// Page number for a truncated story's "Continued on Page A<n>" line. Stable
/// for a given story so redraws don't shuffle it.
pub fn continued_page(story: &Story) -> u32 {
    story
        .href
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)))
        % MAX_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stories(n: usize) -> Vec<Story> {
        (0..n)
            .map(|i| Story {
                title: format!("Story {}", i),
                author: "a".into(),
                author_href: None,
                created: None,
                href: format!("https://example.com/{}", i),
                image_href: None,
                source: "/r/test".into(),
                text: String::new(),
            })
            .collect()
    }

    fn titles(stories: &[Story]) -> Vec<&str> {
        stories.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_regions_are_contiguous() {
        let mut expected_start = 0;
        for (_, range) in REGIONS.iter() {
            assert_eq!(range.start, expected_start);
            expected_start = range.end;
        }
        assert_eq!(expected_start, FRONT_PAGE_CAPACITY);
    }

    #[test]
    fn test_region_offsets() {
        assert_eq!(Region::CenterSpread.offset(), 0);
        assert_eq!(Region::SidebarSpread.offset(), 6);
        assert_eq!(Region::Mini3.offset(), 21);
    }

    #[test]
    fn test_empty_input_gives_empty_regions() {
        let page = bucketize(&[]);
        assert!(page.is_empty());
        assert_eq!(page.regions().count(), 7);
    }

    #[test]
    fn test_full_page_sizes() {
        let all = stories(30);
        let page = bucketize(&all);
        let sizes: Vec<_> = page.regions().map(|(_, s)| s.len()).collect();
        assert_eq!(sizes, vec![2, 4, 3, 3, 4, 5, 4]);
        assert_eq!(titles(page.get(Region::CenterSpread)), vec!["Story 0", "Story 1"]);
        assert_eq!(titles(page.get(Region::Mini3)).last(), Some(&"Story 24"));
    }

    #[test]
    fn test_no_duplicates_and_order_preserved() {
        let all = stories(25);
        let page = bucketize(&all);
        let flattened: Vec<&str> = page.regions().flat_map(|(_, s)| titles(s)).collect();
        assert_eq!(flattened, titles(&all));
    }

    #[test]
    fn test_short_input_fills_leading_regions() {
        let all = stories(7);
        let page = bucketize(&all);
        assert_eq!(page.get(Region::CenterSpread).len(), 2);
        assert_eq!(page.get(Region::LeftSidebar).len(), 4);
        assert_eq!(titles(page.get(Region::SidebarSpread)), vec!["Story 6"]);
        assert!(page.get(Region::Bottom).is_empty());
        assert!(page.get(Region::Mini3).is_empty());
    }

    #[test]
    fn test_excerpt_short_text_untouched() {
        let ex = excerpt("a few words", 100);
        assert_eq!(ex.text, "a few words");
        assert!(!ex.truncated);
    }

    #[test]
    fn test_excerpt_truncates_long_text() {
        let text = vec!["word"; 150].join(" ");
        let ex = excerpt(&text, 100);
        assert!(ex.truncated);
        assert!(ex.text.ends_with(" ..."));
        assert_eq!(ex.text.trim_end_matches(" ...").split(' ').count(), 100);
    }

    #[test]
    fn test_continued_page_is_stable_and_bounded() {
        for story in stories(50) {
            let page = continued_page(&story);
            assert!(page < MAX_PAGE);
            assert_eq!(page, continued_page(&story));
        }
    }
}
