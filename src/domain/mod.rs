pub mod selector;
pub mod story;

pub use selector::{FeedSelector, RankMode, Source};
pub use story::Story;
